//! Toast Notification Component
//!
//! Shows the success and error messages of the appointment manager.

use leptos::*;

use careconnect::Action;

use crate::state::global::use_global_state;

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_global_state();

    let success = move || state.manager.with(|s| s.success.clone());
    let error = move || state.manager.with(|s| s.error.clone());

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            {move || success().map(|msg| view! {
                <ToastMessage message=msg variant=ToastVariant::Success />
            })}

            {move || error().map(|msg| view! {
                <ToastMessage message=msg variant=ToastVariant::Error />
            })}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Error,
}

#[component]
fn ToastMessage(
    #[prop(into)]
    message: String,
    variant: ToastVariant,
) -> impl IntoView {
    let state = use_global_state();
    let (icon, bg_class) = match variant {
        ToastVariant::Success => ("✓", "bg-green-600"),
        ToastVariant::Error => ("✕", "bg-red-600"),
    };

    view! {
        <div
            role="alert"
            class=format!(
                "flex items-center space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
                 transform transition-all duration-300 ease-out animate-slide-in",
                bg_class
            )
        >
            <span class="text-lg">{icon}</span>
            <span class="text-sm font-medium">{message}</span>
            <button
                type="button"
                on:click=move |_| state.dispatch(Action::DismissMessages)
                class="text-white/70 hover:text-white"
            >
                "×"
            </button>
        </div>
    }
}
