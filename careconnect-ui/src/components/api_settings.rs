//! Backend URL setting

use leptos::*;

use crate::state::global::use_global_state;

#[component]
pub fn ApiSettings() -> impl IntoView {
    let state = use_global_state();
    let (url, set_url) = create_signal(state.api_base.get_untracked());

    let save = move |_| {
        state.set_api_base(&url.get_untracked());
        set_url.set(state.api_base.get_untracked());
        state.load_appointments();
    };

    view! {
        <div class="flex items-center space-x-2 text-sm">
            <label class="text-gray-400">"Backend"</label>
            <input
                type="text"
                prop:value=move || url.get()
                on:input=move |ev| set_url.set(event_target_value(&ev))
                class="flex-1 bg-gray-700 rounded px-3 py-2
                       border border-gray-600 focus:border-primary-500 focus:outline-none"
            />
            <button
                type="button"
                on:click=save
                class="px-3 py-2 bg-gray-600 hover:bg-gray-500 rounded transition-colors"
            >
                "Save"
            </button>
        </div>
    }
}
