//! Appointment Form Component
//!
//! Date picker and details field. In create mode only "Create" is offered;
//! in edit mode "Update" and "Cancel".

use leptos::*;

use careconnect::{Action, FormMode};

use super::{Calendar, InlineLoading};
use crate::state::global::use_global_state;

#[component]
pub fn AppointmentForm() -> impl IntoView {
    let state = use_global_state();

    let date = Signal::derive(move || state.manager.with(|s| s.draft.date));
    let details = move || state.manager.with(|s| s.draft.details.clone());
    let mode = move || state.manager.with(|s| s.mode());
    let busy = move || state.is_loading();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match mode() {
            FormMode::Create => state.create_appointment(),
            FormMode::Edit(_) => state.update_appointment(),
        }
    };

    view! {
        <form on:submit=on_submit class="space-y-4">
            <Calendar
                value=date
                on_change=Callback::new(move |dt| state.dispatch(Action::SetDate(dt)))
            />

            <div>
                <input
                    type="text"
                    placeholder="Appointment Details"
                    prop:value=details
                    on:input=move |ev| state.dispatch(Action::SetDetails(event_target_value(&ev)))
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-primary-500 focus:outline-none"
                />
            </div>

            {move || match mode() {
                FormMode::Create => view! {
                    <button
                        type="submit"
                        disabled=busy
                        class="px-6 py-3 bg-green-600 hover:bg-green-700 disabled:bg-gray-600
                               rounded-lg font-semibold transition-colors flex items-center space-x-2"
                    >
                        {move || busy().then(|| view! { <InlineLoading /> })}
                        <span>"Create Appointment"</span>
                    </button>
                }.into_view(),
                FormMode::Edit(id) => view! {
                    <div class="flex items-center space-x-2">
                        <button
                            type="submit"
                            disabled=busy
                            class="px-6 py-3 bg-primary-600 hover:bg-primary-700 disabled:bg-gray-600
                                   rounded-lg font-semibold transition-colors flex items-center space-x-2"
                        >
                            {move || busy().then(|| view! { <InlineLoading /> })}
                            <span>"Update Appointment"</span>
                        </button>
                        <button
                            type="button"
                            on:click=move |_| state.dispatch(Action::CancelEdit)
                            class="px-6 py-3 bg-gray-600 hover:bg-gray-500 rounded-lg font-medium transition-colors"
                        >
                            "Cancel"
                        </button>
                        <span class="text-sm text-gray-400">{format!("Editing #{}", id)}</span>
                    </div>
                }.into_view(),
            }}
        </form>
    }
}
