//! Appointments Page
//!
//! Book, reschedule and cancel appointments.

use leptos::*;

use crate::components::{ApiSettings, AppointmentForm, AppointmentList, InlineLoading};
use crate::state::global::use_global_state;

#[component]
pub fn Appointments() -> impl IntoView {
    let state = use_global_state();

    // Fetch the list once on mount
    state.load_appointments();

    view! {
        <div class="space-y-8">
            <div class="flex items-center justify-between">
                <h1 class="text-3xl font-bold">"Manage Appointments"</h1>
                {move || state.is_loading().then(|| view! {
                    <div class="flex items-center space-x-2 text-primary-400">
                        <InlineLoading />
                        <span>"Loading..."</span>
                    </div>
                })}
            </div>

            <div class="grid md:grid-cols-2 gap-8">
                <section class="bg-gray-800 rounded-xl p-6">
                    <AppointmentForm />
                </section>

                <section class="bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Appointments"</h2>
                    <AppointmentList />
                </section>
            </div>

            <section class="border-t border-gray-700 pt-4">
                <ApiSettings />
            </section>
        </div>
    }
}
