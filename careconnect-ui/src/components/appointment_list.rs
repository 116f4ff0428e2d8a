//! Appointment List Component
//!
//! Lists appointments in store order, keyed by id, with edit and delete
//! actions per row.

use chrono::Local;
use leptos::*;

use careconnect::{Action, Appointment, AppointmentStatus};

use super::ListSkeleton;
use crate::state::global::use_global_state;

#[component]
pub fn AppointmentList() -> impl IntoView {
    let state = use_global_state();

    let appointments = move || state.manager.with(|s| s.store.to_vec());
    let first_load = move || state.manager.with(|s| s.is_loading() && s.store.is_empty());

    view! {
        <div>
            {move || {
                if first_load() {
                    view! { <ListSkeleton /> }.into_view()
                } else if appointments().is_empty() {
                    view! {
                        <p class="text-gray-400">"No appointments yet."</p>
                    }.into_view()
                } else {
                    view! {}.into_view()
                }
            }}

            <ul class="divide-y divide-gray-700">
                <For
                    each=appointments
                    key=|appointment| (appointment.id, appointment.reason.clone(), appointment.appointment_date, appointment.status)
                    children=move |appointment| view! { <AppointmentRow appointment=appointment /> }
                />
            </ul>
        </div>
    }
}

#[component]
fn AppointmentRow(appointment: Appointment) -> impl IntoView {
    let state = use_global_state();
    let id = appointment.id;
    let when = appointment
        .appointment_date
        .with_timezone(&Local)
        .format("%a %b %e %Y, %H:%M")
        .to_string();
    let selected = move || state.manager.with(|s| s.draft.selected == Some(id));

    view! {
        <li class=move || {
            let base = "flex items-center justify-between py-3 px-2";
            if selected() {
                format!("{} bg-gray-800 rounded-lg", base)
            } else {
                base.to_string()
            }
        }>
            <div>
                <strong>{when}</strong>": "{appointment.reason}
                <StatusBadge status=appointment.status />
            </div>
            <div class="flex space-x-2">
                <button
                    type="button"
                    on:click=move |_| state.dispatch(Action::SelectForEdit(id))
                    class="px-3 py-1 bg-yellow-600 hover:bg-yellow-700 rounded text-sm transition-colors"
                >
                    "Edit"
                </button>
                <button
                    type="button"
                    on:click=move |_| state.delete_appointment(id)
                    class="px-3 py-1 bg-red-600 hover:bg-red-700 rounded text-sm transition-colors"
                >
                    "Delete"
                </button>
            </div>
        </li>
    }
}

#[component]
fn StatusBadge(status: AppointmentStatus) -> impl IntoView {
    let color = match status {
        AppointmentStatus::Scheduled => "bg-blue-700",
        AppointmentStatus::Rescheduled => "bg-purple-700",
        AppointmentStatus::Completed => "bg-green-700",
        AppointmentStatus::Cancelled => "bg-gray-600",
    };

    view! {
        <span class=format!("ml-2 px-2 py-0.5 rounded text-xs {}", color)>
            {status.as_str()}
        </span>
    }
}
