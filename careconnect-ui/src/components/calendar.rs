//! Calendar Component
//!
//! Month-grid date picker with a time-of-day field. Dates are shown in the
//! browser's time zone; the value stays UTC.

use chrono::{DateTime, Datelike, Local, NaiveTime, Utc};
use leptos::*;

use careconnect::calendar::{with_date_in, with_time_in, MonthView, WEEKDAY_LABELS};

#[component]
pub fn Calendar(
    #[prop(into)]
    value: Signal<DateTime<Utc>>,
    #[prop(into)]
    on_change: Callback<DateTime<Utc>>,
) -> impl IntoView {
    let local_date = move || value.get().with_timezone(&Local).date_naive();
    let (month, set_month) = create_signal(MonthView::containing(
        value.get_untracked().with_timezone(&Local).date_naive(),
    ));

    // Follow the value when it jumps, e.g. when an appointment is picked for edit
    create_effect(move |_| set_month.set(MonthView::containing(local_date())));

    let pick_time = move |ev| {
        if let Ok(time) = NaiveTime::parse_from_str(&event_target_value(&ev), "%H:%M") {
            if let Some(dt) = with_time_in(value.get_untracked(), time, &Local) {
                on_change.call(dt);
            }
        }
    };

    view! {
        <div class="bg-gray-800 rounded-xl p-4 w-full max-w-sm">
            <div class="flex items-center justify-between mb-3">
                <button
                    type="button"
                    on:click=move |_| set_month.update(|m| *m = m.prev())
                    class="px-3 py-1 rounded hover:bg-gray-700"
                >
                    "‹"
                </button>
                <span class="font-semibold">{move || month.get().label()}</span>
                <button
                    type="button"
                    on:click=move |_| set_month.update(|m| *m = m.next())
                    class="px-3 py-1 rounded hover:bg-gray-700"
                >
                    "›"
                </button>
            </div>

            <div class="grid grid-cols-7 gap-1 text-xs text-gray-400 text-center mb-1">
                {WEEKDAY_LABELS.iter().map(|label| view! { <span>{*label}</span> }).collect_view()}
            </div>

            {move || month.get().weeks().into_iter().map(|week| view! {
                <div class="grid grid-cols-7 gap-1 mb-1">
                    {week.into_iter().map(|cell| match cell {
                        Some(date) => view! {
                            <button
                                type="button"
                                on:click=move |_| {
                                    if let Some(dt) = with_date_in(value.get_untracked(), date, &Local) {
                                        on_change.call(dt);
                                    }
                                }
                                class=move || {
                                    let base = "py-1 rounded text-sm transition-colors";
                                    if local_date() == date {
                                        format!("{} bg-primary-600 text-white", base)
                                    } else {
                                        format!("{} hover:bg-gray-700", base)
                                    }
                                }
                            >
                                {date.day()}
                            </button>
                        }.into_view(),
                        None => view! { <span /> }.into_view(),
                    }).collect_view()}
                </div>
            }).collect_view()}

            <div class="mt-3 flex items-center space-x-2">
                <label class="text-sm text-gray-400">"Time"</label>
                <input
                    type="time"
                    prop:value=move || value.get().with_timezone(&Local).format("%H:%M").to_string()
                    on:change=pick_time
                    class="bg-gray-700 rounded px-3 py-1 text-sm border border-gray-600
                           focus:border-primary-500 focus:outline-none"
                />
            </div>
        </div>
    }
}
