//! UI Components
//!
//! Reusable Leptos components for the appointment client.

pub mod nav;
pub mod toast;
pub mod loading;
pub mod calendar;
pub mod appointment_form;
pub mod appointment_list;
pub mod api_settings;

pub use nav::Nav;
pub use toast::Toast;
pub use loading::{InlineLoading, ListSkeleton};
pub use calendar::Calendar;
pub use appointment_form::AppointmentForm;
pub use appointment_list::AppointmentList;
pub use api_settings::ApiSettings;
