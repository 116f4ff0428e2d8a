//! Appointments
//!
//! Data model, wire format and the client-side store that mirrors the
//! backend's appointment collection.

pub mod datetime;
mod error;
mod store;
mod types;

pub use error::{AppointmentError, AppointmentResult};
pub use store::AppointmentStore;
pub use types::{Appointment, AppointmentId, AppointmentRequest, AppointmentStatus};
