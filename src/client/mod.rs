//! Appointment Backend
//!
//! The REST contract the client consumes, as a trait so the same controller
//! runs natively (reqwest) and in the browser (gloo-net).
//!
//! - `GET /appointments`
//! - `POST /appointments`
//! - `PUT /appointments/{id}`
//! - `DELETE /appointments/{id}`

#[cfg(feature = "native")]
mod http;

#[cfg(feature = "native")]
pub use http::HttpBackend;

use async_trait::async_trait;

use crate::appointments::{Appointment, AppointmentId, AppointmentRequest, AppointmentResult};

/// Default backend base URL
pub const DEFAULT_API_BASE: &str = "http://127.0.0.1:5555";

/// Remote appointment collection
///
/// Futures are not required to be `Send`: browser fetch futures are not.
#[async_trait(?Send)]
pub trait AppointmentBackend {
    /// Fetch the full collection
    async fn list(&self) -> AppointmentResult<Vec<Appointment>>;

    /// Create an appointment; returns the server record with its id
    async fn create(&self, request: &AppointmentRequest) -> AppointmentResult<Appointment>;

    /// Update the appointment stored under `id`
    async fn update(
        &self,
        id: AppointmentId,
        request: &AppointmentRequest,
    ) -> AppointmentResult<Appointment>;

    /// Delete the appointment stored under `id`
    async fn delete(&self, id: AppointmentId) -> AppointmentResult<()>;
}

/// Join a base URL and a path, tolerating a trailing slash on the base
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// URL of the collection
pub fn collection_url(base: &str) -> String {
    endpoint(base, "appointments")
}

/// URL of a single appointment
pub fn item_url(base: &str, id: AppointmentId) -> String {
    endpoint(base, &format!("appointments/{id}"))
}
