//! Appointment error types

use thiserror::Error;

use super::AppointmentId;

/// Errors surfaced by the appointment store and controller
#[derive(Error, Debug, Clone, PartialEq)]
pub enum AppointmentError {
    /// A required form field is empty; no request was sent
    #[error("Validation error: {0}")]
    Validation(String),

    /// Any failed request: connectivity, timeout, non-2xx or undecodable body
    #[error("Network error: {0}")]
    Network(String),

    /// The store holds no appointment with this id
    #[error("Appointment not found: {0}")]
    NotFound(AppointmentId),

    /// The server returned a record for a different id than requested
    #[error("Appointment id mismatch: expected {expected}, got {actual}")]
    IdMismatch {
        expected: AppointmentId,
        actual: AppointmentId,
    },
}

impl AppointmentError {
    pub fn is_validation(&self) -> bool {
        matches!(self, AppointmentError::Validation(_))
    }
}

#[cfg(feature = "native")]
impl From<reqwest::Error> for AppointmentError {
    fn from(err: reqwest::Error) -> Self {
        let message = if err.is_timeout() {
            "request timed out".to_string()
        } else if err.is_connect() {
            "backend unavailable".to_string()
        } else {
            err.to_string()
        };
        AppointmentError::Network(message)
    }
}

impl From<serde_json::Error> for AppointmentError {
    fn from(err: serde_json::Error) -> Self {
        AppointmentError::Network(format!("invalid response body: {err}"))
    }
}

/// Result type alias for appointment operations
pub type AppointmentResult<T> = Result<T, AppointmentError>;
