//! # CareConnect
//!
//! Appointment management client: lists, creates, updates and deletes
//! appointments against the CareConnect REST backend.
//!
//! ## Modules
//!
//! - [`appointments`]: data model, wire format and the id-keyed store
//! - [`state`]: action set, reducer and form draft of the appointment page
//! - [`controller`]: validate → request → confirm lifecycle
//! - [`client`]: backend trait and the reqwest implementation
//! - [`calendar`]: month grid for the date picker
//! - [`config`]: TOML + environment configuration (native only)
//!
//! The browser dashboard lives in the `careconnect-ui` crate and builds on
//! this one with `default-features = false`.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use careconnect::{AppointmentController, HttpBackend};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut controller = AppointmentController::new(HttpBackend::default());
//!     controller.load_all().await?;
//!
//!     controller.set_details("Dental cleaning");
//!     let created = controller.create().await?;
//!     println!("Created appointment {}", created.id);
//!
//!     Ok(())
//! }
//! ```

pub mod appointments;
pub mod calendar;
pub mod client;
pub mod controller;
pub mod state;

#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod logging;

pub use appointments::{
    Appointment, AppointmentError, AppointmentId, AppointmentRequest, AppointmentResult,
    AppointmentStatus, AppointmentStore,
};

pub use state::{reduce, Action, FormDraft, FormMode, ManagerState};

pub use controller::AppointmentController;

pub use client::{AppointmentBackend, DEFAULT_API_BASE};

#[cfg(feature = "native")]
pub use client::HttpBackend;

#[cfg(feature = "native")]
pub use config::{
    generate_default_config, ApiConfig, Config, ConfigError, ConfigSearch, LoggingConfig,
};
