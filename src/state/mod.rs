//! State Management
//!
//! Action set, reducer and form draft for the appointment page.

mod action;
pub mod form;
pub mod manager;

pub use action::Action;
pub use form::{FormDraft, FormMode};
pub use manager::{reduce, ManagerState};
