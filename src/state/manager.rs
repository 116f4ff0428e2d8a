//! Appointment manager state container
//!
//! All UI state of the appointment page lives in [`ManagerState`] and only
//! changes through [`reduce`]. The reducer is framework-independent: the
//! Leptos page keeps a `ManagerState` in a signal, the terminal client keeps
//! one on the stack.

use tracing::{info, warn};

use super::{Action, FormDraft, FormMode};
use crate::appointments::{AppointmentError, AppointmentStore};

pub const LOAD_FAILED: &str = "Error fetching appointments";
pub const CREATE_FAILED: &str = "Error creating appointment";
pub const UPDATE_FAILED: &str = "Error updating appointment";
pub const DELETE_FAILED: &str = "Error deleting appointment";
pub const CREATED: &str = "Appointment created successfully";
pub const UPDATED: &str = "Appointment updated successfully";
pub const DELETED: &str = "Appointment deleted successfully";

/// Store, form draft and status flags of the appointment page
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ManagerState {
    pub store: AppointmentStore,
    pub draft: FormDraft,
    /// Requests started but not yet settled
    pub in_flight: u32,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Pure reducer: returns the state after `action`
pub fn reduce(mut state: ManagerState, action: Action) -> ManagerState {
    state.apply(action);
    state
}

impl ManagerState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.in_flight > 0
    }

    pub fn mode(&self) -> FormMode {
        self.draft.mode()
    }

    /// Apply an action in place
    pub fn apply(&mut self, action: Action) {
        tracing::trace!(action = action.name(), "apply");

        if action.is_start() {
            self.in_flight += 1;
        } else if action.is_settle() {
            self.in_flight = self.in_flight.saturating_sub(1);
        }

        match action {
            Action::LoadStart
            | Action::CreateStart
            | Action::UpdateStart
            | Action::DeleteStart(_) => {}

            Action::LoadSuccess(records) => {
                self.store.replace_all(records);
                if let Some(id) = self.draft.selected {
                    if !self.store.contains(id) {
                        self.draft.clear();
                    }
                }
                self.error = None;
                info!(count = self.store.len(), "Appointments loaded");
            }

            Action::CreateSuccess(record) => {
                info!(id = %record.id, "Appointment created");
                self.store.append(record);
                self.draft.clear();
                self.succeed(CREATED);
            }

            Action::UpdateSuccess { id, record } => match self.store.replace(id, record) {
                Ok(()) => {
                    info!(%id, "Appointment updated");
                    self.draft.clear();
                    self.succeed(UPDATED);
                }
                Err(e) => {
                    warn!(%id, error = %e, "Confirmed update does not match the local list");
                    self.fail(stale_update_message(&e));
                }
            },

            Action::DeleteSuccess(id) => {
                if self.store.remove(id).is_none() {
                    warn!(%id, "Deleted appointment was not in the local list");
                }
                if self.draft.selected == Some(id) {
                    self.draft.clear();
                }
                info!(%id, "Appointment deleted");
                self.succeed(DELETED);
            }

            Action::LoadFailure(message)
            | Action::CreateFailure(message)
            | Action::UpdateFailure(message)
            | Action::DeleteFailure(message)
            | Action::ValidationFailed(message) => {
                self.fail(message);
            }

            Action::SelectForEdit(id) => match self.store.get(id) {
                Some(appointment) => self.draft.load(appointment),
                None => warn!(%id, "Cannot edit an appointment that is not listed"),
            },

            Action::CancelEdit => self.draft.clear(),
            Action::SetDate(date) => self.draft.date = date,
            Action::SetDetails(details) => self.draft.details = details,

            Action::DismissMessages => {
                self.error = None;
                self.success = None;
            }
        }
    }

    fn succeed(&mut self, message: &str) {
        self.error = None;
        self.success = Some(message.to_string());
    }

    fn fail(&mut self, message: String) {
        self.success = None;
        self.error = Some(message);
    }
}

fn stale_update_message(err: &AppointmentError) -> String {
    match err {
        AppointmentError::NotFound(id) => {
            format!("Appointment {id} is no longer listed; reload to see the latest data")
        }
        other => format!("{UPDATE_FAILED}: {other}"),
    }
}
