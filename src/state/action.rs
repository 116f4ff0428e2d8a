//! Actions accepted by the appointment manager state

use chrono::{DateTime, Utc};

use crate::appointments::{Appointment, AppointmentId};

/// Every state transition the appointment manager knows about
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadStart,
    LoadSuccess(Vec<Appointment>),
    LoadFailure(String),

    CreateStart,
    CreateSuccess(Appointment),
    CreateFailure(String),

    UpdateStart,
    UpdateSuccess {
        id: AppointmentId,
        record: Appointment,
    },
    UpdateFailure(String),

    DeleteStart(AppointmentId),
    DeleteSuccess(AppointmentId),
    DeleteFailure(String),

    /// A form precondition failed before any request was sent
    ValidationFailed(String),

    // Local form edits
    SelectForEdit(AppointmentId),
    CancelEdit,
    SetDate(DateTime<Utc>),
    SetDetails(String),
    DismissMessages,
}

impl Action {
    /// Short name used in logs
    pub fn name(&self) -> &'static str {
        match self {
            Action::LoadStart => "LOAD_START",
            Action::LoadSuccess(_) => "LOAD_SUCCESS",
            Action::LoadFailure(_) => "LOAD_FAILURE",
            Action::CreateStart => "CREATE_START",
            Action::CreateSuccess(_) => "CREATE_SUCCESS",
            Action::CreateFailure(_) => "CREATE_FAILURE",
            Action::UpdateStart => "UPDATE_START",
            Action::UpdateSuccess { .. } => "UPDATE_SUCCESS",
            Action::UpdateFailure(_) => "UPDATE_FAILURE",
            Action::DeleteStart(_) => "DELETE_START",
            Action::DeleteSuccess(_) => "DELETE_SUCCESS",
            Action::DeleteFailure(_) => "DELETE_FAILURE",
            Action::ValidationFailed(_) => "VALIDATION_FAILED",
            Action::SelectForEdit(_) => "SELECT_FOR_EDIT",
            Action::CancelEdit => "CANCEL_EDIT",
            Action::SetDate(_) => "SET_DATE",
            Action::SetDetails(_) => "SET_DETAILS",
            Action::DismissMessages => "DISMISS_MESSAGES",
        }
    }

    /// Whether this action opens a network request
    pub fn is_start(&self) -> bool {
        matches!(
            self,
            Action::LoadStart | Action::CreateStart | Action::UpdateStart | Action::DeleteStart(_)
        )
    }

    /// Whether this action settles a network request
    pub fn is_settle(&self) -> bool {
        matches!(
            self,
            Action::LoadSuccess(_)
                | Action::LoadFailure(_)
                | Action::CreateSuccess(_)
                | Action::CreateFailure(_)
                | Action::UpdateSuccess { .. }
                | Action::UpdateFailure(_)
                | Action::DeleteSuccess(_)
                | Action::DeleteFailure(_)
        )
    }
}
