//! Appointment Controller
//!
//! The create/update/delete/load lifecycle shared by the browser page and the
//! terminal client. Every operation follows the same shape:
//!
//! 1. validate the form draft (validation failures never reach the network)
//! 2. dispatch a `*Start` action
//! 3. issue exactly one backend call
//! 4. dispatch `*Success` with the server-confirmed record, or `*Failure`
//!
//! The store is only touched by `*Success` actions, so a failed call leaves
//! it in its last confirmed state and nothing needs rolling back.

use tracing::warn;

use crate::appointments::{Appointment, AppointmentError, AppointmentId, AppointmentResult};
use crate::client::AppointmentBackend;
use crate::state::manager::{CREATE_FAILED, DELETE_FAILED, LOAD_FAILED, UPDATE_FAILED};
use crate::state::{Action, FormDraft, ManagerState};

fn user_message(err: &AppointmentError) -> String {
    match err {
        AppointmentError::Validation(message) => message.clone(),
        other => other.to_string(),
    }
}

/// Fetch the full collection and replace the local sequence
pub async fn load_all<B>(backend: &B, dispatch: &mut impl FnMut(Action)) -> AppointmentResult<usize>
where
    B: AppointmentBackend + ?Sized,
{
    dispatch(Action::LoadStart);
    match backend.list().await {
        Ok(records) => {
            let count = records.len();
            dispatch(Action::LoadSuccess(records));
            Ok(count)
        }
        Err(e) => {
            warn!(error = %e, "Error fetching appointments");
            dispatch(Action::LoadFailure(LOAD_FAILED.to_string()));
            Err(e)
        }
    }
}

/// Create an appointment from the draft
pub async fn create<B>(
    backend: &B,
    draft: &FormDraft,
    dispatch: &mut impl FnMut(Action),
) -> AppointmentResult<Appointment>
where
    B: AppointmentBackend + ?Sized,
{
    let request = match draft.create_request() {
        Ok(request) => request,
        Err(e) => {
            dispatch(Action::ValidationFailed(user_message(&e)));
            return Err(e);
        }
    };

    dispatch(Action::CreateStart);
    match backend.create(&request).await {
        Ok(record) => {
            dispatch(Action::CreateSuccess(record.clone()));
            Ok(record)
        }
        Err(e) => {
            warn!(error = %e, "Error creating appointment");
            dispatch(Action::CreateFailure(CREATE_FAILED.to_string()));
            Err(e)
        }
    }
}

/// Update the appointment selected in the draft
pub async fn update<B>(
    backend: &B,
    draft: &FormDraft,
    dispatch: &mut impl FnMut(Action),
) -> AppointmentResult<Appointment>
where
    B: AppointmentBackend + ?Sized,
{
    let (id, request) = match draft.update_request() {
        Ok(pair) => pair,
        Err(e) => {
            dispatch(Action::ValidationFailed(user_message(&e)));
            return Err(e);
        }
    };

    dispatch(Action::UpdateStart);
    match backend.update(id, &request).await {
        Ok(record) => {
            dispatch(Action::UpdateSuccess {
                id,
                record: record.clone(),
            });
            Ok(record)
        }
        Err(e) => {
            warn!(%id, error = %e, "Error updating appointment");
            dispatch(Action::UpdateFailure(UPDATE_FAILED.to_string()));
            Err(e)
        }
    }
}

/// Delete an appointment by id
pub async fn delete<B>(
    backend: &B,
    id: AppointmentId,
    dispatch: &mut impl FnMut(Action),
) -> AppointmentResult<()>
where
    B: AppointmentBackend + ?Sized,
{
    dispatch(Action::DeleteStart(id));
    match backend.delete(id).await {
        Ok(()) => {
            dispatch(Action::DeleteSuccess(id));
            Ok(())
        }
        Err(e) => {
            warn!(%id, error = %e, "Error deleting appointment");
            dispatch(Action::DeleteFailure(DELETE_FAILED.to_string()));
            Err(e)
        }
    }
}

/// A backend paired with the state it drives
///
/// Used where one owner awaits one operation at a time, such as the terminal
/// client and tests.
pub struct AppointmentController<B> {
    backend: B,
    state: ManagerState,
}

impl<B: AppointmentBackend> AppointmentController<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend,
            state: ManagerState::new(),
        }
    }

    pub fn state(&self) -> &ManagerState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn dispatch(&mut self, action: Action) {
        self.state.apply(action);
    }

    pub async fn load_all(&mut self) -> AppointmentResult<usize> {
        let state = &mut self.state;
        load_all(&self.backend, &mut |action| state.apply(action)).await
    }

    pub async fn create(&mut self) -> AppointmentResult<Appointment> {
        let draft = self.state.draft.clone();
        let state = &mut self.state;
        create(&self.backend, &draft, &mut |action| state.apply(action)).await
    }

    pub async fn update(&mut self) -> AppointmentResult<Appointment> {
        let draft = self.state.draft.clone();
        let state = &mut self.state;
        update(&self.backend, &draft, &mut |action| state.apply(action)).await
    }

    pub async fn delete(&mut self, id: AppointmentId) -> AppointmentResult<()> {
        let state = &mut self.state;
        delete(&self.backend, id, &mut |action| state.apply(action)).await
    }

    pub fn select_for_edit(&mut self, id: AppointmentId) {
        self.dispatch(Action::SelectForEdit(id));
    }

    pub fn cancel_edit(&mut self) {
        self.dispatch(Action::CancelEdit);
    }

    pub fn set_details(&mut self, details: impl Into<String>) {
        self.dispatch(Action::SetDetails(details.into()));
    }

    pub fn set_date(&mut self, date: chrono::DateTime<chrono::Utc>) {
        self.dispatch(Action::SetDate(date));
    }
}
