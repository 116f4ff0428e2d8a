//! Form draft backing the create/update form

use chrono::{DateTime, Utc};

use crate::appointments::{
    Appointment, AppointmentError, AppointmentId, AppointmentRequest, AppointmentResult,
    AppointmentStatus,
};

pub const DETAILS_REQUIRED: &str = "Appointment details are required.";
pub const SELECTION_REQUIRED: &str = "Select an appointment to update.";

/// Whether the form creates a new appointment or edits an existing one
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Edit(AppointmentId),
}

/// Transient form fields
#[derive(Debug, Clone, PartialEq)]
pub struct FormDraft {
    pub date: DateTime<Utc>,
    pub details: String,
    pub selected: Option<AppointmentId>,
}

impl Default for FormDraft {
    fn default() -> Self {
        Self::new(Utc::now())
    }
}

impl FormDraft {
    pub fn new(date: DateTime<Utc>) -> Self {
        Self {
            date,
            details: String::new(),
            selected: None,
        }
    }

    pub fn mode(&self) -> FormMode {
        match self.selected {
            Some(id) => FormMode::Edit(id),
            None => FormMode::Create,
        }
    }

    pub fn is_editing(&self) -> bool {
        self.selected.is_some()
    }

    /// Copy an existing appointment into the draft and enter edit mode
    pub fn load(&mut self, appointment: &Appointment) {
        self.date = appointment.appointment_date;
        self.details = appointment.reason.clone();
        self.selected = Some(appointment.id);
    }

    /// Back to an empty create-mode draft; the picked date is kept
    pub fn clear(&mut self) {
        self.details.clear();
        self.selected = None;
    }

    /// Request body for `POST /appointments`
    pub fn create_request(&self) -> AppointmentResult<AppointmentRequest> {
        self.request(AppointmentStatus::Scheduled)
    }

    /// Target id and body for `PUT /appointments/{id}`
    pub fn update_request(&self) -> AppointmentResult<(AppointmentId, AppointmentRequest)> {
        let request = self.request(AppointmentStatus::Rescheduled)?;
        let id = self
            .selected
            .ok_or_else(|| AppointmentError::Validation(SELECTION_REQUIRED.to_string()))?;
        Ok((id, request))
    }

    fn request(&self, status: AppointmentStatus) -> AppointmentResult<AppointmentRequest> {
        if self.details.trim().is_empty() {
            return Err(AppointmentError::Validation(DETAILS_REQUIRED.to_string()));
        }
        Ok(AppointmentRequest {
            appointment_date: self.date,
            reason: self.details.clone(),
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_blank_details_rejected() {
        let mut draft = FormDraft::default();
        draft.details = "   ".to_string();

        let err = draft.create_request().unwrap_err();
        assert_eq!(err, AppointmentError::Validation(DETAILS_REQUIRED.to_string()));
    }

    #[test]
    fn test_update_requires_selection() {
        let mut draft = FormDraft::default();
        draft.details = "Follow-up".to_string();

        let err = draft.update_request().unwrap_err();
        assert_eq!(err, AppointmentError::Validation(SELECTION_REQUIRED.to_string()));
    }

    #[test]
    fn test_load_enters_edit_mode() {
        let date = Utc.with_ymd_and_hms(2024, 1, 1, 10, 0, 0).unwrap();
        let appointment = Appointment::new(1, date, "Checkup", AppointmentStatus::Scheduled);

        let mut draft = FormDraft::default();
        assert_eq!(draft.mode(), FormMode::Create);

        draft.load(&appointment);
        assert_eq!(draft.mode(), FormMode::Edit(AppointmentId(1)));
        assert_eq!(draft.details, "Checkup");
        assert_eq!(draft.date, date);

        let (id, request) = draft.update_request().unwrap();
        assert_eq!(id, AppointmentId(1));
        assert_eq!(request.status, AppointmentStatus::Rescheduled);

        draft.clear();
        assert_eq!(draft.mode(), FormMode::Create);
        assert!(draft.details.is_empty());
    }
}
