//! Scripted in-memory backend for controller tests.

#![allow(dead_code)]

use async_trait::async_trait;
use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;

use careconnect::{
    Appointment, AppointmentBackend, AppointmentError, AppointmentId, AppointmentRequest,
    AppointmentResult,
};

/// Records every call and answers from an in-memory table
#[derive(Default)]
pub struct FakeBackend {
    records: RefCell<BTreeMap<AppointmentId, Appointment>>,
    next_id: Cell<i64>,
    failing: Cell<bool>,
    pub calls: RefCell<Vec<String>>,
}

impl FakeBackend {
    pub fn with_records(records: Vec<Appointment>) -> Self {
        let next_id = records.iter().map(|a| a.id.0).max().unwrap_or(0) + 1;
        Self {
            records: RefCell::new(records.into_iter().map(|a| (a.id, a)).collect()),
            next_id: Cell::new(next_id),
            ..Default::default()
        }
    }

    /// Make every following call fail with a network error
    pub fn fail(&self, failing: bool) {
        self.failing.set(failing);
    }

    pub fn call_count(&self) -> usize {
        self.calls.borrow().len()
    }

    pub fn server_records(&self) -> Vec<Appointment> {
        self.records.borrow().values().cloned().collect()
    }

    fn record(&self, call: String) -> AppointmentResult<()> {
        self.calls.borrow_mut().push(call);
        if self.failing.get() {
            Err(AppointmentError::Network("connection refused".to_string()))
        } else {
            Ok(())
        }
    }
}

#[async_trait(?Send)]
impl AppointmentBackend for FakeBackend {
    async fn list(&self) -> AppointmentResult<Vec<Appointment>> {
        self.record("GET /appointments".to_string())?;
        Ok(self.server_records())
    }

    async fn create(&self, request: &AppointmentRequest) -> AppointmentResult<Appointment> {
        self.record("POST /appointments".to_string())?;
        let id = AppointmentId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        let appointment = Appointment::new(
            id,
            request.appointment_date,
            request.reason.clone(),
            request.status,
        );
        self.records.borrow_mut().insert(id, appointment.clone());
        Ok(appointment)
    }

    async fn update(
        &self,
        id: AppointmentId,
        request: &AppointmentRequest,
    ) -> AppointmentResult<Appointment> {
        self.record(format!("PUT /appointments/{id}"))?;
        let mut records = self.records.borrow_mut();
        let existing = records
            .get_mut(&id)
            .ok_or_else(|| AppointmentError::Network("HTTP 404".to_string()))?;
        existing.appointment_date = request.appointment_date;
        existing.reason = request.reason.clone();
        existing.status = request.status;
        Ok(existing.clone())
    }

    async fn delete(&self, id: AppointmentId) -> AppointmentResult<()> {
        self.record(format!("DELETE /appointments/{id}"))?;
        self.records
            .borrow_mut()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| AppointmentError::Network("HTTP 404".to_string()))
    }
}
