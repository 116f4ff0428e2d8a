//! Global Application State
//!
//! The appointment page state is the framework-independent
//! [`ManagerState`]; here it is wrapped in a signal and every change goes
//! through [`GlobalState::dispatch`].

use leptos::*;

use careconnect::{controller, Action, AppointmentError, AppointmentId, ManagerState};

use crate::api::{self, GlooBackend};

/// How long a success or error message stays on screen
const MESSAGE_TIMEOUT_MS: u32 = 4000;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// Appointment store, form draft and status flags
    pub manager: RwSignal<ManagerState>,
    /// Backend base URL
    pub api_base: RwSignal<String>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        manager: create_rw_signal(ManagerState::new()),
        api_base: create_rw_signal(api::get_api_base()),
    };

    provide_context(state);
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Run an action through the reducer
    pub fn dispatch(&self, action: Action) {
        let settles = action.is_settle() || matches!(action, Action::ValidationFailed(_));
        self.manager.update(|state| state.apply(action));

        if settles {
            self.schedule_dismiss();
        }
    }

    /// Clear the current messages after a timeout, unless they were replaced
    fn schedule_dismiss(&self) {
        let manager = self.manager;
        let shown = manager.with_untracked(|s| (s.error.clone(), s.success.clone()));
        if shown == (None, None) {
            return;
        }

        gloo_timers::callback::Timeout::new(MESSAGE_TIMEOUT_MS, move || {
            let current = manager.with_untracked(|s| (s.error.clone(), s.success.clone()));
            if current == shown {
                manager.update(|s| s.apply(Action::DismissMessages));
            }
        })
        .forget();
    }

    pub fn is_loading(&self) -> bool {
        self.manager.with(|s| s.is_loading())
    }

    fn backend(&self) -> GlooBackend {
        GlooBackend::new(&self.api_base.get_untracked())
    }

    /// Fetch all appointments, replacing the list
    pub fn load_appointments(&self) {
        let state = *self;
        let backend = self.backend();
        spawn_local(async move {
            let result = controller::load_all(&backend, &mut |a| state.dispatch(a)).await;
            log_failure("fetching appointments", result.err());
        });
    }

    /// Create an appointment from the form draft
    pub fn create_appointment(&self) {
        let state = *self;
        let backend = self.backend();
        let draft = self.manager.with_untracked(|s| s.draft.clone());
        spawn_local(async move {
            let result = controller::create(&backend, &draft, &mut |a| state.dispatch(a)).await;
            log_failure("creating appointment", result.err());
        });
    }

    /// Update the appointment selected in the form draft
    pub fn update_appointment(&self) {
        let state = *self;
        let backend = self.backend();
        let draft = self.manager.with_untracked(|s| s.draft.clone());
        spawn_local(async move {
            let result = controller::update(&backend, &draft, &mut |a| state.dispatch(a)).await;
            log_failure("updating appointment", result.err());
        });
    }

    /// Delete an appointment
    pub fn delete_appointment(&self, id: AppointmentId) {
        let state = *self;
        let backend = self.backend();
        spawn_local(async move {
            let result = controller::delete(&backend, id, &mut |a| state.dispatch(a)).await;
            log_failure("deleting appointment", result.err());
        });
    }

    /// Save a new backend URL
    pub fn set_api_base(&self, url: &str) {
        api::set_api_base(url);
        self.api_base.set(api::get_api_base());
    }
}

fn log_failure(what: &str, err: Option<AppointmentError>) {
    if let Some(e) = err {
        web_sys::console::error_1(&format!("Error {}: {}", what, e).into());
    }
}
