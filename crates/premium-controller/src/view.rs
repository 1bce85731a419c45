use serde::Serialize;

use premium_protocol::FormInput;
use premium_state::{Estimate, RequestState, RequestStateMachine};

/// Read-only snapshot of a session, for whatever renders it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionView {
    pub state: RequestState,
    pub submit_enabled: bool,
    pub busy: bool,
    pub form: FormInput,
    pub estimate: Option<Estimate>,
    pub show_details: bool,
    pub attempts: u64,
}

impl SessionView {
    pub(crate) fn capture(form: &FormInput, machine: &RequestStateMachine) -> Self {
        Self {
            state: machine.state(),
            submit_enabled: machine.is_submit_enabled(),
            busy: machine.is_busy(),
            form: form.clone(),
            estimate: machine.estimate().cloned(),
            show_details: machine.show_details(),
            attempts: machine.attempts(),
        }
    }
}
