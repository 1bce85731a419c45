//! The prediction workflow controller.
//!
//! A submission runs in three steps:
//! 1. validate the current form (no state change on failure)
//! 2. enter `Submitting`, rejecting the call if another submission is
//!    already in flight
//! 3. run predict then explain, normalize, and move to `Success` or `Error`
//!
//! Step 3 runs on its own task. The session lock is never held across the
//! network calls, so the view stays readable (and shows the busy state)
//! while a request is pending, and a caller that gives up waiting does not
//! leave the session stuck in `Submitting`.

use std::sync::Arc;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use uuid::Uuid;

use premium_client::{HttpPredictionClient, PredictionService, TransportError, WarmUp};
use premium_protocol::bmi::calculate_bmi;
use premium_protocol::{validate, BmiError, FormField, FormInput, PredictionPayload};
use premium_state::{Estimate, RequestStateMachine};

use crate::{ControllerConfig, ControllerError, SessionView};

/// Mutable state of the single active session.
#[derive(Debug, Default)]
struct Session {
    form: FormInput,
    machine: RequestStateMachine,
}

/// Drives one form session against a prediction service.
///
/// Cloning yields another handle to the same session.
#[derive(Clone)]
pub struct Controller {
    service: Arc<dyn PredictionService>,
    session: Arc<RwLock<Session>>,
    warm_up: Arc<WarmUp>,
}

impl Controller {
    pub fn new(service: Arc<dyn PredictionService>) -> Self {
        Self {
            service,
            session: Arc::new(RwLock::new(Session::default())),
            warm_up: Arc::new(WarmUp::new()),
        }
    }

    /// Build a controller talking HTTP to `config.api_url`.
    pub fn from_config(config: &ControllerConfig) -> Result<Self, ControllerError> {
        let client = HttpPredictionClient::new(config.api_url.as_str())?;
        tracing::debug!(api_url = %client.base_url(), "Prediction client configured");
        Ok(Self::new(Arc::new(client)))
    }

    /// Fire the startup health probe once. Later calls return `None`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn warm_up(&self) -> Option<JoinHandle<()>> {
        self.warm_up.fire(Arc::clone(&self.service))
    }

    /// Probe the service directly and report the outcome.
    pub async fn probe_health(&self) -> Result<(), TransportError> {
        self.service.health().await
    }

    pub async fn set_field(&self, field: FormField, value: impl Into<String>) {
        self.session.write().await.form.set(field, value);
    }

    pub async fn set_form(&self, form: FormInput) {
        self.session.write().await.form = form;
    }

    pub async fn form(&self) -> FormInput {
        self.session.read().await.form.clone()
    }

    /// Compute BMI from height and weight and write it into the form.
    pub async fn apply_bmi(&self, height_cm: f64, weight_kg: f64) -> Result<f64, BmiError> {
        let bmi = calculate_bmi(height_cm, weight_kg)?;
        self.session.write().await.form.apply_bmi(bmi);
        Ok(bmi)
    }

    /// Submit the current form.
    ///
    /// Returns the new estimate on success. A validation failure or a
    /// concurrent submission leaves the session untouched; a service failure
    /// moves it to `Error` and keeps any earlier estimate.
    ///
    /// Once `Submitting` is entered, the requests and the final transition
    /// run on a spawned task, so dropping the returned future does not leave
    /// the session stuck in `Submitting`.
    pub async fn submit(&self) -> Result<Estimate, ControllerError> {
        let form = self.form().await;
        let payload = validate(&form).map_err(|e| {
            tracing::info!(field = %e.field(), reason = %e, "Submission blocked by validation");
            e
        })?;

        let attempt = {
            let mut session = self.session.write().await;
            session.machine.begin_submit().map_err(|e| {
                tracing::warn!(error = %e, "Rejected concurrent submission");
                ControllerError::from(e)
            })?
        };

        let submission_id = Uuid::new_v4();
        tracing::info!(submission_id = %submission_id, attempt, "Requesting estimate");
        tracing::debug!(
            submission_id = %submission_id,
            age = payload.age(),
            bmi = payload.bmi(),
            children = payload.children(),
            smoker = %payload.smoker(),
            "Estimate payload"
        );

        let service = Arc::clone(&self.service);
        let session = Arc::clone(&self.session);
        let task = tokio::spawn(run_submission(service, Arc::clone(&session), payload, submission_id));

        match task.await {
            Ok(outcome) => outcome,
            Err(e) => {
                // The task panicked or was aborted before recording an outcome.
                let err = ControllerError::Aborted(e.to_string());
                tracing::error!(submission_id = %submission_id, error = %err, "Estimate task ended early");
                let mut session = session.write().await;
                if session.machine.is_busy() {
                    session.machine.fail(err.to_string())?;
                }
                Err(err)
            }
        }
    }

    /// Show or hide the contribution details. Returns the new visibility;
    /// always `false` while there is no estimate.
    pub async fn toggle_details(&self) -> bool {
        self.session.write().await.machine.toggle_details()
    }

    pub async fn view(&self) -> SessionView {
        let session = self.session.read().await;
        SessionView::capture(&session.form, &session.machine)
    }

    /// Diagnostic reason for the last failed submission, if the latest
    /// attempt failed.
    pub async fn last_failure(&self) -> Option<String> {
        self.session.read().await.machine.last_failure().map(str::to_string)
    }
}

/// Run predict/explain for one attempt and record the outcome in the session.
async fn run_submission(
    service: Arc<dyn PredictionService>,
    session: Arc<RwLock<Session>>,
    payload: PredictionPayload,
    submission_id: Uuid,
) -> Result<Estimate, ControllerError> {
    let outcome = match premium_client::submit(service.as_ref(), &payload).await {
        Ok(submission) => {
            Estimate::new(submission.result, submission.contributions).map_err(ControllerError::from)
        }
        Err(e) => Err(ControllerError::from(e)),
    };

    let mut session = session.write().await;
    match outcome {
        Ok(estimate) => {
            session.machine.succeed(estimate.clone())?;
            Ok(estimate)
        }
        Err(err) => {
            tracing::error!(submission_id = %submission_id, error = %err, "Estimate request failed");
            session.machine.fail(err.to_string())?;
            Err(err)
        }
    }
}
