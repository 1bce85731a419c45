//! Submission lifecycle state machine.
//!
//! ```text
//!            begin_submit            succeed
//!   Idle ─────────────────▶ Submitting ───────▶ Success
//!   Success / Error ──────▶            ───────▶ Error
//!                                        fail
//! ```
//!
//! There is no terminal state: `Success` and `Error` both accept a new
//! `begin_submit`. The estimate (result + contributions) is stored as one
//! value, so it is only ever replaced whole by `succeed` and is left as-is
//! by `fail`.

use chrono::{DateTime, Utc};
use serde::Serialize;
use thiserror::Error;

use premium_protocol::{ContributionMap, PredictionResult, PremiumBreakdown};

use crate::normalize::{normalize, NormalizeError, NormalizedContribution};

/// Lifecycle state of the current submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestState {
    Idle,
    Submitting,
    Success,
    Error,
}

impl std::fmt::Display for RequestState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Idle => "idle",
            Self::Submitting => "submitting",
            Self::Success => "success",
            Self::Error => "error",
        };
        write!(f, "{s}")
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransitionError {
    #[error("a submission is already in flight")]
    AlreadySubmitting,
    #[error("cannot {action} from state {state}")]
    NotSubmitting {
        action: &'static str,
        state: RequestState,
    },
}

/// A prediction together with the contribution breakdown that explains it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Estimate {
    pub result: PredictionResult,
    pub contributions: ContributionMap,
    pub normalized: Vec<NormalizedContribution>,
    pub breakdown: PremiumBreakdown,
    pub received_at: DateTime<Utc>,
}

impl Estimate {
    /// Build an estimate from both service responses. Fails if the
    /// contributions cannot be normalized, in which case no estimate exists.
    pub fn new(
        result: PredictionResult,
        contributions: ContributionMap,
    ) -> Result<Self, NormalizeError> {
        let normalized = normalize(&contributions)?;
        Ok(Self {
            breakdown: PremiumBreakdown::from(&result),
            result,
            contributions,
            normalized,
            received_at: Utc::now(),
        })
    }
}

/// Tracks one session's submission lifecycle and its latest estimate.
#[derive(Debug, Clone)]
pub struct RequestStateMachine {
    state: RequestState,
    estimate: Option<Estimate>,
    /// Diagnostic reason for the most recent failure; never shown to the user.
    last_failure: Option<String>,
    show_details: bool,
    attempts: u64,
}

impl RequestStateMachine {
    pub fn new() -> Self {
        Self {
            state: RequestState::Idle,
            estimate: None,
            last_failure: None,
            show_details: false,
            attempts: 0,
        }
    }

    pub fn state(&self) -> RequestState {
        self.state
    }

    pub fn estimate(&self) -> Option<&Estimate> {
        self.estimate.as_ref()
    }

    pub fn last_failure(&self) -> Option<&str> {
        self.last_failure.as_deref()
    }

    pub fn attempts(&self) -> u64 {
        self.attempts
    }

    /// Whether the submit control accepts a new submission.
    pub fn is_submit_enabled(&self) -> bool {
        self.state != RequestState::Submitting
    }

    /// Whether the busy indicator is shown.
    pub fn is_busy(&self) -> bool {
        self.state == RequestState::Submitting
    }

    pub fn details_available(&self) -> bool {
        self.estimate.is_some()
    }

    pub fn show_details(&self) -> bool {
        self.show_details && self.details_available()
    }

    /// Flip the detail panel. Returns the new visibility, or `false` without
    /// changing anything when there is no estimate to detail.
    pub fn toggle_details(&mut self) -> bool {
        if !self.details_available() {
            return false;
        }
        self.show_details = !self.show_details;
        self.show_details
    }

    /// Enter `Submitting`. Must only be called with an already validated
    /// payload. Returns the attempt number.
    pub fn begin_submit(&mut self) -> Result<u64, TransitionError> {
        if self.state == RequestState::Submitting {
            return Err(TransitionError::AlreadySubmitting);
        }
        self.attempts += 1;
        self.last_failure = None;
        tracing::debug!(from = %self.state, attempt = self.attempts, "Entering submitting state");
        self.state = RequestState::Submitting;
        Ok(self.attempts)
    }

    /// `Submitting → Success`, replacing any previous estimate.
    pub fn succeed(&mut self, estimate: Estimate) -> Result<(), TransitionError> {
        self.expect_submitting("succeed")?;
        tracing::info!(
            attempt = self.attempts,
            cost = estimate.result.predicted_insurance_cost,
            features = estimate.normalized.len(),
            "Estimate received"
        );
        self.estimate = Some(estimate);
        self.state = RequestState::Success;
        Ok(())
    }

    /// `Submitting → Error`. Any previous estimate is kept.
    pub fn fail(&mut self, reason: impl Into<String>) -> Result<(), TransitionError> {
        self.expect_submitting("fail")?;
        let reason = reason.into();
        tracing::warn!(attempt = self.attempts, reason = %reason, "Submission failed");
        self.last_failure = Some(reason);
        self.state = RequestState::Error;
        Ok(())
    }

    fn expect_submitting(&self, action: &'static str) -> Result<(), TransitionError> {
        if self.state != RequestState::Submitting {
            return Err(TransitionError::NotSubmitting {
                action,
                state: self.state,
            });
        }
        Ok(())
    }
}

impl Default for RequestStateMachine {
    fn default() -> Self {
        Self::new()
    }
}
