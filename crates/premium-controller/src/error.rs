use thiserror::Error;

use premium_client::TransportError;
use premium_protocol::ValidationError;
use premium_state::{NormalizeError, TransitionError};

/// Why a controller operation did not produce an estimate.
///
/// Only `Validation` is meant for the user; the rest are diagnostics.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ControllerError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("a submission is already in progress")]
    Busy,

    #[error(transparent)]
    Transport(#[from] TransportError),

    #[error("explanation could not be used: {0}")]
    Normalize(#[from] NormalizeError),

    #[error("invalid state transition: {0}")]
    Transition(TransitionError),

    #[error("submission task ended without an outcome: {0}")]
    Aborted(String),
}

impl ControllerError {
    /// Whether the error should be shown to the user.
    pub fn is_user_facing(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}

impl From<TransitionError> for ControllerError {
    fn from(e: TransitionError) -> Self {
        match e {
            TransitionError::AlreadySubmitting => Self::Busy,
            other => Self::Transition(other),
        }
    }
}
