//! One-shot startup health probe.
//!
//! The first request to the service can be slow while it loads its model;
//! firing `GET /health` at startup gets that out of the way. The outcome is
//! logged and otherwise discarded.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::PredictionService;

/// Guards the warm-up probe so it is issued at most once.
#[derive(Debug, Default)]
pub struct WarmUp {
    fired: AtomicBool,
}

impl WarmUp {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn has_fired(&self) -> bool {
        self.fired.load(Ordering::Acquire)
    }

    /// Spawn the probe on the current Tokio runtime. Returns `None` if the
    /// probe was already fired by an earlier call.
    pub fn fire(&self, service: Arc<dyn PredictionService>) -> Option<JoinHandle<()>> {
        if self
            .fired
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }

        Some(tokio::spawn(async move {
            match service.health().await {
                Ok(()) => tracing::debug!("Warm-up probe succeeded"),
                Err(e) => tracing::debug!(error = %e, "Warm-up probe failed"),
            }
        }))
    }
}
