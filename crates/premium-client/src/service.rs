use std::future::Future;
use std::pin::Pin;

use premium_protocol::{ContributionMap, PredictionPayload, PredictionResult};

use crate::TransportError;

/// Boxed future returned by [`PredictionService`] methods.
pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// The remote prediction/explanation service, as seen by the controller.
///
/// Implementations perform exactly one request per call: no retries and no
/// timeouts are layered on here.
pub trait PredictionService: Send + Sync {
    /// `POST /predict` with the payload.
    fn predict<'a>(
        &'a self,
        payload: &'a PredictionPayload,
    ) -> BoxFuture<'a, Result<PredictionResult, TransportError>>;

    /// `POST /explain` with the payload.
    fn explain<'a>(
        &'a self,
        payload: &'a PredictionPayload,
    ) -> BoxFuture<'a, Result<ContributionMap, TransportError>>;

    /// `GET /health`. The body is ignored; only reachability matters.
    fn health(&self) -> BoxFuture<'_, Result<(), TransportError>>;
}
