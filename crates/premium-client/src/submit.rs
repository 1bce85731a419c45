//! Sequencing of the predict and explain calls for one submission.

use premium_protocol::{ContributionMap, PredictionPayload, PredictionResult};

use crate::{PredictionService, TransportError};

/// Both responses of a successful submission.
#[derive(Debug, Clone, PartialEq)]
pub struct Submission {
    pub result: PredictionResult,
    pub contributions: ContributionMap,
}

/// Run `predict`, then `explain`, against the same payload.
///
/// `explain` is only sent once `predict` has succeeded. Either failure
/// fails the whole submission; a prediction is never returned without its
/// contributions.
pub async fn submit<S>(
    service: &S,
    payload: &PredictionPayload,
) -> Result<Submission, TransportError>
where
    S: PredictionService + ?Sized,
{
    let result = service.predict(payload).await?;
    tracing::debug!(cost = result.predicted_insurance_cost, "Prediction received");

    let contributions = service.explain(payload).await?;
    tracing::debug!(features = contributions.len(), "Explanation received");

    Ok(Submission {
        result,
        contributions,
    })
}
