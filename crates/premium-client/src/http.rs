//! reqwest-backed [`PredictionService`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use premium_protocol::{
    ContributionMap, ExplainResponse, PredictionPayload, PredictionResult, EXPLAIN_PATH,
    HEALTH_PATH, PREDICT_PATH,
};

use crate::{BoxFuture, PredictionService, TransportError};

/// HTTP client for the prediction service at a fixed base URL.
#[derive(Debug, Clone)]
pub struct HttpPredictionClient {
    http: reqwest::Client,
    base_url: String,
}

impl HttpPredictionClient {
    /// Create a client for `base_url` (e.g. `http://localhost:8000`).
    ///
    /// No request timeout is configured.
    pub fn new(base_url: impl Into<String>) -> Result<Self, TransportError> {
        let http = reqwest::Client::builder()
            .user_agent(format!("premium/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| TransportError::Client(e.to_string()))?;

        Ok(Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn post_json<B, T>(&self, path: &str, body: &B) -> Result<T, TransportError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.url(path);
        tracing::debug!(url = %url, "POST");

        let response = self
            .http
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| network_error(path, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(TransportError::Status {
                endpoint: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| network_error(path, e))?;
        serde_json::from_slice(&bytes).map_err(|e| TransportError::Decode {
            endpoint: path.to_string(),
            message: e.to_string(),
        })
    }
}

fn network_error(endpoint: &str, error: reqwest::Error) -> TransportError {
    TransportError::Network {
        endpoint: endpoint.to_string(),
        message: error.to_string(),
    }
}

impl PredictionService for HttpPredictionClient {
    fn predict<'a>(
        &'a self,
        payload: &'a PredictionPayload,
    ) -> BoxFuture<'a, Result<PredictionResult, TransportError>> {
        Box::pin(async move { self.post_json(PREDICT_PATH, payload).await })
    }

    fn explain<'a>(
        &'a self,
        payload: &'a PredictionPayload,
    ) -> BoxFuture<'a, Result<ContributionMap, TransportError>> {
        Box::pin(async move {
            let response: ExplainResponse = self.post_json(EXPLAIN_PATH, payload).await?;
            Ok(response.contributions)
        })
    }

    fn health(&self) -> BoxFuture<'_, Result<(), TransportError>> {
        Box::pin(async move {
            let response = self
                .http
                .get(self.url(HEALTH_PATH))
                .send()
                .await
                .map_err(|e| network_error(HEALTH_PATH, e))?;

            let status = response.status();
            if !status.is_success() {
                return Err(TransportError::Status {
                    endpoint: HEALTH_PATH.to_string(),
                    status: status.as_u16(),
                    body: String::new(),
                });
            }
            Ok(())
        })
    }
}
