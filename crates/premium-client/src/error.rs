use thiserror::Error;

/// Failure talking to the prediction service.
///
/// Covers everything between sending a request and holding a parsed body:
/// the connection, the HTTP status and the JSON decoding.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TransportError {
    #[error("request to {endpoint} failed: {message}")]
    Network { endpoint: String, message: String },

    #[error("{endpoint} returned HTTP {status}: {body}")]
    Status {
        endpoint: String,
        status: u16,
        body: String,
    },

    #[error("could not decode response from {endpoint}: {message}")]
    Decode { endpoint: String, message: String },

    #[error("could not build HTTP client: {0}")]
    Client(String),
}

impl TransportError {
    pub fn endpoint(&self) -> Option<&str> {
        match self {
            Self::Network { endpoint, .. }
            | Self::Status { endpoint, .. }
            | Self::Decode { endpoint, .. } => Some(endpoint),
            Self::Client(_) => None,
        }
    }
}
