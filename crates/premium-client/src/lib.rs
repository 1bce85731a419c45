//! Premium Client - access to the remote prediction service
//!
//! The service is reached through the [`PredictionService`] trait so the
//! controller can be driven by the real HTTP client or by an in-process
//! double. [`submit`] sequences the two calls a submission needs, and
//! [`WarmUp`] issues the one-shot startup health probe.

pub mod error;
pub mod http;
pub mod service;
pub mod submit;
pub mod warmup;

pub use error::TransportError;
pub use http::HttpPredictionClient;
pub use service::{BoxFuture, PredictionService};
pub use submit::{submit, Submission};
pub use warmup::WarmUp;
