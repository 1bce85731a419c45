//! Premium Controller - the prediction workflow controller
//!
//! Owns one form session: it validates the form, guards against concurrent
//! submissions, runs the predict/explain sequence through a
//! [`premium_client::PredictionService`], normalizes the explanation and
//! records the outcome in the session's state machine.

pub mod config;
pub mod controller;
pub mod error;
pub mod render;
pub mod view;

pub use config::ControllerConfig;
pub use controller::Controller;
pub use error::ControllerError;
pub use view::SessionView;
