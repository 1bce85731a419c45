//! Premium Protocol - Core types for the insurance premium estimator
//!
//! Defines the raw form input collected from the user, the validated
//! payload sent to the prediction service, and the response shapes the
//! service returns for the `/predict` and `/explain` calls.

pub mod bmi;
pub mod constants;
pub mod contributions;
pub mod error;
pub mod features;
pub mod types;
pub mod validation;

pub use constants::*;
pub use contributions::ContributionMap;
pub use error::*;
pub use features::{explanation_for, Feature, PremiumBreakdown};
pub use types::*;
pub use validation::validate;
