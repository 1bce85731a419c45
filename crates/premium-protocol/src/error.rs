use thiserror::Error;

use crate::FormField;

/// Why a [`FormInput`](crate::FormInput) could not become a payload.
///
/// The `Display` text is user-facing: it is shown next to the form and
/// blocks submission.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: FormField },

    #[error("{field} must be a whole number, got '{value}'")]
    NotAnInteger { field: FormField, value: String },

    #[error("{field} must be a number, got '{value}'")]
    NotANumber { field: FormField, value: String },

    #[error("smoker must be 'yes' or 'no', got '{value}'")]
    InvalidSmoker { value: String },
}

impl ValidationError {
    /// The form field the error refers to.
    pub fn field(&self) -> FormField {
        match self {
            Self::Missing { field }
            | Self::NotAnInteger { field, .. }
            | Self::NotANumber { field, .. } => *field,
            Self::InvalidSmoker { .. } => FormField::Smoker,
        }
    }
}

/// Errors from the BMI helper.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum BmiError {
    #[error("height must be a positive number of centimetres, got {0}")]
    InvalidHeight(f64),

    #[error("weight must be a positive number of kilograms, got {0}")]
    InvalidWeight(f64),
}
