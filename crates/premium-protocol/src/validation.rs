//! Coercion of raw form input into a [`PredictionPayload`].
//!
//! Every field is required. Numeric fields are trimmed and parsed; the
//! numeric ranges shown on the form (age 18-100, BMI 10-50, children 0-10)
//! are hints only and are not enforced here.

use crate::{FormField, FormInput, PredictionPayload, Smoker, ValidationError};

/// Validate a form and build the payload, or report the first problem.
///
/// Presence is checked for all four fields (in form order) before any
/// parsing, so a form with a blank field always reports `Missing`.
pub fn validate(form: &FormInput) -> Result<PredictionPayload, ValidationError> {
    for field in FormField::ALL {
        if form.get(field).trim().is_empty() {
            return Err(ValidationError::Missing { field });
        }
    }

    let age = parse_integer(form, FormField::Age)?;
    let bmi = parse_decimal(form, FormField::Bmi)?;
    let children = parse_integer(form, FormField::Children)?;
    let smoker = parse_smoker(&form.smoker)?;

    Ok(PredictionPayload::new(age, bmi, children, smoker))
}

fn parse_integer(form: &FormInput, field: FormField) -> Result<i64, ValidationError> {
    let raw = form.get(field).trim();
    raw.parse::<i64>().map_err(|_| ValidationError::NotAnInteger {
        field,
        value: raw.to_string(),
    })
}

fn parse_decimal(form: &FormInput, field: FormField) -> Result<f64, ValidationError> {
    let raw = form.get(field).trim();
    match raw.parse::<f64>() {
        // "NaN" and "inf" parse as f64 but cannot be sent as JSON numbers.
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(ValidationError::NotANumber {
            field,
            value: raw.to_string(),
        }),
    }
}

fn parse_smoker(raw: &str) -> Result<Smoker, ValidationError> {
    match raw {
        "yes" => Ok(Smoker::Yes),
        "no" => Ok(Smoker::No),
        other => Err(ValidationError::InvalidSmoker {
            value: other.to_string(),
        }),
    }
}
