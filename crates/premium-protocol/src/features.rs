//! Per-feature explanation text and the premium breakdown shown with a result.

use serde::Serialize;

use crate::{PredictionResult, MONTHS_PER_YEAR, QUARTERS_PER_YEAR};

/// Fallback for features the service returns that we have no text for.
pub const NO_EXPLANATION: &str = "No explanation available.";

/// A model input feature with a known explanation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Feature {
    Age,
    Bmi,
    Children,
    Smoker,
}

impl Feature {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "age" => Some(Self::Age),
            "bmi" => Some(Self::Bmi),
            "children" => Some(Self::Children),
            "smoker" => Some(Self::Smoker),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Bmi => "bmi",
            Self::Children => "children",
            Self::Smoker => "smoker",
        }
    }

    pub fn explanation(&self) -> &'static str {
        match self {
            Self::Age => {
                "Age is a key factor - older individuals typically have higher healthcare costs"
            }
            Self::Bmi => "BMI impacts health risk assessment and premium calculations",
            Self::Children => "Number of dependents affects coverage scope and costs",
            Self::Smoker => {
                "Smoking status significantly influences insurance premiums due to health risks"
            }
        }
    }
}

/// Explanation text for a feature name as returned by the service.
pub fn explanation_for(name: &str) -> &'static str {
    Feature::from_name(name)
        .map(|feature| feature.explanation())
        .unwrap_or(NO_EXPLANATION)
}

/// Annual estimate split into monthly and quarterly amounts.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PremiumBreakdown {
    pub annual: f64,
    pub monthly: f64,
    pub quarterly: f64,
}

impl From<&PredictionResult> for PremiumBreakdown {
    fn from(result: &PredictionResult) -> Self {
        let annual = result.predicted_insurance_cost;
        Self {
            annual,
            monthly: annual / MONTHS_PER_YEAR,
            quarterly: annual / QUARTERS_PER_YEAR,
        }
    }
}
