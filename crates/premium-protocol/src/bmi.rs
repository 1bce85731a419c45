//! Body mass index from height and weight.

use serde::Serialize;

use crate::BmiError;

/// BMI for a height in centimetres and weight in kilograms, rounded to two
/// decimals.
pub fn calculate_bmi(height_cm: f64, weight_kg: f64) -> Result<f64, BmiError> {
    if !height_cm.is_finite() || height_cm <= 0.0 {
        return Err(BmiError::InvalidHeight(height_cm));
    }
    if !weight_kg.is_finite() || weight_kg <= 0.0 {
        return Err(BmiError::InvalidWeight(weight_kg));
    }
    let height_m = height_cm / 100.0;
    let bmi = weight_kg / (height_m * height_m);
    Ok((bmi * 100.0).round() / 100.0)
}

/// WHO adult BMI category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obese,
}

impl std::fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Underweight => "Underweight",
            Self::Normal => "Normal weight",
            Self::Overweight => "Overweight",
            Self::Obese => "Obese",
        };
        write!(f, "{s}")
    }
}

pub fn category_for(bmi: f64) -> BmiCategory {
    if bmi < 18.5 {
        BmiCategory::Underweight
    } else if bmi < 25.0 {
        BmiCategory::Normal
    } else if bmi < 30.0 {
        BmiCategory::Overweight
    } else {
        BmiCategory::Obese
    }
}
