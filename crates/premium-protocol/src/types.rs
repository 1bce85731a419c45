use serde::{Deserialize, Serialize};

use crate::ContributionMap;

// ---------------------------------------------------------------------------
// Form input
// ---------------------------------------------------------------------------

/// One of the four fields of the estimate form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormField {
    Age,
    Bmi,
    Children,
    Smoker,
}

impl FormField {
    /// All fields, in form order.
    pub const ALL: [FormField; 4] = [Self::Age, Self::Bmi, Self::Children, Self::Smoker];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Bmi => "bmi",
            Self::Children => "children",
            Self::Smoker => "smoker",
        }
    }
}

impl std::fmt::Display for FormField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for FormField {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "age" => Ok(Self::Age),
            "bmi" => Ok(Self::Bmi),
            "children" => Ok(Self::Children),
            "smoker" => Ok(Self::Smoker),
            other => Err(format!("unknown form field '{other}'")),
        }
    }
}

/// Raw, string-typed form state as the user types it.
///
/// Nothing here is validated; see [`crate::validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormInput {
    pub age: String,
    pub bmi: String,
    pub children: String,
    /// `""` until the user picks, then `"yes"` or `"no"`.
    pub smoker: String,
}

impl FormInput {
    pub fn new(
        age: impl Into<String>,
        bmi: impl Into<String>,
        children: impl Into<String>,
        smoker: impl Into<String>,
    ) -> Self {
        Self {
            age: age.into(),
            bmi: bmi.into(),
            children: children.into(),
            smoker: smoker.into(),
        }
    }

    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Age => &self.age,
            FormField::Bmi => &self.bmi,
            FormField::Children => &self.children,
            FormField::Smoker => &self.smoker,
        }
    }

    /// Replace a single field, leaving the others untouched.
    pub fn set(&mut self, field: FormField, value: impl Into<String>) {
        let value = value.into();
        match field {
            FormField::Age => self.age = value,
            FormField::Bmi => self.bmi = value,
            FormField::Children => self.children = value,
            FormField::Smoker => self.smoker = value,
        }
    }

    /// Fill the BMI field from a computed value, formatted to two decimals.
    pub fn apply_bmi(&mut self, bmi: f64) {
        self.bmi = format!("{bmi:.2}");
    }
}

// ---------------------------------------------------------------------------
// Payload
// ---------------------------------------------------------------------------

/// Smoking status as sent to the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Smoker {
    Yes,
    No,
}

impl Smoker {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Yes => "yes",
            Self::No => "no",
        }
    }
}

impl std::fmt::Display for Smoker {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Validated request body for both `/predict` and `/explain`.
///
/// Only produced by [`crate::validate`]; fields are read-only once built.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PredictionPayload {
    age: i64,
    bmi: f64,
    children: i64,
    smoker: Smoker,
}

impl PredictionPayload {
    pub(crate) fn new(age: i64, bmi: f64, children: i64, smoker: Smoker) -> Self {
        Self { age, bmi, children, smoker }
    }

    pub fn age(&self) -> i64 {
        self.age
    }

    pub fn bmi(&self) -> f64 {
        self.bmi
    }

    pub fn children(&self) -> i64 {
        self.children
    }

    pub fn smoker(&self) -> Smoker {
        self.smoker
    }
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

/// Body of a successful `/predict` response.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub predicted_insurance_cost: f64,
}

/// Body of a successful `/explain` response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub contributions: ContributionMap,
}
