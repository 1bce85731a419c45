//! Contribution normalization.
//!
//! Each contribution is scaled against the largest absolute contribution in
//! the same response, so the dominant feature is always drawn at 100% and
//! the rest are relative to it. A contribution of exactly zero is classified
//! as [`Direction::Decreases`].

use serde::Serialize;
use thiserror::Error;

use premium_protocol::ContributionMap;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum NormalizeError {
    #[error("contribution map is empty")]
    Empty,
    #[error("contribution for '{feature}' is not a finite number")]
    NonFinite { feature: String },
}

/// Whether a feature pushes the estimate up or down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Increases,
    Decreases,
}

impl Direction {
    pub fn of(raw_value: f64) -> Self {
        if raw_value > 0.0 {
            Self::Increases
        } else {
            Self::Decreases
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Increases => "increases",
            Self::Decreases => "decreases",
        };
        write!(f, "{s}")
    }
}

/// One bar of the contribution breakdown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NormalizedContribution {
    pub feature: String,
    pub raw_value: f64,
    /// Share of the largest absolute contribution, in `[0, 100]`.
    pub percent: f64,
    pub direction: Direction,
}

/// Normalize a contribution map, preserving its order.
pub fn normalize(
    contributions: &ContributionMap,
) -> Result<Vec<NormalizedContribution>, NormalizeError> {
    if contributions.is_empty() {
        return Err(NormalizeError::Empty);
    }

    if let Some((feature, _)) = contributions.iter().find(|(_, value)| !value.is_finite()) {
        return Err(NormalizeError::NonFinite {
            feature: feature.to_string(),
        });
    }

    let max_abs = contributions
        .iter()
        .map(|(_, value)| value.abs())
        .fold(0.0_f64, f64::max);

    Ok(contributions
        .iter()
        .map(|(feature, raw_value)| NormalizedContribution {
            feature: feature.to_string(),
            raw_value,
            percent: percent_of(raw_value, max_abs),
            direction: Direction::of(raw_value),
        })
        .collect())
}

fn percent_of(raw_value: f64, max_abs: f64) -> f64 {
    // All-zero response: nothing to scale against.
    if max_abs == 0.0 {
        return 0.0;
    }
    (raw_value.abs() / max_abs * 100.0).clamp(0.0, 100.0)
}
