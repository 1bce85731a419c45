/// Environment variable holding the prediction service base URL.
pub const API_URL_ENV: &str = "API_URL";

/// Base URL used when `API_URL` is not set.
pub const DEFAULT_API_URL: &str = "http://localhost:8000";

pub const PREDICT_PATH: &str = "/predict";
pub const EXPLAIN_PATH: &str = "/explain";
pub const HEALTH_PATH: &str = "/health";

/// Months and quarters per year, for the premium breakdown.
pub const MONTHS_PER_YEAR: f64 = 12.0;
pub const QUARTERS_PER_YEAR: f64 = 4.0;
