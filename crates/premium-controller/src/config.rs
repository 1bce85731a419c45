//! Controller configuration.
//!
//! Resolution order, later wins:
//! 1. built-in defaults
//! 2. TOML file (`--config`, else `<config dir>/premium-estimator/config.toml` if present)
//! 3. the `API_URL` environment variable
//! 4. `--api-url` on the command line (applied by the binary)

use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use premium_protocol::{API_URL_ENV, DEFAULT_API_URL};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Base URL of the prediction service.
    pub api_url: String,
    /// Fire the `/health` warm-up probe at startup.
    pub warm_up: bool,
    /// Default log filter when `RUST_LOG` is unset.
    pub log_level: String,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            warm_up: true,
            log_level: "info".to_string(),
        }
    }
}

impl ControllerConfig {
    /// `<config dir>/premium-estimator/config.toml`, if the platform has one.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("premium-estimator").join("config.toml"))
    }

    /// Parse a TOML config file. Missing keys take their defaults.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Self = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        Ok(config.normalized())
    }

    /// Load the effective configuration.
    ///
    /// An explicit path must exist; the default path is only used when present.
    pub fn load(explicit: Option<&Path>) -> anyhow::Result<Self> {
        let config = match explicit {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path().filter(|p| p.exists()) {
                Some(path) => Self::from_file(&path)?,
                None => Self::default(),
            },
        };
        Ok(config.with_api_url(std::env::var(API_URL_ENV).ok()))
    }

    /// Override the API URL; `None` or a blank value leaves it unchanged.
    pub fn with_api_url(mut self, api_url: Option<String>) -> Self {
        if let Some(url) = api_url.filter(|u| !u.trim().is_empty()) {
            self.api_url = url.trim().to_string();
        }
        self.normalized()
    }

    fn normalized(mut self) -> Self {
        let trimmed = self.api_url.trim_end_matches('/');
        if trimmed.len() != self.api_url.len() {
            self.api_url = trimmed.to_string();
        }
        self
    }
}
