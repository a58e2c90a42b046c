//! Optional TOML configuration file.
//!
//! ```toml
//! [extraction]
//! words_per_minute = 250
//! max_key_points = 4
//! problem_keywords = ["problem", "outage", "regression"]
//! ```
//!
//! Every key is optional; unknown keys are rejected so typos surface early.

use std::{fs, path::Path};

use anyhow::{Context, Result};
use article::ExtractionConfig;
use serde::Deserialize;
use tracing::info;

/// Settings loaded from `--config`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub extraction: ExtractionConfig,
}

impl CliConfig {
    /// Loads `path`, or returns the defaults when no path was given.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let Some(path) = path else {
            return Ok(Self::default());
        };

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        let config = Self::from_toml(&text)
            .with_context(|| format!("Invalid config file {}", path.display()))?;

        info!(path = %path.display(), "Loaded configuration");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}
