//! Tunables for the suggestion pipeline.
//!
//! Every field has an explicit default, so an empty TOML document (or a
//! missing file) yields [`SuggestionConfig::v0`].
//!
//! ```toml
//! max_keywords = 3
//! max_suggestions = 6
//! per_keyword_limit = 6
//!
//! [urgency]
//! urgent_within_days = 2
//! soon_within_days = 5
//!
//! [mealdb]
//! base_url = "https://www.themealdb.com/api/json/v1/1"
//! timeout_secs = 15
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MEALDB_BASE_URL: &str = "https://www.themealdb.com/api/json/v1/1";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file at {path}: {reason}")]
    ReadError { path: PathBuf, reason: String },

    #[error("Failed to parse config: {reason}")]
    ParseError { reason: String },

    #[error("Configuration validation failed: {0}")]
    ValidationError(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SuggestionConfig {
    /// Most keywords drawn from the inventory.
    #[serde(default = "default_max_keywords")]
    pub max_keywords: usize,

    /// Length of the final suggestion list.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// Records kept from each call of the single-keyword tier.
    #[serde(default = "default_per_keyword_limit")]
    pub per_keyword_limit: usize,

    #[serde(default)]
    pub urgency: UrgencyThresholds,

    #[serde(default)]
    pub mealdb: MealDbConfig,
}

/// Day boundaries between the urgent, soon and later buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrgencyThresholds {
    #[serde(default = "default_urgent_within_days")]
    pub urgent_within_days: i64,
    #[serde(default = "default_soon_within_days")]
    pub soon_within_days: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MealDbConfig {
    #[serde(default = "default_mealdb_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_max_keywords() -> usize {
    3
}

fn default_max_suggestions() -> usize {
    6
}

fn default_per_keyword_limit() -> usize {
    6
}

fn default_urgent_within_days() -> i64 {
    2
}

fn default_soon_within_days() -> i64 {
    5
}

fn default_mealdb_base_url() -> String {
    DEFAULT_MEALDB_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    15
}

impl Default for UrgencyThresholds {
    fn default() -> Self {
        Self {
            urgent_within_days: default_urgent_within_days(),
            soon_within_days: default_soon_within_days(),
        }
    }
}

impl Default for MealDbConfig {
    fn default() -> Self {
        Self {
            base_url: default_mealdb_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl Default for SuggestionConfig {
    fn default() -> Self {
        Self::v0()
    }
}

impl SuggestionConfig {
    pub fn v0() -> Self {
        Self {
            max_keywords: default_max_keywords(),
            max_suggestions: default_max_suggestions(),
            per_keyword_limit: default_per_keyword_limit(),
            urgency: UrgencyThresholds::default(),
            mealdb: MealDbConfig::default(),
        }
    }

    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content).map_err(|e| ConfigError::ParseError {
            reason: e.to_string(),
        })?;

        config.validate()?;
        Ok(config)
    }

    /// Load from a TOML file, falling back to defaults when it does not exist.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config file found at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;

        Self::from_toml_str(&content)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_keywords == 0 {
            return Err(ConfigError::ValidationError(
                "max_keywords must be at least 1".into(),
            ));
        }
        if self.max_suggestions == 0 {
            return Err(ConfigError::ValidationError(
                "max_suggestions must be at least 1".into(),
            ));
        }
        if self.per_keyword_limit == 0 {
            return Err(ConfigError::ValidationError(
                "per_keyword_limit must be at least 1".into(),
            ));
        }
        if self.urgency.urgent_within_days > self.urgency.soon_within_days {
            return Err(ConfigError::ValidationError(format!(
                "urgent_within_days ({}) must not exceed soon_within_days ({})",
                self.urgency.urgent_within_days, self.urgency.soon_within_days
            )));
        }
        if self.mealdb.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "mealdb.timeout_secs must be at least 1".into(),
            ));
        }
        if self.mealdb.base_url.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "mealdb.base_url must not be empty".into(),
            ));
        }
        Ok(())
    }
}
