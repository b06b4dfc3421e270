//! Configuration types for the portfolio backend

use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default lower bound for a project name, in characters
pub const PROJECT_NAME_MIN_LENGTH: usize = 3;

/// Default upper bound for a project name, in characters
pub const PROJECT_NAME_MAX_LENGTH: usize = 100;

/// Length bounds applied by the validating value objects
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationLimits {
    /// Shortest accepted project name
    #[serde(default = "default_project_name_min_length")]
    pub project_name_min_length: usize,

    /// Longest accepted project name
    #[serde(default = "default_project_name_max_length")]
    pub project_name_max_length: usize,
}

fn default_project_name_min_length() -> usize {
    PROJECT_NAME_MIN_LENGTH
}

fn default_project_name_max_length() -> usize {
    PROJECT_NAME_MAX_LENGTH
}

impl Default for ValidationLimits {
    fn default() -> Self {
        Self {
            project_name_min_length: PROJECT_NAME_MIN_LENGTH,
            project_name_max_length: PROJECT_NAME_MAX_LENGTH,
        }
    }
}

impl ValidationLimits {
    /// Check that the bounds describe a non-empty range
    pub fn validate(&self) -> Result<()> {
        let (min, max) = (self.project_name_min_length, self.project_name_max_length);
        if min == 0 || min > max {
            return Err(ConfigError::InvalidBounds { min, max });
        }
        Ok(())
    }
}

/// Top-level configuration file format (portfolio.json)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioConfig {
    /// Validation bounds for value objects
    #[serde(default)]
    pub validation: ValidationLimits,
}

impl PortfolioConfig {
    /// Load configuration from a JSON file
    ///
    /// The bounds are validated before the config is returned.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&content)?;
        config.validation.validate()?;
        Ok(config)
    }
}
