//! Error types for configuration loading

use thiserror::Error;

/// Errors raised while loading or validating configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid project name bounds: min {min}, max {max}")]
    InvalidBounds { min: usize, max: usize },
}

pub type Result<T> = std::result::Result<T, ConfigError>;
