//! # Portfolio Shared
//!
//! Configuration and common error types used across the portfolio crates.

pub mod config;
pub mod error;

// Re-exports
pub use config::*;
pub use error::*;
