//! # Portfolio Application
//!
//! Outer layer around the domain: loads configuration, runs use cases,
//! and publishes the events aggregates record.

pub mod dispatcher;
pub mod showcase;

pub use dispatcher::{dispatch, EventPublisher, RecordingPublisher, TracingPublisher};
pub use showcase::{run_showcase, PortfolioSummary};
