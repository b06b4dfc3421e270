//! Domain Services - Business logic that doesn't belong to a single entity
//!
//! Services operate on multiple entities and hold no state of their own.

pub mod portfolio_service;

pub use portfolio_service::PortfolioService;
