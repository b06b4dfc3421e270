//! Aggregates - Consistency boundaries that record domain events

pub mod portfolio_project_aggregate;

pub use portfolio_project_aggregate::PortfolioProjectAggregate;
