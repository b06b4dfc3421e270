//! Domain Events - Immutable facts about past state transitions

pub mod portfolio_event;

pub use portfolio_event::PortfolioEvent;
