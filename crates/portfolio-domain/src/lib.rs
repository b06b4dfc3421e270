//! # Portfolio Domain Layer
//!
//! Business rules for a personal portfolio: projects, skills and work
//! experience.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Value objects & entities                      ││
//! │  │  aggregate/ - PortfolioProjectAggregate (mutation boundary) ││
//! │  │  event/     - PortfolioEvent (recorded, not published)      ││
//! │  │  service/   - PortfolioService (cross-entity rules)         ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Flow
//!
//! Callers build value objects (first validation gate), hand them to an
//! entity or aggregate (second gate), then drain the aggregate's events
//! for an outside dispatcher. Nothing here performs I/O.

pub mod aggregate;
pub mod error;
pub mod event;
pub mod model;
pub mod service;

// Re-export commonly used types
pub use error::{DomainError, DomainResult, FieldName, ValidationError};

pub use model::{
    email_address::EmailAddress,
    experience::{Experience, ExperienceSnapshot},
    ids::{ExperienceId, ProjectId, SkillId},
    portfolio_project::{PortfolioProject, ProjectSnapshot, ProjectStatus, ProjectType},
    project_name::ProjectName,
    skill::{Skill, SkillCategory, SkillLevel, SkillSnapshot},
    url::Url,
};

pub use aggregate::PortfolioProjectAggregate;
pub use event::PortfolioEvent;
pub use service::PortfolioService;
