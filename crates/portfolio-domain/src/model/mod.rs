//! Domain Models - The vocabulary of the portfolio
//!
//! Value objects (`ProjectName`, `Url`, `EmailAddress`) validate on creation
//! and never change. Entities (`PortfolioProject`, `Skill`, `Experience`)
//! carry an identity and change only through validating methods.

pub mod email_address;
pub mod experience;
pub mod ids;
pub mod portfolio_project;
pub mod project_name;
pub mod skill;
pub mod url;
