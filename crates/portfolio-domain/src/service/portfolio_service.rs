//! Portfolio Service - Rules and statistics that span several entities
//!
//! This is pure domain logic: no I/O, no events, no state. Arguments are
//! `Option`s because they usually come straight from a repository lookup;
//! a missing value is reported as [`DomainError::MissingArgument`] rather
//! than treated as empty.

use chrono::{Datelike, NaiveDate, Utc};

use crate::aggregate::PortfolioProjectAggregate;
use crate::error::{DomainError, DomainResult};
use crate::model::experience::Experience;
use crate::model::portfolio_project::{PortfolioProject, ProjectStatus};
use crate::model::skill::Skill;

/// PortfolioService - Cross-entity calculations
///
/// Stateless; one instance can be shared freely.
#[derive(Debug, Clone, Copy)]
pub struct PortfolioService;

impl PortfolioService {
    pub fn new() -> Self {
        Self
    }

    /// Only active projects may be featured
    pub fn can_feature_project(
        &self,
        project: Option<&PortfolioProjectAggregate>,
    ) -> DomainResult<bool> {
        let project = project.ok_or(DomainError::missing_argument("project"))?;
        Ok(project.project().status() == ProjectStatus::Active)
    }

    /// Anything not yet archived may be archived
    pub fn can_archive_project(
        &self,
        project: Option<&PortfolioProjectAggregate>,
    ) -> DomainResult<bool> {
        let project = project.ok_or(DomainError::missing_argument("project"))?;
        Ok(project.project().status() != ProjectStatus::Archived)
    }

    /// Whole years of experience across all positions, counting open-ended
    /// positions up to today (UTC)
    pub fn calculate_total_years_of_experience(
        &self,
        experiences: Option<&[Experience]>,
    ) -> DomainResult<i32> {
        self.calculate_total_years_of_experience_at(experiences, Utc::now().date_naive())
    }

    /// Same as [`Self::calculate_total_years_of_experience`] with an explicit
    /// "today"
    ///
    /// Months are summed per position as
    /// `(end_year - start_year) * 12 + (end_month - start_month)`, ignoring
    /// the day of month, and the total is truncated to whole years. The sum
    /// saturates instead of overflowing, and so does the result.
    pub fn calculate_total_years_of_experience_at(
        &self,
        experiences: Option<&[Experience]>,
        today: NaiveDate,
    ) -> DomainResult<i32> {
        let experiences = experiences.ok_or(DomainError::missing_argument("experiences"))?;

        let total_months = experiences
            .iter()
            .map(|experience| {
                months_between(
                    experience.start_date(),
                    experience.end_date().unwrap_or(today),
                )
            })
            .fold(0i64, i64::saturating_add);

        Ok(i32::try_from(total_months / 12).unwrap_or(i32::MAX))
    }

    pub fn count_active_skills(&self, skills: Option<&[Skill]>) -> DomainResult<usize> {
        let skills = skills.ok_or(DomainError::missing_argument("skills"))?;
        Ok(skills.iter().filter(|s| s.is_active()).count())
    }

    /// Featured projects that are still active; archived ones don't count
    pub fn count_featured_projects(
        &self,
        projects: Option<&[PortfolioProject]>,
    ) -> DomainResult<usize> {
        let projects = projects.ok_or(DomainError::missing_argument("projects"))?;
        Ok(projects
            .iter()
            .filter(|p| p.is_featured() && p.status() == ProjectStatus::Active)
            .count())
    }
}

fn months_between(start: NaiveDate, end: NaiveDate) -> i64 {
    let years = i64::from(end.year()) - i64::from(start.year());
    let months = i64::from(end.month()) - i64::from(start.month());
    years * 12 + months
}

impl Default for PortfolioService {
    fn default() -> Self {
        Self::new()
    }
}
