//! Showcase - A scripted run through the portfolio use cases
//!
//! Builds a small portfolio through the domain API, publishing events after
//! each step the way a real application service would, then computes the
//! portfolio statistics.

use anyhow::Context;
use chrono::NaiveDate;
use portfolio_domain::{
    Experience, ExperienceId, PortfolioProject, PortfolioProjectAggregate, PortfolioService,
    ProjectId, ProjectName, ProjectType, Skill, SkillCategory, SkillId, SkillLevel, Url,
};
use shared::ValidationLimits;
use tracing::{info, warn};

use crate::dispatcher::{dispatch, EventPublisher};

/// Statistics produced at the end of a showcase run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PortfolioSummary {
    pub featured_projects: usize,
    pub active_skills: usize,
    pub total_years_of_experience: i32,
    pub events_published: usize,
}

/// Run the showcase with `project_name` as the headline project
///
/// `today` is used for open-ended experience.
pub fn run_showcase<P: EventPublisher + ?Sized>(
    project_name: &str,
    limits: &ValidationLimits,
    today: NaiveDate,
    publisher: &mut P,
) -> anyhow::Result<PortfolioSummary> {
    let service = PortfolioService::new();
    let mut events_published = 0;

    // ========================================
    // Projects
    // ========================================

    let name = ProjectName::create_with(project_name, limits)
        .with_context(|| format!("invalid project name '{project_name}'"))?;
    let repository = Url::create("https://github.com/portfolio/headline")?;

    let mut headline = PortfolioProjectAggregate::new(
        ProjectId::new(),
        name,
        "Flagship project of the portfolio",
        ProjectType::OpenSource,
        Some(repository),
        None,
    )?;
    events_published += dispatch(&mut headline, publisher)?;

    if service.can_feature_project(Some(&headline))? {
        headline.mark_as_featured();
    } else {
        warn!(project_id = %headline.id(), "headline project cannot be featured");
    }
    headline.update_live_url(Some(Url::create("https://portfolio.example.com")?));
    events_published += dispatch(&mut headline, publisher)?;

    let mut legacy = PortfolioProjectAggregate::new(
        ProjectId::new(),
        ProjectName::create_with("Legacy Dashboard", limits)?,
        "Retired internal tool",
        ProjectType::Professional,
        None,
        None,
    )?;
    legacy.mark_as_featured();
    if service.can_archive_project(Some(&legacy))? {
        legacy.archive();
    }
    events_published += dispatch(&mut legacy, publisher)?;

    let projects: Vec<PortfolioProject> = vec![headline.into_project(), legacy.into_project()];

    // ========================================
    // Skills
    // ========================================

    let mut skills = vec![
        Skill::new(
            SkillId::new(),
            "Rust",
            SkillCategory::ProgrammingLanguage,
            SkillLevel::Advanced,
            4,
        )?,
        Skill::new(
            SkillId::new(),
            "PostgreSQL",
            SkillCategory::Database,
            SkillLevel::Intermediate,
            3,
        )?,
        Skill::new(
            SkillId::new(),
            "jQuery",
            SkillCategory::Frontend,
            SkillLevel::Advanced,
            6,
        )?,
    ];
    if let Some(retired) = skills.iter_mut().find(|s| s.name() == "jQuery") {
        retired.deactivate();
    }

    // ========================================
    // Experience
    // ========================================

    let experiences = vec![
        Experience::new(
            ExperienceId::new(),
            "Initech",
            "Software Engineer",
            "Billing services",
            date(2016, 2, 1)?,
            Some(date(2019, 8, 31)?),
        )?,
        Experience::new(
            ExperienceId::new(),
            "Globex",
            "Senior Engineer",
            "Platform team",
            date(2019, 9, 1)?,
            None,
        )?,
    ];

    let summary = PortfolioSummary {
        featured_projects: service.count_featured_projects(Some(projects.as_slice()))?,
        active_skills: service.count_active_skills(Some(skills.as_slice()))?,
        total_years_of_experience: service
            .calculate_total_years_of_experience_at(Some(experiences.as_slice()), today)?,
        events_published,
    };

    info!(
        featured_projects = summary.featured_projects,
        active_skills = summary.active_skills,
        total_years = summary.total_years_of_experience,
        events = summary.events_published,
        "showcase complete"
    );

    Ok(summary)
}

fn date(year: i32, month: u32, day: u32) -> anyhow::Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, day)
        .with_context(|| format!("invalid date {year}-{month}-{day}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatcher::RecordingPublisher;
    use portfolio_domain::PortfolioEvent;
    use shared::PortfolioConfig;
    use std::io::Write;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 9, 15).unwrap()
    }

    #[test]
    fn test_showcase_summary() {
        let mut publisher = RecordingPublisher::new();
        let summary = run_showcase(
            "Portfolio Engine",
            &ValidationLimits::default(),
            today(),
            &mut publisher,
        )
        .unwrap();

        // Initech: 2016-02..2019-08 = 42 months, Globex: 2019-09..2024-09 = 60 months
        assert_eq!(
            summary,
            PortfolioSummary {
                featured_projects: 1,
                active_skills: 2,
                total_years_of_experience: 8,
                events_published: 5,
            }
        );
    }

    #[test]
    fn test_showcase_publishes_every_event() {
        let mut publisher = RecordingPublisher::new();
        run_showcase(
            "Portfolio Engine",
            &ValidationLimits::default(),
            today(),
            &mut publisher,
        )
        .unwrap();

        let events = publisher.events();
        assert_eq!(events.len(), 5);
        assert!(matches!(
            &events[0],
            PortfolioEvent::ProjectCreated { name, repository_url: Some(_), .. } if name == "Portfolio Engine"
        ));
        assert!(matches!(events[1], PortfolioEvent::ProjectFeatured { .. }));
        assert!(matches!(events[4], PortfolioEvent::ProjectArchived { .. }));
    }

    #[test]
    fn test_showcase_rejects_name_outside_limits() {
        let limits = ValidationLimits {
            project_name_min_length: 3,
            project_name_max_length: 10,
        };
        let mut publisher = RecordingPublisher::new();

        let err = run_showcase("A name that is far too long", &limits, today(), &mut publisher)
            .unwrap_err();
        assert!(err.to_string().contains("invalid project name"));
        assert!(publisher.events().is_empty());
    }

    #[test]
    fn test_showcase_with_limits_from_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{ "validation": {{ "projectNameMinLength": 3, "projectNameMaxLength": 20 }} }}"#
        )
        .unwrap();
        let config = PortfolioConfig::from_file(file.path()).unwrap();
        assert_eq!(config.validation.project_name_max_length, 20);

        let mut publisher = RecordingPublisher::new();
        let summary =
            run_showcase("Portfolio Engine", &config.validation, today(), &mut publisher).unwrap();
        assert_eq!(summary.events_published, 5);

        let mut publisher = RecordingPublisher::new();
        let err = run_showcase(
            "A headline name over twenty",
            &config.validation,
            today(),
            &mut publisher,
        )
        .unwrap_err();
        assert!(err.to_string().contains("invalid project name"));
        assert!(publisher.events().is_empty());
    }
}
