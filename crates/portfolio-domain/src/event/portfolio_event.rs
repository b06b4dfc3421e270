//! Portfolio Events - Facts recorded by the project aggregate
//!
//! The aggregate only records these. Publishing them is the job of an
//! outside dispatcher, which drains the aggregate after a use case commits.

use chrono::{DateTime, Utc};

use crate::model::ids::ProjectId;

/// Something that happened to a portfolio project
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortfolioEvent {
    /// A new project was created
    ProjectCreated {
        project_id: ProjectId,
        name: String,
        repository_url: Option<String>,
        occurred_at: DateTime<Utc>,
    },
    /// A project was marked as featured
    ProjectFeatured {
        project_id: ProjectId,
        name: String,
        occurred_at: DateTime<Utc>,
    },
    /// A project was archived
    ProjectArchived {
        project_id: ProjectId,
        name: String,
        occurred_at: DateTime<Utc>,
    },
}

impl PortfolioEvent {
    pub fn project_created(
        project_id: ProjectId,
        name: impl Into<String>,
        repository_url: Option<String>,
    ) -> Self {
        PortfolioEvent::ProjectCreated {
            project_id,
            name: name.into(),
            repository_url,
            occurred_at: Utc::now(),
        }
    }

    pub fn project_featured(project_id: ProjectId, name: impl Into<String>) -> Self {
        PortfolioEvent::ProjectFeatured {
            project_id,
            name: name.into(),
            occurred_at: Utc::now(),
        }
    }

    pub fn project_archived(project_id: ProjectId, name: impl Into<String>) -> Self {
        PortfolioEvent::ProjectArchived {
            project_id,
            name: name.into(),
            occurred_at: Utc::now(),
        }
    }

    /// Stable name for routing and logs
    pub fn event_type(&self) -> &'static str {
        match self {
            PortfolioEvent::ProjectCreated { .. } => "project.created",
            PortfolioEvent::ProjectFeatured { .. } => "project.featured",
            PortfolioEvent::ProjectArchived { .. } => "project.archived",
        }
    }

    pub fn project_id(&self) -> ProjectId {
        match self {
            PortfolioEvent::ProjectCreated { project_id, .. }
            | PortfolioEvent::ProjectFeatured { project_id, .. }
            | PortfolioEvent::ProjectArchived { project_id, .. } => *project_id,
        }
    }

    /// Project name at the time the event occurred
    pub fn project_name(&self) -> &str {
        match self {
            PortfolioEvent::ProjectCreated { name, .. }
            | PortfolioEvent::ProjectFeatured { name, .. }
            | PortfolioEvent::ProjectArchived { name, .. } => name,
        }
    }

    pub fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            PortfolioEvent::ProjectCreated { occurred_at, .. }
            | PortfolioEvent::ProjectFeatured { occurred_at, .. }
            | PortfolioEvent::ProjectArchived { occurred_at, .. } => *occurred_at,
        }
    }
}

impl core::fmt::Display for PortfolioEvent {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(
            f,
            "{} project={} name=\"{}\"",
            self.event_type(),
            self.project_id(),
            self.project_name()
        )?;
        if let PortfolioEvent::ProjectCreated {
            repository_url: Some(url),
            ..
        } = self
        {
            write!(f, " repository={}", url)?;
        }
        Ok(())
    }
}
