//! PortfolioProjectAggregate - The mutation boundary for a project
//!
//! The aggregate owns one [`PortfolioProject`] together with the validated
//! value objects it was built from. Every state change goes through here,
//! and the interesting ones are recorded as [`PortfolioEvent`]s.
//!
//! ```text
//! use case ──▶ aggregate.archive() ──▶ project.archive()
//!                     │
//!                     └──▶ events.push(ProjectArchived)
//!
//! dispatcher ──▶ aggregate.domain_events() ──▶ publish ──▶ clear_domain_events()
//! ```
//!
//! An aggregate lives for one use-case invocation. It is not the unit of
//! storage; persistence works with the owned project.

use shared::ValidationLimits;
use tracing::debug;

use crate::error::{DomainResult, FieldName, ValidationError};
use crate::event::PortfolioEvent;
use crate::model::ids::ProjectId;
use crate::model::portfolio_project::{PortfolioProject, ProjectType};
use crate::model::project_name::ProjectName;
use crate::model::url::Url;

#[derive(Debug, Clone)]
pub struct PortfolioProjectAggregate {
    project: PortfolioProject,
    name: ProjectName,
    repository_url: Option<Url>,
    live_url: Option<Url>,
    /// Pending events, in the order they were recorded
    events: Vec<PortfolioEvent>,
}

impl PortfolioProjectAggregate {
    /// Create a new project and record `ProjectCreated`
    pub fn new(
        id: ProjectId,
        name: ProjectName,
        description: impl Into<String>,
        project_type: ProjectType,
        repository_url: Option<Url>,
        live_url: Option<Url>,
    ) -> DomainResult<Self> {
        if id.is_nil() {
            return Err(ValidationError::empty_id(FieldName::ProjectId).into());
        }

        let project = PortfolioProject::new(
            id,
            name.as_str(),
            description,
            project_type,
            repository_url.as_ref().map(|u| u.as_str().to_string()),
            live_url.as_ref().map(|u| u.as_str().to_string()),
        )?;

        let mut aggregate = Self {
            project,
            name,
            repository_url,
            live_url,
            events: Vec::new(),
        };

        let created = PortfolioEvent::project_created(
            id,
            aggregate.name.as_str(),
            aggregate.repository_url.as_ref().map(|u| u.as_str().to_string()),
        );
        aggregate.record(created);

        Ok(aggregate)
    }

    /// Wrap a project loaded from storage
    ///
    /// The stored name and URLs are re-validated as value objects. No event
    /// is recorded: nothing happened to the project.
    pub fn from_project(
        project: PortfolioProject,
        limits: &ValidationLimits,
    ) -> DomainResult<Self> {
        let name = ProjectName::create_with(project.name(), limits)?;
        let repository_url = project.repository_url().map(Url::create).transpose()?;
        let live_url = project.live_url().map(Url::create).transpose()?;

        Ok(Self {
            project,
            name,
            repository_url,
            live_url,
            events: Vec::new(),
        })
    }

    // ========== Getters ==========

    pub fn id(&self) -> ProjectId {
        self.project.id()
    }

    pub fn project(&self) -> &PortfolioProject {
        &self.project
    }

    /// Give up the aggregate, keeping only the project for persistence
    pub fn into_project(self) -> PortfolioProject {
        self.project
    }

    pub fn name(&self) -> &ProjectName {
        &self.name
    }

    pub fn repository_url(&self) -> Option<&Url> {
        self.repository_url.as_ref()
    }

    pub fn live_url(&self) -> Option<&Url> {
        self.live_url.as_ref()
    }

    /// Events recorded since the last clear
    pub fn domain_events(&self) -> &[PortfolioEvent] {
        &self.events
    }

    // ========== Mutations ==========

    pub fn update_name(&mut self, name: ProjectName) -> DomainResult<()> {
        self.project.update_name(name.as_str())?;
        self.name = name;
        Ok(())
    }

    pub fn update_description(&mut self, description: impl Into<String>) {
        self.project.update_description(description);
    }

    /// Set or clear (`None`) the repository URL
    pub fn update_repository_url(&mut self, url: Option<Url>) {
        self.project
            .update_repository_url(url.as_ref().map(|u| u.as_str().to_string()));
        self.repository_url = url;
    }

    /// Set or clear (`None`) the live URL
    pub fn update_live_url(&mut self, url: Option<Url>) {
        self.project
            .update_live_url(url.as_ref().map(|u| u.as_str().to_string()));
        self.live_url = url;
    }

    /// Feature the project and record `ProjectFeatured`
    ///
    /// Records an event on every call, even if already featured.
    pub fn mark_as_featured(&mut self) {
        self.project.mark_as_featured();

        let featured = PortfolioEvent::project_featured(self.id(), self.name.as_str());
        self.record(featured);
    }

    /// Archive the project and record `ProjectArchived`
    ///
    /// Records an event on every call, even if already archived.
    pub fn archive(&mut self) {
        self.project.archive();

        let archived = PortfolioEvent::project_archived(self.id(), self.name.as_str());
        self.record(archived);
    }

    /// Drop all pending events (after they have been published)
    pub fn clear_domain_events(&mut self) {
        debug!(
            project_id = %self.id(),
            cleared = self.events.len(),
            "clearing domain events"
        );
        self.events.clear();
    }

    fn record(&mut self, event: PortfolioEvent) {
        debug!(
            project_id = %event.project_id(),
            event_type = event.event_type(),
            "recorded domain event"
        );
        self.events.push(event);
    }
}
