//! PortfolioProject - A piece of work shown in the portfolio
//!
//! PortfolioProject is an Entity (has identity that persists through changes).
//! Renaming or archiving a project leaves it the "same" project.
//!
//! In production code paths it is mutated only through
//! [`PortfolioProjectAggregate`](crate::aggregate::PortfolioProjectAggregate).

use chrono::{DateTime, Utc};

use super::ids::ProjectId;
use crate::error::{FieldName, ValidationError};

/// What kind of work a project represents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProjectType {
    Professional,
    Personal,
    Demo,
    OpenSource,
    Portfolio,
}

impl ProjectType {
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Professional => "Professional",
            ProjectType::Personal => "Personal",
            ProjectType::Demo => "Demo",
            ProjectType::OpenSource => "Open Source",
            ProjectType::Portfolio => "Portfolio",
        }
    }

    pub fn all() -> &'static [ProjectType] {
        &[
            ProjectType::Professional,
            ProjectType::Personal,
            ProjectType::Demo,
            ProjectType::OpenSource,
            ProjectType::Portfolio,
        ]
    }
}

impl core::fmt::Display for ProjectType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Lifecycle status of a project
///
/// ```text
/// Active ──archive()──▶ Archived
///   ▲                      │
///   └─────activate()───────┘   (activate() also leaves InProgress)
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ProjectStatus {
    #[default]
    Active,
    Archived,
    InProgress,
}

impl core::fmt::Display for ProjectStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            ProjectStatus::Active => "Active",
            ProjectStatus::Archived => "Archived",
            ProjectStatus::InProgress => "InProgress",
        };
        write!(f, "{}", name)
    }
}

/// Stored state of a project, as handed back by a persistence mapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectSnapshot {
    pub id: ProjectId,
    pub name: String,
    pub description: String,
    pub repository_url: Option<String>,
    pub live_url: Option<String>,
    pub project_type: ProjectType,
    pub status: ProjectStatus,
    pub is_featured: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct PortfolioProject {
    id: ProjectId,
    name: String,
    description: String,
    repository_url: Option<String>,
    live_url: Option<String>,
    project_type: ProjectType,
    status: ProjectStatus,
    is_featured: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl PortfolioProject {
    /// Create a new, active, non-featured project
    pub fn new(
        id: ProjectId,
        name: impl Into<String>,
        description: impl Into<String>,
        project_type: ProjectType,
        repository_url: Option<String>,
        live_url: Option<String>,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_id(id)?;
        validate_name(&name)?;

        Ok(Self {
            id,
            name,
            description: description.into(),
            repository_url,
            live_url,
            project_type,
            status: ProjectStatus::Active,
            is_featured: false,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    /// Rebuild a project from stored state
    ///
    /// The same invariants as [`PortfolioProject::new`] are enforced.
    pub fn restore(snapshot: ProjectSnapshot) -> Result<Self, ValidationError> {
        validate_id(snapshot.id)?;
        validate_name(&snapshot.name)?;

        Ok(Self {
            id: snapshot.id,
            name: snapshot.name,
            description: snapshot.description,
            repository_url: snapshot.repository_url,
            live_url: snapshot.live_url,
            project_type: snapshot.project_type,
            status: snapshot.status,
            is_featured: snapshot.is_featured,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        })
    }

    /// Copy out the current state for persistence
    pub fn snapshot(&self) -> ProjectSnapshot {
        ProjectSnapshot {
            id: self.id,
            name: self.name.clone(),
            description: self.description.clone(),
            repository_url: self.repository_url.clone(),
            live_url: self.live_url.clone(),
            project_type: self.project_type,
            status: self.status,
            is_featured: self.is_featured,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn repository_url(&self) -> Option<&str> {
        self.repository_url.as_deref()
    }

    pub fn live_url(&self) -> Option<&str> {
        self.live_url.as_deref()
    }

    pub fn project_type(&self) -> ProjectType {
        self.project_type
    }

    pub fn status(&self) -> ProjectStatus {
        self.status
    }

    pub fn is_featured(&self) -> bool {
        self.is_featured
    }

    pub fn is_active(&self) -> bool {
        self.status == ProjectStatus::Active
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    // ========== Mutations ==========

    pub fn update_name(&mut self, name: impl Into<String>) -> Result<(), ValidationError> {
        let name = name.into();
        validate_name(&name)?;

        self.name = name;
        self.touch();
        Ok(())
    }

    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    /// Set or clear (`None`) the repository URL
    pub fn update_repository_url(&mut self, url: Option<String>) {
        self.repository_url = url;
        self.touch();
    }

    /// Set or clear (`None`) the live URL
    pub fn update_live_url(&mut self, url: Option<String>) {
        self.live_url = url;
        self.touch();
    }

    pub fn mark_as_featured(&mut self) {
        self.is_featured = true;
        self.touch();
    }

    pub fn unmark_as_featured(&mut self) {
        self.is_featured = false;
        self.touch();
    }

    // ========== State Transitions ==========

    /// Move to `Archived`. Archiving an archived project is a no-op apart
    /// from the timestamp.
    pub fn archive(&mut self) {
        self.status = ProjectStatus::Archived;
        self.touch();
    }

    /// Move to `Active` from any state
    pub fn activate(&mut self) {
        self.status = ProjectStatus::Active;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl PartialEq for PortfolioProject {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for PortfolioProject {}

fn validate_id(id: ProjectId) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::empty_id(FieldName::ProjectId));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::field_required(FieldName::ProjectName));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> PortfolioProject {
        PortfolioProject::new(
            ProjectId::new(),
            "Test Project",
            "Test Description",
            ProjectType::Personal,
            Some("https://github.com/test/repo".to_string()),
            Some("https://test.com".to_string()),
        )
        .unwrap()
    }

    #[test]
    fn test_project_creation() {
        let id = ProjectId::new();
        let project = PortfolioProject::new(
            id,
            "Test Project",
            "Test Description",
            ProjectType::Professional,
            Some("https://github.com/test/repo".to_string()),
            None,
        )
        .unwrap();

        assert_eq!(project.id(), id);
        assert_eq!(project.name(), "Test Project");
        assert_eq!(project.description(), "Test Description");
        assert_eq!(project.project_type(), ProjectType::Professional);
        assert_eq!(project.repository_url(), Some("https://github.com/test/repo"));
        assert_eq!(project.live_url(), None);
        assert_eq!(project.status(), ProjectStatus::Active);
        assert!(!project.is_featured());
        assert!(project.updated_at().is_none());
    }

    #[test]
    fn test_rejects_nil_id() {
        let result = PortfolioProject::new(
            ProjectId::nil(),
            "Test Project",
            "",
            ProjectType::Personal,
            None,
            None,
        );
        assert_eq!(
            result.unwrap_err(),
            ValidationError::empty_id(FieldName::ProjectId)
        );
    }

    #[test]
    fn test_rejects_blank_name() {
        let result =
            PortfolioProject::new(ProjectId::new(), "  ", "", ProjectType::Personal, None, None);
        assert_eq!(
            result.unwrap_err(),
            ValidationError::field_required(FieldName::ProjectName)
        );
    }

    #[test]
    fn test_update_name() {
        let mut project = sample_project();

        project.update_name("Renamed").unwrap();
        assert_eq!(project.name(), "Renamed");
        assert!(project.updated_at().is_some());
    }

    #[test]
    fn test_failed_update_name_leaves_state() {
        let mut project = sample_project();

        assert!(project.update_name("").is_err());
        assert_eq!(project.name(), "Test Project");
        assert!(project.updated_at().is_none());
    }

    #[test]
    fn test_clear_urls() {
        let mut project = sample_project();

        project.update_repository_url(None);
        project.update_live_url(None);

        assert_eq!(project.repository_url(), None);
        assert_eq!(project.live_url(), None);
        assert!(project.updated_at().is_some());
    }

    #[test]
    fn test_featured_flag_is_independent_of_status() {
        let mut project = sample_project();

        project.mark_as_featured();
        project.archive();
        assert!(project.is_featured());
        assert_eq!(project.status(), ProjectStatus::Archived);

        project.unmark_as_featured();
        assert!(!project.is_featured());
        assert_eq!(project.status(), ProjectStatus::Archived);
    }

    #[test]
    fn test_archive_is_idempotent() {
        let mut project = sample_project();

        project.archive();
        project.archive();
        assert_eq!(project.status(), ProjectStatus::Archived);

        project.activate();
        assert_eq!(project.status(), ProjectStatus::Active);
        assert!(project.is_active());
    }

    #[test]
    fn test_activate_from_in_progress() {
        let mut snapshot = sample_project().snapshot();
        snapshot.status = ProjectStatus::InProgress;
        let mut project = PortfolioProject::restore(snapshot).unwrap();

        project.activate();
        assert_eq!(project.status(), ProjectStatus::Active);
    }

    #[test]
    fn test_restore_preserves_state() {
        let mut original = sample_project();
        original.mark_as_featured();

        let restored = PortfolioProject::restore(original.snapshot()).unwrap();
        assert_eq!(restored.snapshot(), original.snapshot());
    }

    #[test]
    fn test_restore_enforces_invariants() {
        let mut snapshot = sample_project().snapshot();
        snapshot.name = String::new();
        assert!(PortfolioProject::restore(snapshot).is_err());
    }

    #[test]
    fn test_entity_equality() {
        let project = sample_project();
        let mut renamed = project.clone();
        renamed.update_name("Something else").unwrap();

        // Same ID = same entity (even if other fields differ)
        assert_eq!(project, renamed);
    }
}
