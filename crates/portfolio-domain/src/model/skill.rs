//! Skill - A technology or practice listed in the portfolio
//!
//! Skill is an Entity. Levelling up or deactivating a skill keeps its identity.

use chrono::{DateTime, Utc};

use super::ids::SkillId;
use crate::error::{FieldName, ValidationError};

/// Broad grouping used to organise skills
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SkillCategory {
    ProgrammingLanguage,
    Framework,
    Database,
    Cloud,
    DevOps,
    Frontend,
    Backend,
    Other,
}

impl SkillCategory {
    pub fn display_name(&self) -> &'static str {
        match self {
            SkillCategory::ProgrammingLanguage => "Programming Language",
            SkillCategory::Framework => "Framework",
            SkillCategory::Database => "Database",
            SkillCategory::Cloud => "Cloud",
            SkillCategory::DevOps => "DevOps",
            SkillCategory::Frontend => "Frontend",
            SkillCategory::Backend => "Backend",
            SkillCategory::Other => "Other",
        }
    }
}

impl core::fmt::Display for SkillCategory {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Proficiency, ordered from `Beginner` to `Expert`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SkillLevel {
    Beginner,
    Intermediate,
    Advanced,
    Expert,
}

impl core::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            SkillLevel::Beginner => "Beginner",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Expert => "Expert",
        };
        write!(f, "{}", name)
    }
}

/// Stored state of a skill, as handed back by a persistence mapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkillSnapshot {
    pub id: SkillId,
    pub name: String,
    pub category: SkillCategory,
    pub level: SkillLevel,
    pub years_of_experience: i32,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct Skill {
    id: SkillId,
    name: String,
    category: SkillCategory,
    level: SkillLevel,
    years_of_experience: i32,
    is_active: bool,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Skill {
    /// Create a new, active skill
    pub fn new(
        id: SkillId,
        name: impl Into<String>,
        category: SkillCategory,
        level: SkillLevel,
        years_of_experience: i32,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        validate_id(id)?;
        validate_name(&name)?;
        validate_years(years_of_experience)?;

        Ok(Self {
            id,
            name,
            category,
            level,
            years_of_experience,
            is_active: true,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    pub fn restore(snapshot: SkillSnapshot) -> Result<Self, ValidationError> {
        validate_id(snapshot.id)?;
        validate_name(&snapshot.name)?;
        validate_years(snapshot.years_of_experience)?;

        Ok(Self {
            id: snapshot.id,
            name: snapshot.name,
            category: snapshot.category,
            level: snapshot.level,
            years_of_experience: snapshot.years_of_experience,
            is_active: snapshot.is_active,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        })
    }

    pub fn snapshot(&self) -> SkillSnapshot {
        SkillSnapshot {
            id: self.id,
            name: self.name.clone(),
            category: self.category,
            level: self.level,
            years_of_experience: self.years_of_experience,
            is_active: self.is_active,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> SkillId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn category(&self) -> SkillCategory {
        self.category
    }

    pub fn level(&self) -> SkillLevel {
        self.level
    }

    pub fn years_of_experience(&self) -> i32 {
        self.years_of_experience
    }

    pub fn is_active(&self) -> bool {
        self.is_active
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

    pub fn update_level(&mut self, level: SkillLevel) {
        self.level = level;
        self.touch();
    }

    pub fn update_years_of_experience(&mut self, years: i32) -> Result<(), ValidationError> {
        validate_years(years)?;

        self.years_of_experience = years;
        self.touch();
        Ok(())
    }

    pub fn deactivate(&mut self) {
        self.is_active = false;
        self.touch();
    }

    pub fn activate(&mut self) {
        self.is_active = true;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl PartialEq for Skill {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Skill {}

fn validate_id(id: SkillId) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::empty_id(FieldName::SkillId));
    }
    Ok(())
}

fn validate_name(name: &str) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::field_required(FieldName::SkillName));
    }
    Ok(())
}

fn validate_years(years: i32) -> Result<(), ValidationError> {
    if years < 0 {
        return Err(ValidationError::negative(FieldName::YearsOfExperience));
    }
    Ok(())
}
