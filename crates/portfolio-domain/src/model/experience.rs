//! Experience - A position held at a company
//!
//! Experience is an Entity. An experience with no end date is the current
//! position; `is_current` is always derived from the end date.

use chrono::{DateTime, NaiveDate, Utc};

use super::ids::ExperienceId;
use crate::error::{FieldName, ValidationError};

/// Stored state of an experience, as handed back by a persistence mapper
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExperienceSnapshot {
    pub id: ExperienceId,
    pub company: String,
    pub position: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct Experience {
    id: ExperienceId,
    company: String,
    position: String,
    description: String,
    start_date: NaiveDate,
    end_date: Option<NaiveDate>,
    created_at: DateTime<Utc>,
    updated_at: Option<DateTime<Utc>>,
}

impl Experience {
    /// Create a new experience; `end_date = None` makes it the current one
    pub fn new(
        id: ExperienceId,
        company: impl Into<String>,
        position: impl Into<String>,
        description: impl Into<String>,
        start_date: NaiveDate,
        end_date: Option<NaiveDate>,
    ) -> Result<Self, ValidationError> {
        let company = company.into();
        let position = position.into();
        validate_id(id)?;
        validate_required(&company, FieldName::Company)?;
        validate_required(&position, FieldName::Position)?;
        validate_dates(start_date, end_date)?;

        Ok(Self {
            id,
            company,
            position,
            description: description.into(),
            start_date,
            end_date,
            created_at: Utc::now(),
            updated_at: None,
        })
    }

    pub fn restore(snapshot: ExperienceSnapshot) -> Result<Self, ValidationError> {
        validate_id(snapshot.id)?;
        validate_required(&snapshot.company, FieldName::Company)?;
        validate_required(&snapshot.position, FieldName::Position)?;
        validate_dates(snapshot.start_date, snapshot.end_date)?;

        Ok(Self {
            id: snapshot.id,
            company: snapshot.company,
            position: snapshot.position,
            description: snapshot.description,
            start_date: snapshot.start_date,
            end_date: snapshot.end_date,
            created_at: snapshot.created_at,
            updated_at: snapshot.updated_at,
        })
    }

    pub fn snapshot(&self) -> ExperienceSnapshot {
        ExperienceSnapshot {
            id: self.id,
            company: self.company.clone(),
            position: self.position.clone(),
            description: self.description.clone(),
            start_date: self.start_date,
            end_date: self.end_date,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> ExperienceId {
        self.id
    }

    pub fn company(&self) -> &str {
        &self.company
    }

    pub fn position(&self) -> &str {
        &self.position
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn start_date(&self) -> NaiveDate {
        self.start_date
    }

    pub fn end_date(&self) -> Option<NaiveDate> {
        self.end_date
    }

    pub fn is_current(&self) -> bool {
        self.end_date.is_none()
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> Option<DateTime<Utc>> {
        self.updated_at
    }

    // ========== Mutations ==========

    pub fn update_company(&mut self, company: impl Into<String>) -> Result<(), ValidationError> {
        let company = company.into();
        validate_required(&company, FieldName::Company)?;

        self.company = company;
        self.touch();
        Ok(())
    }

    pub fn update_position(&mut self, position: impl Into<String>) -> Result<(), ValidationError> {
        let position = position.into();
        validate_required(&position, FieldName::Position)?;

        self.position = position;
        self.touch();
        Ok(())
    }

    pub fn update_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
        self.touch();
    }

    // ========== State Transitions ==========

    /// Close the position on `end_date`
    pub fn end_experience(&mut self, end_date: NaiveDate) -> Result<(), ValidationError> {
        validate_dates(self.start_date, Some(end_date))?;

        self.end_date = Some(end_date);
        self.touch();
        Ok(())
    }

    /// Reopen the position, dropping any end date
    pub fn mark_as_current(&mut self) {
        self.end_date = None;
        self.touch();
    }

    fn touch(&mut self) {
        self.updated_at = Some(Utc::now());
    }
}

impl PartialEq for Experience {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Experience {}

fn validate_id(id: ExperienceId) -> Result<(), ValidationError> {
    if id.is_nil() {
        return Err(ValidationError::empty_id(FieldName::ExperienceId));
    }
    Ok(())
}

fn validate_required(value: &str, field: FieldName) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::field_required(field));
    }
    Ok(())
}

fn validate_dates(start: NaiveDate, end: Option<NaiveDate>) -> Result<(), ValidationError> {
    match end {
        Some(end) if end < start => Err(ValidationError::end_date_before_start_date()),
        _ => Ok(()),
    }
}
