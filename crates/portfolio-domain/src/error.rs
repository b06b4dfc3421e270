//! Domain errors
//!
//! Every invariant violation surfaces as a [`ValidationError`] naming the
//! offending field, so callers can match on the kind instead of parsing text.

use thiserror::Error;

/// Fields that validation errors can refer to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldName {
    ProjectId,
    SkillId,
    ExperienceId,
    ProjectName,
    SkillName,
    Company,
    Position,
    Description,
    RepositoryUrl,
    LiveUrl,
    EmailAddress,
    Url,
    YearsOfExperience,
}

impl FieldName {
    /// Human-readable label used in error messages
    pub fn label(&self) -> &'static str {
        match self {
            FieldName::ProjectId => "Project ID",
            FieldName::SkillId => "Skill ID",
            FieldName::ExperienceId => "Experience ID",
            FieldName::ProjectName => "Project name",
            FieldName::SkillName => "Skill name",
            FieldName::Company => "Company name",
            FieldName::Position => "Position",
            FieldName::Description => "Description",
            FieldName::RepositoryUrl => "Repository URL",
            FieldName::LiveUrl => "Live URL",
            FieldName::EmailAddress => "Email address",
            FieldName::Url => "URL",
            FieldName::YearsOfExperience => "Years of experience",
        }
    }
}

impl core::fmt::Display for FieldName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// An invariant violation on a single field
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("{field} cannot be null or empty")]
    Required { field: FieldName },

    #[error("{field} cannot be empty")]
    EmptyId { field: FieldName },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: FieldName, min: usize },

    #[error("{field} cannot exceed {max} characters")]
    TooLong { field: FieldName, max: usize },

    #[error("Invalid {field} format")]
    InvalidFormat { field: FieldName },

    #[error("{field} cannot be negative")]
    Negative { field: FieldName },

    #[error("End date cannot be before start date")]
    EndDateBeforeStartDate,
}

impl ValidationError {
    pub fn field_required(field: FieldName) -> Self {
        Self::Required { field }
    }

    pub fn empty_id(field: FieldName) -> Self {
        Self::EmptyId { field }
    }

    pub fn field_too_short(field: FieldName, min: usize) -> Self {
        Self::TooShort { field, min }
    }

    pub fn field_too_long(field: FieldName, max: usize) -> Self {
        Self::TooLong { field, max }
    }

    pub fn invalid_format(field: FieldName) -> Self {
        Self::InvalidFormat { field }
    }

    pub fn negative(field: FieldName) -> Self {
        Self::Negative { field }
    }

    pub fn end_date_before_start_date() -> Self {
        Self::EndDateBeforeStartDate
    }

    /// The field this error refers to, if it names one
    pub fn field(&self) -> Option<FieldName> {
        match self {
            ValidationError::Required { field }
            | ValidationError::EmptyId { field }
            | ValidationError::TooShort { field, .. }
            | ValidationError::TooLong { field, .. }
            | ValidationError::InvalidFormat { field }
            | ValidationError::Negative { field } => Some(*field),
            ValidationError::EndDateBeforeStartDate => None,
        }
    }
}

/// Errors raised by aggregates and domain services
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Required argument '{argument}' was not provided")]
    MissingArgument { argument: &'static str },
}

impl DomainError {
    pub fn missing_argument(argument: &'static str) -> Self {
        Self::MissingArgument { argument }
    }
}

pub type DomainResult<T> = Result<T, DomainError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages_name_the_field() {
        let err = ValidationError::field_required(FieldName::ProjectName);
        assert_eq!(err.to_string(), "Project name cannot be null or empty");

        let err = ValidationError::field_too_long(FieldName::ProjectName, 100);
        assert_eq!(err.to_string(), "Project name cannot exceed 100 characters");

        let err = ValidationError::invalid_format(FieldName::Url);
        assert_eq!(err.to_string(), "Invalid URL format");

        let err = ValidationError::empty_id(FieldName::SkillId);
        assert_eq!(err.to_string(), "Skill ID cannot be empty");
    }

    #[test]
    fn test_field_accessor() {
        assert_eq!(
            ValidationError::negative(FieldName::YearsOfExperience).field(),
            Some(FieldName::YearsOfExperience)
        );
        assert_eq!(ValidationError::end_date_before_start_date().field(), None);
    }

    #[test]
    fn test_domain_error_wraps_validation() {
        let err: DomainError = ValidationError::field_too_short(FieldName::ProjectName, 3).into();
        assert_eq!(err.to_string(), "Project name must be at least 3 characters");
        assert!(matches!(
            err,
            DomainError::Validation(ValidationError::TooShort { min: 3, .. })
        ));

        let missing = DomainError::missing_argument("project");
        assert!(missing.to_string().contains("project"));
    }
}
