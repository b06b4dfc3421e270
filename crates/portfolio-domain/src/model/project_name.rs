//! ProjectName - The validated display name of a portfolio project
//!
//! ProjectName is a Value Object - two names with the same text are equal.
//! The only way to obtain one is through [`ProjectName::create`].

use shared::ValidationLimits;

use crate::error::{FieldName, ValidationError};

/// A project name whose length lies within the configured bounds
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ProjectName(String);

impl ProjectName {
    /// Validate `value` against the default bounds
    pub fn create(value: impl Into<String>) -> Result<Self, ValidationError> {
        Self::create_with(value, &ValidationLimits::default())
    }

    /// Validate `value` against explicit bounds
    ///
    /// Length is counted in characters, not bytes.
    pub fn create_with(
        value: impl Into<String>,
        limits: &ValidationLimits,
    ) -> Result<Self, ValidationError> {
        let value = value.into();

        if value.trim().is_empty() {
            return Err(ValidationError::field_required(FieldName::ProjectName));
        }

        let length = value.chars().count();
        if length < limits.project_name_min_length {
            return Err(ValidationError::field_too_short(
                FieldName::ProjectName,
                limits.project_name_min_length,
            ));
        }
        if length > limits.project_name_max_length {
            return Err(ValidationError::field_too_long(
                FieldName::ProjectName,
                limits.project_name_max_length,
            ));
        }

        Ok(Self(value))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl core::fmt::Display for ProjectName {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ProjectName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for ProjectName {
    type Error = ValidationError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

impl TryFrom<String> for ProjectName {
    type Error = ValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::create(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::PROJECT_NAME_MAX_LENGTH;
    use std::collections::HashSet;

    #[test]
    fn test_create_valid_name() {
        let name = ProjectName::create("My Project").unwrap();
        assert_eq!(name.as_str(), "My Project");
    }

    #[test]
    fn test_create_at_bounds() {
        assert_eq!(ProjectName::create("ABC").unwrap().as_str(), "ABC");

        let longest = "A".repeat(PROJECT_NAME_MAX_LENGTH);
        assert_eq!(ProjectName::create(longest.clone()).unwrap().as_str(), longest);
    }

    #[test]
    fn test_rejects_blank() {
        for raw in ["", "   ", "\t\n"] {
            let err = ProjectName::create(raw).unwrap_err();
            assert_eq!(err, ValidationError::field_required(FieldName::ProjectName));
            assert!(err.to_string().contains("Project name"));
        }
    }

    #[test]
    fn test_rejects_out_of_range_length() {
        let err = ProjectName::create("AB").unwrap_err();
        assert!(matches!(err, ValidationError::TooShort { min: 3, .. }));
        assert!(err.to_string().contains("Project name"));

        let err = ProjectName::create("A".repeat(PROJECT_NAME_MAX_LENGTH + 1)).unwrap_err();
        assert!(matches!(err, ValidationError::TooLong { .. }));
        assert!(err.to_string().contains("Project name"));
    }

    #[test]
    fn test_length_counts_characters() {
        // Three characters, nine bytes
        assert!(ProjectName::create("日本語").is_ok());
    }

    #[test]
    fn test_create_with_custom_limits() {
        let limits = ValidationLimits {
            project_name_min_length: 5,
            project_name_max_length: 8,
        };

        assert!(ProjectName::create_with("Tool", &limits).is_err());
        assert!(ProjectName::create_with("Toolbox", &limits).is_ok());
        assert!(matches!(
            ProjectName::create_with("Toolboxes", &limits),
            Err(ValidationError::TooLong { max: 8, .. })
        ));
    }

    #[test]
    fn test_value_object_equality() {
        let a = ProjectName::create("Test Project").unwrap();
        let b = ProjectName::create("Test Project").unwrap();
        let c = ProjectName::create("Other Project").unwrap();

        assert_eq!(a, b);
        assert_ne!(a, c);

        let set: HashSet<_> = [a, b, c].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_display_returns_value() {
        let name = ProjectName::try_from("Test Project").unwrap();
        assert_eq!(name.to_string(), "Test Project");
    }
}
