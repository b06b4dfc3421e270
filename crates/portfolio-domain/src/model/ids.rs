//! Entity identifiers
//!
//! Each entity gets its own UUID newtype so a `SkillId` can never be passed
//! where a `ProjectId` is expected.

use uuid::Uuid;

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a fresh random identifier
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// The empty identifier, rejected by every constructor
            pub fn nil() -> Self {
                Self(Uuid::nil())
            }

            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }

            pub fn as_uuid(&self) -> Uuid {
                self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl core::fmt::Display for $name {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

entity_id!(
    /// Unique identifier for a PortfolioProject
    ProjectId
);

entity_id!(
    /// Unique identifier for a Skill
    SkillId
);

entity_id!(
    /// Unique identifier for an Experience
    ExperienceId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_ids_are_unique() {
        let a = ProjectId::new();
        let b = ProjectId::new();

        assert_ne!(a, b);
        assert!(!a.is_nil());
    }

    #[test]
    fn test_nil_id() {
        assert!(SkillId::nil().is_nil());
        assert_eq!(ExperienceId::from_uuid(Uuid::nil()), ExperienceId::nil());
    }

    #[test]
    fn test_display_matches_uuid() {
        let raw = Uuid::new_v4();
        assert_eq!(ProjectId::from(raw).to_string(), raw.to_string());
    }
}
