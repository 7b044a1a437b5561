//! Well-known role names from the project database.
//!
//! Role names arrive as free-form strings. The one name with semantic
//! weight in the offboarding flow is `"Project Owner"`; the comparison is
//! exact and case-sensitive, matching the upstream seed data.

/// The distinguished owning role.
pub const PROJECT_OWNER_ROLE: &str = "Project Owner";

/// A role name mapped onto the one distinction the wizard cares about.
///
/// Decided once at the model boundary ([`crate::project::Role::kind`])
/// instead of re-comparing strings at every use site.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleKind {
    /// The role name is exactly `"Project Owner"`.
    ProjectOwner,
    /// Any other role name.
    Other,
}

impl RoleKind {
    /// Classify a raw role name.
    pub fn from_name(name: &str) -> Self {
        if name == PROJECT_OWNER_ROLE {
            Self::ProjectOwner
        } else {
            Self::Other
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn owner_name_maps_to_project_owner() {
        assert_eq!(RoleKind::from_name("Project Owner"), RoleKind::ProjectOwner);
    }

    #[test]
    fn other_names_map_to_other() {
        assert_eq!(
            RoleKind::from_name("Project Team Member"),
            RoleKind::Other
        );
        assert_eq!(RoleKind::from_name("Supervisor"), RoleKind::Other);
        assert_eq!(RoleKind::from_name(""), RoleKind::Other);
    }

    #[test]
    fn comparison_is_case_sensitive() {
        assert_eq!(RoleKind::from_name("project owner"), RoleKind::Other);
        assert_eq!(RoleKind::from_name("PROJECT OWNER"), RoleKind::Other);
        assert_eq!(RoleKind::from_name("Project Owner "), RoleKind::Other);
    }
}
