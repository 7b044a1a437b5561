//! Wire models for projects and their members.
//!
//! Field names match the drive information API's JSON payloads, which use
//! snake_case throughout. Ids are optional on models that can exist before
//! persistence; [`ProjectWithDriveMember`] is always server-loaded and
//! carries a required id.

use serde::{Deserialize, Serialize};

use crate::drive::ResearchDriveService;
use crate::roles::RoleKind;
use crate::types::{DbId, Timestamp};

/// A person in the project database.
///
/// `username` is the stable identity key; `email` may be absent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Person {
    #[serde(default)]
    pub id: Option<DbId>,
    pub email: Option<String>,
    pub full_name: String,
    pub username: String,
}

/// A project role. Shared reference data, not owned by any member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Role {
    #[serde(default)]
    pub id: Option<DbId>,
    pub name: String,
}

impl Role {
    /// Classification of this role's name.
    pub fn kind(&self) -> RoleKind {
        RoleKind::from_name(&self.name)
    }
}

/// A person's association with a project, qualified by exactly one role.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Member {
    pub person: Person,
    pub role: Role,
}

impl Member {
    /// Whether this member holds the distinguished owning role.
    pub fn is_project_owner(&self) -> bool {
        self.role.kind() == RoleKind::ProjectOwner
    }
}

/// A project code (external funding/reference code).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    #[serde(default)]
    pub id: Option<DbId>,
    pub code: String,
}

/// Core project record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub division: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    #[serde(default)]
    pub id: Option<DbId>,
}

/// A project expanded with its drives and members, as returned by the
/// drive information endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectWithDriveMember {
    pub title: String,
    pub description: String,
    pub division: String,
    pub start_date: Timestamp,
    pub end_date: Timestamp,
    pub id: DbId,
    pub codes: Vec<Code>,
    pub research_drives: Vec<ResearchDriveService>,
    pub members: Vec<Member>,
}
