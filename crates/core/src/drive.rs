//! Wire model for a research drive usage snapshot.

use serde::{Deserialize, Serialize};

use crate::types::{DbId, Timestamp};

/// Usage snapshot for one provisioned research drive.
///
/// `free_gb` and `percentage_used` are computed server-side; the client
/// reports them as received and never derives them from the other fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchDriveService {
    pub name: String,
    pub allocated_gb: f64,
    pub used_gb: f64,
    pub free_gb: f64,
    pub percentage_used: f64,
    pub date: Timestamp,
    pub first_day: Timestamp,
    pub last_day: Option<Timestamp>,
    #[serde(default)]
    pub id: Option<DbId>,
}
