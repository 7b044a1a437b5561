//! The offboarding submission payload and project change set.
//!
//! The submission POST body uses camelCase field names, unlike the GET
//! payloads, so both types carry serde renames.

use serde::{Deserialize, Serialize};

use crate::classification::DataClassification;
use crate::error::CoreError;

/// Minimum accepted retention period.
pub const MIN_RETENTION_YEARS: u32 = 1;

/// Requested edits to a project's details, collected during the wizard.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectChanges {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl ProjectChanges {
    /// True when no change has been requested.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.description.is_none()
    }
}

/// The completed offboarding request sent to the submission endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriveOffboardSubmission {
    pub retention_period_years: u32,
    #[serde(default)]
    pub retention_period_justification: Option<String>,
    pub data_classification: DataClassification,
    pub is_completed: bool,
    pub drive_name: String,
    #[serde(default)]
    pub project_changes: Option<ProjectChanges>,
}

impl DriveOffboardSubmission {
    /// Check the payload before submission.
    ///
    /// The retention period must be at least [`MIN_RETENTION_YEARS`], and
    /// a justification, when supplied, must not be blank.
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.retention_period_years < MIN_RETENTION_YEARS {
            return Err(CoreError::Validation(format!(
                "Retention period must be at least {MIN_RETENTION_YEARS} year(s), \
                 got {}",
                self.retention_period_years
            )));
        }
        if let Some(justification) = &self.retention_period_justification {
            if justification.trim().is_empty() {
                return Err(CoreError::Validation(
                    "Retention period justification must not be blank".to_string(),
                ));
            }
        }
        if self.drive_name.trim().is_empty() {
            return Err(CoreError::Validation(
                "Drive name must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn submission() -> DriveOffboardSubmission {
        DriveOffboardSubmission {
            retention_period_years: 6,
            retention_period_justification: None,
            data_classification: DataClassification::Internal,
            is_completed: true,
            drive_name: "reslig-202200001-Tītoki-metabolomics".to_string(),
            project_changes: None,
        }
    }

    #[test]
    fn serializes_with_camel_case_keys() {
        let value = serde_json::to_value(submission()).unwrap();
        assert_eq!(
            value,
            json!({
                "retentionPeriodYears": 6,
                "retentionPeriodJustification": null,
                "dataClassification": "Internal",
                "isCompleted": true,
                "driveName": "reslig-202200001-Tītoki-metabolomics",
                "projectChanges": null,
            })
        );
    }

    #[test]
    fn project_changes_serialize_nested() {
        let mut s = submission();
        s.project_changes = Some(ProjectChanges {
            title: Some("New title".to_string()),
            description: None,
        });
        let value = serde_json::to_value(s).unwrap();
        assert_eq!(value["projectChanges"]["title"], "New title");
        assert_eq!(value["projectChanges"]["description"], json!(null));
    }

    #[test]
    fn valid_submission_passes() {
        assert!(submission().validate().is_ok());
    }

    #[test]
    fn zero_retention_years_rejected() {
        let mut s = submission();
        s.retention_period_years = 0;
        assert!(s.validate().is_err());
    }

    #[test]
    fn blank_justification_rejected() {
        let mut s = submission();
        s.retention_period_justification = Some("   ".to_string());
        assert!(s.validate().is_err());
    }

    #[test]
    fn nonblank_justification_accepted() {
        let mut s = submission();
        s.retention_period_justification =
            Some("Funder requires 20 year retention".to_string());
        assert!(s.validate().is_ok());
    }

    #[test]
    fn empty_drive_name_rejected() {
        let mut s = submission();
        s.drive_name = String::new();
        assert!(s.validate().is_err());
    }

    #[test]
    fn empty_changes_detected() {
        assert!(ProjectChanges::default().is_empty());
        assert!(!ProjectChanges {
            title: None,
            description: Some("Updated".to_string()),
        }
        .is_empty());
    }
}
