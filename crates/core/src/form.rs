//! Per-session form state for the offboarding wizard.
//!
//! One [`FormState`] is created when the user enters the form and is
//! threaded explicitly through the steps that mutate it. Each step fills
//! in its own fields; [`FormState::submission`] derives the final payload
//! without mutating anything.

use crate::classification::DataClassification;
use crate::submission::{DriveOffboardSubmission, ProjectChanges};

/// User input accumulated across the wizard steps.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    pub has_started_form: bool,
    pub has_finished_form: bool,
    /// Answer to "is this the drive you expected?". `None` until asked.
    pub is_correct_drive: Option<bool>,
    /// Answer to "are the project details correct?". `None` until asked.
    pub are_project_details_correct: Option<bool>,
    /// Edits requested on the update-details step.
    pub project_changes: ProjectChanges,
    pub data_classification: Option<DataClassification>,
    /// Chosen retention period in years.
    pub retention_period: Option<u32>,
    /// Whether the period was entered manually rather than picked from
    /// the standard options.
    pub is_retention_period_custom: bool,
    /// Required free-text justification for a custom retention period.
    pub retention_justification: Option<String>,
}

impl FormState {
    /// Fresh state for a new wizard session.
    pub fn new() -> Self {
        Self::default()
    }

    /// Derive the submission payload from the current state.
    ///
    /// Returns `None` while either the data classification or the
    /// retention period is still unset; a partial submission is not
    /// representable. `drive_name` comes from the loaded drive snapshot,
    /// not from form input.
    pub fn submission(&self, drive_name: &str) -> Option<DriveOffboardSubmission> {
        let data_classification = self.data_classification?;
        let retention_period_years = self.retention_period?;

        let project_changes = if self.project_changes.is_empty() {
            None
        } else {
            Some(self.project_changes.clone())
        };

        Some(DriveOffboardSubmission {
            retention_period_years,
            retention_period_justification: self.retention_justification.clone(),
            data_classification,
            is_completed: true,
            drive_name: drive_name.to_string(),
            project_changes,
        })
    }
}
