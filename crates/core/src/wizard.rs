//! Wizard step definitions and navigation rules.
//!
//! The offboarding flow walks seven pages in a fixed order. Steps are
//! numbered 1-based; navigation moves exactly one step at a time, and a
//! step can only be advanced once the input it collects is present in
//! the [`FormState`].

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::form::FormState;

/// The seven pages of the offboarding wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    /// Entry page with the invite link context.
    Landing,
    /// Drive and project confirmation summary.
    Summary,
    /// Optional corrections to project title/description.
    UpdateDetails,
    /// Data classification selection.
    DataClassification,
    /// Retention period selection.
    RetentionPeriod,
    /// Final review of the derived submission.
    Confirm,
    /// Completion page.
    Finish,
}

/// Total number of steps in the wizard.
pub const TOTAL_STEPS: u8 = 7;

/// Minimum step number (1-based).
pub const MIN_STEP: u8 = 1;

/// Maximum step number (1-based).
pub const MAX_STEP: u8 = 7;

impl WizardStep {
    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Result<Self, CoreError> {
        match n {
            1 => Ok(Self::Landing),
            2 => Ok(Self::Summary),
            3 => Ok(Self::UpdateDetails),
            4 => Ok(Self::DataClassification),
            5 => Ok(Self::RetentionPeriod),
            6 => Ok(Self::Confirm),
            7 => Ok(Self::Finish),
            _ => Err(CoreError::Validation(format!(
                "Invalid step number {n}. Must be between {MIN_STEP} and {MAX_STEP}"
            ))),
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Landing => 1,
            Self::Summary => 2,
            Self::UpdateDetails => 3,
            Self::DataClassification => 4,
            Self::RetentionPeriod => 5,
            Self::Confirm => 6,
            Self::Finish => 7,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Landing => "Landing",
            Self::Summary => "Summary",
            Self::UpdateDetails => "Update Details",
            Self::DataClassification => "Data Classification",
            Self::RetentionPeriod => "Retention Period",
            Self::Confirm => "Confirm",
            Self::Finish => "Finish",
        }
    }
}

/// Validate a step transition.
///
/// A transition is valid if the next step is exactly one step forward or
/// one step backward from the current step.
pub fn validate_step_transition(current: u8, next: u8) -> Result<(), CoreError> {
    if !(MIN_STEP..=MAX_STEP).contains(&current) {
        return Err(CoreError::Validation(format!(
            "Current step {current} is out of range ({MIN_STEP}..{MAX_STEP})"
        )));
    }
    if !(MIN_STEP..=MAX_STEP).contains(&next) {
        return Err(CoreError::Validation(format!(
            "Next step {next} is out of range ({MIN_STEP}..{MAX_STEP})"
        )));
    }

    let diff = (next as i16) - (current as i16);
    if diff != 1 && diff != -1 {
        return Err(CoreError::Validation(format!(
            "Cannot transition from step {current} to step {next}. \
             Must advance or go back exactly one step."
        )));
    }

    Ok(())
}

/// Whether the given step has collected the input it needs to advance.
pub fn can_advance(step: WizardStep, form: &FormState) -> bool {
    match step {
        // Entering the form needs no prior input.
        WizardStep::Landing => true,
        WizardStep::Summary => form.is_correct_drive == Some(true),
        WizardStep::UpdateDetails => {
            form.are_project_details_correct == Some(true) || !form.project_changes.is_empty()
        }
        WizardStep::DataClassification => form.data_classification.is_some(),
        WizardStep::RetentionPeriod => {
            let chosen = form.retention_period.is_some();
            if form.is_retention_period_custom {
                chosen
                    && form
                        .retention_justification
                        .as_deref()
                        .is_some_and(|j| !j.trim().is_empty())
            } else {
                chosen
            }
        }
        WizardStep::Confirm => {
            form.data_classification.is_some() && form.retention_period.is_some()
        }
        // Terminal step.
        WizardStep::Finish => false,
    }
}
