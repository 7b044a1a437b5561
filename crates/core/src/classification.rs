//! Data classification labels from the research data management policy.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The closed set of data classification labels.
///
/// Serialized with the exact policy wording; no other value is valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DataClassification {
    Public,
    Internal,
    Sensitive,
    Restricted,
}

/// All classifications, in ascending order of sensitivity.
pub const ALL_CLASSIFICATIONS: [DataClassification; 4] = [
    DataClassification::Public,
    DataClassification::Internal,
    DataClassification::Sensitive,
    DataClassification::Restricted,
];

impl DataClassification {
    /// Parse a policy label.
    pub fn from_label(s: &str) -> Result<Self, CoreError> {
        match s {
            "Public" => Ok(Self::Public),
            "Internal" => Ok(Self::Internal),
            "Sensitive" => Ok(Self::Sensitive),
            "Restricted" => Ok(Self::Restricted),
            _ => Err(CoreError::Validation(format!(
                "Invalid data classification '{s}'. Must be one of: \
                 Public, Internal, Sensitive, Restricted"
            ))),
        }
    }

    /// The policy label for this classification.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Public => "Public",
            Self::Internal => "Internal",
            Self::Sensitive => "Sensitive",
            Self::Restricted => "Restricted",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_roundtrip() {
        for classification in ALL_CLASSIFICATIONS {
            let label = classification.as_str();
            assert_eq!(
                DataClassification::from_label(label).unwrap(),
                classification
            );
        }
    }

    #[test]
    fn unknown_labels_are_rejected() {
        assert!(DataClassification::from_label("public").is_err());
        assert!(DataClassification::from_label("Secret").is_err());
        assert!(DataClassification::from_label("").is_err());
    }

    #[test]
    fn serde_uses_policy_wording() {
        assert_eq!(
            serde_json::to_string(&DataClassification::Sensitive).unwrap(),
            "\"Sensitive\""
        );
        let parsed: DataClassification = serde_json::from_str("\"Restricted\"").unwrap();
        assert_eq!(parsed, DataClassification::Restricted);
    }

    #[test]
    fn serde_rejects_unknown_variant() {
        assert!(serde_json::from_str::<DataClassification>("\"Unknown\"").is_err());
    }
}
