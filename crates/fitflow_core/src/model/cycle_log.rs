//! Daily symptom log model.
//!
//! # Responsibility
//! - Define the per-day log captured from the "Daily logs" card.
//! - Keep the persisted string encoding (`""` means "not noted").
//!
//! # Invariants
//! - A blank log (all fields unset) is equivalent to "no entry".
//! - Log entries are independent; no link to projected period windows.

use serde::{Deserialize, Serialize};

/// Flow level for one day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FlowLevel {
    /// Not noted.
    #[default]
    #[serde(rename = "")]
    Unset,
    #[serde(rename = "light")]
    Light,
    #[serde(rename = "medium")]
    Medium,
    #[serde(rename = "heavy")]
    Heavy,
}

/// Severity scale shared by cramps and bloating.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SymptomLevel {
    /// Not noted.
    #[default]
    #[serde(rename = "")]
    Unset,
    /// Explicitly reported as absent.
    #[serde(rename = "none")]
    Absent,
    #[serde(rename = "mild")]
    Mild,
    #[serde(rename = "moderate")]
    Moderate,
    #[serde(rename = "severe")]
    Severe,
}

impl FlowLevel {
    /// Parses the persisted/UI encoding. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "" => Some(Self::Unset),
            "light" => Some(Self::Light),
            "medium" => Some(Self::Medium),
            "heavy" => Some(Self::Heavy),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Light => "light",
            Self::Medium => "medium",
            Self::Heavy => "heavy",
        }
    }
}

impl SymptomLevel {
    /// Parses the persisted/UI encoding. Unknown values yield `None`.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "" => Some(Self::Unset),
            "none" => Some(Self::Absent),
            "mild" => Some(Self::Mild),
            "moderate" => Some(Self::Moderate),
            "severe" => Some(Self::Severe),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Unset => "",
            Self::Absent => "none",
            Self::Mild => "mild",
            Self::Moderate => "moderate",
            Self::Severe => "severe",
        }
    }
}

/// User-entered symptoms for one calendar day.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CycleLog {
    pub flow: FlowLevel,
    pub cramps: SymptomLevel,
    pub bloating: SymptomLevel,
}

impl CycleLog {
    /// Returns whether any field was noted.
    pub fn has_entries(&self) -> bool {
        self.flow != FlowLevel::Unset
            || self.cramps != SymptomLevel::Unset
            || self.bloating != SymptomLevel::Unset
    }
}

#[cfg(test)]
mod tests {
    use super::{CycleLog, FlowLevel, SymptomLevel};

    #[test]
    fn default_log_is_blank() {
        let log = CycleLog::default();
        assert!(!log.has_entries());
        assert_eq!(log.flow.as_str(), "");
    }

    #[test]
    fn serializes_with_string_encoding() {
        let log = CycleLog {
            flow: FlowLevel::Heavy,
            cramps: SymptomLevel::Mild,
            bloating: SymptomLevel::Absent,
        };
        let json = serde_json::to_string(&log).unwrap();
        assert_eq!(json, r#"{"flow":"heavy","cramps":"mild","bloating":"none"}"#);
    }

    #[test]
    fn deserializes_blank_fields() {
        let log: CycleLog =
            serde_json::from_str(r#"{"flow":"","cramps":"","bloating":"severe"}"#).unwrap();
        assert_eq!(log.flow, FlowLevel::Unset);
        assert_eq!(log.bloating, SymptomLevel::Severe);
        assert!(log.has_entries());
    }

    #[test]
    fn parse_rejects_unknown_values() {
        assert_eq!(FlowLevel::parse("spotting"), None);
        assert_eq!(SymptomLevel::parse(" moderate "), Some(SymptomLevel::Moderate));
    }
}
