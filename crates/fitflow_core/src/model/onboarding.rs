//! Onboarding questionnaire snapshot.
//!
//! # Responsibility
//! - Hold the questionnaire answers exactly as the wizard stores them.
//! - Provide typed accessors for the fields the cycle core reads.
//!
//! # Invariants
//! - Answers are raw text; a missing key deserializes as an empty string.
//! - `gender` is one of `male|female|other|prefer_not` or empty.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Cycle length assumed when the user left the answer blank.
pub const DEFAULT_CYCLE_LENGTH_DAYS: u32 = 28;

/// Gender answer from the questionnaire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Gender {
    Male,
    Female,
    Other,
    PreferNot,
}

impl Gender {
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "male" => Some(Self::Male),
            "female" => Some(Self::Female),
            "other" => Some(Self::Other),
            "prefer_not" => Some(Self::PreferNot),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Male => "male",
            Self::Female => "female",
            Self::Other => "other",
            Self::PreferNot => "prefer_not",
        }
    }
}

/// Validation error for onboarding snapshots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OnboardingValidationError {
    UnknownGender(String),
}

impl Display for OnboardingValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownGender(value) => write!(
                f,
                "unknown gender `{value}`; expected male|female|other|prefer_not"
            ),
        }
    }
}

impl Error for OnboardingValidationError {}

/// Questionnaire answers persisted per user.
///
/// Female-only questions (`last_period_start` and below) stay empty for
/// other answers to `gender`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OnboardingSnapshot {
    pub height_cm: String,
    pub weight_kg: String,
    pub age: String,
    pub diet: String,
    pub exercise_routine: String,
    pub medical_history: String,
    pub goals: String,
    pub gender: String,
    pub period_flow_level: String,
    pub period_cramps: String,
    pub on_birth_control: String,
    /// Calendar date, usually `YYYY-MM-DD`.
    pub last_period_start: String,
    /// Positive integer as text; empty means the default length.
    pub cycle_length_days: String,
}

impl OnboardingSnapshot {
    /// Creates a snapshot carrying only the fields the cycle core reads.
    pub fn for_cycle(
        gender: Gender,
        last_period_start: impl Into<String>,
        cycle_length_days: impl Into<String>,
    ) -> Self {
        Self {
            gender: gender.as_str().to_string(),
            last_period_start: last_period_start.into(),
            cycle_length_days: cycle_length_days.into(),
            ..Self::default()
        }
    }

    /// Typed gender, `None` when unanswered or unknown.
    pub fn gender(&self) -> Option<Gender> {
        Gender::parse(&self.gender)
    }

    /// Returns whether cycle features apply to this user.
    pub fn tracks_cycle(&self) -> bool {
        self.gender() == Some(Gender::Female)
    }

    /// Checks answers before persistence.
    pub fn validate(&self) -> Result<(), OnboardingValidationError> {
        let trimmed = self.gender.trim();
        if !trimmed.is_empty() && Gender::parse(trimmed).is_none() {
            return Err(OnboardingValidationError::UnknownGender(trimmed.to_string()));
        }
        Ok(())
    }
}
