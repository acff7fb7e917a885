//! Derived cycle projection.
//!
//! # Responsibility
//! - Define the phase classification and the per-day cycle snapshot.
//!
//! # Invariants
//! - `CycleInfo::day_in_cycle` is in `[1, cycle_length]`.
//! - `CycleInfo::next_period_start` is never earlier than the day it was
//!   computed for.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Hormonal phase derived from the 0-based day index in the cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CyclePhase {
    Menstrual,
    Follicular,
    Ovulatory,
    Luteal,
}

impl CyclePhase {
    /// Classifies a 0-based day index.
    ///
    /// Thresholds are fixed and do not scale with cycle length, so very
    /// short or long cycles get implausible phase lengths. Known
    /// approximation; kept until there is product guidance to rescale.
    pub fn from_day_index(day_index: u32) -> Self {
        match day_index {
            0..=4 => Self::Menstrual,
            5..=12 => Self::Follicular,
            13..=16 => Self::Ovulatory,
            _ => Self::Luteal,
        }
    }

    /// Display label used by UI callers.
    pub fn label(self) -> &'static str {
        match self {
            Self::Menstrual => "Menstrual",
            Self::Follicular => "Follicular",
            Self::Ovulatory => "Ovulatory",
            Self::Luteal => "Luteal",
        }
    }
}

impl Display for CyclePhase {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Cycle position for one calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CycleInfo {
    /// Cycle length in days used for the estimate.
    pub cycle_length: u32,
    /// 1-based position of the day within the current cycle.
    pub day_in_cycle: u32,
    /// Whole days until `next_period_start`.
    pub days_until_next: u32,
    /// First projected period start on or after the estimated day.
    pub next_period_start: NaiveDate,
    pub phase: CyclePhase,
}

impl CycleInfo {
    /// 0-based day index the phase was classified from.
    ///
    /// Saturates at 0 for records deserialized with `dayInCycle: 0`.
    pub fn day_index(&self) -> u32 {
        self.day_in_cycle.saturating_sub(1)
    }
}
