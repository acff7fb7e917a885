//! Cycle position estimator.
//!
//! # Responsibility
//! - Derive phase, day-in-cycle and next period start from the last period
//!   start, the cycle length and "today".
//! - Parse the raw questionnaire answers feeding the estimate.
//!
//! # Invariants
//! - `day_in_cycle - 1` equals `days_since_start` modulo the cycle length
//!   (true modulo, never negative).
//! - `next_period_start >= today` and lies a whole number of cycles after
//!   `last_period_start`.
//! - Unusable inputs yield `None`, never a panic.

use crate::model::cycle::{CycleInfo, CyclePhase};
use crate::model::onboarding::{OnboardingSnapshot, DEFAULT_CYCLE_LENGTH_DAYS};
use chrono::{DateTime, Days, NaiveDate, NaiveDateTime};

const DATE_FORMAT: &str = "%Y-%m-%d";
const DATE_TIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Estimates the cycle position for `today`.
///
/// Returns `None` when `last_period_start` is absent or `cycle_length_days`
/// is zero. A `last_period_start` in the future is accepted: the day index
/// wraps backwards and the next start is the anchor itself.
pub fn estimate(
    last_period_start: Option<NaiveDate>,
    cycle_length_days: u32,
    today: NaiveDate,
) -> Option<CycleInfo> {
    let last_start = last_period_start?;
    if cycle_length_days == 0 {
        return None;
    }

    let length = i64::from(cycle_length_days);
    let days_since_start = today.signed_duration_since(last_start).num_days();
    let day_index = u32::try_from(days_since_start.rem_euclid(length)).ok()?;

    let next_period_start = next_period_start(last_start, days_since_start, length)?;
    let days_until_next = next_period_start
        .signed_duration_since(today)
        .num_days()
        .max(0);

    Some(CycleInfo {
        cycle_length: cycle_length_days,
        day_in_cycle: day_index + 1,
        days_until_next: u32::try_from(days_until_next).ok()?,
        next_period_start,
        phase: CyclePhase::from_day_index(day_index),
    })
}

/// Estimates the cycle position from stored questionnaire answers.
pub fn estimate_from_snapshot(snapshot: &OnboardingSnapshot, today: NaiveDate) -> Option<CycleInfo> {
    let cycle_length = parse_cycle_length(&snapshot.cycle_length_days)?;
    estimate(
        parse_calendar_date(&snapshot.last_period_start),
        cycle_length,
        today,
    )
}

/// Parses a calendar date answer.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (date in the written offset) and
/// naive ISO date-times; the time of day is discarded.
pub fn parse_calendar_date(value: &str) -> Option<NaiveDate> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, DATE_FORMAT) {
        return Some(date);
    }
    if let Ok(date_time) = DateTime::parse_from_rfc3339(trimmed) {
        return Some(date_time.date_naive());
    }
    DATE_TIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(trimmed, format).ok())
        .map(|date_time| date_time.date())
}

/// Formats a calendar date the way it is stored (`YYYY-MM-DD`).
pub fn format_calendar_date(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Parses a cycle length answer.
///
/// Blank means the default length; zero, negative and non-numeric values
/// yield `None`.
pub fn parse_cycle_length(value: &str) -> Option<u32> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Some(DEFAULT_CYCLE_LENGTH_DAYS);
    }
    match trimmed.parse::<u32>() {
        Ok(0) | Err(_) => None,
        Ok(length) => Some(length),
    }
}

// A start falling on `today` counts as the current cycle, so the next one is
// a full cycle ahead.
fn next_period_start(last_start: NaiveDate, days_since_start: i64, length: i64) -> Option<NaiveDate> {
    if days_since_start < 0 {
        return Some(last_start);
    }
    let cycles = days_since_start.div_euclid(length).checked_add(1)?;
    let offset = u64::try_from(cycles.checked_mul(length)?).ok()?;
    last_start.checked_add_days(Days::new(offset))
}
