//! Month grid projection for the cycle calendar.
//!
//! # Responsibility
//! - Lay out one month as Sunday-first week cells.
//! - Flag today and the projected period window.
//!
//! # Invariants
//! - Leading padding cells equal the weekday offset of day 1 (Sunday = 0).
//! - Non-padding cells cover every day of the month exactly once, in order.
//! - The period window spans `PERIOD_WINDOW_DAYS` days from its start,
//!   inclusive on both ends.

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

/// Length of the projected period window, start day included.
pub const PERIOD_WINDOW_DAYS: u64 = 5;

/// One cell in the month grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarCell {
    /// Day of month, `None` for padding before day 1.
    pub day: Option<u32>,
    pub is_today: bool,
    pub is_period_window: bool,
}

impl CalendarCell {
    fn padding() -> Self {
        Self {
            day: None,
            is_today: false,
            is_period_window: false,
        }
    }
}

/// Projected month grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CalendarMonth {
    /// Display label such as `January 2024`.
    pub month_label: String,
    pub cells: Vec<CalendarCell>,
}

impl CalendarMonth {
    /// Number of padding cells before day 1.
    pub fn leading_padding(&self) -> usize {
        self.cells.iter().take_while(|cell| cell.day.is_none()).count()
    }

    /// Days of month flagged as part of the period window.
    pub fn period_window_days(&self) -> Vec<u32> {
        self.cells
            .iter()
            .filter(|cell| cell.is_period_window)
            .filter_map(|cell| cell.day)
            .collect()
    }
}

/// Projects `month` (1-12) of `year` into grid cells.
///
/// Returns `None` for an invalid month or a month outside the supported date
/// range.
pub fn project(
    year: i32,
    month: u32,
    today: NaiveDate,
    next_period_start: Option<NaiveDate>,
) -> Option<CalendarMonth> {
    let first_of_month = NaiveDate::from_ymd_opt(year, month, 1)?;
    let days_in_month = days_in_month(first_of_month)?;
    let start_weekday = first_of_month.weekday().num_days_from_sunday();
    let window = next_period_start.and_then(|start| {
        start
            .checked_add_days(Days::new(PERIOD_WINDOW_DAYS - 1))
            .map(|end| (start, end))
    });

    let mut cells = Vec::with_capacity((start_weekday + days_in_month) as usize);
    cells.extend((0..start_weekday).map(|_| CalendarCell::padding()));

    for (date, day) in first_of_month.iter_days().zip(1..=days_in_month) {
        cells.push(CalendarCell {
            day: Some(day),
            is_today: date == today,
            is_period_window: window.is_some_and(|(start, end)| date >= start && date <= end),
        });
    }

    Some(CalendarMonth {
        month_label: first_of_month.format("%B %Y").to_string(),
        cells,
    })
}

// Day 0 of the following month is the last day of this one.
fn days_in_month(first_of_month: NaiveDate) -> Option<u32> {
    let (next_year, next_month) = if first_of_month.month() == 12 {
        (first_of_month.year() + 1, 1)
    } else {
        (first_of_month.year(), first_of_month.month() + 1)
    };
    let last_day = NaiveDate::from_ymd_opt(next_year, next_month, 1)?.pred_opt()?;
    Some(last_day.day())
}
