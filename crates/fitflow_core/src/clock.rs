//! Source of "today" for cycle use-cases.
//!
//! The device clock is owned by the host; core only ever asks for the local
//! calendar day, so time-of-day never leaks into date comparisons.

use chrono::{Local, NaiveDate};

pub trait Clock {
    /// Current local calendar day.
    fn today(&self) -> NaiveDate;
}

/// Device local-time clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }
}

/// Clock pinned to one day.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}
