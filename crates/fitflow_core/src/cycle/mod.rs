//! Cycle estimation and calendar projection.
//!
//! # Responsibility
//! - Hold all calendar-day arithmetic used by the cycle page.
//! - Stay pure: no storage, no clock reads, no logging.
//!
//! # Invariants
//! - Every date is a `NaiveDate`; comparisons are calendar-day comparisons.

pub mod calendar;
pub mod estimator;
pub mod guidance;
