//! Domain model for the cycle tracker.
//!
//! # Responsibility
//! - Define the records persisted by the app (onboarding answers, daily logs).
//! - Define the derived, never-persisted cycle projection.
//!
//! # Invariants
//! - Derived values (`CycleInfo`) are recomputed on every read.
//! - Persisted records keep the external JSON shape (camelCase keys).

pub mod cycle;
pub mod cycle_log;
pub mod onboarding;
