//! Core domain logic for the FitFlow cycle tracker.
//! This crate is the single source of truth for cycle invariants.

pub mod clock;
pub mod cycle;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use clock::{Clock, FixedClock, SystemClock};
pub use cycle::calendar::{project, CalendarCell, CalendarMonth, PERIOD_WINDOW_DAYS};
pub use cycle::estimator::{
    estimate, estimate_from_snapshot, format_calendar_date, parse_calendar_date,
    parse_cycle_length,
};
pub use cycle::guidance::{diet_tip, workout_tip};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::cycle::{CycleInfo, CyclePhase};
pub use model::cycle_log::{CycleLog, FlowLevel, SymptomLevel};
pub use model::onboarding::{
    Gender, OnboardingSnapshot, OnboardingValidationError, DEFAULT_CYCLE_LENGTH_DAYS,
};
pub use repo::cycle_log_repo::{CycleLogMap, CycleLogStore, CYCLE_LOGS_KEY};
pub use repo::kv_store::{KvStore, RepoError, RepoResult, SqliteKvStore};
pub use repo::onboarding_repo::OnboardingStore;
pub use service::cycle_service::{CycleAccess, CycleOverview, CycleService, CycleServiceError};

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}

#[cfg(test)]
mod tests {
    use super::{core_version, ping};

    #[test]
    fn ping_returns_pong() {
        assert_eq!(ping(), "pong");
    }

    #[test]
    fn version_is_not_empty() {
        assert!(!core_version().is_empty());
    }
}
