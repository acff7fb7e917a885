//! Cycle page use-case service.
//!
//! # Responsibility
//! - Gate cycle features on the user's onboarding answers.
//! - Combine estimator, calendar projection and guidance for "today".
//! - Front the daily log store.
//!
//! # Invariants
//! - Cycle data is recomputed on every call; nothing derived is persisted.
//! - Users without a female onboarding snapshot never get cycle data.
//! - Log events carry metadata only (no dates, phases or symptoms).

use crate::clock::Clock;
use crate::cycle::calendar::{project, CalendarMonth};
use crate::cycle::estimator::estimate_from_snapshot;
use crate::cycle::guidance::{diet_tip, workout_tip};
use crate::model::cycle::CycleInfo;
use crate::model::cycle_log::CycleLog;
use crate::model::onboarding::OnboardingSnapshot;
use crate::repo::cycle_log_repo::CycleLogStore;
use crate::repo::kv_store::{KvStore, RepoError};
use crate::repo::onboarding_repo::OnboardingStore;
use chrono::{Datelike, NaiveDate};
use log::info;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Outcome of the cycle page access check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleAccess {
    Allowed(OnboardingSnapshot),
    /// No (readable) questionnaire answers; send the user to onboarding.
    MissingOnboarding,
    /// Answers exist but cycle tracking does not apply.
    NotApplicable,
}

/// Service error for cycle use-cases.
#[derive(Debug)]
pub enum CycleServiceError {
    /// Access check did not return `CycleAccess::Allowed`.
    AccessDenied(CycleAccess),
    InvalidMonth { year: i32, month: u32 },
    Repo(RepoError),
}

impl Display for CycleServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AccessDenied(CycleAccess::MissingOnboarding) => {
                write!(f, "cycle tracking needs onboarding answers")
            }
            Self::AccessDenied(_) => write!(f, "cycle tracking is not enabled for this profile"),
            Self::InvalidMonth { year, month } => {
                write!(f, "invalid calendar month {year}-{month:02}")
            }
            Self::Repo(err) => write!(f, "{err}"),
        }
    }
}

impl Error for CycleServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Repo(err) => Some(err),
            _ => None,
        }
    }
}

impl From<RepoError> for CycleServiceError {
    fn from(value: RepoError) -> Self {
        Self::Repo(value)
    }
}

/// Snapshot card content for one day.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CycleOverview {
    pub today: NaiveDate,
    /// `None` when answers are insufficient for an estimate.
    pub cycle: Option<CycleInfo>,
    pub workout_tip: &'static str,
    pub diet_tip: &'static str,
    /// Onboarding "typical flow" answer; `None` when blank.
    pub typical_flow: Option<String>,
    /// Onboarding "typical cramps" answer; `None` when blank.
    pub typical_cramps: Option<String>,
}

/// Cycle page facade over a key-value backend and a clock.
pub struct CycleService<S: KvStore + Clone, C: Clock> {
    onboarding: OnboardingStore<S>,
    logs: CycleLogStore<S>,
    clock: C,
}

impl<S: KvStore + Clone, C: Clock> CycleService<S, C> {
    pub fn new(store: S, clock: C) -> Self {
        Self {
            onboarding: OnboardingStore::new(store.clone()),
            logs: CycleLogStore::new(store),
            clock,
        }
    }

    /// Onboarding store sharing this service's backend.
    pub fn onboarding(&self) -> &OnboardingStore<S> {
        &self.onboarding
    }

    /// Decides whether the user may open the cycle page.
    pub fn access(&self, user_id: &str) -> Result<CycleAccess, CycleServiceError> {
        let access = match self.onboarding.load(user_id)? {
            None => CycleAccess::MissingOnboarding,
            Some(snapshot) if snapshot.tracks_cycle() => CycleAccess::Allowed(snapshot),
            Some(_) => CycleAccess::NotApplicable,
        };
        Ok(access)
    }

    /// Builds the snapshot card for the clock's current day.
    pub fn overview(&self, user_id: &str) -> Result<CycleOverview, CycleServiceError> {
        let snapshot = self.allowed_snapshot(user_id)?;
        let today = self.clock.today();
        let cycle = estimate_from_snapshot(&snapshot, today);
        let phase = cycle.map(|info| info.phase);

        info!(
            "event=cycle_overview module=service status=ok has_estimate={}",
            cycle.is_some()
        );
        Ok(CycleOverview {
            today,
            cycle,
            workout_tip: workout_tip(phase),
            diet_tip: diet_tip(phase),
            typical_flow: non_blank(&snapshot.period_flow_level),
            typical_cramps: non_blank(&snapshot.period_cramps),
        })
    }

    /// Projects `month` of `year` with today's estimate highlighted.
    pub fn calendar(
        &self,
        user_id: &str,
        year: i32,
        month: u32,
    ) -> Result<CalendarMonth, CycleServiceError> {
        let snapshot = self.allowed_snapshot(user_id)?;
        let today = self.clock.today();
        let next_start = estimate_from_snapshot(&snapshot, today).map(|info| info.next_period_start);

        project(year, month, today, next_start)
            .ok_or(CycleServiceError::InvalidMonth { year, month })
    }

    /// Projects the clock's current month.
    pub fn current_calendar(&self, user_id: &str) -> Result<CalendarMonth, CycleServiceError> {
        let today = self.clock.today();
        self.calendar(user_id, today.year(), today.month())
    }

    /// Log for `date`, blank when nothing was noted.
    pub fn log_for(&self, date: NaiveDate) -> CycleLog {
        self.logs.get_log(date)
    }

    /// Saves the log for `date`, replacing any earlier entry.
    pub fn save_log(&self, date: NaiveDate, log: CycleLog) -> Result<(), CycleServiceError> {
        self.logs.set_log(date, log)?;
        info!(
            "event=cycle_log_save module=service status=ok has_entries={}",
            log.has_entries()
        );
        Ok(())
    }

    fn allowed_snapshot(&self, user_id: &str) -> Result<OnboardingSnapshot, CycleServiceError> {
        match self.access(user_id)? {
            CycleAccess::Allowed(snapshot) => Ok(snapshot),
            denied => Err(CycleServiceError::AccessDenied(denied)),
        }
    }
}

fn non_blank(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
