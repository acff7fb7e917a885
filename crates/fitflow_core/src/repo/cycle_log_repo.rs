//! Date-keyed daily log store.
//!
//! # Responsibility
//! - Persist the whole log mapping as one JSON object.
//! - Re-hydrate it, recovering silently from malformed stored state.
//!
//! # Invariants
//! - `get_log` never fails; absent or unreadable entries read as blank.
//! - `set_log` is an upsert per date (last write wins) and fails rather than
//!   overwrite entries it could not read.
//! - Logs never record symptom values; only counts and status.

use crate::model::cycle_log::CycleLog;
use crate::repo::kv_store::{KvStore, RepoResult};
use chrono::NaiveDate;
use log::{debug, warn};
use std::collections::BTreeMap;

/// Storage key for the log mapping, distinct from onboarding keys.
pub const CYCLE_LOGS_KEY: &str = "fitflow_cycle_logs";

/// Log entries keyed by calendar date (`YYYY-MM-DD` when serialized).
pub type CycleLogMap = BTreeMap<NaiveDate, CycleLog>;

/// Daily log store over any key-value backend.
pub struct CycleLogStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> CycleLogStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads every stored entry.
    ///
    /// Missing, unreadable or malformed state yields an empty mapping.
    pub fn load_all(&self) -> CycleLogMap {
        self.try_load_all().unwrap_or_else(|err| {
            warn!("event=cycle_logs_load module=repo status=error error_code=store_read_failed error={err}");
            CycleLogMap::new()
        })
    }

    /// Loads every stored entry, propagating store read failures.
    ///
    /// Malformed stored JSON still yields an empty mapping.
    pub fn try_load_all(&self) -> RepoResult<CycleLogMap> {
        let Some(raw) = self.store.get(CYCLE_LOGS_KEY)? else {
            return Ok(CycleLogMap::new());
        };

        match serde_json::from_str::<CycleLogMap>(&raw) {
            Ok(logs) => {
                debug!(
                    "event=cycle_logs_load module=repo status=ok entries={}",
                    logs.len()
                );
                Ok(logs)
            }
            Err(_) => {
                warn!("event=cycle_logs_load module=repo status=error error_code=malformed_state recovery=empty");
                Ok(CycleLogMap::new())
            }
        }
    }

    /// Replaces the stored mapping.
    pub fn persist(&self, logs: &CycleLogMap) -> RepoResult<()> {
        let encoded = serde_json::to_string(logs)?;
        self.store.set(CYCLE_LOGS_KEY, &encoded)?;
        debug!(
            "event=cycle_logs_persist module=repo status=ok entries={}",
            logs.len()
        );
        Ok(())
    }

    /// Returns the log for `date`, blank when absent.
    pub fn get_log(&self, date: NaiveDate) -> CycleLog {
        self.load_all().remove(&date).unwrap_or_default()
    }

    /// Stores `log` for `date`, replacing any earlier entry for that day.
    ///
    /// A failed read aborts the write so other dates are never dropped.
    pub fn set_log(&self, date: NaiveDate, log: CycleLog) -> RepoResult<()> {
        let mut logs = self.try_load_all()?;
        logs.insert(date, log);
        self.persist(&logs)
    }
}
