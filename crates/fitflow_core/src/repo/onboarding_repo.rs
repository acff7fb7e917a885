//! Per-user onboarding snapshot store.
//!
//! # Responsibility
//! - Read and write questionnaire answers under per-user keys.
//! - Track whether the questionnaire was finished.
//!
//! # Invariants
//! - Keys are `fitflow_onboarding_<user>` and
//!   `fitflow_onboarding_completed_<user>`.
//! - Malformed stored answers read as "no onboarding".

use crate::model::onboarding::OnboardingSnapshot;
use crate::repo::kv_store::{KvStore, RepoError, RepoResult};
use log::warn;

const ONBOARDING_KEY_BASE: &str = "fitflow_onboarding";
const ONBOARDING_COMPLETED_KEY_BASE: &str = "fitflow_onboarding_completed";
const COMPLETED_MARKER: &str = "true";

/// Onboarding store over any key-value backend.
pub struct OnboardingStore<S: KvStore> {
    store: S,
}

impl<S: KvStore> OnboardingStore<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Loads the user's answers, `None` when absent or unreadable.
    pub fn load(&self, user_id: &str) -> RepoResult<Option<OnboardingSnapshot>> {
        let key = onboarding_key(user_id)?;
        let Some(raw) = self.store.get(&key)? else {
            return Ok(None);
        };

        match serde_json::from_str::<OnboardingSnapshot>(&raw) {
            Ok(snapshot) => Ok(Some(snapshot)),
            Err(_) => {
                warn!("event=onboarding_load module=repo status=error error_code=malformed_state recovery=none");
                Ok(None)
            }
        }
    }

    /// Saves the user's answers, replacing earlier ones.
    pub fn save(&self, user_id: &str, snapshot: &OnboardingSnapshot) -> RepoResult<()> {
        snapshot.validate()?;
        let key = onboarding_key(user_id)?;
        let encoded = serde_json::to_string(snapshot)?;
        self.store.set(&key, &encoded)
    }

    /// Marks the questionnaire as finished.
    pub fn mark_completed(&self, user_id: &str) -> RepoResult<()> {
        let key = completed_key(user_id)?;
        self.store.set(&key, COMPLETED_MARKER)
    }

    pub fn is_completed(&self, user_id: &str) -> RepoResult<bool> {
        let key = completed_key(user_id)?;
        Ok(self.store.get(&key)?.as_deref() == Some(COMPLETED_MARKER))
    }
}

fn onboarding_key(user_id: &str) -> RepoResult<String> {
    Ok(format!("{ONBOARDING_KEY_BASE}_{}", normalize_user_id(user_id)?))
}

fn completed_key(user_id: &str) -> RepoResult<String> {
    Ok(format!(
        "{ONBOARDING_COMPLETED_KEY_BASE}_{}",
        normalize_user_id(user_id)?
    ))
}

fn normalize_user_id(user_id: &str) -> RepoResult<&str> {
    let trimmed = user_id.trim();
    if trimmed.is_empty() {
        return Err(RepoError::InvalidKey("user id cannot be empty".to_string()));
    }
    Ok(trimmed)
}

#[cfg(test)]
mod tests {
    use super::{completed_key, onboarding_key, OnboardingStore};
    use crate::db::open_db_in_memory;
    use crate::model::onboarding::{Gender, OnboardingSnapshot};
    use crate::repo::kv_store::{KvStore, RepoError, SqliteKvStore};

    #[test]
    fn keys_are_scoped_per_user() {
        assert_eq!(onboarding_key(" u1 ").unwrap(), "fitflow_onboarding_u1");
        assert_eq!(
            completed_key("u1").unwrap(),
            "fitflow_onboarding_completed_u1"
        );
        assert!(matches!(onboarding_key(""), Err(RepoError::InvalidKey(_))));
    }

    #[test]
    fn save_and_load_roundtrip() {
        let conn = open_db_in_memory().unwrap();
        let store = OnboardingStore::new(SqliteKvStore::new(&conn));
        let snapshot = OnboardingSnapshot::for_cycle(Gender::Female, "2024-01-01", "28");

        store.save("u1", &snapshot).unwrap();
        assert_eq!(store.load("u1").unwrap(), Some(snapshot));
        assert_eq!(store.load("u2").unwrap(), None);
    }

    #[test]
    fn malformed_answers_read_as_missing() {
        let conn = open_db_in_memory().unwrap();
        let kv = SqliteKvStore::new(&conn);
        kv.set("fitflow_onboarding_u1", "{not json").unwrap();

        let store = OnboardingStore::new(&kv);
        assert_eq!(store.load("u1").unwrap(), None);
    }

    #[test]
    fn completion_flag_roundtrip() {
        let conn = open_db_in_memory().unwrap();
        let store = OnboardingStore::new(SqliteKvStore::new(&conn));

        assert!(!store.is_completed("u1").unwrap());
        store.mark_completed("u1").unwrap();
        assert!(store.is_completed("u1").unwrap());
    }

    #[test]
    fn save_rejects_unknown_gender() {
        let conn = open_db_in_memory().unwrap();
        let store = OnboardingStore::new(SqliteKvStore::new(&conn));
        let snapshot = OnboardingSnapshot {
            gender: "unknown".to_string(),
            ..OnboardingSnapshot::default()
        };

        let err = store.save("u1", &snapshot).unwrap_err();
        assert!(matches!(err, RepoError::Validation(_)));
    }
}
