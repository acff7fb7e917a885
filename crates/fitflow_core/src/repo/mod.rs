//! Local persistence for onboarding answers and daily logs.
//!
//! # Responsibility
//! - Define the key-value contract that stands in for browser storage.
//! - Keep JSON encoding and key naming inside the persistence boundary.
//!
//! # Invariants
//! - Onboarding and log data live under distinct keys.
//! - Reads of malformed stored JSON recover silently; writes report errors.

pub mod cycle_log_repo;
pub mod kv_store;
pub mod onboarding_repo;
