//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate stores, clock and pure cycle functions into page-level APIs.
//! - Keep FFI/CLI layers decoupled from storage details.

pub mod cycle_service;
