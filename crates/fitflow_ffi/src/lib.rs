//! Flutter-facing bindings for the FitFlow cycle core.

pub mod api;
