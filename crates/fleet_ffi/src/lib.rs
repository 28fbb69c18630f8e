//! Flutter-facing bindings for Fleet Pulse core.

pub mod api;
