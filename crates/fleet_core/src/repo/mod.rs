//! Store contracts and in-memory implementations.
//!
//! # Responsibility
//! - Provide read-only lookups built once at startup (registry, schema,
//!   facilities).
//! - Define the board and detail store contracts the dashboard controller
//!   publishes through.
//!
//! # Invariants
//! - Registry, schema and facility directory never change after startup.
//! - Store writes replace whole values; there is no partial board update.

pub mod board_repo;
pub mod detail_repo;
pub mod registry;
