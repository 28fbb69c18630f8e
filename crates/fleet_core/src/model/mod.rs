//! Fleet domain model for dashboard and station projections.
//!
//! # Responsibility
//! - Define canonical identifiers and records shared by engine and services.
//! - Keep board membership and bus details as independent value types.
//!
//! # Invariants
//! - Every bus is identified by a stable `BusId` for the process lifetime.
//! - A facility board holds each of its assigned buses in exactly one category.

pub mod board;
pub mod detail;
pub mod ids;
pub mod snapshot;
