//! Dashboard use-case services.
//!
//! # Responsibility
//! - Own the board and detail stores behind one controller.
//! - Expose the mutation surface (move, station save, snapshot toggles) and
//!   read models for the presentation layer.
//!
//! # Invariants
//! - Each mutation is computed from a snapshot of current state and
//!   committed as whole-value replacements.
//! - Failed requests leave every store unchanged and are reported as
//!   outcome values.

pub mod dashboard;
pub mod station_editor;
pub mod views;
