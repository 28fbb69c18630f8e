//! Board mutation engine.
//!
//! # Responsibility
//! - Compute next boards for drag-and-drop moves and editor reassignments.
//! - Report no-op requests as values instead of errors.
//!
//! # Invariants
//! - Engine functions never mutate their input; callers publish the result.
//! - An applied change keeps the board's bus set unchanged.

pub mod board_move;
pub mod membership;

pub use board_move::{
    array_move, locate_container, move_bus, reassign_to_end, BoardChange, NoOpReason,
};
pub use membership::{check_membership, MembershipViolation};
