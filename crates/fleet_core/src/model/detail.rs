//! Editable per-bus attributes.
//!
//! # Invariants
//! - Details are created lazily on first edit and never deleted.
//! - `status` is never touched by station edits.

use serde::{Deserialize, Serialize};

/// Mutable attributes for one bus, independent of board membership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusDetail {
    /// Free-text operational status note.
    pub status: Option<String>,
    /// Last service date as entered (`YYYY-MM-DD` from the date picker).
    pub last_service: Option<String>,
    pub notes: Option<String>,
}

/// Detail fields submitted by the station editor.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailEdit {
    pub last_service: String,
    pub notes: String,
}

impl BusDetail {
    /// Returns a copy with the edit merged in.
    ///
    /// `last_service` and `notes` are overwritten with the text as entered;
    /// whitespace-only input clears the field. `status` is kept as-is.
    pub fn merged(&self, edit: &DetailEdit) -> Self {
        Self {
            status: self.status.clone(),
            last_service: non_blank(edit.last_service.as_str()),
            notes: non_blank(edit.notes.as_str()),
        }
    }
}

fn non_blank(value: &str) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value.to_string())
    }
}
