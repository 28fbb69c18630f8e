//! Ad hoc snapshot statistics shown in the quick-view modal.

use serde::{Deserialize, Serialize};

/// Optional per-bus stats supplied by configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnapshotStats {
    /// Battery charge in percent (0..=100).
    pub battery_pct: Option<u8>,
    pub alert_count: Option<u32>,
    /// Free-form freshness label, e.g. `Today 10:42`.
    pub last_updated: Option<String>,
    pub notes: Option<String>,
}
