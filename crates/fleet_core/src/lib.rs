//! Core fleet board logic for Fleet Pulse.
//! This crate is the single source of truth for board membership invariants.

pub mod config;
pub mod engine;
pub mod logging;
pub mod model;
pub mod repo;
pub mod service;

pub use config::{load_config, load_config_str, ConfigError, ConfigValidationError, FleetConfig};
pub use engine::{
    array_move, check_membership, locate_container, move_bus, reassign_to_end, BoardChange,
    MembershipViolation, NoOpReason,
};
pub use logging::{default_log_level, init_logging, logging_status, LoggingConfig};
pub use model::board::{Board, DropTarget, FacilityBoards};
pub use model::detail::{BusDetail, DetailEdit};
pub use model::ids::{BusDescriptor, BusId, CategoryId, FacilityId};
pub use model::snapshot::SnapshotStats;
pub use repo::board_repo::{BoardRepository, InMemoryBoardRepository, RepoError, RepoResult};
pub use repo::detail_repo::{DetailRepository, InMemoryDetailRepository};
pub use repo::registry::{
    BusRegistry, CategorySchema, CategorySpec, FacilityDirectory, FacilitySpec,
};
pub use service::dashboard::{FleetDashboard, InMemoryDashboard, MoveOutcome};
pub use service::station_editor::{EditOutcome, EditRejection, StationDraft, StationEdit};
pub use service::views::{
    BoardView, BusCard, BusDetailView, BusSnapshot, ColumnView, StationCard, StationSection,
    StationView,
};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
