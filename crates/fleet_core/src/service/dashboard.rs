//! Fleet dashboard controller.

use crate::config::FleetConfig;
use crate::engine::board_move::{self, BoardChange, NoOpReason};
use crate::model::board::{Board, DropTarget};
use crate::model::detail::BusDetail;
use crate::model::ids::{BusDescriptor, BusId, CategoryId, FacilityId};
use crate::model::snapshot::SnapshotStats;
use crate::repo::board_repo::{BoardRepository, InMemoryBoardRepository};
use crate::repo::detail_repo::{DetailRepository, InMemoryDetailRepository};
use crate::repo::registry::{BusRegistry, CategorySchema, FacilityDirectory};
use crate::service::views::BusSnapshot;
use log::{debug, error, info};
use std::collections::BTreeMap;

/// Outcome of a drag-and-drop move request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// New board was published.
    Applied { from: CategoryId, to: CategoryId },
    /// Board left as it was.
    Unchanged(NoOpReason),
}

impl MoveOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

/// Dashboard controller backed by process-local stores.
pub type InMemoryDashboard = FleetDashboard<InMemoryBoardRepository, InMemoryDetailRepository>;

/// Owner of fleet state and single entry point for its mutations.
pub struct FleetDashboard<B: BoardRepository, D: DetailRepository> {
    pub(crate) registry: BusRegistry,
    pub(crate) schema: CategorySchema,
    pub(crate) facilities: FacilityDirectory,
    pub(crate) snapshot_stats: BTreeMap<BusId, SnapshotStats>,
    pub(crate) boards: B,
    pub(crate) details: D,
    snapshot_bus: Option<BusId>,
}

impl InMemoryDashboard {
    /// Builds a dashboard with in-memory stores seeded from `config`.
    pub fn from_config(config: &FleetConfig) -> Self {
        Self::new(
            config,
            InMemoryBoardRepository::new(config.seed_boards()),
            InMemoryDetailRepository::new(),
        )
    }
}

impl<B: BoardRepository, D: DetailRepository> FleetDashboard<B, D> {
    /// Creates a controller over caller-provided stores.
    ///
    /// Board seeding is the store's concern; `config` supplies registry,
    /// schema, facilities and snapshot stats.
    pub fn new(config: &FleetConfig, boards: B, details: D) -> Self {
        Self {
            registry: config.registry(),
            schema: config.schema(),
            facilities: config.facility_directory(),
            snapshot_stats: config.snapshot_stats.clone(),
            boards,
            details,
            snapshot_bus: None,
        }
    }

    pub fn registry(&self) -> &BusRegistry {
        &self.registry
    }

    pub fn schema(&self) -> &CategorySchema {
        &self.schema
    }

    pub fn facilities(&self) -> &FacilityDirectory {
        &self.facilities
    }

    /// Current board of one facility.
    pub fn board(&self, facility: &FacilityId) -> Option<&Board> {
        self.boards.board(facility)
    }

    pub fn bus_descriptor(&self, bus: &BusId) -> Option<&BusDescriptor> {
        self.registry.get(bus)
    }

    pub fn bus_detail(&self, bus: &BusId) -> Option<&BusDetail> {
        self.details.detail(bus)
    }

    /// Category currently holding `bus` on the facility board.
    pub fn locate_container(&self, facility: &FacilityId, bus: &BusId) -> Option<CategoryId> {
        self.boards
            .board(facility)
            .and_then(|board| board_move::locate_container(board, bus))
    }

    /// Applies a drag-and-drop move on one facility board.
    pub fn move_bus(
        &mut self,
        facility: &FacilityId,
        bus: &BusId,
        target: &DropTarget,
    ) -> MoveOutcome {
        let Some(board) = self.boards.board(facility) else {
            debug!(
                "event=bus_move module=service status=noop reason={} facility={} bus={}",
                NoOpReason::UnknownFacility,
                facility,
                bus
            );
            return MoveOutcome::Unchanged(NoOpReason::UnknownFacility);
        };

        match board_move::move_bus(board, bus, target) {
            BoardChange::Moved { board, from, to } => {
                if let Err(err) = self.boards.replace_board(facility, board) {
                    error!(
                        "event=bus_move module=service status=error facility={} bus={} error={}",
                        facility, bus, err
                    );
                    return MoveOutcome::Unchanged(NoOpReason::UnknownFacility);
                }
                info!(
                    "event=bus_move module=service status=applied facility={} bus={} from={} to={}",
                    facility, bus, from, to
                );
                MoveOutcome::Applied { from, to }
            }
            BoardChange::Unchanged(reason) => {
                debug!(
                    "event=bus_move module=service status=noop reason={} facility={} bus={}",
                    reason, facility, bus
                );
                MoveOutcome::Unchanged(reason)
            }
        }
    }

    /// Selects `bus` for the snapshot modal.
    ///
    /// Unregistered buses leave the current selection in place and return
    /// `None`.
    pub fn open_snapshot(&mut self, bus: &BusId) -> Option<BusSnapshot> {
        let snapshot = self.snapshot_for(bus)?;
        debug!(
            "event=snapshot_open module=service status=ok bus={} status_category={}",
            bus,
            snapshot
                .status
                .as_ref()
                .map(CategoryId::as_str)
                .unwrap_or("none")
        );
        self.snapshot_bus = Some(bus.clone());
        Some(snapshot)
    }

    pub fn close_snapshot(&mut self) {
        self.snapshot_bus = None;
    }

    /// Bus currently selected for the snapshot modal.
    pub fn snapshot_bus(&self) -> Option<&BusId> {
        self.snapshot_bus.as_ref()
    }

    /// Snapshot of the selected bus, recomputed from current state.
    pub fn current_snapshot(&self) -> Option<BusSnapshot> {
        self.snapshot_bus
            .as_ref()
            .and_then(|bus| self.snapshot_for(bus))
    }

    fn snapshot_for(&self, bus: &BusId) -> Option<BusSnapshot> {
        let descriptor = self.registry.get(bus)?;
        let status = self.locate_container(&descriptor.facility_id, bus);
        let status_label = status
            .as_ref()
            .and_then(|category| self.schema.label(category))
            .map(str::to_string);
        Some(BusSnapshot {
            bus_id: descriptor.id.clone(),
            label: descriptor.label.clone(),
            facility_id: descriptor.facility_id.clone(),
            status,
            status_label,
            stats: self.snapshot_stats.get(bus).cloned().unwrap_or_default(),
        })
    }
}
