//! Station editor: form-based category change with detail edit.
//!
//! # Invariants
//! - A save either updates both stores or neither.
//! - Reassignment always appends to the end of the target category.
//! - Saving with the current category leaves the board untouched.

use crate::engine::board_move::{reassign_to_end, BoardChange, NoOpReason};
use crate::model::board::Board;
use crate::model::detail::DetailEdit;
use crate::model::ids::{BusId, CategoryId, FacilityId};
use crate::repo::board_repo::BoardRepository;
use crate::repo::detail_repo::DetailRepository;
use crate::service::dashboard::FleetDashboard;
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Form submission from the station editor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationEdit {
    /// Requested category for the bus.
    pub category_id: CategoryId,
    /// Last service date from the date picker; blank clears it.
    pub last_service: String,
    /// Free-text notes; blank clears them.
    pub notes: String,
}

impl StationEdit {
    fn detail_edit(&self) -> DetailEdit {
        DetailEdit {
            last_service: self.last_service.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Prefilled editor form for one bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StationDraft {
    pub bus_id: BusId,
    pub category_id: CategoryId,
    pub last_service: String,
    pub notes: String,
}

impl StationDraft {
    /// Converts the draft into a save request.
    pub fn to_edit(&self) -> StationEdit {
        StationEdit {
            category_id: self.category_id.clone(),
            last_service: self.last_service.clone(),
            notes: self.notes.clone(),
        }
    }
}

/// Why a station save was rejected as a whole.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditRejection {
    UnknownFacility,
    /// Requested category is not in the schema.
    UnknownCategory,
    /// Bus is not on the facility board.
    BusNotOnBoard,
}

impl Display for EditRejection {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::UnknownFacility => "unknown_facility",
            Self::UnknownCategory => "unknown_category",
            Self::BusNotOnBoard => "bus_not_on_board",
        };
        f.write_str(text)
    }
}

/// Outcome of a station save.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditOutcome {
    /// Detail stored; `moved` tells whether the board changed too.
    Applied { moved: bool },
    /// Neither store changed.
    Rejected(EditRejection),
}

impl EditOutcome {
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

impl<B: BoardRepository, D: DetailRepository> FleetDashboard<B, D> {
    /// Opens the editor form for `bus` on `facility`.
    ///
    /// Returns `None` for unknown facilities and for buses whose home is
    /// another facility. A bus with no current category gets the schema
    /// default preselected.
    pub fn open_edit(&self, facility: &FacilityId, bus: &BusId) -> Option<StationDraft> {
        self.boards.board(facility)?;
        if self.registry.home_facility(bus)? != facility {
            return None;
        }

        let category_id = self
            .locate_container(facility, bus)
            .or_else(|| self.schema.default_category().cloned())?;
        let current = self.details.detail(bus);
        Some(StationDraft {
            bus_id: bus.clone(),
            category_id,
            last_service: current
                .and_then(|detail| detail.last_service.clone())
                .unwrap_or_default(),
            notes: current
                .and_then(|detail| detail.notes.clone())
                .unwrap_or_default(),
        })
    }

    /// Saves detail fields and, when the category differs, moves the bus to
    /// the end of the requested category.
    pub fn save_edit(
        &mut self,
        facility: &FacilityId,
        bus: &BusId,
        edit: &StationEdit,
    ) -> EditOutcome {
        match self.stage_edit(facility, bus, edit) {
            Ok(next_board) => {
                let moved = next_board.is_some();
                if let Some(board) = next_board {
                    if self.boards.replace_board(facility, board).is_err() {
                        return self.reject(facility, bus, EditRejection::UnknownFacility);
                    }
                }
                let detail = self
                    .details
                    .detail(bus)
                    .cloned()
                    .unwrap_or_default()
                    .merged(&edit.detail_edit());
                self.details.put_detail(bus.clone(), detail);

                info!(
                    "event=station_save module=service status=applied facility={} bus={} category={} moved={}",
                    facility, bus, edit.category_id, moved
                );
                EditOutcome::Applied { moved }
            }
            Err(rejection) => self.reject(facility, bus, rejection),
        }
    }

    /// Validates the request and computes the next board, if it changes.
    fn stage_edit(
        &self,
        facility: &FacilityId,
        bus: &BusId,
        edit: &StationEdit,
    ) -> Result<Option<Board>, EditRejection> {
        if !self.schema.contains(&edit.category_id) {
            return Err(EditRejection::UnknownCategory);
        }
        let board = self
            .boards
            .board(facility)
            .ok_or(EditRejection::UnknownFacility)?;

        match reassign_to_end(board, bus, &edit.category_id) {
            BoardChange::Moved { board, .. } => Ok(Some(board)),
            BoardChange::Unchanged(NoOpReason::AlreadyInCategory) => Ok(None),
            BoardChange::Unchanged(NoOpReason::TargetUnresolved) => {
                Err(EditRejection::UnknownCategory)
            }
            BoardChange::Unchanged(_) => Err(EditRejection::BusNotOnBoard),
        }
    }

    fn reject(&self, facility: &FacilityId, bus: &BusId, rejection: EditRejection) -> EditOutcome {
        warn!(
            "event=station_save module=service status=rejected reason={} facility={} bus={}",
            rejection, facility, bus
        );
        EditOutcome::Rejected(rejection)
    }
}
