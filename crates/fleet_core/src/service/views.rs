//! Read models consumed by the presentation layer.

use crate::model::detail::BusDetail;
use crate::model::ids::{BusDescriptor, BusId, CategoryId, FacilityId};
use crate::model::snapshot::SnapshotStats;
use crate::repo::board_repo::BoardRepository;
use crate::repo::detail_repo::DetailRepository;
use crate::service::dashboard::FleetDashboard;
use serde::Serialize;

/// Bus card shown inside a dashboard column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusCard {
    pub bus_id: BusId,
    pub label: String,
}

/// One dashboard column in schema order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnView {
    pub category_id: CategoryId,
    pub label: String,
    pub buses: Vec<BusCard>,
}

/// Dashboard board for one facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardView {
    pub facility_id: FacilityId,
    pub facility_name: String,
    pub columns: Vec<ColumnView>,
}

/// Station list entry with editable details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationCard {
    pub bus_id: BusId,
    pub label: String,
    pub detail: BusDetail,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationSection {
    pub category_id: CategoryId,
    pub label: String,
    pub bus_count: usize,
    pub cards: Vec<StationCard>,
}

/// Station management page for one facility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StationView {
    pub facility_id: FacilityId,
    pub title: String,
    pub sections: Vec<StationSection>,
}

/// Quick-view summary of one bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusSnapshot {
    pub bus_id: BusId,
    pub label: String,
    pub facility_id: FacilityId,
    /// Category currently holding the bus, if it is on its home board.
    pub status: Option<CategoryId>,
    pub status_label: Option<String>,
    pub stats: SnapshotStats,
}

/// Full detail page for one bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BusDetailView {
    pub descriptor: BusDescriptor,
    pub category: Option<CategoryId>,
    pub detail: BusDetail,
}

impl<B: BoardRepository, D: DetailRepository> FleetDashboard<B, D> {
    /// Builds the dashboard columns for `facility`.
    pub fn board_view(&self, facility: &FacilityId) -> Option<BoardView> {
        let board = self.boards.board(facility)?;
        let columns = self
            .schema
            .iter()
            .map(|spec| ColumnView {
                category_id: spec.id.clone(),
                label: spec.label.clone(),
                buses: board
                    .column(&spec.id)
                    .unwrap_or_default()
                    .iter()
                    .map(|bus| BusCard {
                        bus_id: bus.clone(),
                        label: self.bus_label(bus),
                    })
                    .collect(),
            })
            .collect();

        Some(BoardView {
            facility_id: facility.clone(),
            facility_name: self.facilities.display_name(facility),
            columns,
        })
    }

    /// Builds the station management listing for `facility`.
    pub fn station_view(&self, facility: &FacilityId) -> Option<StationView> {
        let board = self.boards.board(facility)?;
        let sections = self
            .schema
            .iter()
            .map(|spec| {
                let buses = board.column(&spec.id).unwrap_or_default();
                StationSection {
                    category_id: spec.id.clone(),
                    label: spec.label.clone(),
                    bus_count: buses.len(),
                    cards: buses
                        .iter()
                        .map(|bus| StationCard {
                            bus_id: bus.clone(),
                            label: self.bus_label(bus),
                            detail: self.details.detail(bus).cloned().unwrap_or_default(),
                        })
                        .collect(),
                }
            })
            .collect();

        Some(StationView {
            facility_id: facility.clone(),
            title: self.facilities.display_name(facility),
            sections,
        })
    }

    /// Builds the full detail page for a registered bus.
    pub fn bus_detail_view(&self, bus: &BusId) -> Option<BusDetailView> {
        let descriptor = self.registry.get(bus)?.clone();
        let category = self.locate_container(&descriptor.facility_id, bus);
        Some(BusDetailView {
            category,
            detail: self.details.detail(bus).cloned().unwrap_or_default(),
            descriptor,
        })
    }

    fn bus_label(&self, bus: &BusId) -> String {
        self.registry
            .get(bus)
            .map(|descriptor| descriptor.label.clone())
            .unwrap_or_else(|| bus.to_string())
    }
}
