//! FFI use-case API for Flutter-facing calls.
//!
//! # Responsibility
//! - Expose the dashboard mutation and read surface to Dart via FRB.
//! - Own the single process-wide dashboard controller.
//!
//! # Invariants
//! - Exported functions must not panic across FFI boundary.
//! - Mutations report applied/unchanged through response envelopes, never
//!   through errors.

use fleet_core::{
    core_version as core_version_inner, init_logging as init_logging_inner, load_config,
    BusDetail, BusId, BusSnapshot, CategoryId, DropTarget, EditOutcome, FacilityId, FleetConfig,
    InMemoryDashboard, MoveOutcome, StationEdit,
};
use log::error;
use once_cell::sync::OnceCell;
use std::sync::{Mutex, MutexGuard};

const CONFIG_PATH_ENV: &str = "FLEET_PULSE_CONFIG";
static DASHBOARD: OnceCell<Mutex<InMemoryDashboard>> = OnceCell::new();

/// Expose core crate version through FFI.
///
/// # FFI contract
/// - Sync call, non-blocking.
/// - Never throws; always returns a UTF-8 string.
#[flutter_rust_bridge::frb(sync)]
pub fn core_version() -> String {
    core_version_inner().to_owned()
}

/// Initializes Rust core logging once per process.
///
/// # FFI contract
/// - Safe to call repeatedly with the same `level + log_dir`.
/// - Returns empty string on success and error message on failure.
#[flutter_rust_bridge::frb(sync)]
pub fn init_logging(level: String, log_dir: String) -> String {
    match init_logging_inner(level.as_str(), log_dir.as_str()) {
        Ok(()) => String::new(),
        Err(err) => err,
    }
}

/// Facility option for the facility selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FacilityItem {
    pub id: String,
    pub name: String,
}

/// Bus card inside one dashboard column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusItem {
    pub bus_id: String,
    pub label: String,
}

/// Dashboard column in schema order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnItem {
    pub category_id: String,
    pub label: String,
    pub buses: Vec<BusItem>,
}

/// Board response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardResponse {
    pub ok: bool,
    pub facility_name: String,
    pub columns: Vec<ColumnItem>,
    pub message: String,
}

/// Mutation response envelope.
///
/// `applied=false` with `ok=true` means the request was valid but left state
/// unchanged (e.g. a drop on the bus's own slot).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MutationResponse {
    pub ok: bool,
    pub applied: bool,
    pub message: String,
}

impl MutationResponse {
    fn applied(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            applied: true,
            message: message.into(),
        }
    }

    fn unchanged(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            applied: false,
            message: message.into(),
        }
    }

    fn failure(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            applied: false,
            message: message.into(),
        }
    }
}

/// Snapshot modal payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnapshotItem {
    pub bus_id: String,
    pub label: String,
    pub facility_id: String,
    pub status: Option<String>,
    pub status_label: Option<String>,
    pub battery_pct: Option<u8>,
    pub alert_count: Option<u32>,
    pub last_updated: Option<String>,
    pub notes: Option<String>,
}

/// Station editor form prefill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationDraftResponse {
    pub ok: bool,
    pub bus_id: String,
    pub category_id: String,
    pub last_service: String,
    pub notes: String,
    pub message: String,
}

/// Bus entry on the station management page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationCardItem {
    pub bus_id: String,
    pub label: String,
    pub status: Option<String>,
    pub last_service: Option<String>,
    pub notes: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationSectionItem {
    pub category_id: String,
    pub label: String,
    pub bus_count: u32,
    pub cards: Vec<StationCardItem>,
}

/// Station page response envelope.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StationViewResponse {
    pub ok: bool,
    pub title: String,
    pub sections: Vec<StationSectionItem>,
    pub message: String,
}

/// Bus detail page response envelope.
///
/// `category_id` is empty when the bus is not on its home board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusDetailResponse {
    pub ok: bool,
    pub bus_id: String,
    pub label: String,
    pub facility_id: String,
    pub category_id: String,
    pub status: Option<String>,
    pub last_service: Option<String>,
    pub notes: Option<String>,
    pub message: String,
}

/// Lists facilities in configured order.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_facilities() -> Vec<FacilityItem> {
    with_dashboard(|dashboard| {
        dashboard
            .facilities()
            .iter()
            .map(|facility| FacilityItem {
                id: facility.id.to_string(),
                name: facility.name.clone(),
            })
            .collect()
    })
    .unwrap_or_default()
}

/// Loads the dashboard columns of one facility.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_board(facility_id: String) -> BoardResponse {
    let facility = FacilityId::new(facility_id.trim());
    let view = match with_dashboard(|dashboard| dashboard.board_view(&facility)) {
        Ok(Some(view)) => view,
        Ok(None) => return board_failure(format!("unknown facility: {facility}")),
        Err(err) => return board_failure(err),
    };

    BoardResponse {
        ok: true,
        facility_name: view.facility_name,
        columns: view
            .columns
            .into_iter()
            .map(|column| ColumnItem {
                category_id: column.category_id.to_string(),
                label: column.label,
                buses: column
                    .buses
                    .into_iter()
                    .map(|card| BusItem {
                        bus_id: card.bus_id.to_string(),
                        label: card.label,
                    })
                    .collect(),
            })
            .collect(),
        message: String::new(),
    }
}

/// Applies a drag-and-drop move.
///
/// Input semantics:
/// - `target_kind`: `category` (drop on column space) or `bus` (drop on card).
/// - `target_id`: category id or bus id matching `target_kind`.
#[flutter_rust_bridge::frb(sync)]
pub fn dashboard_move(
    facility_id: String,
    bus_id: String,
    target_kind: String,
    target_id: String,
) -> MutationResponse {
    let target = match target_kind.trim() {
        "category" => DropTarget::category(target_id.trim()),
        "bus" => DropTarget::bus(target_id.trim()),
        other => {
            return MutationResponse::failure(format!(
                "unsupported target kind `{other}`; expected category|bus"
            ))
        }
    };
    let facility = FacilityId::new(facility_id.trim());
    let bus = BusId::new(bus_id.trim());

    match with_dashboard(|dashboard| dashboard.move_bus(&facility, &bus, &target)) {
        Ok(MoveOutcome::Applied { from, to }) => {
            MutationResponse::applied(format!("Moved {bus} from {from} to {to}."))
        }
        Ok(MoveOutcome::Unchanged(reason)) => MutationResponse::unchanged(reason.to_string()),
        Err(err) => MutationResponse::failure(err),
    }
}

/// Saves a station editor form.
#[flutter_rust_bridge::frb(sync)]
pub fn station_save_edit(
    facility_id: String,
    bus_id: String,
    category_id: String,
    last_service: String,
    notes: String,
) -> MutationResponse {
    let facility = FacilityId::new(facility_id.trim());
    let bus = BusId::new(bus_id.trim());
    let edit = StationEdit {
        category_id: CategoryId::new(category_id.trim()),
        last_service,
        notes,
    };

    match with_dashboard(|dashboard| dashboard.save_edit(&facility, &bus, &edit)) {
        Ok(EditOutcome::Applied { moved: true }) => {
            MutationResponse::applied(format!("Saved {bus} and moved to {}.", edit.category_id))
        }
        Ok(EditOutcome::Applied { moved: false }) => {
            MutationResponse::applied(format!("Saved {bus}."))
        }
        Ok(EditOutcome::Rejected(rejection)) => MutationResponse::failure(rejection.to_string()),
        Err(err) => MutationResponse::failure(err),
    }
}

/// Loads the station editor prefill for one bus.
///
/// Fails for buses that are not on the facility board.
#[flutter_rust_bridge::frb(sync)]
pub fn station_draft(facility_id: String, bus_id: String) -> StationDraftResponse {
    let facility = FacilityId::new(facility_id.trim());
    let bus = BusId::new(bus_id.trim());
    match with_dashboard(|dashboard| dashboard.open_edit(&facility, &bus)) {
        Ok(Some(draft)) => StationDraftResponse {
            ok: true,
            bus_id: draft.bus_id.to_string(),
            category_id: draft.category_id.to_string(),
            last_service: draft.last_service,
            notes: draft.notes,
            message: String::new(),
        },
        Ok(None) => draft_failure(format!("bus {bus} is not on board {facility}")),
        Err(err) => draft_failure(err),
    }
}

/// Loads the station management page of one facility.
#[flutter_rust_bridge::frb(sync)]
pub fn station_view(facility_id: String) -> StationViewResponse {
    let facility = FacilityId::new(facility_id.trim());
    let view = match with_dashboard(|dashboard| dashboard.station_view(&facility)) {
        Ok(Some(view)) => view,
        Ok(None) => return station_failure(format!("unknown facility: {facility}")),
        Err(err) => return station_failure(err),
    };

    StationViewResponse {
        ok: true,
        title: view.title,
        sections: view
            .sections
            .into_iter()
            .map(|section| StationSectionItem {
                category_id: section.category_id.to_string(),
                label: section.label,
                bus_count: u32::try_from(section.bus_count).unwrap_or(u32::MAX),
                cards: section
                    .cards
                    .into_iter()
                    .map(|card| {
                        let BusDetail {
                            status,
                            last_service,
                            notes,
                        } = card.detail;
                        StationCardItem {
                            bus_id: card.bus_id.to_string(),
                            label: card.label,
                            status,
                            last_service,
                            notes,
                        }
                    })
                    .collect(),
            })
            .collect(),
        message: String::new(),
    }
}

/// Loads the detail page of one registered bus.
#[flutter_rust_bridge::frb(sync)]
pub fn bus_detail(bus_id: String) -> BusDetailResponse {
    let bus = BusId::new(bus_id.trim());
    match with_dashboard(|dashboard| dashboard.bus_detail_view(&bus)) {
        Ok(Some(view)) => BusDetailResponse {
            ok: true,
            bus_id: view.descriptor.id.to_string(),
            label: view.descriptor.label,
            facility_id: view.descriptor.facility_id.to_string(),
            category_id: view
                .category
                .map(|category| category.to_string())
                .unwrap_or_default(),
            status: view.detail.status,
            last_service: view.detail.last_service,
            notes: view.detail.notes,
            message: String::new(),
        },
        Ok(None) => detail_failure(format!("unknown bus: {bus}")),
        Err(err) => detail_failure(err),
    }
}

/// Category currently holding the bus on the facility board.
///
/// `None` for unknown facilities and for buses not on the board.
#[flutter_rust_bridge::frb(sync)]
pub fn bus_location(facility_id: String, bus_id: String) -> Option<String> {
    let facility = FacilityId::new(facility_id.trim());
    let bus = BusId::new(bus_id.trim());
    match with_dashboard(|dashboard| dashboard.locate_container(&facility, &bus)) {
        Ok(category) => category.map(|category| category.to_string()),
        Err(err) => {
            error!("event=ffi_call module=ffi status=error call=bus_location error={err}");
            None
        }
    }
}

/// Opens the snapshot modal for one bus; `None` for unknown buses.
#[flutter_rust_bridge::frb(sync)]
pub fn snapshot_open(bus_id: String) -> Option<SnapshotItem> {
    let bus = BusId::new(bus_id.trim());
    with_dashboard(|dashboard| dashboard.open_snapshot(&bus))
        .ok()
        .flatten()
        .map(to_snapshot_item)
}

/// Closes the snapshot modal.
#[flutter_rust_bridge::frb(sync)]
pub fn snapshot_close() {
    if let Err(err) = with_dashboard(|dashboard| dashboard.close_snapshot()) {
        error!("event=ffi_call module=ffi status=error call=snapshot_close error={err}");
    }
}

/// Snapshot of the bus currently shown in the modal, recomputed from the
/// latest board and detail state.
#[flutter_rust_bridge::frb(sync)]
pub fn snapshot_current() -> Option<SnapshotItem> {
    match with_dashboard(|dashboard| dashboard.current_snapshot()) {
        Ok(snapshot) => snapshot.map(to_snapshot_item),
        Err(err) => {
            error!("event=ffi_call module=ffi status=error call=snapshot_current error={err}");
            None
        }
    }
}

fn board_failure(message: impl Into<String>) -> BoardResponse {
    BoardResponse {
        ok: false,
        facility_name: String::new(),
        columns: Vec::new(),
        message: message.into(),
    }
}

fn draft_failure(message: impl Into<String>) -> StationDraftResponse {
    StationDraftResponse {
        ok: false,
        bus_id: String::new(),
        category_id: String::new(),
        last_service: String::new(),
        notes: String::new(),
        message: message.into(),
    }
}

fn station_failure(message: impl Into<String>) -> StationViewResponse {
    StationViewResponse {
        ok: false,
        title: String::new(),
        sections: Vec::new(),
        message: message.into(),
    }
}

fn detail_failure(message: impl Into<String>) -> BusDetailResponse {
    BusDetailResponse {
        ok: false,
        bus_id: String::new(),
        label: String::new(),
        facility_id: String::new(),
        category_id: String::new(),
        status: None,
        last_service: None,
        notes: None,
        message: message.into(),
    }
}

fn to_snapshot_item(snapshot: BusSnapshot) -> SnapshotItem {
    SnapshotItem {
        bus_id: snapshot.bus_id.to_string(),
        label: snapshot.label,
        facility_id: snapshot.facility_id.to_string(),
        status: snapshot.status.map(|category| category.to_string()),
        status_label: snapshot.status_label,
        battery_pct: snapshot.stats.battery_pct,
        alert_count: snapshot.stats.alert_count,
        last_updated: snapshot.stats.last_updated,
        notes: snapshot.stats.notes,
    }
}

fn with_dashboard<T>(f: impl FnOnce(&mut InMemoryDashboard) -> T) -> Result<T, String> {
    let cell = DASHBOARD.get_or_try_init(|| {
        load_dashboard_config().map(|config| Mutex::new(InMemoryDashboard::from_config(&config)))
    })?;
    let mut guard: MutexGuard<'_, InMemoryDashboard> = cell.lock().map_err(|_| {
        error!("event=ffi_call module=ffi status=error reason=dashboard_lock_poisoned");
        "dashboard state is unavailable".to_string()
    })?;
    Ok(f(&mut guard))
}

fn load_dashboard_config() -> Result<FleetConfig, String> {
    let configured = std::env::var(CONFIG_PATH_ENV)
        .ok()
        .map(|raw| raw.trim().to_string())
        .filter(|raw| !raw.is_empty());
    let loaded = match configured {
        Some(path) => load_config(path),
        None => FleetConfig::builtin(),
    };
    loaded.map_err(|err| format!("dashboard config load failed: {err}"))
}
