use fleet_core::{
    BusId, CategoryId, DropTarget, FacilityId, FleetConfig, InMemoryDashboard, MoveOutcome,
    NoOpReason, StationEdit,
};

fn setup() -> InMemoryDashboard {
    let config = FleetConfig::builtin().expect("builtin config");
    InMemoryDashboard::from_config(&config)
}

#[test]
fn board_view_lists_columns_in_schema_order() {
    let dashboard = setup();
    let view = dashboard
        .board_view(&FacilityId::new("facility_a"))
        .expect("facility_a board view");

    assert_eq!(view.facility_name, "Facility A");
    let labels: Vec<&str> = view.columns.iter().map(|column| column.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Maintenance", "Storage", "In Service", "Long Term Maintenance"]
    );
    let maintenance: Vec<&str> = view.columns[0]
        .buses
        .iter()
        .map(|card| card.label.as_str())
        .collect();
    assert_eq!(maintenance, vec!["101", "102", "103"]);
}

#[test]
fn unknown_facility_has_no_views_and_moves_are_no_ops() {
    let mut dashboard = setup();
    let facility = FacilityId::new("facility_z");
    assert!(dashboard.board_view(&facility).is_none());
    assert!(dashboard.station_view(&facility).is_none());
    assert_eq!(
        dashboard.move_bus(&facility, &BusId::new("bus-101"), &DropTarget::category("storage")),
        MoveOutcome::Unchanged(NoOpReason::UnknownFacility)
    );
}

#[test]
fn move_on_wrong_facility_board_is_a_no_op() {
    let mut dashboard = setup();
    let facility_b = FacilityId::new("facility_b");
    let before = dashboard.board(&facility_b).cloned();

    let outcome = dashboard.move_bus(
        &facility_b,
        &BusId::new("bus-101"),
        &DropTarget::category("storage"),
    );
    assert_eq!(outcome, MoveOutcome::Unchanged(NoOpReason::BusNotOnBoard));
    assert_eq!(dashboard.board(&facility_b).cloned(), before);
}

#[test]
fn snapshot_follows_board_and_selection() {
    let mut dashboard = setup();
    let bus = BusId::new("bus-101");

    let snapshot = dashboard.open_snapshot(&bus).expect("snapshot for registered bus");
    assert_eq!(snapshot.label, "101");
    assert_eq!(snapshot.facility_id, FacilityId::new("facility_a"));
    assert_eq!(snapshot.status, Some(CategoryId::new("maintenance")));
    assert_eq!(snapshot.status_label.as_deref(), Some("Maintenance"));
    assert_eq!(snapshot.stats.battery_pct, Some(78));
    assert_eq!(snapshot.stats.alert_count, Some(1));

    dashboard.move_bus(
        &FacilityId::new("facility_a"),
        &bus,
        &DropTarget::category("in_service"),
    );
    let current = dashboard.current_snapshot().expect("selection is still open");
    assert_eq!(current.status, Some(CategoryId::new("in_service")));

    dashboard.close_snapshot();
    assert!(dashboard.snapshot_bus().is_none());
    assert!(dashboard.current_snapshot().is_none());
}

#[test]
fn snapshot_for_unknown_bus_keeps_previous_selection() {
    let mut dashboard = setup();
    dashboard.open_snapshot(&BusId::new("bus-106"));
    assert!(dashboard.open_snapshot(&BusId::new("bus-999")).is_none());
    assert_eq!(dashboard.snapshot_bus(), Some(&BusId::new("bus-106")));

    let unassigned = dashboard
        .open_snapshot(&BusId::new("bus-203"))
        .expect("registered bus");
    assert_eq!(unassigned.status, None);
    assert_eq!(unassigned.stats.battery_pct, None);
}

#[test]
fn station_and_detail_views_reflect_saved_details() {
    let mut dashboard = setup();
    let facility = FacilityId::new("facility_b");
    let bus = BusId::new("bus-206");
    dashboard.save_edit(
        &facility,
        &bus,
        &StationEdit {
            category_id: CategoryId::new("maintenance"),
            last_service: "2024-02-01".to_string(),
            notes: "HVAC".to_string(),
        },
    );

    let station = dashboard.station_view(&facility).expect("station view");
    assert_eq!(station.title, "Facility B");
    let maintenance = &station.sections[0];
    assert_eq!(maintenance.bus_count, 3);
    let card = maintenance.cards.last().expect("moved bus card");
    assert_eq!(card.bus_id, bus);
    assert_eq!(card.detail.notes.as_deref(), Some("HVAC"));

    let detail = dashboard.bus_detail_view(&bus).expect("detail view");
    assert_eq!(detail.descriptor.label, "206");
    assert_eq!(detail.category, Some(CategoryId::new("maintenance")));
    assert_eq!(detail.detail.last_service.as_deref(), Some("2024-02-01"));
}
