use fleet_core::{
    BusDetail, BusId, CategoryId, DropTarget, EditOutcome, EditRejection, FacilityId,
    FleetConfig, InMemoryDashboard, MoveOutcome, StationEdit,
};

fn setup() -> InMemoryDashboard {
    let config = FleetConfig::builtin().expect("builtin config");
    InMemoryDashboard::from_config(&config)
}

fn facility_a() -> FacilityId {
    FacilityId::new("facility_a")
}

fn column(dashboard: &InMemoryDashboard, facility: &FacilityId, category: &str) -> Vec<String> {
    dashboard
        .board(facility)
        .and_then(|board| board.column(&CategoryId::new(category)))
        .unwrap_or_default()
        .iter()
        .map(|bus| bus.to_string())
        .collect()
}

fn edit(category: &str, last_service: &str, notes: &str) -> StationEdit {
    StationEdit {
        category_id: CategoryId::new(category),
        last_service: last_service.to_string(),
        notes: notes.to_string(),
    }
}

#[test]
fn save_with_new_category_moves_bus_to_end_and_stores_detail() {
    let mut dashboard = setup();
    let bus = BusId::new("bus-101");

    let outcome = dashboard.save_edit(&facility_a(), &bus, &edit("storage", "2024-02-01", "x"));
    assert_eq!(outcome, EditOutcome::Applied { moved: true });

    assert_eq!(column(&dashboard, &facility_a(), "maintenance"), vec!["bus-102", "bus-103"]);
    assert_eq!(
        column(&dashboard, &facility_a(), "storage"),
        vec!["bus-104", "bus-105", "bus-101"]
    );
    assert_eq!(
        dashboard.bus_detail(&bus),
        Some(&BusDetail {
            status: None,
            last_service: Some("2024-02-01".to_string()),
            notes: Some("x".to_string()),
        })
    );
}

#[test]
fn save_with_current_category_keeps_board_and_updates_detail() {
    let mut dashboard = setup();
    let bus = BusId::new("bus-107");
    let before = dashboard.board(&facility_a()).cloned();

    let outcome = dashboard.save_edit(&facility_a(), &bus, &edit("in_service", "", "tyres ok"));
    assert_eq!(outcome, EditOutcome::Applied { moved: false });
    assert_eq!(dashboard.board(&facility_a()).cloned(), before);
    assert_eq!(
        dashboard.bus_detail(&bus).and_then(|detail| detail.notes.as_deref()),
        Some("tyres ok")
    );
    assert_eq!(
        dashboard.bus_detail(&bus).and_then(|detail| detail.last_service.clone()),
        None
    );
}

#[test]
fn save_with_unknown_category_changes_nothing() {
    let mut dashboard = setup();
    let bus = BusId::new("bus-101");
    let before = dashboard.board(&facility_a()).cloned();

    let outcome = dashboard.save_edit(&facility_a(), &bus, &edit("scrapyard", "2024-02-01", "x"));
    assert_eq!(outcome, EditOutcome::Rejected(EditRejection::UnknownCategory));
    assert_eq!(dashboard.board(&facility_a()).cloned(), before);
    assert!(dashboard.bus_detail(&bus).is_none());
}

#[test]
fn save_for_unassigned_bus_is_rejected_whole() {
    let mut dashboard = setup();
    let bus = BusId::new("bus-203");
    let facility = FacilityId::new("facility_b");

    let outcome = dashboard.save_edit(&facility, &bus, &edit("storage", "2024-02-01", "x"));
    assert_eq!(outcome, EditOutcome::Rejected(EditRejection::BusNotOnBoard));
    assert!(dashboard.bus_detail(&bus).is_none());
    assert_eq!(dashboard.locate_container(&facility, &bus), None);
}

#[test]
fn save_on_unknown_facility_is_rejected() {
    let mut dashboard = setup();
    let outcome = dashboard.save_edit(
        &FacilityId::new("facility_z"),
        &BusId::new("bus-101"),
        &edit("storage", "", ""),
    );
    assert_eq!(outcome, EditOutcome::Rejected(EditRejection::UnknownFacility));
}

#[test]
fn open_edit_prefills_from_current_state() {
    let mut dashboard = setup();
    let bus = BusId::new("bus-104");

    let draft = dashboard.open_edit(&facility_a(), &bus).expect("draft for seeded bus");
    assert_eq!(draft.category_id, CategoryId::new("storage"));
    assert_eq!(draft.last_service, "");
    assert_eq!(draft.notes, "");

    let mut changed = draft.to_edit();
    changed.category_id = CategoryId::new("long_term");
    changed.notes = "waiting on parts".to_string();
    assert!(dashboard.save_edit(&facility_a(), &bus, &changed).is_applied());

    let reopened = dashboard.open_edit(&facility_a(), &bus).expect("draft after save");
    assert_eq!(reopened.category_id, CategoryId::new("long_term"));
    assert_eq!(reopened.notes, "waiting on parts");
}

#[test]
fn open_edit_defaults_category_for_unassigned_bus() {
    let dashboard = setup();
    let draft = dashboard
        .open_edit(&FacilityId::new("facility_b"), &BusId::new("bus-203"))
        .expect("registered bus gets a draft");
    assert_eq!(draft.category_id, CategoryId::new("maintenance"));

    assert!(dashboard
        .open_edit(&facility_a(), &BusId::new("bus-201"))
        .is_none());
}

#[test]
fn drag_and_editor_changes_compose_on_the_same_board() {
    let mut dashboard = setup();
    let facility = facility_a();

    let outcome = dashboard.move_bus(
        &facility,
        &BusId::new("bus-110"),
        &DropTarget::bus("bus-101"),
    );
    assert_eq!(
        outcome,
        MoveOutcome::Applied {
            from: CategoryId::new("long_term"),
            to: CategoryId::new("maintenance"),
        }
    );

    let saved = dashboard.save_edit(
        &facility,
        &BusId::new("bus-110"),
        &edit("long_term", "2024-03-10", ""),
    );
    assert_eq!(saved, EditOutcome::Applied { moved: true });
    assert_eq!(
        column(&dashboard, &facility, "maintenance"),
        vec!["bus-101", "bus-102", "bus-103"]
    );
    assert_eq!(column(&dashboard, &facility, "long_term"), vec!["bus-110"]);
}

#[test]
fn save_stores_notes_exactly_as_entered() {
    let mut dashboard = setup();
    let bus = BusId::new("bus-101");
    let notes = "  line one\nline two\n";

    let outcome =
        dashboard.save_edit(&facility_a(), &bus, &edit("maintenance", "2024-02-01", notes));
    assert_eq!(outcome, EditOutcome::Applied { moved: false });
    assert_eq!(
        dashboard.bus_detail(&bus).and_then(|detail| detail.notes.as_deref()),
        Some(notes)
    );

    let draft = dashboard.open_edit(&facility_a(), &bus).expect("bus on board");
    assert_eq!(draft.notes, notes);
}
