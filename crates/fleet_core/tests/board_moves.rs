use fleet_core::{
    check_membership, locate_container, move_bus, Board, BoardChange, BusId, CategoryId,
    DropTarget, FleetConfig, NoOpReason,
};

fn board(columns: &[(&str, &[&str])]) -> Board {
    Board::from_columns(columns.iter().map(|(category, buses)| {
        (
            CategoryId::new(*category),
            buses.iter().map(|bus| BusId::new(*bus)).collect(),
        )
    }))
}

fn scenario_board() -> Board {
    board(&[
        ("maintenance", &["bus-101", "bus-102"]),
        ("storage", &["bus-104"]),
    ])
}

fn applied(change: BoardChange) -> Board {
    match change {
        BoardChange::Moved { board, .. } => board,
        BoardChange::Unchanged(reason) => panic!("expected applied move, got {reason}"),
    }
}

fn column_len(board: &Board, category: &CategoryId) -> usize {
    board.column(category).map(<[BusId]>::len).unwrap_or(0)
}

#[test]
fn drop_on_other_column_space_appends_to_end() {
    let next = applied(move_bus(
        &scenario_board(),
        &BusId::new("bus-101"),
        &DropTarget::category("storage"),
    ));
    assert_eq!(
        next,
        board(&[("maintenance", &["bus-102"]), ("storage", &["bus-104", "bus-101"])])
    );
}

#[test]
fn drop_on_earlier_bus_in_same_column_reorders() {
    let next = applied(move_bus(
        &scenario_board(),
        &BusId::new("bus-102"),
        &DropTarget::bus("bus-101"),
    ));
    assert_eq!(
        next,
        board(&[("maintenance", &["bus-102", "bus-101"]), ("storage", &["bus-104"])])
    );
}

#[test]
fn absent_bus_leaves_board_unchanged() {
    let input = scenario_board();
    let change = move_bus(&input, &BusId::new("bus-999"), &DropTarget::category("storage"));
    assert_eq!(change, BoardChange::Unchanged(NoOpReason::BusNotOnBoard));
    assert_eq!(input, scenario_board());
}

#[test]
fn drop_on_self_is_a_no_op() {
    let change = move_bus(
        &scenario_board(),
        &BusId::new("bus-101"),
        &DropTarget::bus("bus-101"),
    );
    assert_eq!(change, BoardChange::Unchanged(NoOpReason::SamePosition));
}

#[test]
fn drop_on_own_column_space_is_a_no_op() {
    let change = move_bus(
        &scenario_board(),
        &BusId::new("bus-101"),
        &DropTarget::category("maintenance"),
    );
    assert_eq!(
        change,
        BoardChange::Unchanged(NoOpReason::ColumnDropInSameCategory)
    );
}

#[test]
fn drop_on_unknown_bus_is_unresolved() {
    let change = move_bus(
        &scenario_board(),
        &BusId::new("bus-101"),
        &DropTarget::bus("bus-999"),
    );
    assert_eq!(change, BoardChange::Unchanged(NoOpReason::TargetUnresolved));
}

#[test]
fn locate_container_reports_owner_or_none() {
    let input = scenario_board();
    assert_eq!(
        locate_container(&input, &BusId::new("bus-104")),
        Some(CategoryId::new("storage"))
    );
    assert_eq!(locate_container(&input, &BusId::new("bus-105")), None);
}

/// Runs every bus against every possible target on the seed boards and checks
/// membership, size and no-op properties for each result.
#[test]
fn every_seed_move_preserves_board_invariants() {
    let config = FleetConfig::builtin().expect("builtin config");
    let registry = config.registry();

    for (facility, input) in config.seed_boards() {
        let buses: Vec<BusId> = input.bus_set().into_iter().collect();
        let mut targets: Vec<DropTarget> = input
            .categories()
            .cloned()
            .map(DropTarget::Category)
            .collect();
        targets.extend(buses.iter().cloned().map(DropTarget::Bus));

        for bus in &buses {
            for target in &targets {
                let from = locate_container(&input, bus).expect("seed bus is on board");
                match move_bus(&input, bus, target) {
                    BoardChange::Moved { board: next, from: moved_from, to } => {
                        assert_eq!(moved_from, from);
                        check_membership(&next, &facility, &registry)
                            .unwrap_or_else(|err| panic!("{facility}: {err}"));
                        assert_eq!(next.bus_set(), input.bus_set());
                        assert_eq!(locate_container(&next, bus), Some(to.clone()));

                        if from == to {
                            assert_eq!(column_len(&next, &from), column_len(&input, &from));
                        } else {
                            assert_eq!(
                                column_len(&next, &from) + column_len(&next, &to),
                                column_len(&input, &from) + column_len(&input, &to)
                            );
                            assert_eq!(column_len(&next, &from), column_len(&input, &from) - 1);
                        }
                    }
                    BoardChange::Unchanged(reason) => {
                        assert!(
                            matches!(
                                reason,
                                NoOpReason::SamePosition | NoOpReason::ColumnDropInSameCategory
                            ),
                            "unexpected no-op {reason} for {bus} -> {target:?}"
                        );
                    }
                }
            }
        }
        assert!(registry.buses_for(&facility).next().is_some());
    }
}

#[test]
fn cross_move_keeps_relative_order_of_remaining_buses() {
    let input = board(&[
        ("in_service", &["bus-106", "bus-107", "bus-108", "bus-109"]),
        ("long_term", &["bus-110"]),
    ]);
    let next = applied(move_bus(&input, &BusId::new("bus-107"), &DropTarget::bus("bus-110")));
    assert_eq!(
        next,
        board(&[
            ("in_service", &["bus-106", "bus-108", "bus-109"]),
            ("long_term", &["bus-107", "bus-110"]),
        ])
    );
}
