//! Drag-and-drop move and editor reassignment over one facility board.

use crate::model::board::{Board, DropTarget};
use crate::model::ids::{BusId, CategoryId};
use std::fmt::{Display, Formatter};

/// Why a mutation request left state unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOpReason {
    /// Facility is not known to the board store.
    UnknownFacility,
    /// Moved bus is not in any category of the board.
    BusNotOnBoard,
    /// Drop target names neither a board category nor a bus on the board.
    TargetUnresolved,
    /// Bus was dropped onto its own slot.
    SamePosition,
    /// Bus was dropped on empty space of the column it already sits in.
    ColumnDropInSameCategory,
    /// Editor target category equals the current one.
    AlreadyInCategory,
}

impl Display for NoOpReason {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::UnknownFacility => "unknown_facility",
            Self::BusNotOnBoard => "bus_not_on_board",
            Self::TargetUnresolved => "target_unresolved",
            Self::SamePosition => "same_position",
            Self::ColumnDropInSameCategory => "column_drop_in_same_category",
            Self::AlreadyInCategory => "already_in_category",
        };
        f.write_str(text)
    }
}

/// Result of one engine computation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardChange {
    /// A new board to publish in place of the input.
    Moved {
        board: Board,
        from: CategoryId,
        to: CategoryId,
    },
    /// The input board stays current.
    Unchanged(NoOpReason),
}

/// Returns the category currently holding `bus`, or `None` when the bus is
/// not on this board.
pub fn locate_container(board: &Board, bus: &BusId) -> Option<CategoryId> {
    board.locate(bus).cloned()
}

/// Moves `bus` according to a drop gesture.
///
/// Same-category drops on another bus perform a stable array move. Drops on a
/// different category insert before the target bus, or append when the target
/// is the bare category.
pub fn move_bus(board: &Board, bus: &BusId, target: &DropTarget) -> BoardChange {
    let Some(from) = locate_container(board, bus) else {
        return BoardChange::Unchanged(NoOpReason::BusNotOnBoard);
    };
    let to = match target {
        DropTarget::Category(category) => board.has_category(category).then(|| category.clone()),
        DropTarget::Bus(over) => locate_container(board, over),
    };
    let Some(to) = to else {
        return BoardChange::Unchanged(NoOpReason::TargetUnresolved);
    };

    if from == to {
        reorder_within(board, bus, from, target)
    } else {
        move_across(board, bus, from, to, target)
    }
}

/// Moves `bus` to the end of `target`, as the station editor does.
pub fn reassign_to_end(board: &Board, bus: &BusId, target: &CategoryId) -> BoardChange {
    let Some(from) = locate_container(board, bus) else {
        return BoardChange::Unchanged(NoOpReason::BusNotOnBoard);
    };
    if !board.has_category(target) {
        return BoardChange::Unchanged(NoOpReason::TargetUnresolved);
    }
    if &from == target {
        return BoardChange::Unchanged(NoOpReason::AlreadyInCategory);
    }

    let mut next = board.clone();
    remove_from(&mut next, &from, bus);
    if let Some(column) = next.column_mut(target) {
        column.push(bus.clone());
    }
    BoardChange::Moved {
        board: next,
        from,
        to: target.clone(),
    }
}

/// Removes the element at `from` and reinserts it at `to`.
///
/// Intervening elements shift by one. Out-of-range indices leave `items`
/// untouched.
pub fn array_move<T>(items: &mut Vec<T>, from: usize, to: usize) {
    if from >= items.len() || to >= items.len() || from == to {
        return;
    }
    let item = items.remove(from);
    items.insert(to, item);
}

fn reorder_within(
    board: &Board,
    bus: &BusId,
    category: CategoryId,
    target: &DropTarget,
) -> BoardChange {
    let over = match target {
        DropTarget::Bus(over) => over,
        DropTarget::Category(_) => {
            return BoardChange::Unchanged(NoOpReason::ColumnDropInSameCategory)
        }
    };
    let (Some(old_index), Some(new_index)) = (
        board.position(&category, bus),
        board.position(&category, over),
    ) else {
        return BoardChange::Unchanged(NoOpReason::TargetUnresolved);
    };
    if old_index == new_index {
        return BoardChange::Unchanged(NoOpReason::SamePosition);
    }

    let mut next = board.clone();
    if let Some(column) = next.column_mut(&category) {
        array_move(column, old_index, new_index);
    }
    BoardChange::Moved {
        board: next,
        from: category.clone(),
        to: category,
    }
}

fn move_across(
    board: &Board,
    bus: &BusId,
    from: CategoryId,
    to: CategoryId,
    target: &DropTarget,
) -> BoardChange {
    // `to != from`, so the insertion index is unaffected by the removal.
    let insert_at = match target {
        DropTarget::Bus(over) => board.position(&to, over),
        DropTarget::Category(_) => None,
    };

    let mut next = board.clone();
    remove_from(&mut next, &from, bus);
    if let Some(column) = next.column_mut(&to) {
        let index = insert_at.unwrap_or(column.len()).min(column.len());
        column.insert(index, bus.clone());
    }
    BoardChange::Moved {
        board: next,
        from,
        to,
    }
}

fn remove_from(board: &mut Board, category: &CategoryId, bus: &BusId) {
    if let Some(column) = board.column_mut(category) {
        column.retain(|id| id != bus);
    }
}
