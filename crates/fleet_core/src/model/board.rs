//! Board domain model.
//!
//! # Responsibility
//! - Hold one facility's assignment of buses to ordered category sequences.
//! - Provide read helpers for container lookup and insertion indices.
//!
//! # Invariants
//! - A bus appears in at most one category sequence of a board.
//! - Sequence order is display order and is preserved by every mutation.
//! - Boards are values: mutation engine functions return new boards.

use crate::model::ids::{BusId, CategoryId, FacilityId};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// Per-facility boards keyed by facility id.
pub type FacilityBoards = BTreeMap<FacilityId, Board>;

/// Mapping of category id to ordered bus sequence for one facility.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Board {
    columns: BTreeMap<CategoryId, Vec<BusId>>,
}

impl Board {
    /// Creates a board with no categories.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a board with one empty sequence per category.
    pub fn with_categories<I>(categories: I) -> Self
    where
        I: IntoIterator<Item = CategoryId>,
    {
        Self::from_columns(categories.into_iter().map(|id| (id, Vec::new())))
    }

    /// Creates a board from `(category, sequence)` pairs.
    ///
    /// A repeated category keeps the last sequence given for it.
    pub fn from_columns<I>(columns: I) -> Self
    where
        I: IntoIterator<Item = (CategoryId, Vec<BusId>)>,
    {
        Self {
            columns: columns.into_iter().collect(),
        }
    }

    /// Adds an empty sequence for `category` when it is missing.
    pub fn ensure_category(&mut self, category: CategoryId) {
        self.columns.entry(category).or_default();
    }

    pub fn has_category(&self, category: &CategoryId) -> bool {
        self.columns.contains_key(category)
    }

    /// Returns the ordered sequence for one category.
    pub fn column(&self, category: &CategoryId) -> Option<&[BusId]> {
        self.columns.get(category).map(Vec::as_slice)
    }

    /// Iterates `(category, sequence)` pairs in category id order.
    pub fn columns(&self) -> impl Iterator<Item = (&CategoryId, &[BusId])> {
        self.columns.iter().map(|(id, buses)| (id, buses.as_slice()))
    }

    pub fn categories(&self) -> impl Iterator<Item = &CategoryId> {
        self.columns.keys()
    }

    /// Returns the first category whose sequence contains `bus`.
    pub fn locate(&self, bus: &BusId) -> Option<&CategoryId> {
        self.columns
            .iter()
            .find(|(_, buses)| buses.contains(bus))
            .map(|(id, _)| id)
    }

    /// Returns the index of `bus` inside `category`, if present there.
    pub fn position(&self, category: &CategoryId, bus: &BusId) -> Option<usize> {
        self.columns
            .get(category)
            .and_then(|buses| buses.iter().position(|id| id == bus))
    }

    pub fn contains_bus(&self, bus: &BusId) -> bool {
        self.locate(bus).is_some()
    }

    /// Returns every bus on the board as a set.
    pub fn bus_set(&self) -> BTreeSet<BusId> {
        self.columns.values().flatten().cloned().collect()
    }

    /// Total number of bus slots across all categories.
    pub fn bus_count(&self) -> usize {
        self.columns.values().map(Vec::len).sum()
    }

    /// Returns buses that occupy more than one slot, in first-seen order.
    pub fn duplicate_buses(&self) -> Vec<BusId> {
        let mut seen = BTreeSet::new();
        let mut duplicates = Vec::new();
        for bus in self.columns.values().flatten() {
            if !seen.insert(bus) && !duplicates.contains(bus) {
                duplicates.push(bus.clone());
            }
        }
        duplicates
    }

    pub(crate) fn column_mut(&mut self, category: &CategoryId) -> Option<&mut Vec<BusId>> {
        self.columns.get_mut(category)
    }
}

/// Where a drag gesture ended.
///
/// `Category` is a drop on column space (no insertion point); `Bus` is a drop
/// on a specific card, which fixes both destination and insertion index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "id", rename_all = "snake_case")]
pub enum DropTarget {
    Category(CategoryId),
    Bus(BusId),
}

impl DropTarget {
    pub fn category(id: impl Into<CategoryId>) -> Self {
        Self::Category(id.into())
    }

    pub fn bus(id: impl Into<BusId>) -> Self {
        Self::Bus(id.into())
    }
}
