//! Bus registry, category schema and facility directory.

use crate::model::ids::{BusDescriptor, BusId, CategoryId, FacilityId};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Static lookup from bus id to its immutable descriptor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BusRegistry {
    buses: BTreeMap<BusId, BusDescriptor>,
}

impl BusRegistry {
    /// Builds the registry. A repeated id keeps the last descriptor.
    pub fn new<I>(buses: I) -> Self
    where
        I: IntoIterator<Item = BusDescriptor>,
    {
        Self {
            buses: buses
                .into_iter()
                .map(|bus| (bus.id.clone(), bus))
                .collect(),
        }
    }

    pub fn get(&self, bus: &BusId) -> Option<&BusDescriptor> {
        self.buses.get(bus)
    }

    /// Returns the home facility of `bus`.
    pub fn home_facility(&self, bus: &BusId) -> Option<&FacilityId> {
        self.buses.get(bus).map(|descriptor| &descriptor.facility_id)
    }

    /// Iterates buses whose home is `facility`, in id order.
    pub fn buses_for<'a>(
        &'a self,
        facility: &'a FacilityId,
    ) -> impl Iterator<Item = &'a BusDescriptor> + 'a {
        self.buses
            .values()
            .filter(move |descriptor| &descriptor.facility_id == facility)
    }
}

/// One status category with its display label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategorySpec {
    pub id: CategoryId,
    pub label: String,
}

/// Ordered list of valid status categories.
///
/// Order drives column display; it carries no semantics for moves.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategorySchema {
    categories: Vec<CategorySpec>,
}

impl CategorySchema {
    pub fn new(categories: Vec<CategorySpec>) -> Self {
        Self { categories }
    }

    pub fn contains(&self, category: &CategoryId) -> bool {
        self.categories.iter().any(|spec| &spec.id == category)
    }

    pub fn label(&self, category: &CategoryId) -> Option<&str> {
        self.categories
            .iter()
            .find(|spec| &spec.id == category)
            .map(|spec| spec.label.as_str())
    }

    /// Category preselected by the station editor when a bus has none.
    pub fn default_category(&self) -> Option<&CategoryId> {
        self.categories.first().map(|spec| &spec.id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &CategorySpec> {
        self.categories.iter()
    }
}

/// One facility with its display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FacilitySpec {
    pub id: FacilityId,
    pub name: String,
}

/// Ordered facility list used by the facility selector.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacilityDirectory {
    facilities: Vec<FacilitySpec>,
}

impl FacilityDirectory {
    pub fn new(facilities: Vec<FacilitySpec>) -> Self {
        Self { facilities }
    }

    /// Display name, falling back to the raw id for unknown facilities.
    pub fn display_name(&self, facility: &FacilityId) -> String {
        self.facilities
            .iter()
            .find(|spec| &spec.id == facility)
            .map(|spec| spec.name.clone())
            .unwrap_or_else(|| facility.to_string())
    }

    pub fn iter(&self) -> impl Iterator<Item = &FacilitySpec> {
        self.facilities.iter()
    }
}
