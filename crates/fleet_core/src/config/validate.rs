//! Seed validation for `FleetConfig`.

use super::FleetConfig;
use crate::engine::membership::{check_membership, MembershipViolation};
use crate::model::ids::{is_valid_identifier, BusId, CategoryId, FacilityId};
use std::collections::BTreeSet;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Configuration invariant violations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigValidationError {
    EmptyCategories,
    EmptyFacilities,
    InvalidIdentifier {
        kind: &'static str,
        value: String,
    },
    EmptyLabel {
        kind: &'static str,
        id: String,
    },
    DuplicateCategory(CategoryId),
    DuplicateFacility(FacilityId),
    DuplicateBus(BusId),
    /// Bus declares a home facility that is not configured.
    UnknownHomeFacility {
        bus: BusId,
        facility: FacilityId,
    },
    /// Board seed is keyed by an undeclared facility.
    UnknownBoardFacility(FacilityId),
    /// Board seed uses a category outside the schema.
    UnknownBoardCategory {
        facility: FacilityId,
        category: CategoryId,
    },
    BoardMembership {
        facility: FacilityId,
        violation: MembershipViolation,
    },
    /// Snapshot stats reference an unregistered bus.
    UnknownSnapshotBus(BusId),
    BatteryOutOfRange {
        bus: BusId,
        value: u8,
    },
}

impl Display for ConfigValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyCategories => write!(f, "at least one category is required"),
            Self::EmptyFacilities => write!(f, "at least one facility is required"),
            Self::InvalidIdentifier { kind, value } => {
                write!(f, "invalid {kind} id: `{value}`")
            }
            Self::EmptyLabel { kind, id } => write!(f, "{kind} `{id}` has a blank label"),
            Self::DuplicateCategory(id) => write!(f, "duplicate category id: {id}"),
            Self::DuplicateFacility(id) => write!(f, "duplicate facility id: {id}"),
            Self::DuplicateBus(id) => write!(f, "duplicate bus id: {id}"),
            Self::UnknownHomeFacility { bus, facility } => {
                write!(f, "bus {bus} has unknown home facility {facility}")
            }
            Self::UnknownBoardFacility(id) => write!(f, "board seed for unknown facility {id}"),
            Self::UnknownBoardCategory { facility, category } => write!(
                f,
                "board seed for facility {facility} uses unknown category {category}"
            ),
            Self::BoardMembership {
                facility,
                violation,
            } => write!(f, "board seed for facility {facility}: {violation}"),
            Self::UnknownSnapshotBus(id) => write!(f, "snapshot stats for unknown bus {id}"),
            Self::BatteryOutOfRange { bus, value } => {
                write!(f, "battery_pct {value} for bus {bus} exceeds 100")
            }
        }
    }
}

impl Error for ConfigValidationError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::BoardMembership { violation, .. } => Some(violation),
            _ => None,
        }
    }
}

impl FleetConfig {
    /// Validates seed-level invariants.
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.categories.is_empty() {
            return Err(ConfigValidationError::EmptyCategories);
        }
        if self.facilities.is_empty() {
            return Err(ConfigValidationError::EmptyFacilities);
        }

        let mut category_ids = BTreeSet::new();
        for category in &self.categories {
            require_identifier("category", category.id.as_str())?;
            require_label("category", category.id.as_str(), category.label.as_str())?;
            if !category_ids.insert(&category.id) {
                return Err(ConfigValidationError::DuplicateCategory(
                    category.id.clone(),
                ));
            }
        }

        let mut facility_ids = BTreeSet::new();
        for facility in &self.facilities {
            require_identifier("facility", facility.id.as_str())?;
            require_label("facility", facility.id.as_str(), facility.name.as_str())?;
            if !facility_ids.insert(&facility.id) {
                return Err(ConfigValidationError::DuplicateFacility(
                    facility.id.clone(),
                ));
            }
        }

        let mut bus_ids = BTreeSet::new();
        for bus in &self.buses {
            require_identifier("bus", bus.id.as_str())?;
            require_label("bus", bus.id.as_str(), bus.label.as_str())?;
            if !bus_ids.insert(&bus.id) {
                return Err(ConfigValidationError::DuplicateBus(bus.id.clone()));
            }
            if !facility_ids.contains(&bus.facility_id) {
                return Err(ConfigValidationError::UnknownHomeFacility {
                    bus: bus.id.clone(),
                    facility: bus.facility_id.clone(),
                });
            }
        }

        let registry = self.registry();
        for (facility, board) in &self.boards {
            if !facility_ids.contains(facility) {
                return Err(ConfigValidationError::UnknownBoardFacility(
                    facility.clone(),
                ));
            }
            if let Some(category) = board.categories().find(|id| !category_ids.contains(id)) {
                return Err(ConfigValidationError::UnknownBoardCategory {
                    facility: facility.clone(),
                    category: category.clone(),
                });
            }
            check_membership(board, facility, &registry).map_err(|violation| {
                ConfigValidationError::BoardMembership {
                    facility: facility.clone(),
                    violation,
                }
            })?;
        }

        for (bus, stats) in &self.snapshot_stats {
            if !bus_ids.contains(bus) {
                return Err(ConfigValidationError::UnknownSnapshotBus(bus.clone()));
            }
            if let Some(value) = stats.battery_pct.filter(|value| *value > 100) {
                return Err(ConfigValidationError::BatteryOutOfRange {
                    bus: bus.clone(),
                    value,
                });
            }
        }

        Ok(())
    }
}

fn require_identifier(kind: &'static str, value: &str) -> Result<(), ConfigValidationError> {
    if is_valid_identifier(value) {
        Ok(())
    } else {
        Err(ConfigValidationError::InvalidIdentifier {
            kind,
            value: value.to_string(),
        })
    }
}

fn require_label(kind: &'static str, id: &str, label: &str) -> Result<(), ConfigValidationError> {
    if label.trim().is_empty() {
        return Err(ConfigValidationError::EmptyLabel {
            kind,
            id: id.to_string(),
        });
    }
    Ok(())
}
