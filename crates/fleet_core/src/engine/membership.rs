//! Board membership checks.
//!
//! A facility board must hold each of its buses in exactly one category, and
//! only buses whose home is that facility.

use crate::model::board::Board;
use crate::model::ids::{BusId, FacilityId};
use crate::repo::registry::BusRegistry;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// First membership problem found on a board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MembershipViolation {
    /// Bus occupies more than one slot.
    Duplicate(BusId),
    /// Bus is not in the registry.
    Unregistered(BusId),
    /// Bus belongs to another facility.
    Foreign { bus: BusId, home: FacilityId },
}

impl Display for MembershipViolation {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Duplicate(bus) => write!(f, "bus {bus} appears more than once"),
            Self::Unregistered(bus) => write!(f, "bus {bus} is not registered"),
            Self::Foreign { bus, home } => {
                write!(f, "bus {bus} belongs to facility {home}")
            }
        }
    }
}

impl Error for MembershipViolation {}

/// Checks that `board` satisfies the membership invariant for `facility`.
pub fn check_membership(
    board: &Board,
    facility: &FacilityId,
    registry: &BusRegistry,
) -> Result<(), MembershipViolation> {
    if let Some(bus) = board.duplicate_buses().into_iter().next() {
        return Err(MembershipViolation::Duplicate(bus));
    }
    for (_, buses) in board.columns() {
        for bus in buses {
            match registry.home_facility(bus) {
                None => return Err(MembershipViolation::Unregistered(bus.clone())),
                Some(home) if home != facility => {
                    return Err(MembershipViolation::Foreign {
                        bus: bus.clone(),
                        home: home.clone(),
                    })
                }
                Some(_) => {}
            }
        }
    }
    Ok(())
}
