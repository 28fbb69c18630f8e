//! Opaque identifiers and the immutable bus descriptor.
//!
//! Identifiers are string newtypes so that a bus id can never be passed where
//! a category id is expected. Wire form is the bare string.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

static IDENTIFIER_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z0-9][a-z0-9_-]*$").expect("valid identifier regex"));

/// Returns whether `value` is a well-formed fleet identifier.
///
/// Accepted shape: lowercase ASCII letters, digits, `_` and `-`, starting with
/// a letter or digit (e.g. `bus-101`, `in_service`, `facility_a`).
pub fn is_valid_identifier(value: &str) -> bool {
    IDENTIFIER_RE.is_match(value)
}

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(String);

        impl $name {
            /// Wraps a raw identifier string.
            pub fn new(value: impl Into<String>) -> Self {
                Self(value.into())
            }

            /// Returns the raw identifier string.
            pub fn as_str(&self) -> &str {
                self.0.as_str()
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                f.write_str(&self.0)
            }
        }

        impl From<&str> for $name {
            fn from(value: &str) -> Self {
                Self::new(value)
            }
        }

        impl From<String> for $name {
            fn from(value: String) -> Self {
                Self(value)
            }
        }
    };
}

string_id!(
    /// Stable bus identifier, e.g. `bus-101`.
    BusId
);
string_id!(
    /// Status category identifier, e.g. `maintenance`.
    CategoryId
);
string_id!(
    /// Facility identifier, e.g. `facility_a`.
    FacilityId
);

/// Immutable registry record for one bus.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusDescriptor {
    pub id: BusId,
    /// Short display label, e.g. `101`.
    pub label: String,
    /// Home facility. The bus only ever appears on this facility's board.
    pub facility_id: FacilityId,
}

impl BusDescriptor {
    pub fn new(
        id: impl Into<BusId>,
        label: impl Into<String>,
        facility_id: impl Into<FacilityId>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            facility_id: facility_id.into(),
        }
    }
}
