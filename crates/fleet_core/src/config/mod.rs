//! Fleet configuration loading.
//!
//! # Responsibility
//! - Parse category schema, facilities, bus registry and board seed from JSON.
//! - Validate the seed before any store is built from it.
//!
//! # Invariants
//! - A loaded config always passes `FleetConfig::validate`.
//! - Seed boards carry one sequence per schema category.
//!
//! # See also
//! - config/fleet.json

mod validate;

pub use validate::ConfigValidationError;

use crate::model::board::{Board, FacilityBoards};
use crate::model::ids::{BusDescriptor, BusId, FacilityId};
use crate::model::snapshot::SnapshotStats;
use crate::repo::registry::{BusRegistry, CategorySchema, CategorySpec, FacilityDirectory, FacilitySpec};
use log::{info, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

const BUILTIN_CONFIG: &str = include_str!("../../config/fleet.json");

/// Errors from configuration loading.
#[derive(Debug)]
pub enum ConfigError {
    /// Config file could not be read.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Config text is not valid JSON for the expected shape.
    Parse(serde_json::Error),
    /// Config parsed but violates a seed invariant.
    Invalid(ConfigValidationError),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "failed to parse config: {err}"),
            Self::Invalid(err) => write!(f, "invalid config: {err}"),
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::Invalid(err) => Some(err),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value)
    }
}

impl From<ConfigValidationError> for ConfigError {
    fn from(value: ConfigValidationError) -> Self {
        Self::Invalid(value)
    }
}

/// Static fleet configuration consumed at startup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FleetConfig {
    /// Ordered category schema.
    pub categories: Vec<CategorySpec>,
    /// Ordered facility list.
    pub facilities: Vec<FacilitySpec>,
    /// Bus registry records.
    pub buses: Vec<BusDescriptor>,
    /// Initial board per facility.
    pub boards: BTreeMap<FacilityId, Board>,
    #[serde(default)]
    pub snapshot_stats: BTreeMap<BusId, SnapshotStats>,
}

impl FleetConfig {
    /// Returns the embedded default fleet seed.
    pub fn builtin() -> Result<Self, ConfigError> {
        load_config_str(BUILTIN_CONFIG)
    }

    pub fn registry(&self) -> BusRegistry {
        BusRegistry::new(self.buses.iter().cloned())
    }

    pub fn schema(&self) -> CategorySchema {
        CategorySchema::new(self.categories.clone())
    }

    pub fn facility_directory(&self) -> FacilityDirectory {
        FacilityDirectory::new(self.facilities.clone())
    }

    /// Builds the initial boards for every declared facility.
    ///
    /// Facilities without a seed board get an empty one; every board gets an
    /// empty sequence for schema categories it does not mention.
    pub fn seed_boards(&self) -> FacilityBoards {
        let mut boards = FacilityBoards::new();
        for facility in &self.facilities {
            let mut board = self.boards.get(&facility.id).cloned().unwrap_or_default();
            for category in &self.categories {
                board.ensure_category(category.id.clone());
            }
            boards.insert(facility.id.clone(), board);
        }
        boards
    }

    /// Registered buses that are not on their home facility's seed board.
    pub fn unassigned_buses(&self) -> Vec<BusId> {
        self.buses
            .iter()
            .filter(|bus| {
                !self
                    .boards
                    .get(&bus.facility_id)
                    .is_some_and(|board| board.contains_bus(&bus.id))
            })
            .map(|bus| bus.id.clone())
            .collect()
    }
}

/// Loads and validates configuration from a JSON file.
pub fn load_config(path: impl AsRef<Path>) -> Result<FleetConfig, ConfigError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    load_config_str(raw.as_str())
}

/// Parses and validates configuration from JSON text.
pub fn load_config_str(raw: &str) -> Result<FleetConfig, ConfigError> {
    let config: FleetConfig = serde_json::from_str(raw)?;
    config.validate()?;

    let unassigned = config.unassigned_buses();
    if !unassigned.is_empty() {
        let ids = unassigned
            .iter()
            .map(BusId::as_str)
            .collect::<Vec<_>>()
            .join(",");
        warn!("event=config_load module=config status=warn unassigned_buses={ids}");
    }
    info!(
        "event=config_load module=config status=ok categories={} facilities={} buses={}",
        config.categories.len(),
        config.facilities.len(),
        config.buses.len()
    );
    Ok(config)
}
