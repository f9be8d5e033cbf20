//! Serializable catalog configuration.
//!
//! A catalog file lists the stations to build, in order:
//!
//! ```toml
//! charging_hours = 5.0
//!
//! [[station]]
//! id = 101
//! kind = "fast"
//! capacity_kw = 250
//! blocked_slots = [[9, 17]]
//! renewable = true
//! ```
//!
//! Parsing lives here; reading the file is left to the caller.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::components::factory::FactoryError;
use crate::domain::{CatalogHash, TimeSlot};

/// Session length used when a catalog does not set one.
pub const DEFAULT_CHARGING_HOURS: f64 = 5.0;

fn default_charging_hours() -> f64 {
    DEFAULT_CHARGING_HOURS
}

/// Errors loading a catalog.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse catalog: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("Failed to serialize catalog: {0}")]
    Serialize(#[from] toml::ser::Error),

    #[error("charging_hours must be positive, got {0}")]
    InvalidHours(f64),

    #[error("Duplicate station id: {0}")]
    DuplicateStationId(u32),

    #[error("Station {id}: {source}")]
    Station {
        id: u32,
        #[source]
        source: FactoryError,
    },
}

/// One station entry.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct StationConfig {
    pub id: u32,

    /// "fast" or "slow", any case.
    pub kind: String,

    pub capacity_kw: u32,

    #[serde(default)]
    pub blocked_slots: Vec<TimeSlot>,

    /// Strategy name; the kind's default when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub strategy: Option<String>,

    /// Wrap the station in the renewable energy enhancement.
    #[serde(default)]
    pub renewable: bool,
}

/// Complete catalog: session length plus the station list.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CatalogConfig {
    #[serde(default = "default_charging_hours")]
    pub charging_hours: f64,

    #[serde(default, rename = "station")]
    pub stations: Vec<StationConfig>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            charging_hours: DEFAULT_CHARGING_HOURS,
            stations: Vec::new(),
        }
    }
}

impl CatalogConfig {
    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Check catalog-level rules. Per-station kind and strategy names are
    /// checked when the catalog is built.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.charging_hours > 0.0) {
            return Err(ConfigError::InvalidHours(self.charging_hours));
        }
        let mut seen = HashSet::new();
        for station in &self.stations {
            if !seen.insert(station.id) {
                return Err(ConfigError::DuplicateStationId(station.id));
            }
        }
        Ok(())
    }

    /// Deterministic hash of the catalog contents.
    ///
    /// Field order is fixed by the struct definitions and stations keep file
    /// order, so identical catalogs always hash the same.
    pub fn fingerprint(&self) -> CatalogHash {
        let json = serde_json::to_string(self).unwrap_or_default();
        CatalogHash::from_bytes(json.as_bytes())
    }
}
