//! Catalog composition — builds runtime stations from a `CatalogConfig`.
//!
//! The bridge between the declarative catalog and the station objects the
//! registry holds. Every station goes through the factory; renewable entries
//! are wrapped after construction.

use std::sync::Arc;

use crate::config::{CatalogConfig, ConfigError, StationConfig};

use super::enhancement::RenewableEnergyEnhancement;
use super::factory::{create_station, create_station_with_strategy, create_strategy};
use super::station::ChargingStation;
use crate::registry::StationRegistry;

/// Build a single station entry.
pub fn build_station(config: &StationConfig) -> Result<Arc<dyn ChargingStation>, ConfigError> {
    let wrap = |source| ConfigError::Station {
        id: config.id,
        source,
    };

    let station = match &config.strategy {
        Some(name) => {
            let strategy = create_strategy(name).map_err(wrap)?;
            create_station_with_strategy(
                &config.kind,
                config.id,
                config.capacity_kw,
                config.blocked_slots.clone(),
                strategy,
            )
        }
        None => create_station(
            &config.kind,
            config.id,
            config.capacity_kw,
            config.blocked_slots.clone(),
        ),
    }
    .map_err(wrap)?;

    let station: Arc<dyn ChargingStation> = Arc::new(station);
    if config.renewable {
        Ok(Arc::new(RenewableEnergyEnhancement::new(station)))
    } else {
        Ok(station)
    }
}

/// Build every station in the catalog and register them in file order.
///
/// Validation runs first and every entry is built before anything is
/// registered, so a bad entry leaves the registry untouched.
pub fn build_catalog(
    config: &CatalogConfig,
    registry: &StationRegistry,
) -> Result<Vec<Arc<dyn ChargingStation>>, ConfigError> {
    config.validate()?;

    let stations = config
        .stations
        .iter()
        .map(|entry| {
            build_station(entry).map_err(|e| {
                tracing::warn!(station = entry.id, error = %e, "catalog entry rejected");
                e
            })
        })
        .collect::<Result<Vec<_>, _>>()?;

    for station in &stations {
        registry.add(Arc::clone(station));
    }

    tracing::debug!(
        stations = stations.len(),
        fingerprint = %config.fingerprint(),
        "catalog built"
    );
    Ok(stations)
}
