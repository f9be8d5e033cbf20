//! Station registry — insertion-ordered collection of shared stations.
//!
//! Construct a registry with [`StationRegistry::new`] and pass it by reference
//! to whatever needs it. [`StationRegistry::global`] exists for callers that
//! want one instance per process; it is created on first access.
//!
//! Entries are never removed. `add` holds the write lock for the push, so a
//! concurrent reader sees either the whole entry or none of it.

use std::io::{self, Write};
use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;

use crate::components::station::ChargingStation;

/// Message printed by [`StationRegistry::write_all`] when nothing is registered.
pub const EMPTY_REGISTRY_MESSAGE: &str = "No stations available";

static GLOBAL: OnceLock<StationRegistry> = OnceLock::new();

/// Registry of charging stations.
#[derive(Debug, Default)]
pub struct StationRegistry {
    stations: RwLock<Vec<Arc<dyn ChargingStation>>>,
}

impl StationRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide registry. Same instance on every call.
    pub fn global() -> &'static StationRegistry {
        GLOBAL.get_or_init(StationRegistry::new)
    }

    /// Append a station. No deduplication: adding the same station twice
    /// registers it twice.
    pub fn add(&self, station: Arc<dyn ChargingStation>) {
        let mut stations = self.stations.write();
        tracing::debug!(
            station = %station.id(),
            capacity_kw = station.capacity_kw(),
            position = stations.len(),
            "station registered"
        );
        stations.push(station);
    }

    pub fn len(&self) -> usize {
        self.stations.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.read().is_empty()
    }

    /// Snapshot of all stations in insertion order.
    pub fn stations(&self) -> Vec<Arc<dyn ChargingStation>> {
        self.stations.read().clone()
    }

    /// Sum of all registered capacities in kW; 0 when empty.
    pub fn total_capacity(&self) -> u64 {
        self.stations
            .read()
            .iter()
            .map(|s| u64::from(s.capacity_kw()))
            .sum()
    }

    /// Stations with `capacity_kw >= min_capacity_kw`, in insertion order.
    pub fn filter_by_capacity(&self, min_capacity_kw: u32) -> Vec<Arc<dyn ChargingStation>> {
        self.stations
            .read()
            .iter()
            .filter(|s| s.capacity_kw() >= min_capacity_kw)
            .cloned()
            .collect()
    }

    /// Write each station's rendering on its own line, or the empty message.
    pub fn write_all<W: Write>(&self, out: &mut W) -> io::Result<()> {
        let stations = self.stations();
        if stations.is_empty() {
            return writeln!(out, "{EMPTY_REGISTRY_MESSAGE}");
        }
        for station in &stations {
            writeln!(out, "{}", station.render())?;
        }
        Ok(())
    }

    /// [`write_all`](Self::write_all) to stdout.
    pub fn print_all(&self) -> io::Result<()> {
        let stdout = io::stdout();
        let mut lock = stdout.lock();
        self.write_all(&mut lock)
    }
}
