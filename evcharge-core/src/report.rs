//! Plain-text and JSON reporting over stations and registries.

use serde::Serialize;

use crate::components::station::ChargingStation;
use crate::domain::{StationId, StationKind};
use crate::registry::StationRegistry;

/// Report line for one station.
pub fn station_report(station: &dyn ChargingStation) -> String {
    format!("Generating report for: {}", station.render())
}

/// `"<label> efficiency: <value>"`, or the error text when the strategy
/// rejects the session.
pub fn efficiency_line(label: &str, station: &dyn ChargingStation, hours: f64) -> String {
    match station.efficiency(hours) {
        Ok(value) => format!("{label} efficiency: {value}"),
        Err(e) => format!("{label} efficiency: error: {e}"),
    }
}

/// Serializable view of one station.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StationSummary {
    pub id: StationId,
    pub kind: StationKind,
    pub capacity_kw: u32,
    pub blocked_slots: Vec<String>,
    /// Sum of the blocked slot lengths.
    pub blocked_hours: u32,
    pub strategy: String,
    /// `None` when the strategy rejected the session length.
    pub efficiency: Option<i64>,
    pub rendered: String,
}

impl StationSummary {
    pub fn from_station(station: &dyn ChargingStation, hours: f64) -> Self {
        Self {
            id: station.id(),
            kind: station.kind(),
            capacity_kw: station.capacity_kw(),
            blocked_slots: station
                .blocked_slots()
                .iter()
                .map(ToString::to_string)
                .collect(),
            blocked_hours: station
                .blocked_slots()
                .iter()
                .fold(0u32, |acc, slot| acc.saturating_add(slot.duration_hours())),
            strategy: station.strategy().name().to_string(),
            efficiency: station.efficiency(hours).ok(),
            rendered: station.render(),
        }
    }
}

/// Serializable view of a registry, optionally filtered by capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistrySummary {
    pub charging_hours: f64,
    pub total_capacity_kw: u64,
    pub station_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_capacity_kw: Option<u32>,
    pub stations: Vec<StationSummary>,
}

impl RegistrySummary {
    pub fn from_registry(
        registry: &StationRegistry,
        hours: f64,
        min_capacity_kw: Option<u32>,
    ) -> Self {
        let selected = match min_capacity_kw {
            Some(min) => registry.filter_by_capacity(min),
            None => registry.stations(),
        };
        Self {
            charging_hours: hours,
            total_capacity_kw: registry.total_capacity(),
            station_count: registry.len(),
            min_capacity_kw,
            stations: selected
                .iter()
                .map(|s| StationSummary::from_station(s.as_ref(), hours))
                .collect(),
        }
    }
}
