//! Scripted walkthrough of the catalog: factory, builder, strategy swap,
//! registry listing, renewable enhancement and reports.

use std::io::{self, Write};
use std::sync::Arc;

use crate::components::{
    create_station, ChargingStation, CostEffectiveChargingStrategy, FactoryError,
    FastChargingStrategy, RenewableEnergyEnhancement, StationBuilder,
};
use crate::domain::TimeSlot;
use crate::error::ValidationError;
use crate::registry::StationRegistry;
use crate::report::{efficiency_line, station_report};

#[derive(Debug, thiserror::Error)]
pub enum DemoError {
    #[error(transparent)]
    Factory(#[from] FactoryError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Failed to write demo output: {0}")]
    Io(#[from] io::Error),
}

/// Run the walkthrough with sessions of `hours`, registering stations in
/// `registry` and writing the narration to `out`.
pub fn run_demo<W: Write>(
    hours: f64,
    registry: &StationRegistry,
    out: &mut W,
) -> Result<(), DemoError> {
    // 1. Factory
    let fast_station: Arc<dyn ChargingStation> = Arc::new(create_station(
        "Fast",
        101,
        250,
        vec![TimeSlot::new(9, 17)?],
    )?);
    let slow_station: Arc<dyn ChargingStation> = Arc::new(create_station(
        "Slow",
        102,
        150,
        vec![TimeSlot::new(10, 20)?],
    )?);

    writeln!(out, "Created Stations using Factory:")?;
    writeln!(out, "{}", fast_station.render())?;
    writeln!(out, "{}", slow_station.render())?;
    writeln!(out, "{}", efficiency_line("Fast station", fast_station.as_ref(), hours))?;
    writeln!(out, "{}", efficiency_line("Slow station", slow_station.as_ref(), hours))?;

    // 2. Builder
    let built_fast: Arc<dyn ChargingStation> = Arc::new(
        StationBuilder::new()
            .station_id(201)
            .capacity_kw(300)
            .blocked_slots(vec![TimeSlot::new(8, 16)?])
            .kind("Fast")
            .build()?,
    );
    let built_slow: Arc<dyn ChargingStation> = Arc::new(
        StationBuilder::new()
            .station_id(202)
            .capacity_kw(180)
            .blocked_slots(vec![TimeSlot::new(12, 20)?])
            .kind("Slow")
            .build()?,
    );

    writeln!(out)?;
    writeln!(out, "Created Stations using Builder:")?;
    writeln!(out, "{}", built_fast.render())?;
    writeln!(out, "{}", built_slow.render())?;
    writeln!(out, "{}", efficiency_line("Built Fast station", built_fast.as_ref(), hours))?;
    writeln!(out, "{}", efficiency_line("Built Slow station", built_slow.as_ref(), hours))?;

    // 3. Runtime strategy swap
    slow_station.set_strategy(Arc::new(FastChargingStrategy));
    writeln!(out)?;
    writeln!(
        out,
        "{}",
        efficiency_line(
            "Slow station (after strategy change)",
            slow_station.as_ref(),
            hours
        )
    )?;

    // 4. Registry
    for station in [&fast_station, &slow_station, &built_fast, &built_slow] {
        registry.add(Arc::clone(station));
    }
    writeln!(out)?;
    writeln!(out, "All Registered Stations:")?;
    registry.write_all(out)?;
    writeln!(out, "Total capacity: {} kW", registry.total_capacity())?;

    // 5. Enhancement
    let renewable = RenewableEnergyEnhancement::new(Arc::clone(&fast_station));
    writeln!(out)?;
    writeln!(out, "Decorated Fast Station with Renewable Energy:")?;
    writeln!(out, "{}", renewable.render())?;
    writeln!(out, "{}", efficiency_line("Renewable station", &renewable, hours))?;

    // 6. Swap the wrapped station's strategy; the enhancement follows.
    writeln!(out)?;
    writeln!(out, "Applying cost-effective strategy to fast station...")?;
    fast_station.set_strategy(Arc::new(CostEffectiveChargingStrategy));
    writeln!(out, "{}", efficiency_line("Fast station", fast_station.as_ref(), hours))?;
    writeln!(out, "{}", efficiency_line("Renewable station", &renewable, hours))?;

    writeln!(out)?;
    writeln!(out, "{}", station_report(fast_station.as_ref()))?;
    writeln!(out, "{}", station_report(slow_station.as_ref()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(hours: f64) -> (String, StationRegistry) {
        let reg = StationRegistry::new();
        let mut out = Vec::new();
        run_demo(hours, &reg, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), reg)
    }

    #[test]
    fn registers_four_stations() {
        let (_, reg) = run(5.0);
        assert_eq!(reg.len(), 4);
        assert_eq!(reg.total_capacity(), 250 + 150 + 300 + 180);
    }

    #[test]
    fn narration_values() {
        let (text, _) = run(5.0);
        assert!(text.contains("Fast station efficiency: 2"));
        assert!(text.contains("Slow station efficiency: 1"));
        assert!(text.contains("Slow station (after strategy change) efficiency: 2"));
        assert!(text.contains("Renewable station efficiency: 52"));
        // After the fast station moves to cost-effective: 1 and 1 + 50.
        assert!(text.contains("Renewable station efficiency: 51"));
        assert!(text.contains("Total capacity: 880 kW"));
        assert!(text.contains(
            "Generating report for: Station ID: 101, Capacity: 250 kW, Forbidden Slots: [(9 - 17)], Strategy: CostEffectiveChargingStrategy"
        ));
    }

    #[test]
    fn invalid_hours_reported_not_fatal() {
        let (text, reg) = run(0.0);
        assert_eq!(reg.len(), 4);
        assert!(text.contains("Fast station efficiency: error: Charging hours must be positive."));
    }
}
