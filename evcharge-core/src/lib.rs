//! EV Charge Core — charging stations, efficiency strategies, station registry.
//!
//! This crate contains:
//! - Domain types (station ids, station kinds, blocked time slots)
//! - Interchangeable efficiency strategies behind one trait
//! - The `ChargingStation` capability, its plain implementation, and the
//!   renewable energy enhancement that wraps another station
//! - Factory and builder for construction, with default strategy selection
//! - An insertion-ordered station registry with aggregation queries
//! - TOML catalog config and report rendering

pub mod components;
pub mod config;
pub mod demo;
pub mod domain;
pub mod error;
pub mod registry;
pub mod report;

pub use error::ValidationError;

#[cfg(test)]
mod tests {
    use super::*;

    /// Compile-time check: shared types are Send + Sync.
    ///
    /// Stations are handed around as `Arc<dyn ChargingStation>`; if any of
    /// these stops being thread-safe the build breaks here.
    #[allow(dead_code)]
    fn assert_send_sync() {
        fn require_send<T: Send + ?Sized>() {}
        fn require_sync<T: Sync + ?Sized>() {}

        // Domain types
        require_send::<domain::TimeSlot>();
        require_sync::<domain::TimeSlot>();
        require_send::<domain::StationId>();
        require_sync::<domain::StationId>();
        require_send::<domain::StationKind>();
        require_sync::<domain::StationKind>();

        // Component types
        require_send::<components::Station>();
        require_sync::<components::Station>();
        require_send::<components::RenewableEnergyEnhancement>();
        require_sync::<components::RenewableEnergyEnhancement>();
        require_send::<dyn components::ChargingStation>();
        require_sync::<dyn components::ChargingStation>();
        require_send::<dyn components::EfficiencyStrategy>();
        require_sync::<dyn components::EfficiencyStrategy>();

        // Registry and config
        require_send::<registry::StationRegistry>();
        require_sync::<registry::StationRegistry>();
        require_send::<config::CatalogConfig>();
        require_sync::<config::CatalogConfig>();
    }

    /// Architecture contract: strategies see capacity and duration only.
    ///
    /// `compute_efficiency` takes a `u32` capacity and an `f64` duration, not a
    /// station, so a strategy cannot depend on station identity or slots.
    #[test]
    fn strategy_trait_takes_no_station() {
        fn score(strategy: &dyn components::EfficiencyStrategy) -> Result<f64, ValidationError> {
            strategy.compute_efficiency(100, 1.0)
        }
        assert_eq!(score(&components::FastChargingStrategy), Ok(2.0));
        assert_eq!(score(&components::CostEffectiveChargingStrategy), Ok(5.0));
    }
}
