//! Station components — strategies, stations, the renewable enhancement, and
//! the construction boundary (factory, builder, catalog).
//!
//! - Efficiency strategy: scores a session from capacity and duration
//! - Charging station: identity, capacity, blocked slots, swappable strategy
//! - Enhancement: wraps a station, delegating and adding a bonus
//! - Factory / builder: picks the default strategy for a station kind

pub mod builder;
pub mod catalog;
pub mod enhancement;
pub mod factory;
pub mod station;
pub mod strategy;

pub use builder::StationBuilder;
pub use catalog::{build_catalog, build_station};
pub use enhancement::RenewableEnergyEnhancement;
pub use factory::{
    create_station, create_station_with_strategy, create_strategy, default_strategy, FactoryError,
};
pub use station::{ChargingStation, Station};
pub use strategy::{CostEffectiveChargingStrategy, EfficiencyStrategy, FastChargingStrategy};
