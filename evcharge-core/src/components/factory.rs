//! Factory system — turns kind and strategy names into runtime station objects.
//!
//! This is the construction boundary: default strategy selection by station
//! kind happens here and nowhere else.

use std::sync::Arc;

use crate::domain::{StationId, StationKind, TimeSlot};
use crate::error::ValidationError;

use super::station::Station;
use super::strategy::{CostEffectiveChargingStrategy, EfficiencyStrategy, FastChargingStrategy};

// ─── Error type ──────────────────────────────────────────────────────

/// Errors that can occur during station construction.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FactoryError {
    #[error("Unknown charging station type: {0}")]
    UnknownStationKind(String),
    #[error("Unknown charging strategy: {0}")]
    UnknownStrategy(String),
    #[error("Invalid charging station type.")]
    InvalidKind,
    #[error("Missing required field: {0}")]
    MissingField(&'static str),
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

// ─── Strategy factory ────────────────────────────────────────────────

/// Strategy assigned to a station of `kind` when none is given.
pub fn default_strategy(kind: StationKind) -> Arc<dyn EfficiencyStrategy> {
    match kind {
        StationKind::Fast => Arc::new(FastChargingStrategy),
        StationKind::Slow => Arc::new(CostEffectiveChargingStrategy),
    }
}

/// Create a strategy from its config name.
///
/// Accepts the short name ("fast", "cost_effective"), the long name
/// ("fast_charging", "cost_effective_charging") or the variant tag
/// ("FastChargingStrategy"). Matching is case-insensitive.
pub fn create_strategy(name: &str) -> Result<Arc<dyn EfficiencyStrategy>, FactoryError> {
    let normalized = name.trim().to_ascii_lowercase();
    match normalized.as_str() {
        "fast" | "fast_charging" | "fastchargingstrategy" => Ok(Arc::new(FastChargingStrategy)),
        "cost_effective" | "cost_effective_charging" | "costeffectivechargingstrategy" => {
            Ok(Arc::new(CostEffectiveChargingStrategy))
        }
        _ => Err(FactoryError::UnknownStrategy(name.to_string())),
    }
}

// ─── Station factory ─────────────────────────────────────────────────

/// Parse a kind string, mapping failure to `UnknownStationKind`.
pub fn parse_kind(kind: &str) -> Result<StationKind, FactoryError> {
    kind.parse::<StationKind>()
        .map_err(|e| FactoryError::UnknownStationKind(e.0))
}

/// Create a station of the named kind with that kind's default strategy.
pub fn create_station(
    kind: &str,
    id: u32,
    capacity_kw: u32,
    blocked_slots: Vec<TimeSlot>,
) -> Result<Station, FactoryError> {
    let kind = parse_kind(kind)?;
    Ok(Station::new(
        StationId(id),
        kind,
        capacity_kw,
        blocked_slots,
        default_strategy(kind),
    ))
}

/// Create a station of the named kind with an explicit strategy.
pub fn create_station_with_strategy(
    kind: &str,
    id: u32,
    capacity_kw: u32,
    blocked_slots: Vec<TimeSlot>,
    strategy: Arc<dyn EfficiencyStrategy>,
) -> Result<Station, FactoryError> {
    let kind = parse_kind(kind)?;
    Ok(Station::new(
        StationId(id),
        kind,
        capacity_kw,
        blocked_slots,
        strategy,
    ))
}

// ─── Tests ───────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::station::ChargingStation;

    fn slots() -> Vec<TimeSlot> {
        vec![TimeSlot::new(9, 17).unwrap()]
    }

    #[test]
    fn fast_kind_gets_fast_strategy() {
        let s = create_station("Fast", 101, 250, slots()).unwrap();
        assert_eq!(s.kind(), StationKind::Fast);
        assert_eq!(s.strategy().name(), "FastChargingStrategy");
        assert_eq!(s.efficiency(5.0), Ok(2));
    }

    #[test]
    fn slow_kind_gets_cost_effective_strategy() {
        let s = create_station("slow", 102, 150, slots()).unwrap();
        assert_eq!(s.kind(), StationKind::Slow);
        assert_eq!(s.strategy().name(), "CostEffectiveChargingStrategy");
        assert_eq!(s.efficiency(5.0), Ok(1));
    }

    #[test]
    fn kind_is_case_insensitive() {
        assert!(create_station("FAST", 1, 10, vec![]).is_ok());
        assert!(create_station("sLOW", 1, 10, vec![]).is_ok());
    }

    #[test]
    fn unknown_kind_rejected() {
        let err = create_station("Turbo", 1, 10, vec![]).unwrap_err();
        assert_eq!(err, FactoryError::UnknownStationKind("Turbo".into()));
        assert_eq!(err.to_string(), "Unknown charging station type: Turbo");
    }

    #[test]
    fn explicit_strategy_overrides_default() {
        let s = create_station_with_strategy(
            "Fast",
            7,
            100,
            vec![],
            Arc::new(CostEffectiveChargingStrategy),
        )
        .unwrap();
        assert_eq!(s.kind(), StationKind::Fast);
        assert_eq!(s.strategy().name(), "CostEffectiveChargingStrategy");
    }

    #[test]
    fn strategy_names() {
        for name in ["fast", "FAST_CHARGING", "FastChargingStrategy", " fast "] {
            assert_eq!(create_strategy(name).unwrap().name(), "FastChargingStrategy");
        }
        for name in ["cost_effective", "cost_effective_charging", "CostEffectiveChargingStrategy"] {
            assert_eq!(
                create_strategy(name).unwrap().name(),
                "CostEffectiveChargingStrategy"
            );
        }
    }

    #[test]
    fn unknown_strategy_rejected() {
        let err = create_strategy("greedy").unwrap_err();
        assert_eq!(err, FactoryError::UnknownStrategy("greedy".into()));
    }

    #[test]
    fn validation_error_converts() {
        let err: FactoryError = TimeSlot::new(5, 1).unwrap_err().into();
        assert_eq!(err.to_string(), "start must be less than end");
    }
}
