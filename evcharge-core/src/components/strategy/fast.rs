//! Fast charging — higher delivery rate at a higher price per kWh.
//!
//! energy = capacity * hours * 1.5
//! cost   = energy * 0.50
//! score  = energy / cost = 1 / 0.50
//!
//! Capacity, hours and the speed multiplier all cancel, so any valid
//! non-zero session scores 2.0. The score is computed from the price alone;
//! the energy product overflows for very long sessions.

use crate::error::ValidationError;

use super::{validate_inputs, EfficiencyStrategy, Precheck};

/// Fast charging strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct FastChargingStrategy;

impl FastChargingStrategy {
    /// Price per kWh delivered.
    pub const COST_PER_KWH: f64 = 0.50;
}

impl EfficiencyStrategy for FastChargingStrategy {
    fn name(&self) -> &str {
        "FastChargingStrategy"
    }

    fn compute_efficiency(&self, capacity_kw: u32, hours: f64) -> Result<f64, ValidationError> {
        if let Precheck::Done(score) = validate_inputs(capacity_kw, hours)? {
            return Ok(score);
        }
        Ok(1.0 / Self::COST_PER_KWH)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constant_score() {
        let s = FastChargingStrategy;
        for (cap, hours) in [(250, 5.0), (300, 5.0), (1, 0.25), (10_000, 10_000.0)] {
            let eff = s.compute_efficiency(cap, hours).unwrap();
            assert!((eff - 2.0).abs() < 1e-9, "cap={cap} hours={hours} eff={eff}");
        }
    }

    #[test]
    fn extreme_hours_still_score_two() {
        let s = FastChargingStrategy;
        for hours in [1e307, f64::MAX, 1e-320, f64::MIN_POSITIVE] {
            assert_eq!(s.compute_efficiency(250, hours), Ok(2.0), "hours={hours}");
        }
    }

    #[test]
    fn infinite_hours_rejected() {
        assert_eq!(
            FastChargingStrategy.compute_efficiency(250, f64::INFINITY),
            Err(ValidationError::HoursOutOfRange { hours: f64::INFINITY })
        );
    }

    #[test]
    fn zero_capacity_is_zero() {
        assert_eq!(FastChargingStrategy.compute_efficiency(0, 5.0), Ok(0.0));
    }

    #[test]
    fn zero_hours_rejected() {
        let err = FastChargingStrategy.compute_efficiency(200, 0.0).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveHours { hours: 0.0 });
    }

    #[test]
    fn negative_hours_rejected() {
        let err = FastChargingStrategy
            .compute_efficiency(200, -5.0)
            .unwrap_err();
        assert_eq!(err.to_string(), "Charging hours must be positive.");
    }
}
