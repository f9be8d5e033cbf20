//! Cost-effective charging — cheap energy, score depends on session length.
//!
//! cost  = capacity * hours * 0.20
//! score = capacity / cost = 1 / (0.20 * hours)
//!
//! Capacity cancels, so the score is computed from hours alone and every
//! non-zero capacity gets the same value. Sessions short enough to make the
//! score infinite are rejected.

use crate::error::ValidationError;

use super::{validate_inputs, EfficiencyStrategy, Precheck};

/// Cost-effective charging strategy.
#[derive(Debug, Clone, Copy, Default)]
pub struct CostEffectiveChargingStrategy;

impl CostEffectiveChargingStrategy {
    /// Price per kWh delivered.
    pub const COST_PER_KWH: f64 = 0.20;
}

impl EfficiencyStrategy for CostEffectiveChargingStrategy {
    fn name(&self) -> &str {
        "CostEffectiveChargingStrategy"
    }

    fn compute_efficiency(&self, capacity_kw: u32, hours: f64) -> Result<f64, ValidationError> {
        if let Precheck::Done(score) = validate_inputs(capacity_kw, hours)? {
            return Ok(score);
        }
        let score = 1.0 / (hours * Self::COST_PER_KWH);
        if !score.is_finite() {
            return Err(ValidationError::HoursOutOfRange { hours });
        }
        Ok(score)
    }
}
