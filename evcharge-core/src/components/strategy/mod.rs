//! Efficiency strategies — interchangeable algorithms scoring a charging session.
//!
//! A strategy sees only the station capacity and the session length. It holds no
//! state, so one instance can be shared by any number of stations through an
//! `Arc<dyn EfficiencyStrategy>`.

pub mod cost_effective;
pub mod fast;

use std::fmt::Debug;

use crate::error::ValidationError;

pub use cost_effective::CostEffectiveChargingStrategy;
pub use fast::FastChargingStrategy;

/// Trait for efficiency strategies.
///
/// # Contract
/// - Zero capacity scores `0.0` and skips every other check.
/// - `hours <= 0` (or NaN) fails with [`ValidationError::NonPositiveHours`].
/// - Infinite hours fail with [`ValidationError::HoursOutOfRange`].
/// - A valid input never yields a NaN or infinite score.
///
/// Implementations get both rules for free by calling [`validate_inputs`] first.
pub trait EfficiencyStrategy: Send + Sync + Debug {
    /// Variant tag shown in station renderings (e.g., "FastChargingStrategy").
    fn name(&self) -> &str;

    /// Raw efficiency score for a session of `hours` at `capacity_kw`.
    fn compute_efficiency(&self, capacity_kw: u32, hours: f64) -> Result<f64, ValidationError>;
}

/// Outcome of the shared input checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Precheck {
    /// Inputs are valid; run the strategy's formula.
    Compute,
    /// Result is already known (zero capacity).
    Done(f64),
}

/// Apply the contract common to all strategies.
///
/// Zero capacity wins over invalid hours: with nothing to deliver there is no
/// cost to divide by, so the score is `0.0` regardless of duration.
pub fn validate_inputs(capacity_kw: u32, hours: f64) -> Result<Precheck, ValidationError> {
    if capacity_kw == 0 {
        return Ok(Precheck::Done(0.0));
    }
    // `!(hours > 0.0)` also rejects NaN.
    if !(hours > 0.0) {
        return Err(ValidationError::NonPositiveHours { hours });
    }
    if !hours.is_finite() {
        return Err(ValidationError::HoursOutOfRange { hours });
    }
    Ok(Precheck::Compute)
}
