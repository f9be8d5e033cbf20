//! Charging stations — identity, capacity, blocked slots and a swappable strategy.
//!
//! `ChargingStation` is the capability every station-like value offers to the
//! registry and to reporting. `Station` is the plain implementation; the
//! renewable enhancement is another, wrapping a station instead of extending it.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::{render_slots, StationId, StationKind, TimeSlot};
use crate::error::ValidationError;

use super::strategy::EfficiencyStrategy;

/// Trait for anything that behaves as a charging station.
///
/// # Invariants
/// - A station always has a strategy; `set_strategy` replaces, never clears.
/// - `efficiency` truncates the strategy score toward zero and passes
///   strategy errors through untouched.
pub trait ChargingStation: Send + Sync + fmt::Debug {
    fn id(&self) -> StationId;

    /// Maximum charging power in kW.
    fn capacity_kw(&self) -> u32;

    /// Unavailable hours, in the order they were supplied.
    fn blocked_slots(&self) -> &[TimeSlot];

    fn kind(&self) -> StationKind;

    /// The strategy currently installed on this station.
    fn strategy(&self) -> Arc<dyn EfficiencyStrategy>;

    /// Install a new strategy. Takes effect on the next `efficiency` call.
    fn set_strategy(&self, strategy: Arc<dyn EfficiencyStrategy>);

    /// Efficiency of a session of `hours`, truncated to an integer.
    fn efficiency(&self, hours: f64) -> Result<i64, ValidationError>;

    /// One-line description used by reports and registry listings.
    fn render(&self) -> String;
}

/// A Fast or Slow charging station.
///
/// The strategy field sits behind a lock so it can be swapped through the
/// shared `Arc` handles the registry and enhancements hold.
pub struct Station {
    id: StationId,
    kind: StationKind,
    capacity_kw: u32,
    blocked_slots: Vec<TimeSlot>,
    strategy: RwLock<Arc<dyn EfficiencyStrategy>>,
}

impl Station {
    pub fn new(
        id: StationId,
        kind: StationKind,
        capacity_kw: u32,
        blocked_slots: Vec<TimeSlot>,
        strategy: Arc<dyn EfficiencyStrategy>,
    ) -> Self {
        Self {
            id,
            kind,
            capacity_kw,
            blocked_slots,
            strategy: RwLock::new(strategy),
        }
    }

    /// Wrap in an `Arc` for sharing with a registry or an enhancement.
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}

/// Truncate a strategy score toward zero.
///
/// Saturates at the `i64` bounds; NaN maps to 0.
pub(crate) fn truncate_score(score: f64) -> i64 {
    score as i64
}

/// Shared rendering for station-like values.
pub(crate) fn render_station(
    id: StationId,
    capacity_kw: u32,
    slots: &[TimeSlot],
    strategy_name: &str,
) -> String {
    format!(
        "Station ID: {}, Capacity: {} kW, Forbidden Slots: {}, Strategy: {}",
        id,
        capacity_kw,
        render_slots(slots),
        strategy_name
    )
}

impl ChargingStation for Station {
    fn id(&self) -> StationId {
        self.id
    }

    fn capacity_kw(&self) -> u32 {
        self.capacity_kw
    }

    fn blocked_slots(&self) -> &[TimeSlot] {
        &self.blocked_slots
    }

    fn kind(&self) -> StationKind {
        self.kind
    }

    fn strategy(&self) -> Arc<dyn EfficiencyStrategy> {
        self.strategy.read().clone()
    }

    fn set_strategy(&self, strategy: Arc<dyn EfficiencyStrategy>) {
        let mut slot = self.strategy.write();
        tracing::debug!(
            station = %self.id,
            from = slot.name(),
            to = strategy.name(),
            "strategy swapped"
        );
        *slot = strategy;
    }

    fn efficiency(&self, hours: f64) -> Result<i64, ValidationError> {
        // Clone the handle so the lock is not held while the strategy runs.
        let strategy = self.strategy();
        let score = strategy.compute_efficiency(self.capacity_kw, hours)?;
        Ok(truncate_score(score))
    }

    fn render(&self) -> String {
        render_station(
            self.id,
            self.capacity_kw,
            &self.blocked_slots,
            self.strategy.read().name(),
        )
    }
}

impl fmt::Debug for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Station")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("capacity_kw", &self.capacity_kw)
            .field("blocked_slots", &self.blocked_slots)
            .field("strategy", &self.strategy.read().name())
            .finish()
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
