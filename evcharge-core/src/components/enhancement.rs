//! Renewable energy enhancement — wraps a station and adds a fixed bonus.
//!
//! The enhancement copies the wrapped station's identity at construction so it
//! answers every read accessor on its own, but efficiency and rendering go
//! through the wrapped station. A strategy swap on the wrapped station is
//! therefore visible here; a swap on the enhancement only changes what
//! `strategy()` reports.

use std::fmt;
use std::sync::Arc;

use parking_lot::RwLock;

use crate::domain::{StationId, StationKind, TimeSlot};
use crate::error::ValidationError;

use super::station::ChargingStation;
use super::strategy::EfficiencyStrategy;

/// Station decorated with renewable energy support.
pub struct RenewableEnergyEnhancement {
    id: StationId,
    kind: StationKind,
    capacity_kw: u32,
    blocked_slots: Vec<TimeSlot>,
    strategy: RwLock<Arc<dyn EfficiencyStrategy>>,
    inner: Arc<dyn ChargingStation>,
}

impl RenewableEnergyEnhancement {
    /// Efficiency points added on top of the wrapped station's score.
    pub const EFFICIENCY_BONUS: i64 = 50;

    /// Suffix appended to the wrapped station's rendering.
    pub const RENDER_SUFFIX: &'static str = " + Renewable Energy";

    pub fn new(inner: Arc<dyn ChargingStation>) -> Self {
        Self {
            id: inner.id(),
            kind: inner.kind(),
            capacity_kw: inner.capacity_kw(),
            blocked_slots: inner.blocked_slots().to_vec(),
            strategy: RwLock::new(inner.strategy()),
            inner,
        }
    }
}

impl ChargingStation for RenewableEnergyEnhancement {
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
        *self.strategy.write() = strategy;
    }

    fn efficiency(&self, hours: f64) -> Result<i64, ValidationError> {
        let base = self.inner.efficiency(hours)?;
        Ok(base.saturating_add(Self::EFFICIENCY_BONUS))
    }

    fn render(&self) -> String {
        let mut rendered = self.inner.render();
        rendered.push_str(Self::RENDER_SUFFIX);
        rendered
    }
}

impl fmt::Debug for RenewableEnergyEnhancement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RenewableEnergyEnhancement")
            .field("id", &self.id)
            .field("inner", &self.inner)
            .finish()
    }
}

impl fmt::Display for RenewableEnergyEnhancement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}
