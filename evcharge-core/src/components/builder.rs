//! Step-by-step station construction.

use std::sync::Arc;

use crate::domain::{StationId, StationKind, TimeSlot};

use super::factory::{default_strategy, FactoryError};
use super::station::Station;
use super::strategy::EfficiencyStrategy;

/// Fluent builder for [`Station`].
///
/// `station_id`, `capacity_kw` and `kind` are required. Blocked slots default
/// to none; the strategy defaults to the kind's default.
#[derive(Debug, Default)]
pub struct StationBuilder {
    station_id: Option<StationId>,
    capacity_kw: Option<u32>,
    blocked_slots: Vec<TimeSlot>,
    kind: Option<String>,
    strategy: Option<Arc<dyn EfficiencyStrategy>>,
}

impl StationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn station_id(mut self, id: u32) -> Self {
        self.station_id = Some(StationId(id));
        self
    }

    pub fn capacity_kw(mut self, capacity_kw: u32) -> Self {
        self.capacity_kw = Some(capacity_kw);
        self
    }

    pub fn blocked_slots(mut self, slots: Vec<TimeSlot>) -> Self {
        self.blocked_slots = slots;
        self
    }

    /// Append one blocked slot.
    pub fn blocked_slot(mut self, slot: TimeSlot) -> Self {
        self.blocked_slots.push(slot);
        self
    }

    /// Station kind by name ("Fast" / "Slow", any case). Checked in `build`.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Override the kind's default strategy.
    pub fn strategy(mut self, strategy: Arc<dyn EfficiencyStrategy>) -> Self {
        self.strategy = Some(strategy);
        self
    }

    pub fn build(self) -> Result<Station, FactoryError> {
        let id = self
            .station_id
            .ok_or(FactoryError::MissingField("station_id"))?;
        let capacity_kw = self
            .capacity_kw
            .ok_or(FactoryError::MissingField("capacity_kw"))?;
        let kind = self
            .kind
            .as_deref()
            .and_then(|k| k.parse::<StationKind>().ok())
            .ok_or(FactoryError::InvalidKind)?;
        let strategy = self.strategy.unwrap_or_else(|| default_strategy(kind));

        Ok(Station::new(id, kind, capacity_kw, self.blocked_slots, strategy))
    }
}
