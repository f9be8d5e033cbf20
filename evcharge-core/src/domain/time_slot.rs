//! Blocked time slots — hour intervals during which a station is unavailable.
//!
//! Slots are stored on stations and rendered in reports. Nothing checks a
//! charging request against them.

use crate::error::ValidationError;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated `[start, end)` interval of whole hours, `start < end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimeSlot {
    start: u32,
    end: u32,
}

impl TimeSlot {
    pub fn new(start: u32, end: u32) -> Result<Self, ValidationError> {
        if start >= end {
            return Err(ValidationError::InvalidTimeSlot { start, end });
        }
        Ok(Self { start, end })
    }

    pub fn start(&self) -> u32 {
        self.start
    }

    pub fn end(&self) -> u32 {
        self.end
    }

    /// Length of the slot in hours. Always at least 1.
    pub fn duration_hours(&self) -> u32 {
        self.end - self.start
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({} - {})", self.start, self.end)
    }
}

// Serialized as `[start, end]` so catalog files stay compact.
impl Serialize for TimeSlot {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        [self.start, self.end].serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TimeSlot {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let [start, end] = <[u32; 2]>::deserialize(deserializer)?;
        TimeSlot::new(start, end).map_err(serde::de::Error::custom)
    }
}

/// Render a slice of slots as `[(a - b), (c - d)]`, or `[]` when empty.
pub fn render_slots(slots: &[TimeSlot]) -> String {
    let inner: Vec<String> = slots.iter().map(TimeSlot::to_string).collect();
    format!("[{}]", inner.join(", "))
}
