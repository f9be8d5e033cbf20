//! Validation errors raised by time slots and efficiency strategies.
//!
//! These are never recovered inside the crate. Station and enhancement layers
//! pass them through unchanged so the caller sees the original failure.

/// Input rejected by a time slot constructor or an efficiency strategy.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    #[error("start must be less than end")]
    InvalidTimeSlot { start: u32, end: u32 },

    #[error("Charging hours must be positive.")]
    NonPositiveHours { hours: f64 },

    /// Infinite hours, or a session so short its score overflows.
    #[error("Charging hours out of range: {hours}")]
    HoursOutOfRange { hours: f64 },
}
