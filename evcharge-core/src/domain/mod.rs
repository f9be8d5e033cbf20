//! Domain types for the station catalog

pub mod ids;
pub mod kind;
pub mod time_slot;

pub use ids::{CatalogHash, StationId};
pub use kind::{StationKind, UnknownKind};
pub use time_slot::{render_slots, TimeSlot};
