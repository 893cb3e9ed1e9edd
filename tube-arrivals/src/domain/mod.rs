//! Domain types for arrival predictions.
//!
//! The [`Arrival`] value object is the core of the crate: immutable after
//! construction, with best-effort read-time parsing of its platform
//! descriptor. Nothing here validates feed data; see [`crate::tfl`] for the
//! boundary where raw feed entries become domain values.

mod arrival;
mod platform;

pub use arrival::Arrival;
pub use platform::{PlatformParts, UNKNOWN_DIRECTION, split_descriptor};
