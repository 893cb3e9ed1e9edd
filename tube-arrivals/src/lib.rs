//! Live London Underground arrival predictions.
//!
//! The core of a "mind the gap" style arrivals display: the
//! [`domain::Arrival`] value object with its platform-descriptor parsing and
//! time-to-arrival ordering, a [`board::ArrivalBoard`] keeping a station's
//! arrivals sorted and grouped by travel direction, and [`tfl`] types for
//! reading the StopPoint arrivals JSON feed. Fetching the feed is out of
//! scope; callers hand in JSON, or ready-made [`domain::Arrival`]s.

pub mod board;
pub mod domain;
pub mod tfl;
