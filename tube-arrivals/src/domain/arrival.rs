//! The arrival prediction value object.

use std::cmp::Ordering;

use super::platform::{UNKNOWN_DIRECTION, split_descriptor};

/// A single predicted train arrival at a station.
///
/// Holds the time until arrival in seconds, the destination name, and the
/// raw platform descriptor exactly as the feed supplied it. Platform data is
/// generally of the form `"<direction> - <platform name>"` with arbitrary
/// whitespace either side of the `-`; in some cases the `-` is missing.
/// Nothing is validated or transformed at construction: the descriptor is
/// interpreted at read time by [`Arrival::travel_direction`] and
/// [`Arrival::platform_name`], and all fields are fixed for the life of the
/// value.
///
/// # Examples
///
/// ```
/// use tube_arrivals::domain::Arrival;
///
/// let arrival = Arrival::new(90, "Waterfront", "Northbound - Platform 1");
/// assert_eq!(arrival.time_to_station_in_mins(), 2);
/// assert_eq!(arrival.travel_direction(), "Northbound");
/// assert_eq!(arrival.platform_name(), "Platform 1");
///
/// // Without a separator the direction is unknown
/// let arrival = Arrival::new(90, "Waterfront", "Platform 1");
/// assert_eq!(arrival.travel_direction(), "Unknown direction");
/// assert_eq!(arrival.platform_name(), "Platform 1");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrival {
    time_to_station: i32,
    destination: String,
    platform: String,
}

impl Arrival {
    /// Creates an arrival with the given time to station (in seconds),
    /// destination and platform descriptor, stored verbatim.
    pub fn new(
        time_to_station: i32,
        destination: impl Into<String>,
        platform: impl Into<String>,
    ) -> Self {
        Self {
            time_to_station,
            destination: destination.into(),
            platform: platform.into(),
        }
    }

    /// Seconds until the train arrives at the station.
    pub fn time_to_station(&self) -> i32 {
        self.time_to_station
    }

    /// Name of the destination station.
    pub fn destination(&self) -> &str {
        &self.destination
    }

    /// The raw platform descriptor, unchanged.
    pub fn platform(&self) -> &str {
        &self.platform
    }

    /// Time until arrival rounded up to the nearest minute.
    ///
    /// Ceiling of the seconds divided by 60: a train 59 or 60 seconds away
    /// is one minute away, 61 seconds is two.
    ///
    /// # Examples
    ///
    /// ```
    /// use tube_arrivals::domain::Arrival;
    ///
    /// assert_eq!(Arrival::new(0, "X", "").time_to_station_in_mins(), 0);
    /// assert_eq!(Arrival::new(60, "X", "").time_to_station_in_mins(), 1);
    /// assert_eq!(Arrival::new(61, "X", "").time_to_station_in_mins(), 2);
    /// ```
    pub fn time_to_station_in_mins(&self) -> i32 {
        (f64::from(self.time_to_station) / 60.0).ceil() as i32
    }

    /// Direction of travel, as indicated by the platform descriptor prefix
    /// (the part before the `-`, trimmed).
    ///
    /// Returns [`UNKNOWN_DIRECTION`] when the descriptor contains no `-`.
    /// A descriptor starting with `-` has an empty first segment, so the
    /// direction is the empty string rather than the fallback.
    pub fn travel_direction(&self) -> &str {
        split_descriptor(&self.platform)
            .direction
            .unwrap_or(UNKNOWN_DIRECTION)
    }

    /// Platform name, as indicated by the platform descriptor suffix (the
    /// part after the `-`, trimmed).
    ///
    /// When the descriptor contains no `-`, the whole descriptor is returned
    /// trimmed. When nothing follows the `-`, the name is the empty string.
    pub fn platform_name(&self) -> &str {
        split_descriptor(&self.platform).name
    }

    /// Three-way comparison by time until arrival, shorter times first.
    ///
    /// Arrivals due at the same second compare equal; no other field
    /// participates. This is a named comparator rather than an `Ord` impl
    /// because two arrivals due at the same time are not the same arrival.
    /// For sorting, [`Arrival::time_to_station`] also works directly as a
    /// stable-sort key.
    ///
    /// # Examples
    ///
    /// ```
    /// use tube_arrivals::domain::Arrival;
    ///
    /// let sooner = Arrival::new(30, "Waterfront", "");
    /// let later = Arrival::new(90, "Airport", "");
    /// assert!(sooner.cmp_by_arrival_time(&later).is_lt());
    /// ```
    pub fn cmp_by_arrival_time(&self, other: &Arrival) -> Ordering {
        self.time_to_station.cmp(&other.time_to_station)
    }
}
