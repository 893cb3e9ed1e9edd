//! A station's arrivals board.
//!
//! Collects [`Arrival`]s and keeps them ordered soonest-first for display,
//! with per-direction views. Ordering is stable: arrivals due at the same
//! second keep the order they were added in.

use crate::domain::Arrival;

/// Arrival predictions for one station, ordered by time until arrival.
///
/// # Examples
///
/// ```
/// use tube_arrivals::board::ArrivalBoard;
/// use tube_arrivals::domain::Arrival;
///
/// let board = ArrivalBoard::from_arrivals(vec![
///     Arrival::new(120, "Morden", "Southbound - Platform 2"),
///     Arrival::new(30, "Edgware", "Northbound - Platform 1"),
/// ]);
///
/// assert_eq!(board.next_arrival().map(|a| a.destination()), Some("Edgware"));
/// assert_eq!(board.directions(), vec!["Northbound", "Southbound"]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ArrivalBoard {
    /// Sorted ascending by `time_to_station`, ties in insertion order.
    arrivals: Vec<Arrival>,
}

impl ArrivalBoard {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            arrivals: Vec::new(),
        }
    }

    /// Builds a board from arrivals in any order.
    ///
    /// The sort is stable, so arrivals due at the same second keep their
    /// relative order from the input.
    pub fn from_arrivals(mut arrivals: Vec<Arrival>) -> Self {
        arrivals.sort_by_key(Arrival::time_to_station);
        Self { arrivals }
    }

    /// Adds one arrival, after any already due at the same second.
    pub fn add(&mut self, arrival: Arrival) {
        let at = self
            .arrivals
            .partition_point(|a| a.time_to_station() <= arrival.time_to_station());
        self.arrivals.insert(at, arrival);
    }

    /// All arrivals, soonest first.
    pub fn arrivals(&self) -> &[Arrival] {
        &self.arrivals
    }

    /// The next train due, if any.
    pub fn next_arrival(&self) -> Option<&Arrival> {
        self.arrivals.first()
    }

    /// Distinct travel directions on this board, in board order.
    pub fn directions(&self) -> Vec<&str> {
        let mut directions: Vec<&str> = Vec::new();
        for arrival in &self.arrivals {
            let direction = arrival.travel_direction();
            if !directions.contains(&direction) {
                directions.push(direction);
            }
        }
        directions
    }

    /// Arrivals travelling in the given direction, soonest first.
    ///
    /// Directions are matched against [`Arrival::travel_direction`], so
    /// dashless descriptors group under
    /// [`crate::domain::UNKNOWN_DIRECTION`].
    pub fn arrivals_toward<'a>(&'a self, direction: &'a str) -> impl Iterator<Item = &'a Arrival> {
        self.arrivals
            .iter()
            .filter(move |arrival| arrival.travel_direction() == direction)
    }

    /// Number of arrivals on the board.
    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    /// Whether the board has no arrivals.
    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }
}
