//! TfL arrivals feed handling.
//!
//! The StopPoint arrivals feed is a JSON array of prediction objects. This
//! module deserializes such a document and converts its entries into domain
//! [`Arrival`]s. Fetching the document is the caller's concern; nothing here
//! performs I/O.

mod convert;
mod types;

pub use convert::{ConversionError, convert_prediction, convert_predictions};
pub use types::ArrivalPrediction;

use crate::domain::Arrival;

/// Error reading an arrivals feed document.
#[derive(Debug, thiserror::Error)]
pub enum FeedError {
    /// The document was not a valid arrivals JSON array
    #[error("malformed arrivals document: {0}")]
    Json(#[from] serde_json::Error),
}

/// Deserializes a StopPoint arrivals document.
pub fn parse_predictions(json: &str) -> Result<Vec<ArrivalPrediction>, FeedError> {
    Ok(serde_json::from_str(json)?)
}

/// Deserializes an arrivals document straight into domain arrivals.
///
/// Entries that cannot be converted are skipped, as in
/// [`convert_predictions`].
///
/// # Examples
///
/// ```
/// use tube_arrivals::tfl;
///
/// let json = r#"[
///     {
///         "destinationName": "Morden Underground Station",
///         "platformName": "Southbound - Platform 2",
///         "timeToStation": 45
///     }
/// ]"#;
///
/// let arrivals = tfl::arrivals_from_json(json)?;
/// assert_eq!(arrivals.len(), 1);
/// assert_eq!(arrivals[0].travel_direction(), "Southbound");
/// # Ok::<(), tube_arrivals::tfl::FeedError>(())
/// ```
pub fn arrivals_from_json(json: &str) -> Result<Vec<Arrival>, FeedError> {
    let predictions = parse_predictions(json)?;
    Ok(convert_predictions(&predictions))
}
