//! Conversion from feed DTOs to domain arrivals.

use tracing::warn;

use super::types::ArrivalPrediction;
use crate::domain::Arrival;

/// Error converting a single prediction into an [`Arrival`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConversionError {
    /// A field the domain model cannot do without was absent
    #[error("missing required field: {0}")]
    MissingField(&'static str),

    /// `timeToStation` does not fit the domain's second count
    #[error("timeToStation out of range: {0}")]
    TimeOutOfRange(i64),
}

/// Converts one feed prediction into a domain [`Arrival`].
///
/// The destination is `destinationName`, falling back to `towards`; the feed
/// frequently carries only one of the two. The platform descriptor is taken
/// verbatim; it is not inspected here.
pub fn convert_prediction(prediction: &ArrivalPrediction) -> Result<Arrival, ConversionError> {
    let seconds = prediction
        .time_to_station
        .ok_or(ConversionError::MissingField("timeToStation"))?;
    let seconds = i32::try_from(seconds).map_err(|_| ConversionError::TimeOutOfRange(seconds))?;

    let destination = prediction
        .destination_name
        .as_deref()
        .or(prediction.towards.as_deref())
        .ok_or(ConversionError::MissingField("destinationName"))?;

    let platform = prediction
        .platform_name
        .as_deref()
        .ok_or(ConversionError::MissingField("platformName"))?;

    Ok(Arrival::new(seconds, destination, platform))
}

/// Converts a batch of predictions, skipping any that fail.
///
/// Invalid entries are logged and dropped rather than failing the whole
/// response.
pub fn convert_predictions(predictions: &[ArrivalPrediction]) -> Vec<Arrival> {
    let mut arrivals = Vec::with_capacity(predictions.len());

    for prediction in predictions {
        match convert_prediction(prediction) {
            Ok(arrival) => arrivals.push(arrival),
            Err(e) => {
                warn!(
                    id = prediction.id.as_deref().unwrap_or("<none>"),
                    error = %e,
                    "skipping arrival prediction"
                );
            }
        }
    }

    arrivals
}
