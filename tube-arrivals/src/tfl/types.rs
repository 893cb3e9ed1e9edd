//! Arrivals feed DTOs.
//!
//! These types map directly to entries of the TfL StopPoint arrivals JSON
//! response. They use `Option` liberally because the feed omits fields
//! rather than sending null values in many cases.

use chrono::{DateTime, Utc};
use serde::Deserialize;

/// One arrival prediction from a StopPoint arrivals response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArrivalPrediction {
    /// Prediction id.
    pub id: Option<String>,

    /// NaPTAN id of the stop the prediction is for.
    pub naptan_id: Option<String>,

    /// Human-readable station name.
    pub station_name: Option<String>,

    /// Line name (e.g., "Jubilee").
    pub line_name: Option<String>,

    /// Composite platform descriptor, e.g. "Westbound - Platform 2".
    pub platform_name: Option<String>,

    /// Stated direction ("inbound"/"outbound"); often absent.
    pub direction: Option<String>,

    /// Destination station name.
    pub destination_name: Option<String>,

    /// Where the train is headed, as shown on the front of the train.
    /// Sometimes present when `destinationName` is not.
    pub towards: Option<String>,

    /// Seconds until the train arrives at this stop.
    pub time_to_station: Option<i64>,

    /// Predicted arrival instant (RFC 3339).
    pub expected_arrival: Option<String>,

    /// When this prediction expires (RFC 3339).
    pub time_to_live: Option<String>,

    /// Transport mode (e.g., "tube").
    pub mode_name: Option<String>,
}

impl ArrivalPrediction {
    /// Parses the `expectedArrival` timestamp, if present and well-formed.
    pub fn expected_arrival_time(&self) -> Option<DateTime<Utc>> {
        self.expected_arrival
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    const PREDICTION: &str = r#"{
        "id": "352139572",
        "naptanId": "940GZZLUODS",
        "stationName": "Old Street Underground Station",
        "lineName": "Northern",
        "platformName": "Northbound - Platform 1",
        "destinationName": "High Barnet Underground Station",
        "towards": "High Barnet",
        "timeToStation": 112,
        "expectedArrival": "2015-11-04T18:04:25Z",
        "timeToLive": "2015-11-04T18:04:25Z",
        "modeName": "tube"
    }"#;

    #[test]
    fn deserializes_a_feed_entry() {
        let prediction: ArrivalPrediction = serde_json::from_str(PREDICTION).unwrap();

        assert_eq!(prediction.line_name.as_deref(), Some("Northern"));
        assert_eq!(
            prediction.platform_name.as_deref(),
            Some("Northbound - Platform 1")
        );
        assert_eq!(
            prediction.destination_name.as_deref(),
            Some("High Barnet Underground Station")
        );
        assert_eq!(prediction.time_to_station, Some(112));
    }

    #[test]
    fn missing_fields_deserialize_as_none() {
        let prediction: ArrivalPrediction =
            serde_json::from_str(r#"{"timeToStation": 30}"#).unwrap();

        assert_eq!(prediction.time_to_station, Some(30));
        assert!(prediction.station_name.is_none());
        assert!(prediction.platform_name.is_none());
        assert!(prediction.destination_name.is_none());
        assert!(prediction.expected_arrival.is_none());
    }

    #[test]
    fn expected_arrival_parses_rfc3339() {
        let prediction: ArrivalPrediction = serde_json::from_str(PREDICTION).unwrap();

        let expected = Utc.with_ymd_and_hms(2015, 11, 4, 18, 4, 25).unwrap();
        assert_eq!(prediction.expected_arrival_time(), Some(expected));
    }

    #[test]
    fn malformed_expected_arrival_is_none() {
        let prediction: ArrivalPrediction =
            serde_json::from_str(r#"{"expectedArrival": "late"}"#).unwrap();

        assert!(prediction.expected_arrival_time().is_none());
    }
}
