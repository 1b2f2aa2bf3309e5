use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A single time-stamped station report as returned by the ASOS service.
///
/// Every reading is optional: the upstream marks absent values with `M`, and
/// those become `None` instead of a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObservationRow {
    /// Station identifier (e.g. "OAK").
    pub station: String,
    /// Observation time in UTC.
    pub timestamp: DateTime<Utc>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    /// Wind speed in miles per hour.
    pub wind_speed: Option<f64>,
    /// Direction the wind blows from, degrees clockwise from north (0..=360).
    pub wind_direction_deg: Option<f64>,
    /// Air temperature in Fahrenheit.
    pub temperature: Option<f64>,
    /// Relative humidity in percent.
    pub relative_humidity: Option<f64>,
    /// Sea level pressure in millibar.
    pub pressure: Option<f64>,
    /// One hour precipitation in millimetres.
    pub precipitation: Option<f64>,
    /// Visibility in miles.
    pub visibility: Option<f64>,
    /// Sky cover codes of up to three cloud layers, lowest first.
    pub sky_cover: [Option<String>; 3],
    /// Base heights in feet of the same layers.
    pub sky_level_ft: [Option<f64>; 3],
}

impl ObservationRow {
    /// Creates a row with no readings.
    pub fn new(station: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            station: station.into(),
            timestamp,
            longitude: None,
            latitude: None,
            wind_speed: None,
            wind_direction_deg: None,
            temperature: None,
            relative_humidity: None,
            pressure: None,
            precipitation: None,
            visibility: None,
            sky_cover: Default::default(),
            sky_level_ft: [None; 3],
        }
    }
}
