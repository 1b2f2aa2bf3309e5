use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The reduction of one station's observations to a single record.
///
/// Built by [`crate::aggregate`] from a finite set of rows and never changed
/// afterwards. A station without usable observations is represented by
/// [`StationSummary::no_data`], where every statistical field is `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StationSummary {
    pub station: String,
    /// Calendar date of the first observation.
    pub date: Option<NaiveDate>,
    pub longitude: Option<f64>,
    pub latitude: Option<f64>,
    /// Arithmetic mean of the reported wind speeds.
    pub mean_wind_speed: Option<f64>,
    /// Direction of the vector mean of all winds, in `[0, 360)`.
    pub resultant_wind_direction_deg: Option<f64>,
    /// Most frequent per-row resultant direction, largest value on a tie.
    pub mode_wind_direction_deg: Option<f64>,
    /// Most frequent cover code per layer, largest code on a tie.
    pub mode_sky_cover: [Option<String>; 3],
    pub mean_sky_level_ft: [Option<f64>; 3],
    pub mean_temperature: Option<f64>,
    pub mean_relative_humidity: Option<f64>,
    pub mean_pressure: Option<f64>,
    pub mean_precipitation: Option<f64>,
    pub mean_visibility: Option<f64>,
    /// Number of rows the summary was computed from.
    pub observation_count: usize,
}

impl StationSummary {
    /// The summary of a station for which nothing could be retrieved.
    pub fn no_data(station: impl Into<String>) -> Self {
        Self {
            station: station.into(),
            date: None,
            longitude: None,
            latitude: None,
            mean_wind_speed: None,
            resultant_wind_direction_deg: None,
            mode_wind_direction_deg: None,
            mode_sky_cover: Default::default(),
            mean_sky_level_ft: [None; 3],
            mean_temperature: None,
            mean_relative_humidity: None,
            mean_pressure: None,
            mean_precipitation: None,
            mean_visibility: None,
            observation_count: 0,
        }
    }

    pub fn is_no_data(&self) -> bool {
        self.observation_count == 0
    }
}
