use crate::aggregate::circular::{per_row_directions, resultant_direction};
use crate::aggregate::mode::{mean, mode_max, mode_max_f64};
use crate::types::observation::ObservationRow;
use crate::types::summary::StationSummary;

/// Reduces one station's observations to a [`StationSummary`].
///
/// Scalar quantities are arithmetic means over the reported values. Wind
/// direction is summarised twice: as the direction of the vector sum of all
/// rows, and as the mode of the per-row resultant directions (largest on a tie).
/// Every row contributes with the station's mean wind speed as its weight.
///
/// The date and location come from the first row. An empty slice yields
/// [`StationSummary::no_data`].
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use mesonet_wind::{aggregate, ObservationRow};
///
/// let rows: Vec<ObservationRow> = (0..3)
///     .map(|hour| {
///         let mut row = ObservationRow::new("OAK", Utc.with_ymd_and_hms(2023, 8, 9, hour, 53, 0).unwrap());
///         row.wind_speed = Some(5.0);
///         row.wind_direction_deg = Some(0.0);
///         row
///     })
///     .collect();
///
/// let summary = aggregate("OAK", &rows);
/// assert_eq!(summary.mean_wind_speed, Some(5.0));
/// assert_eq!(summary.resultant_wind_direction_deg, Some(0.0));
/// assert_eq!(summary.mode_wind_direction_deg, Some(0.0));
/// ```
pub fn aggregate(station: &str, rows: &[ObservationRow]) -> StationSummary {
    let Some(first) = rows.first() else {
        return StationSummary::no_data(station);
    };

    let mean_wind_speed = mean(rows.iter().map(|r| r.wind_speed));
    let directions: Vec<f64> = rows.iter().filter_map(|r| r.wind_direction_deg).collect();
    let weight = direction_weight(mean_wind_speed);

    StationSummary {
        station: station.to_string(),
        date: Some(first.timestamp.date_naive()),
        longitude: first.longitude,
        latitude: first.latitude,
        mean_wind_speed,
        resultant_wind_direction_deg: weight.and_then(|w| resultant_direction(&directions, w)),
        mode_wind_direction_deg: weight
            .and_then(|w| mode_max_f64(per_row_directions(&directions, w))),
        mode_sky_cover: std::array::from_fn(|layer| {
            mode_max(rows.iter().filter_map(|r| r.sky_cover[layer].clone()))
        }),
        mean_sky_level_ft: std::array::from_fn(|layer| {
            mean(rows.iter().map(|r| r.sky_level_ft[layer]))
        }),
        mean_temperature: mean(rows.iter().map(|r| r.temperature)),
        mean_relative_humidity: mean(rows.iter().map(|r| r.relative_humidity)),
        mean_pressure: mean(rows.iter().map(|r| r.pressure)),
        mean_precipitation: mean(rows.iter().map(|r| r.precipitation)),
        mean_visibility: mean(rows.iter().map(|r| r.visibility)),
        observation_count: rows.len(),
    }
}

/// The weight applied to every row's wind vector.
///
/// Without any speed report there is nothing to weight by. A flat calm (mean
/// speed zero) would cancel every vector, so it falls back to unit weight.
fn direction_weight(mean_wind_speed: Option<f64>) -> Option<f64> {
    match mean_wind_speed {
        Some(speed) if speed > 0.0 => Some(speed),
        Some(_) => Some(1.0),
        None => None,
    }
}
