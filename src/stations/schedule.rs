//! Which stations to process, for which days, and with which fields.

use crate::error::MesonetError;
use crate::types::date_window::DateWindow;
use crate::types::field::{AsosField, FULL_FIELDS, WIND_ONLY_FIELDS};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;

/// Stations paired with the single day of interest for each.
const DATED_STATIONS: [(&str, i32, u32, u32); 28] = [
    ("3A6", 2021, 10, 1),
    ("5T6", 2023, 8, 1),
    ("9A1", 2021, 8, 17),
    ("ABQ", 2023, 8, 6),
    ("AEG", 2023, 6, 21),
    ("BDN", 2023, 8, 2),
    ("CBM", 2023, 5, 11),
    ("CPR", 2023, 8, 21),
    ("CTJ", 2023, 8, 13),
    ("EDC", 2023, 8, 16),
    ("FBL", 2023, 5, 22),
    ("FFZ", 2019, 10, 25),
    ("GEU", 2023, 8, 12),
    ("ILM", 2021, 2, 14),
    ("LRU", 2023, 7, 22),
    ("LUL", 2020, 8, 6),
    ("MCJ", 2023, 8, 11),
    ("MKC", 2023, 5, 19),
    ("NPA", 2023, 8, 15),
    ("NZJ", 2020, 10, 26),
    ("OAK", 2023, 8, 9),
    ("PGV", 2023, 8, 6),
    ("PHX", 2021, 6, 7),
    ("RBG", 2020, 8, 20),
    ("RDU", 2022, 11, 26),
    ("RID", 2023, 4, 11),
    ("SPA", 2023, 7, 15),
    ("TUS", 2021, 4, 30),
];

/// Southwestern stations tracked over the most recent days.
const RECENT_STATIONS: [&str; 14] = [
    "GNT", "GUP", "FMN", "RQE", "INW", "PGA", "GCN", "CMR", "BDG", "4SL", "AEG", "CEZ", "E80",
    "ONM",
];

/// Days covered by [`default_recent_stations`].
pub const DEFAULT_RECENT_DAYS: u32 = 2;

/// One station to fetch and summarise.
#[derive(Debug, Clone, PartialEq)]
pub struct StationRequest {
    pub station: String,
    pub window: DateWindow,
    /// Data fields to request, in column order.
    pub fields: Vec<AsosField>,
}

impl StationRequest {
    pub fn new(station: impl Into<String>, window: DateWindow, fields: &[AsosField]) -> Self {
        Self {
            station: station.into(),
            window,
            fields: fields.to_vec(),
        }
    }
}

/// An ordered list of station requests. Results are reported in this order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct StationSchedule {
    requests: Vec<StationRequest>,
}

#[derive(Deserialize)]
struct ScheduleFile {
    stations: serde_json::Map<String, serde_json::Value>,
}

impl StationSchedule {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, request: StationRequest) {
        self.requests.push(request);
    }

    /// One single-day request per `(station, date)` pair, asking for every field.
    pub fn dated<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, NaiveDate)>,
        S: Into<String>,
    {
        pairs
            .into_iter()
            .map(|(station, date)| {
                StationRequest::new(station, DateWindow::single_day(date), FULL_FIELDS)
            })
            .collect()
    }

    /// Wind-only requests covering the `days` days up to `now`.
    pub fn recent<I, S>(stations: I, days: u32, now: DateTime<Utc>) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let window = DateWindow::recent_days(days, now);
        stations
            .into_iter()
            .map(|station| StationRequest::new(station, window, WIND_ONLY_FIELDS))
            .collect()
    }

    /// Reads a dated schedule of the form `{"stations": {"OAK": "2023-08-09", ...}}`.
    ///
    /// Stations keep the order in which they appear in the document.
    ///
    /// # Examples
    ///
    /// ```
    /// use mesonet_wind::StationSchedule;
    ///
    /// let schedule = StationSchedule::from_json_str(
    ///     r#"{"stations": {"PHX": "2021-06-07", "OAK": "2023-08-09"}}"#,
    /// ).unwrap();
    /// let stations: Vec<&str> = schedule.iter().map(|r| r.station.as_str()).collect();
    /// assert_eq!(stations, ["PHX", "OAK"]);
    /// ```
    pub fn from_json_str(json: &str) -> Result<Self, MesonetError> {
        let file: ScheduleFile = serde_json::from_str(json)?;
        let mut pairs = Vec::with_capacity(file.stations.len());
        for (station, value) in file.stations {
            let Some(text) = value.as_str() else {
                return Err(MesonetError::ScheduleValue(station));
            };
            let date = NaiveDate::parse_from_str(text, "%Y-%m-%d").map_err(|source| {
                MesonetError::ScheduleDate {
                    value: text.to_string(),
                    station: station.clone(),
                    source,
                }
            })?;
            pairs.push((station, date));
        }
        Ok(Self::dated(pairs))
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationRequest> {
        self.requests.iter()
    }

    pub fn len(&self) -> usize {
        self.requests.len()
    }

    pub fn is_empty(&self) -> bool {
        self.requests.is_empty()
    }
}

impl FromIterator<StationRequest> for StationSchedule {
    fn from_iter<I: IntoIterator<Item = StationRequest>>(iter: I) -> Self {
        Self {
            requests: iter.into_iter().collect(),
        }
    }
}

/// The built-in set of stations with one fixed day each.
pub fn default_dated_stations() -> StationSchedule {
    StationSchedule::dated(DATED_STATIONS.iter().filter_map(|&(station, y, m, d)| {
        NaiveDate::from_ymd_opt(y, m, d).map(|date| (station, date))
    }))
}

/// The built-in set of stations over the [`DEFAULT_RECENT_DAYS`] before `now`.
pub fn default_recent_stations(now: DateTime<Utc>) -> StationSchedule {
    StationSchedule::recent(RECENT_STATIONS, DEFAULT_RECENT_DAYS, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_default_dated_stations() {
        let schedule = default_dated_stations();
        assert_eq!(schedule.len(), 28);

        let first = schedule.iter().next().unwrap();
        assert_eq!(first.station, "3A6");
        assert_eq!(
            first.window,
            DateWindow::single_day(NaiveDate::from_ymd_opt(2021, 10, 1).unwrap())
        );
        assert_eq!(first.fields, FULL_FIELDS);
        assert_eq!(schedule.iter().last().unwrap().station, "TUS");
    }

    #[test]
    fn test_default_recent_stations() {
        let now = Utc.with_ymd_and_hms(2024, 5, 3, 12, 0, 0).unwrap();
        let schedule = default_recent_stations(now);
        assert_eq!(schedule.len(), 14);
        for request in schedule.iter() {
            assert_eq!(request.fields, WIND_ONLY_FIELDS);
            assert_eq!(request.window.start, NaiveDate::from_ymd_opt(2024, 5, 1).unwrap());
            assert_eq!(request.window.end, NaiveDate::from_ymd_opt(2024, 5, 3).unwrap());
        }
    }

    #[test]
    fn test_json_preserves_document_order() -> Result<(), MesonetError> {
        let schedule = StationSchedule::from_json_str(
            r#"{"stations": {"TUS": "2021-04-30", "3A6": "2021-10-01", "MKC": "2023-05-19"}}"#,
        )?;
        let stations: Vec<&str> = schedule.iter().map(|r| r.station.as_str()).collect();
        assert_eq!(stations, ["TUS", "3A6", "MKC"]);
        Ok(())
    }

    #[test]
    fn test_json_rejects_bad_dates() {
        let err = StationSchedule::from_json_str(r#"{"stations": {"OAK": "09/08/2023"}}"#)
            .unwrap_err();
        assert!(matches!(err, MesonetError::ScheduleDate { ref station, .. } if station == "OAK"));

        let err = StationSchedule::from_json_str(r#"{"stations": {"OAK": 20230809}}"#).unwrap_err();
        assert!(matches!(err, MesonetError::ScheduleValue(ref station) if station == "OAK"));

        let err = StationSchedule::from_json_str("[]").unwrap_err();
        assert!(matches!(err, MesonetError::ScheduleParse(_)));
    }
}
