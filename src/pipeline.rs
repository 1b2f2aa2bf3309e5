//! The main entry point: fetch, clean and summarise a schedule of stations.

use crate::aggregate::aggregator::aggregate;
use crate::config::PipelineConfig;
use crate::error::MesonetError;
use crate::stations::schedule::{StationRequest, StationSchedule};
use crate::types::date_window::DateWindow;
use crate::types::field::{AsosField, FULL_FIELDS};
use crate::types::result_table::ResultTable;
use crate::types::summary::StationSummary;
use crate::utils::archive_raw;
use crate::weather_data::cleaner::Cleaner;
use crate::weather_data::fetcher::{Fetcher, HttpTransport, Transport};
use crate::weather_data::request::AsosRequest;
use bon::bon;
use log::{info, warn};
use std::path::Path;

/// Drives the fetch → clean → aggregate chain for each scheduled station.
///
/// Stations are processed strictly one after another so the shared upstream
/// service only ever sees one request from a run at a time. A station that
/// cannot be downloaded or has no observations still produces a
/// [`StationSummary::no_data`] entry.
///
/// # Examples
///
/// ```no_run
/// # use mesonet_wind::{default_dated_stations, MesonetError, WindPipeline};
/// # #[tokio::main]
/// # async fn main() -> Result<(), MesonetError> {
/// let pipeline = WindPipeline::new()?;
/// let table = pipeline.run(&default_dated_stations()).await;
/// table.write_csv(std::path::Path::new("weather_data.csv")).await?;
/// # Ok(())
/// # }
/// ```
pub struct WindPipeline<T = HttpTransport> {
    config: PipelineConfig,
    fetcher: Fetcher<T>,
    cleaner: Cleaner,
}

impl WindPipeline<HttpTransport> {
    /// A pipeline with the default configuration.
    pub fn new() -> Result<Self, MesonetError> {
        Self::with_config(PipelineConfig::default())
    }

    pub fn with_config(config: PipelineConfig) -> Result<Self, MesonetError> {
        let fetcher = Fetcher::from_config(&config)?;
        Ok(Self::from_parts(config, fetcher))
    }
}

#[bon]
impl<T: Transport> WindPipeline<T> {
    /// A pipeline that downloads through `transport` instead of HTTP.
    pub fn with_transport(transport: T, config: PipelineConfig) -> Self {
        let fetcher = Fetcher::with_transport(transport, &config);
        Self::from_parts(config, fetcher)
    }

    fn from_parts(config: PipelineConfig, fetcher: Fetcher<T>) -> Self {
        Self {
            cleaner: Cleaner::from_config(&config),
            config,
            fetcher,
        }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    /// Processes every request of `schedule` in order.
    pub async fn run(&self, schedule: &StationSchedule) -> ResultTable {
        let mut table = ResultTable::new();
        for request in schedule.iter() {
            let summary = self.run_station(request).await;
            if table.insert(summary).is_some() {
                warn!(
                    "Station {} is scheduled more than once, keeping the last summary",
                    request.station
                );
            }
        }
        table
    }

    /// Runs the schedule and writes the table to `path`.
    ///
    /// Writing the table is the only step whose failure is reported as an error.
    pub async fn run_and_write(
        &self,
        schedule: &StationSchedule,
        path: &Path,
    ) -> Result<ResultTable, MesonetError> {
        let table = self.run(schedule).await;
        table.write_csv(path).await?;
        Ok(table)
    }

    /// Fetches, cleans and summarises a single station.
    pub async fn run_station(&self, request: &StationRequest) -> StationSummary {
        let station = request.station.as_str();
        let uri = AsosRequest::new(station, request.window, &request.fields)
            .uri(&self.config.service_url);

        info!(
            "Downloading data for station {} from {} to {}",
            station, request.window.start, request.window.end
        );
        let raw = self.fetcher.fetch(&uri).await;

        if let Some(dir) = &self.config.raw_archive_dir {
            if let Err(e) = archive_raw(dir, station, &request.window, &raw).await {
                warn!("Failed to archive raw data for station {}: {}", station, e);
            }
        }

        let rows = self
            .cleaner
            .clean(&raw, &AsosField::response_schema(&request.fields));
        let summary = aggregate(station, &rows);
        if summary.is_no_data() {
            warn!("No observations for station {}", station);
        } else {
            info!(
                "Summarised {} observations for station {}",
                summary.observation_count, station
            );
        }
        summary
    }

    /// Summarises one station for a single day or an explicit window.
    ///
    /// Uses every field unless `fields` is given. When neither `date` nor
    /// `window` is set the station is reported as having no data.
    #[builder]
    pub async fn station_summary(
        &self,
        #[builder(into)] station: String,
        date: Option<chrono::NaiveDate>,
        window: Option<DateWindow>,
        fields: Option<Vec<AsosField>>,
    ) -> StationSummary {
        let Some(window) = window.or_else(|| date.map(DateWindow::single_day)) else {
            warn!("No date given for station {}", station);
            return StationSummary::no_data(station);
        };
        let fields = fields.unwrap_or_else(|| FULL_FIELDS.to_vec());
        self.run_station(&StationRequest::new(station, window, &fields))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::weather_data::fetcher::tests::{fast_config, ScriptedTransport};
    use chrono::NaiveDate;

    const PREAMBLE: &str = "#DEBUG: Format Typ    -> comma\n\
        #DEBUG: Time Period   -> 2023-08-09 00:00:00+00:00 2023-08-09 00:00:00+00:00\n\
        #DEBUG: Time Zone     -> Etc/UTC\n\
        #DEBUG: Data Contact   -> daryl herzmann akrherz@iastate.edu 515-294-5978\n\
        #DEBUG: Entries Per Station -> 1\n";

    fn full_report(station: &str, rows: &[&str]) -> String {
        let mut raw = format!(
            "{}station,valid,lon,lat,tmpf,relh,drct,sped,mslp,p01m,vsby,skyc1,skyc2,skyc3,skyl1,skyl2,skyl3\n",
            PREAMBLE
        );
        for row in rows {
            raw.push_str(station);
            raw.push(',');
            raw.push_str(row);
            raw.push('\n');
        }
        raw
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[tokio::test]
    async fn test_run_keeps_every_station_in_order() {
        let oak = full_report(
            "OAK",
            &[
                "2023-08-09 00:53,-122.2208,37.7214,64.00,70.00,0.00,5.00,1012.00,0.00,10.00,FEW,M,M,1200.00,M,M",
                "2023-08-09 01:53,-122.2208,37.7214,62.00,M,0.00,5.00,1013.00,M,10.00,FEW,M,M,1400.00,M,M",
                "2023-08-09 02:53,-122.2208,37.7214,60.00,80.00,0.00,5.00,M,0.00,9.00,BKN,M,M,1000.00,M,M",
            ],
        );
        // the second station fails on every attempt
        let transport = ScriptedTransport::new(vec![Ok(oak)]);
        let pipeline = WindPipeline::with_transport(&transport, fast_config(3));
        let schedule =
            StationSchedule::dated([("OAK", day(2023, 8, 9)), ("PHX", day(2021, 6, 7))]);

        let table = pipeline.run(&schedule).await;

        assert_eq!(table.stations().collect::<Vec<_>>(), ["OAK", "PHX"]);
        assert_eq!(transport.call_count(), 1 + 3);

        let oak = table.get("OAK").unwrap();
        assert_eq!(oak.date, Some(day(2023, 8, 9)));
        assert_eq!(oak.mean_wind_speed, Some(5.0));
        assert_eq!(oak.resultant_wind_direction_deg, Some(0.0));
        assert_eq!(oak.mode_wind_direction_deg, Some(0.0));
        assert_eq!(oak.mean_temperature, Some(62.0));
        assert_eq!(oak.mean_relative_humidity, Some(75.0));
        assert_eq!(oak.mean_pressure, Some(1012.5));
        assert_eq!(oak.mean_precipitation, Some(0.0));
        assert_eq!(oak.mode_sky_cover[0].as_deref(), Some("FEW"));
        assert_eq!(oak.mode_sky_cover[1], None);
        assert_eq!(oak.mean_sky_level_ft[0], Some(1200.0));

        assert_eq!(table.get("PHX"), Some(&StationSummary::no_data("PHX")));
    }

    #[tokio::test]
    async fn test_requests_target_the_configured_service() {
        let transport = ScriptedTransport::new(vec![Ok(PREAMBLE.to_string())]);
        let config = PipelineConfig::builder()
            .service_url("http://localhost/asos.py?")
            .max_attempts(1)
            .build();
        let pipeline = WindPipeline::with_transport(&transport, config);
        let schedule = StationSchedule::dated([("ILM", day(2021, 2, 14))]);

        let table = pipeline.run(&schedule).await;
        assert!(table.get("ILM").unwrap().is_no_data());

        let calls = transport.calls.lock().unwrap().clone();
        assert_eq!(calls.len(), 1);
        assert!(calls[0].starts_with("http://localhost/asos.py?data=tmpf&"));
        assert!(calls[0].contains("year1=2021&month1=02&day1=14"));
        assert!(calls[0].ends_with("station=ILM"));
    }

    #[tokio::test]
    async fn test_raw_responses_are_archived() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let raw = full_report(
            "PHX",
            &["2021-06-07 12:51,-112.0106,33.4278,84.00,12.21,90.00,5.00,1008.10,0.00,10.00,FEW,SCT,M,8000.00,20000.00,M"],
        );
        let transport = ScriptedTransport::new(vec![Ok(raw.clone())]);
        let config = PipelineConfig::builder()
            .max_attempts(1)
            .raw_archive_dir(dir.path().join("raw"))
            .build();
        let pipeline = WindPipeline::with_transport(&transport, config);

        let summary = pipeline
            .station_summary()
            .station("PHX")
            .date(day(2021, 6, 7))
            .call()
            .await;

        assert_eq!(summary.mode_wind_direction_deg, Some(90.0));
        let archived = std::fs::read_to_string(dir.path().join("raw").join("PHX_20210607.txt"))?;
        assert_eq!(archived, raw);
        Ok(())
    }

    #[tokio::test]
    async fn test_station_summary_without_date_is_no_data() {
        let transport = ScriptedTransport::new(vec![]);
        let pipeline = WindPipeline::with_transport(&transport, fast_config(1));

        let summary = pipeline.station_summary().station("OAK").call().await;

        assert!(summary.is_no_data());
        assert_eq!(transport.call_count(), 0);
    }

    #[tokio::test]
    async fn test_run_and_write_persists_table() -> Result<(), Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let path = dir.path().join("combined_data.csv");
        let transport = ScriptedTransport::new(vec![]);
        let pipeline = WindPipeline::with_transport(&transport, fast_config(2));
        let schedule = StationSchedule::recent(["GNT", "GUP"], 2, chrono::Utc::now());

        let table = pipeline.run_and_write(&schedule, &path).await?;

        assert_eq!(table.len(), 2);
        assert!(table.iter().all(StationSummary::is_no_data));
        let written = std::fs::read_to_string(&path)?;
        assert_eq!(written.lines().count(), 3);
        assert!(written.lines().nth(1).unwrap().starts_with("GNT,"));
        Ok(())
    }
}
