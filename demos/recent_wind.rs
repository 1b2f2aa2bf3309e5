//! Wind over the last two days at the built-in southwestern stations.
//!
//! Pass a date (`YYYY-MM-DD`) and station codes to summarise a single day instead:
//! `cargo run --example recent_wind -- 2023-08-09 OAK PHX`

use chrono::{NaiveDate, Utc};
use mesonet_wind::{default_recent_stations, StationSchedule, WindPipeline, WIND_ONLY_FIELDS};
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let pipeline = WindPipeline::new()?;
    let mut args = std::env::args().skip(1);

    let Some(date) = args.next() else {
        let table = pipeline
            .run_and_write(
                &default_recent_stations(Utc::now()),
                Path::new("combined_data.csv"),
            )
            .await?;
        println!("Wrote {} stations to combined_data.csv", table.len());
        return Ok(());
    };

    let date = NaiveDate::parse_from_str(&date, "%Y-%m-%d")?;
    let stations = StationSchedule::dated(args.map(|s| (s, date)));
    if stations.is_empty() {
        println!("No stations given");
        return Ok(());
    }

    for request in stations.iter() {
        let summary = pipeline
            .station_summary()
            .station(request.station.clone())
            .date(date)
            .fields(WIND_ONLY_FIELDS.to_vec())
            .call()
            .await;
        println!(
            "{}: mean speed {:?} mph, resultant {:?}°, mode {:?}° over {} observations",
            summary.station,
            summary.mean_wind_speed,
            summary.resultant_wind_direction_deg,
            summary.mode_wind_direction_deg,
            summary.observation_count
        );
    }

    Ok(())
}
