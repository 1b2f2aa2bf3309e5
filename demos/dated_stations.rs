//! Summarises the built-in dated stations and writes `weather_data.csv`.

use mesonet_wind::{default_dated_stations, MesonetError, WindPipeline};
use std::env;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<(), MesonetError> {
    env_logger::init();
    configure_polars_display();

    let pipeline = WindPipeline::new()?;
    let table = pipeline
        .run_and_write(&default_dated_stations(), Path::new("weather_data.csv"))
        .await?;

    println!("{:#?}", table.to_dataframe().map_err(MesonetError::ResultTableBuild)?);

    Ok(())
}

fn configure_polars_display() {
    // show every column
    env::set_var("POLARS_FMT_MAX_COLS", "-1");
    env::set_var("POLARS_FMT_MAX_ROWS", "30");
}
