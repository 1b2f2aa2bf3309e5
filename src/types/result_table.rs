//! The combined, per-station output of a pipeline run.

use crate::error::MesonetError;
use crate::types::summary::StationSummary;
use log::info;
use polars::prelude::*;
use std::path::Path;
use tokio::{fs, task};

/// Station summaries keyed by station code, in the order stations were first inserted.
///
/// A station code appears at most once: inserting a summary for a station that
/// is already present replaces it without moving it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ResultTable {
    entries: Vec<StationSummary>,
}

impl ResultTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts `summary` under its station code, returning the summary it replaced.
    pub fn insert(&mut self, summary: StationSummary) -> Option<StationSummary> {
        match self
            .entries
            .iter_mut()
            .find(|existing| existing.station == summary.station)
        {
            Some(existing) => Some(std::mem::replace(existing, summary)),
            None => {
                self.entries.push(summary);
                None
            }
        }
    }

    pub fn get(&self, station: &str) -> Option<&StationSummary> {
        self.entries.iter().find(|s| s.station == station)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &StationSummary> {
        self.entries.iter()
    }

    pub fn stations(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|s| s.station.as_str())
    }

    /// Builds a `DataFrame` with one row per station and one column per summary field.
    pub fn to_dataframe(&self) -> Result<DataFrame, PolarsError> {
        let rows = &self.entries;
        let floats = |name: &str, get: fn(&StationSummary) -> Option<f64>| {
            Column::new(name.into(), rows.iter().map(get).collect::<Vec<_>>())
        };

        let mut columns = vec![
            Column::new(
                "station".into(),
                rows.iter().map(|s| s.station.clone()).collect::<Vec<_>>(),
            ),
            Column::new(
                "date".into(),
                rows.iter()
                    .map(|s| s.date.map(|d| d.format("%Y-%m-%d").to_string()))
                    .collect::<Vec<_>>(),
            ),
            floats("lon", |s| s.longitude),
            floats("lat", |s| s.latitude),
            floats("mean_wind_speed", |s| s.mean_wind_speed),
            floats("resultant_wind_direction", |s| {
                s.resultant_wind_direction_deg
            }),
            floats("mode_wind_direction", |s| s.mode_wind_direction_deg),
        ];
        for layer in 0..3 {
            columns.push(Column::new(
                format!("mode_cloud_cover{}", layer + 1).into(),
                rows.iter()
                    .map(|s| s.mode_sky_cover[layer].clone())
                    .collect::<Vec<_>>(),
            ));
        }
        for layer in 0..3 {
            columns.push(Column::new(
                format!("mean_sky_level{}", layer + 1).into(),
                rows.iter()
                    .map(|s| s.mean_sky_level_ft[layer])
                    .collect::<Vec<_>>(),
            ));
        }
        columns.extend([
            floats("average_temp", |s| s.mean_temperature),
            floats("average_relh", |s| s.mean_relative_humidity),
            floats("average_pressure", |s| s.mean_pressure),
            floats("average_precipitation", |s| s.mean_precipitation),
            floats("average_visibility", |s| s.mean_visibility),
            Column::new(
                "observations".into(),
                rows.iter()
                    .map(|s| s.observation_count as u64)
                    .collect::<Vec<_>>(),
            ),
        ]);

        DataFrame::new(columns)
    }

    /// Writes the table as comma-delimited text with a header row, station code first.
    pub async fn write_csv(&self, path: &Path) -> Result<(), MesonetError> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| MesonetError::OutputDirCreation(parent.to_path_buf(), e))?;
        }

        let mut df = self
            .to_dataframe()
            .map_err(MesonetError::ResultTableBuild)?;
        let path_buf = path.to_path_buf();
        task::spawn_blocking(move || {
            let mut file = std::fs::File::create(&path_buf)
                .map_err(|e| MesonetError::ResultWriteIo(path_buf.clone(), e))?;
            CsvWriter::new(&mut file)
                .include_header(true)
                .finish(&mut df)
                .map_err(|e| MesonetError::ResultWritePolars(path_buf, e))?;
            Ok::<(), MesonetError>(())
        })
        .await??;

        info!("Wrote {} station summaries to {:?}", self.len(), path);
        Ok(())
    }
}
