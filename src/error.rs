use crate::weather_data::error::FetchError;
use polars::error::PolarsError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum MesonetError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to parse station schedule")]
    ScheduleParse(#[from] serde_json::Error),

    #[error("Invalid date '{value}' for station '{station}'")]
    ScheduleDate {
        station: String,
        value: String,
        #[source]
        source: chrono::ParseError,
    },

    #[error("Expected a date string for station '{0}'")]
    ScheduleValue(String),

    #[error("Failed to create output directory '{0}'")]
    OutputDirCreation(PathBuf, #[source] std::io::Error),

    #[error("Failed to build result table")]
    ResultTableBuild(#[source] PolarsError),

    #[error("I/O error writing result table '{0}'")]
    ResultWriteIo(PathBuf, #[source] std::io::Error),

    #[error("Encoding error writing result table '{0}'")]
    ResultWritePolars(PathBuf, #[source] PolarsError),

    #[error("Background task failed to complete")]
    TaskJoin(#[from] tokio::task::JoinError),
}
