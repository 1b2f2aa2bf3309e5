pub mod aggregate;
mod config;
mod error;
mod pipeline;
mod stations;
mod types;
mod utils;
mod weather_data;

pub use config::*;
pub use error::MesonetError;
pub use pipeline::WindPipeline;

pub use aggregate::aggregator::aggregate;

pub use stations::schedule::{
    default_dated_stations, default_recent_stations, StationRequest, StationSchedule,
    DEFAULT_RECENT_DAYS,
};

pub use types::date_window::DateWindow;
pub use types::field::{AsosField, FieldKind, SkyLayer, FULL_FIELDS, WIND_ONLY_FIELDS};
pub use types::observation::ObservationRow;
pub use types::result_table::ResultTable;
pub use types::summary::StationSummary;

pub use weather_data::cleaner::{clean, Cleaner};
pub use weather_data::error::FetchError;
pub use weather_data::fetcher::{Fetcher, HttpTransport, Transport};
pub use weather_data::request::AsosRequest;
