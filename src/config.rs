//! Tunables of a pipeline run, with the upstream service's conventions as defaults.

use bon::Builder;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SERVICE_URL: &str = "http://mesonet.agron.iastate.edu/cgi-bin/request/asos.py?";
/// The service can take minutes to assemble a response.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);
pub const DEFAULT_MAX_ATTEMPTS: u32 = 6;
pub const DEFAULT_BACKOFF: Duration = Duration::from_secs(5);
/// Metadata and debug lines the service writes before the column header.
pub const DEFAULT_PREAMBLE_LINES: usize = 5;
pub const DEFAULT_MISSING_SENTINEL: &str = "M";
pub const DEFAULT_ERROR_TOKEN: &str = "ERROR";

/// Configuration for [`crate::WindPipeline`].
///
/// # Examples
///
/// ```
/// use mesonet_wind::PipelineConfig;
/// use std::time::Duration;
///
/// let config = PipelineConfig::builder()
///     .max_attempts(3)
///     .backoff(Duration::from_secs(1))
///     .build();
/// assert_eq!(config.max_attempts, 3);
/// assert_eq!(config.preamble_lines, 5);
/// ```
#[derive(Debug, Clone, Builder)]
pub struct PipelineConfig {
    /// Base URL of the ASOS request endpoint, including the trailing `?`.
    #[builder(into, default = DEFAULT_SERVICE_URL.to_string())]
    pub service_url: String,
    /// Timeout applied to each HTTP request.
    #[builder(default = DEFAULT_TIMEOUT)]
    pub timeout: Duration,
    /// Total number of download attempts per station.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
    /// Fixed pause between failed attempts.
    #[builder(default = DEFAULT_BACKOFF)]
    pub backoff: Duration,
    /// A response body starting with this token is an upstream failure.
    #[builder(into, default = DEFAULT_ERROR_TOKEN.to_string())]
    pub error_token: String,
    #[builder(default = DEFAULT_PREAMBLE_LINES)]
    pub preamble_lines: usize,
    #[builder(into, default = DEFAULT_MISSING_SENTINEL.to_string())]
    pub missing_sentinel: String,
    /// When set, every raw response is kept here as `<station>_<YYYYMMDD>.txt`.
    #[builder(into)]
    pub raw_archive_dir: Option<PathBuf>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}
