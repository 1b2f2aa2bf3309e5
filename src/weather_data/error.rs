use thiserror::Error;

/// Why a single download attempt failed.
///
/// These never leave the [`crate::Fetcher`] retry loop: once attempts are
/// exhausted the fetcher reports an empty body instead.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),

    #[error("Network request failed for {0}")]
    NetworkRequest(String, #[source] reqwest::Error),

    #[error("HTTP request failed for {url} with status {status}")]
    HttpStatus {
        url: String,
        status: reqwest::StatusCode,
        #[source]
        source: reqwest::Error,
    },

    #[error("Failed to read response body for {0}")]
    Body(String, #[source] reqwest::Error),

    #[error("Upstream reported an error for {url}: {message}")]
    Upstream { url: String, message: String },
}
