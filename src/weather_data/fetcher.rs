use crate::config::PipelineConfig;
use crate::weather_data::error::FetchError;
use log::{info, warn};
use reqwest::Client;
use std::future::Future;
use std::time::Duration;
use tokio::time::sleep;

/// Something that can turn a request URI into a response body.
pub trait Transport {
    fn get_text(&self, uri: &str) -> impl Future<Output = Result<String, FetchError>> + Send;
}

impl<T: Transport + Sync> Transport for &T {
    fn get_text(&self, uri: &str) -> impl Future<Output = Result<String, FetchError>> + Send {
        (**self).get_text(uri)
    }
}

/// [`Transport`] over HTTP GET.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
}

impl HttpTransport {
    pub fn new(timeout: Duration) -> Result<Self, FetchError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(FetchError::ClientBuild)?;
        Ok(Self::from_client(client))
    }

    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for HttpTransport {
    async fn get_text(&self, uri: &str) -> Result<String, FetchError> {
        let response = self
            .client
            .get(uri)
            .send()
            .await
            .map_err(|e| FetchError::NetworkRequest(uri.to_string(), e))?;

        let response = match response.error_for_status() {
            Ok(resp) => resp,
            Err(e) => {
                return Err(if let Some(status) = e.status() {
                    FetchError::HttpStatus {
                        url: uri.to_string(),
                        status,
                        source: e,
                    }
                } else {
                    FetchError::NetworkRequest(uri.to_string(), e)
                });
            }
        };

        response
            .text()
            .await
            .map_err(|e| FetchError::Body(uri.to_string(), e))
    }
}

/// Downloads raw report text, retrying a bounded number of times.
///
/// Failures are binary: an attempt either yields the complete body or counts as
/// failed. After the last failed attempt [`Fetcher::fetch`] returns an empty
/// string, which downstream code treats as "no observations".
#[derive(Debug, Clone)]
pub struct Fetcher<T = HttpTransport> {
    transport: T,
    max_attempts: u32,
    backoff: Duration,
    error_token: String,
}

impl Fetcher<HttpTransport> {
    pub fn from_config(config: &PipelineConfig) -> Result<Self, FetchError> {
        Ok(Self::with_transport(HttpTransport::new(config.timeout)?, config))
    }
}

impl<T: Transport> Fetcher<T> {
    pub fn with_transport(transport: T, config: &PipelineConfig) -> Self {
        Self {
            transport,
            max_attempts: config.max_attempts,
            backoff: config.backoff,
            error_token: config.error_token.clone(),
        }
    }

    /// Fetches `uri`, waiting a fixed backoff between failed attempts.
    pub async fn fetch(&self, uri: &str) -> String {
        for attempt in 1..=self.max_attempts {
            match self.attempt(uri).await {
                Ok(body) => {
                    info!("Downloaded {} bytes from {}", body.len(), uri);
                    return body;
                }
                Err(e) => {
                    warn!(
                        "Download attempt {}/{} for {} failed: {}",
                        attempt, self.max_attempts, uri, e
                    );
                    if attempt < self.max_attempts {
                        sleep(self.backoff).await;
                    }
                }
            }
        }

        warn!(
            "Exhausted {} attempts to download {}, returning empty data",
            self.max_attempts, uri
        );
        String::new()
    }

    async fn attempt(&self, uri: &str) -> Result<String, FetchError> {
        let body = self.transport.get_text(uri).await?;
        if body.starts_with(&self.error_token) {
            return Err(FetchError::Upstream {
                url: uri.to_string(),
                message: body.lines().next().unwrap_or_default().trim().to_string(),
            });
        }
        Ok(body)
    }
}
