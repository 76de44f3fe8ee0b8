//! HTTP transport for the Open-Meteo APIs
//!
//! A single blocking GET per call. There is no retry and no rate limiting:
//! one failed attempt is terminal for that search. Unless a timeout is
//! configured, requests use the HTTP client's default.

use crate::config::ApiConfig;
use crate::{Result, SkyglanceError};
use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::de::DeserializeOwned;
use std::time::{Duration, Instant};
use tracing::{debug, info, instrument, warn};

/// Fetches a URL and returns its body
pub trait HttpTransport {
    /// Issue one GET request. Returns the body on HTTP 200, otherwise
    /// `HttpStatus` with the observed code, or `Network` if no response arrived.
    fn get_text(&self, url: &str) -> Result<String>;
}

impl<T: HttpTransport + ?Sized> HttpTransport for &T {
    fn get_text(&self, url: &str) -> Result<String> {
        (**self).get_text(url)
    }
}

/// GET `url` and decode the body as JSON. Malformed bodies become `Parse` errors.
pub fn get_json<T: DeserializeOwned>(transport: &impl HttpTransport, url: &str) -> Result<T> {
    let body = transport.get_text(url)?;
    serde_json::from_str(&body).map_err(|e| {
        warn!("Failed to parse response from {}: {}", url, e);
        SkyglanceError::parse(e.to_string())
    })
}

/// Blocking `reqwest` client
#[derive(Debug, Clone)]
pub struct BlockingHttpClient {
    client: Client,
}

impl BlockingHttpClient {
    /// Create a new client from the API settings
    pub fn new(config: &ApiConfig) -> Result<Self> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());

        if let Some(seconds) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(seconds));
        }

        let client = builder.build().map_err(|e| {
            SkyglanceError::network(format!("Failed to create HTTP client: {e}"))
        })?;

        Ok(Self { client })
    }
}

impl HttpTransport for BlockingHttpClient {
    #[instrument(skip(self), level = "debug")]
    fn get_text(&self, url: &str) -> Result<String> {
        let start = Instant::now();

        let response = self.client.get(url).send().map_err(|e| {
            warn!("Network error after {:.3}s: {}", start.elapsed().as_secs_f64(), e);
            SkyglanceError::network(e.to_string())
        })?;

        let status = response.status();
        debug!(
            "HTTP response received: {} in {:.3}s",
            status,
            start.elapsed().as_secs_f64()
        );

        if status != StatusCode::OK {
            warn!(
                "API request failed with status: {} - {}",
                status,
                status.canonical_reason().unwrap_or("Unknown error")
            );
            return Err(SkyglanceError::http_status(status.as_u16()));
        }

        let body = response
            .text()
            .map_err(|e| SkyglanceError::network(format!("Failed to read response body: {e}")))?;

        info!(
            "Successful API request in {:.3}s ({} bytes)",
            start.elapsed().as_secs_f64(),
            body.len()
        );
        Ok(body)
    }
}
