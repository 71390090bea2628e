//! Catalog client construction and configuration.

use std::time::Duration;

use reqwest::Client;
use url::Url;

use crate::error::{ClientError, Result};

/// Base URL of the public movie catalog API.
pub const DEFAULT_BASE_URL: &str = "https://moviesapi.ir/api/v1";

/// Configuration for connecting to the catalog API.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the API (e.g. "https://moviesapi.ir/api/v1")
    pub base_url: String,
    /// Per-request timeout
    pub timeout: Duration,
}

impl ClientConfig {
    /// Create a config pointing at the given base URL.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

/// Client for the movie catalog API.
///
/// Each operation is one GET with no retry, no caching, and no
/// request deduplication; errors surface immediately and the caller
/// decides what to show.
///
/// # Example
///
/// ```ignore
/// let client = CatalogClient::new(ClientConfig::default())?;
/// let page = client.movie_page(1).await?;
/// ```
pub struct CatalogClient {
    pub(crate) http: Client,
    pub(crate) base_url: String,
}

impl CatalogClient {
    /// Create a new client with the given configuration.
    ///
    /// Validates and normalizes the base URL (scheme must be http or
    /// https, trailing slashes are stripped).
    pub fn new(config: ClientConfig) -> Result<Self> {
        if config.base_url.is_empty() {
            return Err(ClientError::InvalidUrl("URL cannot be empty".into()));
        }

        let parsed = Url::parse(&config.base_url)
            .map_err(|e| ClientError::InvalidUrl(format!("{}: {}", config.base_url, e)))?;
        if parsed.scheme() != "http" && parsed.scheme() != "https" {
            return Err(ClientError::InvalidUrl(
                "URL must start with http:// or https://".into(),
            ));
        }

        let base_url = config.base_url.trim_end_matches('/').to_string();

        let http = Client::builder()
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(format!("Marquee/{}", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(ClientError::Request)?;

        Ok(Self { http, base_url })
    }

    /// The normalized base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
