//! HTTP client for fetching provider pages.

use encoding_rs::Encoding;
use reqwest::Client;
use std::time::Duration;
use thiserror::Error;

/// Configuration for the fetch client.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Request timeout.
    pub timeout: Duration,
    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(30),
            user_agent: format!("blockfeed/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Errors that can occur while fetching a page.
#[derive(Error, Debug)]
pub enum FetchError {
    /// HTTP request failed at the transport level.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server returned a non-success status.
    #[error("Server error: {status}")]
    ServerError {
        /// HTTP status code.
        status: u16,
    },
}

/// HTTP client with connection pooling, returning response bodies as text.
#[derive(Debug, Clone)]
pub struct FetchClient {
    client: Client,
    config: ClientConfig,
}

impl FetchClient {
    /// Creates a new fetch client with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            // One request in flight at a time; a single kept-alive
            // connection per host is enough.
            .pool_max_idle_per_host(1)
            .pool_idle_timeout(Duration::from_secs(90))
            .tcp_keepalive(Duration::from_secs(60))
            .timeout(config.timeout)
            .connect_timeout(Duration::from_secs(10))
            .user_agent(&config.user_agent)
            .gzip(true)
            .build()?;
        Ok(Self { client, config })
    }

    /// Creates a client with default configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be created.
    pub fn with_defaults() -> Result<Self, reqwest::Error> {
        Self::new(ClientConfig::default())
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Fetches a URL and returns the body as text.
    ///
    /// `encoding` overrides the body decoding; the keyed category pages
    /// declare no charset but are GBK. Without an override the body is
    /// decoded as UTF-8, with replacement on invalid sequences.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-success status.
    pub async fn fetch_text(
        &self,
        url: &str,
        encoding: Option<&'static Encoding>,
    ) -> Result<String, FetchError> {
        let response = self.client.get(url).send().await?;
        if !response.status().is_success() {
            return Err(FetchError::ServerError {
                status: response.status().as_u16(),
            });
        }
        let bytes = response.bytes().await?;
        let encoding = encoding.unwrap_or(encoding_rs::UTF_8);
        let (text, _, _) = encoding.decode(&bytes);
        Ok(text.into_owned())
    }
}
