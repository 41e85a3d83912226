//! Fetcher trait seam.

use async_trait::async_trait;
use encoding_rs::Encoding;

use crate::{FetchClient, FetchError};

/// Fetches a URL's body as text.
///
/// The recorder is written against this trait rather than the concrete
/// client so that runs can be exercised offline against scripted
/// responses.
#[async_trait]
pub trait TextFetcher: Send + Sync {
    /// Fetches `url`, decoding the body with `encoding` when given.
    async fn fetch(
        &self,
        url: &str,
        encoding: Option<&'static Encoding>,
    ) -> Result<String, FetchError>;
}

#[async_trait]
impl TextFetcher for FetchClient {
    async fn fetch(
        &self,
        url: &str,
        encoding: Option<&'static Encoding>,
    ) -> Result<String, FetchError> {
        self.fetch_text(url, encoding).await
    }
}
