//! Test support: a scripted fetcher driving runs offline.

use async_trait::async_trait;
use blockfeed_fetch::{Encoding, FetchError, TextFetcher};
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};

enum Scripted {
    Text(String),
    Failure,
}

/// A [`TextFetcher`] answering from a fixed URL-to-body table.
///
/// URLs without a scripted response fail like a dead endpoint, which
/// doubles as the transient-fetch-failure case in tests.
pub(crate) struct ScriptedFetcher {
    responses: HashMap<String, Scripted>,
    calls: AtomicUsize,
}

impl ScriptedFetcher {
    pub(crate) fn new() -> Self {
        Self {
            responses: HashMap::new(),
            calls: AtomicUsize::new(0),
        }
    }

    pub(crate) fn with_text(mut self, url: &str, body: &str) -> Self {
        self.responses
            .insert(url.to_string(), Scripted::Text(body.to_string()));
        self
    }

    pub(crate) fn with_failure(mut self, url: &str) -> Self {
        self.responses.insert(url.to_string(), Scripted::Failure);
        self
    }

    /// Number of fetches made so far.
    pub(crate) fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl TextFetcher for ScriptedFetcher {
    async fn fetch(
        &self,
        url: &str,
        _encoding: Option<&'static Encoding>,
    ) -> Result<String, FetchError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        match self.responses.get(url) {
            Some(Scripted::Text(body)) => Ok(body.clone()),
            Some(Scripted::Failure) => Err(FetchError::ServerError { status: 500 }),
            None => Err(FetchError::ServerError { status: 404 }),
        }
    }
}
