//! Block discovery command.

use anyhow::{Context, Result};
use blockfeed_fetch::FetchClient;
use blockfeed_recorder::{RecorderConfig, run_discovery};
use blockfeed_store::JsonFileStore;
use std::path::Path;
use tracing::info;

/// Discovers blocks from every configured provider source and records
/// them into the JSON file store.
pub(crate) async fn run(data_dir: &Path) -> Result<()> {
    let store = JsonFileStore::new(data_dir)
        .with_context(|| format!("opening data directory {}", data_dir.display()))?;
    let fetcher = FetchClient::with_defaults().context("building HTTP client")?;
    let config = RecorderConfig::default();

    let summary = run_discovery(&fetcher, &store, &config).await;
    info!(
        recorded = summary.recorded,
        failed = summary.failed,
        "block discovery finished"
    );
    if !summary.is_clean() {
        info!("some sources were skipped; see error logs above");
    }
    Ok(())
}
