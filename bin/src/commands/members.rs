//! Membership recording command.

use anyhow::{Context, Result};
use blockfeed_fetch::FetchClient;
use blockfeed_recorder::{RecorderConfig, run_members};
use blockfeed_store::JsonFileStore;
use std::path::Path;
use std::time::Duration;
use tracing::info;

/// Records memberships for the stored blocks, optionally narrowed to a
/// set of block codes.
pub(crate) async fn run(
    data_dir: &Path,
    codes: Option<Vec<String>>,
    max_pages: u32,
    pace_secs: u64,
) -> Result<()> {
    let store = JsonFileStore::new(data_dir)
        .with_context(|| format!("opening data directory {}", data_dir.display()))?;
    let fetcher = FetchClient::with_defaults().context("building HTTP client")?;
    let config = RecorderConfig {
        codes,
        max_pages,
        pacing: Duration::from_secs(pace_secs),
        ..RecorderConfig::default()
    };

    let summary = run_members(&fetcher, &store, &config)
        .await
        .context("loading stored blocks")?;
    info!(
        recorded = summary.recorded,
        failed = summary.failed,
        "membership recording finished"
    );
    Ok(())
}
