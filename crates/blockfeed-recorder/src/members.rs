//! Per-block membership recording.

use blockfeed_fetch::{Pacer, TextFetcher, url::member_page_url};
use blockfeed_parse::{StockRow, decode_relaxed, is_no_data, parse_stock_page};
use blockfeed_store::BlockStore;
use blockfeed_types::{Block, BlockMember, BlockfeedError, Result};
use chrono::Utc;
use tracing::{error, info, warn};

use crate::{RecorderConfig, RunSummary};

/// Decodes one membership page body into stock rows.
fn parse_member_page(text: &str) -> Result<Vec<StockRow>> {
    let tree = decode_relaxed(text).map_err(|e| BlockfeedError::Parse(e.to_string()))?;
    parse_stock_page(&tree).map_err(|e| BlockfeedError::Shape(e.to_string()))
}

/// Records the full membership of one block.
///
/// Pages are fetched in order from 1 up to the configured cap, paced by
/// `pacer` between consecutive fetches. The provider's `null` sentinel
/// ends the scan early. A malformed page is logged and skipped without
/// losing its neighbors. All surviving rows are written as one
/// full-refresh batch; an empty batch writes nothing.
///
/// # Errors
///
/// Returns an error on fetch or store failure; the caller isolates it
/// to this block.
pub async fn record_block_members(
    fetcher: &dyn TextFetcher,
    store: &dyn BlockStore,
    pacer: &Pacer,
    config: &RecorderConfig,
    block: &Block,
) -> Result<usize> {
    let mut batch: Vec<BlockMember> = Vec::new();

    for page in 1..=config.max_pages {
        if page > 1 {
            pacer.pause().await;
        }
        let url = member_page_url(
            &config.urls.member_page_base,
            page,
            config.page_size,
            &block.code,
        );
        let text = fetcher
            .fetch(&url, None)
            .await
            .map_err(|e| BlockfeedError::Http(e.to_string()))?;

        if is_no_data(&text) {
            break;
        }

        let rows = match parse_member_page(&text) {
            Ok(rows) => rows,
            Err(e) => {
                warn!(block = %block.id, page, error = %e, "skipping malformed member page");
                continue;
            }
        };

        let recorded_at = Utc::now();
        batch.extend(
            rows.into_iter()
                .map(|row| BlockMember::new(block, row.code, row.name, recorded_at)),
        );
    }

    let count = batch.len();
    if !batch.is_empty() {
        store
            .upsert_members(&batch, config.force_update)
            .await
            .map_err(|e| BlockfeedError::Store(e.to_string()))?;
    }
    info!(block = %block.id, name = %block.name, count, "recorded block members");
    Ok(count)
}

/// Runs membership recording over the stored blocks.
///
/// The block set comes from the store; `config.codes` narrows it for
/// manual runs. A failing block is logged and skipped; the run always
/// completes.
///
/// # Errors
///
/// Returns an error only if the block set itself cannot be loaded.
pub async fn run_members(
    fetcher: &dyn TextFetcher,
    store: &dyn BlockStore,
    config: &RecorderConfig,
) -> Result<RunSummary> {
    let pacer = Pacer::new(config.pacing);
    let blocks = store
        .load_blocks()
        .await
        .map_err(|e| BlockfeedError::Store(e.to_string()))?;

    let mut summary = RunSummary::default();
    for block in blocks.iter().filter(|b| config.selects(&b.code)) {
        match record_block_members(fetcher, store, &pacer, config, block).await {
            Ok(_) => summary.recorded += 1,
            Err(e) => {
                error!(block = %block.id, error = %e, "membership run failed; skipping block");
                summary.failed += 1;
            }
        }
    }
    Ok(summary)
}
