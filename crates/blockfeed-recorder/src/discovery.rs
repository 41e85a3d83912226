//! Block discovery across provider sources.

use blockfeed_fetch::TextFetcher;
use blockfeed_parse::{decode_embedded, decode_relaxed, parse_grouped_blocks, parse_keyed_blocks};
use blockfeed_store::BlockStore;
use blockfeed_types::{BlockKind, BlockfeedError, Result};
use tracing::{error, info};

use crate::{RecorderConfig, RunSummary};

/// Records blocks from the grouped category tree.
///
/// The grouped source carries industry sub-sectors; the payload is a
/// relaxed object literal with the group list behind a fixed index
/// descent. One full-refresh write for the whole source; an empty
/// extraction writes nothing.
///
/// # Errors
///
/// Returns an error on fetch, parse, shape or store failure; the caller
/// isolates it to this source.
pub async fn record_grouped(
    fetcher: &dyn TextFetcher,
    store: &dyn BlockStore,
    config: &RecorderConfig,
) -> Result<usize> {
    let text = fetcher
        .fetch(&config.urls.grouped_nodes, None)
        .await
        .map_err(|e| BlockfeedError::Http(e.to_string()))?;
    let tree = decode_relaxed(&text).map_err(|e| BlockfeedError::Parse(e.to_string()))?;
    let blocks = parse_grouped_blocks(&tree, &config.exchange, BlockKind::Industry)
        .map_err(|e| BlockfeedError::Shape(e.to_string()))?;

    if !blocks.is_empty() {
        store
            .upsert_blocks(&blocks, config.force_update)
            .await
            .map_err(|e| BlockfeedError::Store(e.to_string()))?;
    }
    info!(count = blocks.len(), "recorded grouped blocks");
    Ok(blocks.len())
}

/// Records blocks from one keyed category map.
///
/// The keyed pages are GBK-encoded HTML with the category map embedded
/// as the first JSON object in the body.
///
/// # Errors
///
/// Returns an error on fetch, parse, shape or store failure; the caller
/// isolates it to this source.
pub async fn record_keyed(
    fetcher: &dyn TextFetcher,
    store: &dyn BlockStore,
    config: &RecorderConfig,
    kind: BlockKind,
    url: &str,
) -> Result<usize> {
    let text = fetcher
        .fetch(url, Some(blockfeed_fetch::GBK))
        .await
        .map_err(|e| BlockfeedError::Http(e.to_string()))?;
    let tree = decode_embedded(&text).map_err(|e| BlockfeedError::Parse(e.to_string()))?;
    let blocks = parse_keyed_blocks(&tree, &config.exchange, kind)
        .map_err(|e| BlockfeedError::Shape(e.to_string()))?;

    if !blocks.is_empty() {
        store
            .upsert_blocks(&blocks, config.force_update)
            .await
            .map_err(|e| BlockfeedError::Store(e.to_string()))?;
    }
    info!(kind = %kind, count = blocks.len(), "recorded keyed blocks");
    Ok(blocks.len())
}

/// Runs discovery across every configured source.
///
/// Sources form a closed set: the grouped tree, then one keyed map per
/// configured category kind. A failing source is logged and skipped;
/// the run always completes.
pub async fn run_discovery(
    fetcher: &dyn TextFetcher,
    store: &dyn BlockStore,
    config: &RecorderConfig,
) -> RunSummary {
    let mut summary = RunSummary::default();

    match record_grouped(fetcher, store, config).await {
        Ok(_) => summary.recorded += 1,
        Err(e) => {
            error!(error = %e, "grouped block discovery failed; skipping source");
            summary.failed += 1;
        }
    }

    for (kind, url) in &config.urls.keyed_categories {
        match record_keyed(fetcher, store, config, *kind, url).await {
            Ok(_) => summary.recorded += 1,
            Err(e) => {
                error!(error = %e, kind = %kind, "keyed block discovery failed; skipping source");
                summary.failed += 1;
            }
        }
    }

    summary
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::ScriptedFetcher;
    use blockfeed_store::MemoryStore;

    /// Grouped payload with two industry groups, as an object literal.
    const GROUPED_BODY: &str = concat!(
        "['ignored',[['ignored',['a','b',['x',",
        "[['Electronics',[['A','extra','001'],['B','002']]],",
        "['Steel',[['Common','sw2_750']]]]",
        "]]]]]",
    );

    /// Keyed payload embedded in a page body.
    const KEYED_BODY: &str =
        "var S_Finance = {\"new_dzxx\":\"1,IT,2\",\"new_jrhy\":\"1,Finance,2\"};</script>";

    fn test_config() -> RecorderConfig {
        RecorderConfig {
            urls: crate::ProviderUrls {
                grouped_nodes: "http://mock.test/nodes".to_string(),
                keyed_categories: vec![
                    (BlockKind::Industry, "http://mock.test/hy".to_string()),
                    (BlockKind::Concept, "http://mock.test/class".to_string()),
                ],
                member_page_base: "http://mock.test/members".to_string(),
            },
            ..RecorderConfig::default()
        }
    }

    #[tokio::test]
    async fn test_discovery_records_all_sources() {
        let fetcher = ScriptedFetcher::new()
            .with_text("http://mock.test/nodes", GROUPED_BODY)
            .with_text("http://mock.test/hy", KEYED_BODY)
            .with_text("http://mock.test/class", KEYED_BODY);
        let store = MemoryStore::new();

        let summary = run_discovery(&fetcher, &store, &test_config()).await;
        assert_eq!(summary, RunSummary { recorded: 3, failed: 0 });

        let blocks = store.blocks();
        // 3 grouped + 2 keyed (industry and concept maps share codes but
        // share ids too, so the second write overwrites the first).
        assert_eq!(blocks.len(), 5);
        let composed = blocks.iter().find(|b| b.code == "001").unwrap();
        assert_eq!(composed.name, "Electronics_A");
    }

    #[tokio::test]
    async fn test_discovery_is_stable_across_runs() {
        let fetcher = ScriptedFetcher::new()
            .with_text("http://mock.test/nodes", GROUPED_BODY)
            .with_text("http://mock.test/hy", KEYED_BODY)
            .with_text("http://mock.test/class", KEYED_BODY);
        let store = MemoryStore::new();
        let config = test_config();

        run_discovery(&fetcher, &store, &config).await;
        let first = store.blocks();
        run_discovery(&fetcher, &store, &config).await;
        let second = store.blocks();

        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_failing_source_is_skipped() {
        // Grouped endpoint down, keyed endpoints healthy.
        let fetcher = ScriptedFetcher::new()
            .with_failure("http://mock.test/nodes")
            .with_text("http://mock.test/hy", KEYED_BODY)
            .with_text("http://mock.test/class", KEYED_BODY);
        let store = MemoryStore::new();

        let summary = run_discovery(&fetcher, &store, &test_config()).await;
        assert_eq!(summary, RunSummary { recorded: 2, failed: 1 });
        assert_eq!(store.blocks().len(), 2);
    }

    #[tokio::test]
    async fn test_wrong_shape_writes_nothing() {
        let fetcher = ScriptedFetcher::new()
            .with_text("http://mock.test/nodes", "['too','shallow']")
            .with_text("http://mock.test/hy", KEYED_BODY)
            .with_text("http://mock.test/class", KEYED_BODY);
        let store = MemoryStore::new();

        let summary = run_discovery(&fetcher, &store, &test_config()).await;
        assert_eq!(summary.failed, 1);
        // No partial grouped blocks made it into the store.
        assert!(store.blocks().iter().all(|b| b.code.starts_with("new_")));
    }
}
