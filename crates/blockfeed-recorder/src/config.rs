//! Run configuration.

use blockfeed_fetch::url;
use blockfeed_types::BlockKind;
use std::time::Duration;

/// Provider endpoint table for one run.
///
/// Passed in explicitly rather than read from globals so that tests and
/// narrow manual runs can point the recorder at other hosts.
#[derive(Debug, Clone)]
pub struct ProviderUrls {
    /// Grouped (hierarchical) category tree endpoint.
    pub grouped_nodes: String,
    /// Keyed category endpoints, one per category kind to discover.
    pub keyed_categories: Vec<(BlockKind, String)>,
    /// Base URL of the paginated membership endpoint.
    pub member_page_base: String,
}

impl Default for ProviderUrls {
    fn default() -> Self {
        Self {
            grouped_nodes: url::GROUPED_NODES_URL.to_string(),
            // The provider also serves an area map (url::KEYED_AREA_URL);
            // the default run records industry and concept.
            keyed_categories: vec![
                (BlockKind::Industry, url::KEYED_INDUSTRY_URL.to_string()),
                (BlockKind::Concept, url::KEYED_CONCEPT_URL.to_string()),
            ],
            member_page_base: url::MEMBER_PAGE_BASE_URL.to_string(),
        }
    }
}

/// Configuration for discovery and membership runs.
#[derive(Debug, Clone)]
pub struct RecorderConfig {
    /// Market scope stamped into every record (e.g. `cn`).
    pub exchange: String,
    /// Requested rows per membership page.
    pub page_size: u32,
    /// Hard cap on pages fetched per block.
    ///
    /// The provider gives no has-more signal; the cap bounds the scan
    /// instead. At the default page size the cap is far above any real
    /// block's membership count.
    pub max_pages: u32,
    /// Delay between consecutive page fetches for the same block.
    pub pacing: Duration,
    /// Restrict a membership run to these block codes. `None` means all
    /// stored blocks.
    pub codes: Option<Vec<String>>,
    /// Full-refresh flag forwarded to every write. The pipeline's
    /// overwrite-by-id semantics require it to stay `true`.
    pub force_update: bool,
    /// Provider endpoint table.
    pub urls: ProviderUrls,
}

impl Default for RecorderConfig {
    fn default() -> Self {
        Self {
            exchange: "cn".to_string(),
            page_size: 5000,
            max_pages: 4,
            pacing: Duration::from_secs(5),
            codes: None,
            force_update: true,
            urls: ProviderUrls::default(),
        }
    }
}

impl RecorderConfig {
    /// Returns true if a membership run should process this block code.
    #[must_use]
    pub fn selects(&self, code: &str) -> bool {
        self.codes
            .as_ref()
            .is_none_or(|codes| codes.iter().any(|c| c == code))
    }
}
