//! Block membership records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::{Block, ids};

/// The relation "stock X belongs to block Y", observed at fetch time.
///
/// The stock's code and name are denormalized into the record as a
/// snapshot; `recorded_at` is the fetch timestamp, because the provider
/// exposes no data timestamp of its own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockMember {
    /// Canonical identifier, `{block_id}_{stock_id}`.
    pub id: String,
    /// Back-reference to the owning block.
    pub block_id: String,
    /// Canonical id of the member stock.
    pub stock_id: String,
    /// Provider-native stock code.
    pub stock_code: String,
    /// Stock display name at observation time.
    pub stock_name: String,
    /// UTC timestamp of the fetch.
    pub recorded_at: DateTime<Utc>,
}

impl BlockMember {
    /// Creates a membership record for `block`, deriving the stock and
    /// membership ids from the provider stock code.
    #[must_use]
    pub fn new(
        block: &Block,
        stock_code: impl Into<String>,
        stock_name: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        let stock_code = stock_code.into();
        let stock_id = ids::stock_id(&stock_code);
        Self {
            id: ids::member_id(&block.id, &stock_id),
            block_id: block.id.clone(),
            stock_id,
            stock_code,
            stock_name: stock_name.into(),
            recorded_at,
        }
    }
}
