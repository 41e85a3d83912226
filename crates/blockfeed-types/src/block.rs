//! Classification block definitions.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ids;

/// The kind of classification a block belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Industry sector groupings.
    Industry,
    /// Concept / theme groupings.
    Concept,
    /// Geographic area groupings.
    Area,
}

impl BlockKind {
    /// Returns the kind as a string slice.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Industry => "industry",
            Self::Concept => "concept",
            Self::Area => "area",
        }
    }
}

impl std::fmt::Display for BlockKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Error returned when a block kind string is not recognized.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown block kind: {0}")]
pub struct BlockKindParseError(pub String);

impl std::str::FromStr for BlockKind {
    type Err = BlockKindParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "industry" => Ok(Self::Industry),
            "concept" => Ok(Self::Concept),
            "area" => Ok(Self::Area),
            other => Err(BlockKindParseError(other.to_string())),
        }
    }
}

/// A named classification group of market instruments.
///
/// Blocks are recreated on every run under full-refresh semantics: the
/// canonical [`id`](Self::id) is the upsert key, so re-recording an
/// unchanged upstream yields the exact same record set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    /// Canonical identifier, `block_{exchange}_{code}`.
    pub id: String,
    /// Provider-native identifier.
    pub code: String,
    /// Human-readable label. Grouped providers compose `{group}_{sub}`.
    pub name: String,
    /// Market scope of the integration (e.g. `cn`).
    pub exchange: String,
    /// Classification kind.
    pub kind: BlockKind,
}

impl Block {
    /// Creates a block, deriving the canonical id from exchange and code.
    #[must_use]
    pub fn new(
        exchange: impl Into<String>,
        code: impl Into<String>,
        name: impl Into<String>,
        kind: BlockKind,
    ) -> Self {
        let exchange = exchange.into();
        let code = code.into();
        Self {
            id: ids::block_id(&exchange, &code),
            code,
            name: name.into(),
            exchange,
            kind,
        }
    }
}

impl std::fmt::Display for Block {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_block_creation() {
        let block = Block::new("cn", "sw2_750", "钢铁", BlockKind::Industry);
        assert_eq!(block.id, "block_cn_sw2_750");
        assert_eq!(block.code, "sw2_750");
        assert_eq!(block.exchange, "cn");
        assert_eq!(block.kind, BlockKind::Industry);
    }

    #[test]
    fn test_kind_round_trip() {
        for kind in [BlockKind::Industry, BlockKind::Concept, BlockKind::Area] {
            assert_eq!(kind.as_str().parse::<BlockKind>().unwrap(), kind);
        }
        assert!("sector".parse::<BlockKind>().is_err());
    }

    #[test]
    fn test_kind_serde_lowercase() {
        let json = serde_json::to_string(&BlockKind::Concept).unwrap();
        assert_eq!(json, "\"concept\"");
    }
}
