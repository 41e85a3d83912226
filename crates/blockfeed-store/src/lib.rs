//! Persistence collaborator for blockfeed.
//!
//! The ingestion pipeline does not own a storage engine; it hands batches
//! of records to a [`BlockStore`] and expects upsert-by-id semantics.
//! A full-refresh write replaces records whose canonical ids already
//! exist and never deletes records absent from the batch.
//!
//! Two reference implementations are provided: [`MemoryStore`] for tests
//! and embedding, [`JsonFileStore`] for the CLI.

#![doc = include_str!("../README.md")]
#![doc(issue_tracker_base_url = "https://github.com/blockfeed/blockfeed/issues/")]
#![cfg_attr(docsrs, feature(doc_cfg, doc_auto_cfg))]
#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod file;
mod memory;

pub use file::JsonFileStore;
pub use memory::MemoryStore;

use async_trait::async_trait;
use blockfeed_types::{Block, BlockMember};
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur in a store implementation.
#[derive(Error, Debug)]
pub enum StoreError {
    /// Failed to read a state file.
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        /// The file that could not be read.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// Failed to write a state file.
    #[error("Failed to write {path}: {source}")]
    WriteFile {
        /// The file that could not be written.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// A stored record could not be serialized or deserialized.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Upsert-by-id persistence for classification records.
///
/// `force_update` selects full-refresh semantics: existing records with
/// the same id are overwritten. With it unset, existing records win.
/// The pipeline always runs with it set; the flag exists because the
/// downstream write operation carries it.
#[async_trait]
pub trait BlockStore: Send + Sync {
    /// Upserts a batch of block records keyed by `id`.
    async fn upsert_blocks(&self, blocks: &[Block], force_update: bool) -> Result<(), StoreError>;

    /// Upserts a batch of membership records keyed by `id`.
    async fn upsert_members(
        &self,
        members: &[BlockMember],
        force_update: bool,
    ) -> Result<(), StoreError>;

    /// Loads all stored blocks, ordered by id.
    ///
    /// Membership runs iterate this set (optionally narrowed by code).
    async fn load_blocks(&self) -> Result<Vec<Block>, StoreError>;
}
