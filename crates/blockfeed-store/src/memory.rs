//! In-memory store.

use async_trait::async_trait;
use blockfeed_types::{Block, BlockMember};
use std::collections::HashMap;
use std::sync::Mutex;

use crate::{BlockStore, StoreError};

/// HashMap-backed store keyed by canonical id.
///
/// Primarily a test double for the recorder, but usable wherever the
/// result set only needs to live as long as the process.
#[derive(Debug, Default)]
pub struct MemoryStore {
    blocks: Mutex<HashMap<String, Block>>,
    members: Mutex<HashMap<String, BlockMember>>,
}

impl MemoryStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all stored blocks, ordered by id.
    #[must_use]
    pub fn blocks(&self) -> Vec<Block> {
        let mut blocks: Vec<_> = self
            .blocks
            .lock()
            .expect("block map poisoned")
            .values()
            .cloned()
            .collect();
        blocks.sort_by(|a, b| a.id.cmp(&b.id));
        blocks
    }

    /// Returns all stored members, ordered by id.
    #[must_use]
    pub fn members(&self) -> Vec<BlockMember> {
        let mut members: Vec<_> = self
            .members
            .lock()
            .expect("member map poisoned")
            .values()
            .cloned()
            .collect();
        members.sort_by(|a, b| a.id.cmp(&b.id));
        members
    }
}

#[async_trait]
impl BlockStore for MemoryStore {
    async fn upsert_blocks(&self, blocks: &[Block], force_update: bool) -> Result<(), StoreError> {
        let mut map = self.blocks.lock().expect("block map poisoned");
        for block in blocks {
            if force_update || !map.contains_key(&block.id) {
                map.insert(block.id.clone(), block.clone());
            }
        }
        Ok(())
    }

    async fn upsert_members(
        &self,
        members: &[BlockMember],
        force_update: bool,
    ) -> Result<(), StoreError> {
        let mut map = self.members.lock().expect("member map poisoned");
        for member in members {
            if force_update || !map.contains_key(&member.id) {
                map.insert(member.id.clone(), member.clone());
            }
        }
        Ok(())
    }

    async fn load_blocks(&self) -> Result<Vec<Block>, StoreError> {
        Ok(self.blocks())
    }
}
