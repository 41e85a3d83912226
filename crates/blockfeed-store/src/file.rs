//! JSON-file-backed store.

use async_trait::async_trait;
use blockfeed_types::{Block, BlockMember};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{BlockStore, StoreError};

/// Store writing JSON map files (`blocks.json`, `members.json`) keyed by
/// canonical id under a data directory.
///
/// Upserts are read-merge-rewrite over the whole file, which is fine at
/// this pipeline's scale (a few thousand blocks, tens of thousands of
/// memberships). Each upsert call is its own unit of work; a crash
/// between calls leaves previously written batches intact.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    dir: PathBuf,
}

impl JsonFileStore {
    /// Creates a store rooted at `dir`, creating the directory if needed.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let dir = dir.into();
        fs::create_dir_all(&dir).map_err(|e| StoreError::WriteFile {
            path: dir.clone(),
            source: e,
        })?;
        Ok(Self { dir })
    }

    /// Path of the block record file.
    #[must_use]
    pub fn blocks_path(&self) -> PathBuf {
        self.dir.join("blocks.json")
    }

    /// Path of the membership record file.
    #[must_use]
    pub fn members_path(&self) -> PathBuf {
        self.dir.join("members.json")
    }

    fn read_map<T: DeserializeOwned>(path: &Path) -> Result<BTreeMap<String, T>, StoreError> {
        if !path.exists() {
            return Ok(BTreeMap::new());
        }
        let text = fs::read_to_string(path).map_err(|e| StoreError::ReadFile {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(serde_json::from_str(&text)?)
    }

    fn write_map<T: Serialize>(path: &Path, map: &BTreeMap<String, T>) -> Result<(), StoreError> {
        let text = serde_json::to_string_pretty(map)?;
        fs::write(path, text).map_err(|e| StoreError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })
    }

    fn merge<T: Serialize + DeserializeOwned>(
        path: &Path,
        records: impl Iterator<Item = (String, T)>,
        force_update: bool,
    ) -> Result<(), StoreError> {
        let mut map = Self::read_map::<T>(path)?;
        for (id, record) in records {
            if force_update || !map.contains_key(&id) {
                map.insert(id, record);
            }
        }
        Self::write_map(path, &map)
    }
}

#[async_trait]
impl BlockStore for JsonFileStore {
    async fn upsert_blocks(&self, blocks: &[Block], force_update: bool) -> Result<(), StoreError> {
        Self::merge(
            &self.blocks_path(),
            blocks.iter().map(|b| (b.id.clone(), b.clone())),
            force_update,
        )
    }

    async fn upsert_members(
        &self,
        members: &[BlockMember],
        force_update: bool,
    ) -> Result<(), StoreError> {
        Self::merge(
            &self.members_path(),
            members.iter().map(|m| (m.id.clone(), m.clone())),
            force_update,
        )
    }

    async fn load_blocks(&self) -> Result<Vec<Block>, StoreError> {
        let map = Self::read_map::<Block>(&self.blocks_path())?;
        Ok(map.into_values().collect())
    }
}
