//! JSON document store backing the history and profile repositories.
//!
//! A string-keyed document store over the filesystem: each key maps to one
//! JSON file holding the full serialized document. Absent or malformed
//! documents resolve to the empty value on load and never error; the
//! in-memory state stays authoritative for the running session.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::io::AsyncWriteExt;

use searchbot_core::error::Result;
use searchbot_core::search::{HistoryRecord, HistoryRepository};
use searchbot_core::user::{ProfileRepository, UserProfile};

use crate::paths::SearchbotPaths;

/// Storage key of the serialized history collection.
pub const HISTORY_KEY: &str = "searchbot:history";
/// Storage key of the serialized user profile.
pub const USER_KEY: &str = "searchbot:user";

/// File-backed JSON document store.
#[derive(Debug, Clone)]
pub struct JsonDocumentStore {
    dir: PathBuf,
}

impl JsonDocumentStore {
    /// Opens the store at the default platform data directory.
    pub async fn default() -> Result<Self> {
        Self::new(None).await
    }

    /// Opens the store, creating the backing directory if needed. A base
    /// directory override routes all documents under `base_dir` (tests).
    pub async fn new(base_dir: Option<&Path>) -> Result<Self> {
        let dir = SearchbotPaths::new(base_dir).data_dir()?;
        tokio::fs::create_dir_all(&dir).await?;
        Ok(Self { dir })
    }

    /// Maps a storage key to its backing file. Key separators are not
    /// portable filename characters, so they are flattened.
    fn file_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key.replace(':', "_")))
    }

    /// Reads and deserializes one document. Absent files and malformed
    /// payloads both resolve to `None`; a parse failure is logged and the
    /// stored bytes are left in place untouched.
    async fn read_document<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        let path = self.file_for(key);
        let raw = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return None,
            Err(err) => {
                tracing::warn!("failed to read document '{}': {}", key, err);
                return None;
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(value) => Some(value),
            Err(err) => {
                tracing::warn!("failed to parse document '{}', treating as absent: {}", key, err);
                None
            }
        }
    }

    /// Serializes and writes one full document atomically: the payload goes
    /// to a temporary sibling, is fsynced, then renamed over the target.
    async fn write_document<T: Serialize>(&self, key: &str, value: &T) -> Result<()> {
        let path = self.file_for(key);
        let tmp = path.with_extension("json.tmp");

        let payload = serde_json::to_vec(value)?;
        let mut file = tokio::fs::File::create(&tmp).await?;
        file.write_all(&payload).await?;
        file.sync_all().await?;
        drop(file);
        tokio::fs::rename(&tmp, &path).await?;

        tracing::debug!("persisted document '{}' ({} bytes)", key, payload.len());
        Ok(())
    }

    /// Loads the stored history collection; absent or corrupt data yields
    /// an empty collection.
    pub async fn load_history(&self) -> Vec<HistoryRecord> {
        self.read_document(HISTORY_KEY).await.unwrap_or_default()
    }

    /// Saves the full history collection.
    pub async fn save_history(&self, history: &[HistoryRecord]) -> Result<()> {
        self.write_document(HISTORY_KEY, &history).await
    }

    /// Loads the stored profile; absent or corrupt data yields `None`.
    pub async fn load_profile(&self) -> Option<UserProfile> {
        self.read_document(USER_KEY).await
    }

    /// Saves the full profile document.
    pub async fn save_profile(&self, profile: &UserProfile) -> Result<()> {
        self.write_document(USER_KEY, profile).await
    }

    /// Removes both durable documents.
    pub async fn clear_all(&self) -> Result<()> {
        for key in [HISTORY_KEY, USER_KEY] {
            match tokio::fs::remove_file(self.file_for(key)).await {
                Ok(()) => {}
                Err(err) if err.kind() == std::io::ErrorKind::NotFound => {}
                Err(err) => return Err(err.into()),
            }
        }
        Ok(())
    }
}

#[async_trait]
impl HistoryRepository for JsonDocumentStore {
    async fn load(&self) -> Result<Vec<HistoryRecord>> {
        Ok(self.load_history().await)
    }

    async fn save(&self, history: &[HistoryRecord]) -> Result<()> {
        self.save_history(history).await
    }
}

#[async_trait]
impl ProfileRepository for JsonDocumentStore {
    async fn load(&self) -> Result<Option<UserProfile>> {
        Ok(self.load_profile().await)
    }

    async fn save(&self, profile: &UserProfile) -> Result<()> {
        self.save_profile(profile).await
    }
}
