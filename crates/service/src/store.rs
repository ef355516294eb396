//! Flat-file document store.
//!
//! Every [`Collection`] is a single JSON document living in its own file
//! under the data directory. There is no cache and no locking: each read goes
//! to disk, and each write replaces the whole file. Writes land in a uniquely
//! named temporary file first and are renamed over the target, so a concurrent
//! reader sees either the previous document or the new one.

use std::fmt;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde_json::Value;
use uuid::Uuid;

use crate::seed;

/// The four documents the archive persists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Pirates,
    Marines,
    WorldGov,
    Bounties,
}

impl Collection {
    pub const ALL: [Collection; 4] = [
        Collection::Pirates,
        Collection::Marines,
        Collection::WorldGov,
        Collection::Bounties,
    ];

    /// File name inside the data directory.
    pub fn file_name(&self) -> &'static str {
        match self {
            Collection::Pirates => "pirates.json",
            Collection::Marines => "marines.json",
            Collection::WorldGov => "world-gov.json",
            Collection::Bounties => "bounties.json",
        }
    }

    /// Key used for this collection in backup and restore documents.
    pub fn key(&self) -> &'static str {
        match self {
            Collection::Pirates => "pirates",
            Collection::Marines => "marines",
            Collection::WorldGov => "world-gov",
            Collection::Bounties => "bounties",
        }
    }

    /// Seed document written on first run.
    pub fn seed(&self) -> Value {
        match self {
            Collection::Pirates => seed::pirates(),
            Collection::Marines => seed::marines(),
            Collection::WorldGov => seed::world_gov(),
            Collection::Bounties => seed::bounties(),
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Handle on the data directory. Cheap to clone; holds only the base path.
#[derive(Debug, Clone)]
pub struct Store {
    data_dir: PathBuf,
}

impl Store {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn path(&self, collection: Collection) -> PathBuf {
        self.data_dir.join(collection.file_name())
    }

    /// Create the data directory and write the seed document for every
    /// collection whose file does not exist yet. Existing files are left alone.
    pub async fn init(&self) -> Result<(), StoreError> {
        tokio::fs::create_dir_all(&self.data_dir)
            .await
            .map_err(|source| StoreError::Io {
                path: self.data_dir.clone(),
                source,
            })?;

        for collection in Collection::ALL {
            let path = self.path(collection);
            let exists = tokio::fs::try_exists(&path)
                .await
                .map_err(|source| StoreError::Io {
                    path: path.clone(),
                    source,
                })?;
            if exists {
                continue;
            }

            tracing::info!(%collection, path = %path.display(), "seeding collection");
            self.write(collection, &collection.seed()).await?;
        }

        Ok(())
    }

    /// Read a collection, degrading to an empty array on any failure.
    pub async fn read(&self, collection: Collection) -> Value {
        match self.load(collection).await {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(%collection, "falling back to empty document: {}", e);
                empty()
            }
        }
    }

    /// Read a collection, surfacing malformed JSON and I/O failures.
    /// A missing file is not an error and yields an empty array.
    pub async fn load(&self, collection: Collection) -> Result<Value, StoreError> {
        let path = self.path(collection);
        let bytes = match tokio::fs::read(&path).await {
            Ok(bytes) => bytes,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(empty()),
            Err(source) => return Err(StoreError::Io { path, source }),
        };

        serde_json::from_slice(&bytes).map_err(|source| StoreError::Decode { collection, source })
    }

    /// Replace the whole document for a collection.
    pub async fn write(&self, collection: Collection, document: &Value) -> Result<(), StoreError> {
        let mut bytes = serde_json::to_vec_pretty(document)
            .map_err(|source| StoreError::Encode { collection, source })?;
        bytes.push(b'\n');

        let path = self.path(collection);
        let tmp_path = self.data_dir.join(format!(
            ".{}.{}.tmp",
            collection.file_name(),
            Uuid::new_v4().simple()
        ));

        if let Err(source) = tokio::fs::write(&tmp_path, &bytes).await {
            discard(&tmp_path).await;
            return Err(StoreError::Io {
                path: tmp_path,
                source,
            });
        }

        if let Err(source) = tokio::fs::rename(&tmp_path, &path).await {
            discard(&tmp_path).await;
            return Err(StoreError::Io { path, source });
        }

        tracing::debug!(%collection, bytes = bytes.len(), "collection written");
        Ok(())
    }
}

/// Remove a temporary file left behind by a failed write.
async fn discard(tmp_path: &Path) {
    match tokio::fs::remove_file(tmp_path).await {
        Ok(()) => {}
        Err(e) if e.kind() == ErrorKind::NotFound => {}
        Err(e) => {
            tracing::warn!(path = %tmp_path.display(), "failed to remove temp file: {}", e)
        }
    }
}

fn empty() -> Value {
    Value::Array(Vec::new())
}

#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{collection} holds invalid JSON: {source}")]
    Decode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize {collection}: {source}")]
    Encode {
        collection: Collection,
        #[source]
        source: serde_json::Error,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    fn setup() -> (Store, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let store = Store::new(temp_dir.path().join("data"));
        (store, temp_dir)
    }

    #[tokio::test]
    async fn test_read_missing_file_is_empty_array() {
        let (store, _dir) = setup();
        assert_eq!(store.read(Collection::Marines).await, json!([]));
        assert_eq!(store.load(Collection::Marines).await.unwrap(), json!([]));
    }

    #[tokio::test]
    async fn test_malformed_file_degrades_on_read_but_fails_on_load() {
        let (store, _dir) = setup();
        store.init().await.unwrap();
        std::fs::write(store.path(Collection::Pirates), "{not json").unwrap();

        assert_eq!(store.read(Collection::Pirates).await, json!([]));

        let err = store.load(Collection::Pirates).await.unwrap_err();
        assert!(matches!(
            err,
            StoreError::Decode {
                collection: Collection::Pirates,
                ..
            }
        ));
        assert!(err.to_string().contains("pirates"));
    }

    #[tokio::test]
    async fn test_write_replaces_document() {
        let (store, _dir) = setup();
        store.init().await.unwrap();

        let doc = json!({"topBounties": [], "topSea": "East Blue"});
        store.write(Collection::Bounties, &doc).await.unwrap();
        assert_eq!(store.read(Collection::Bounties).await, doc);

        store.write(Collection::Bounties, &json!("plain")).await.unwrap();
        assert_eq!(store.read(Collection::Bounties).await, json!("plain"));
    }

    #[tokio::test]
    async fn test_write_is_pretty_printed_and_leaves_no_temp_files() {
        let (store, _dir) = setup();
        store.init().await.unwrap();
        store
            .write(Collection::Marines, &json!([{"id": 1}]))
            .await
            .unwrap();

        let raw = std::fs::read_to_string(store.path(Collection::Marines)).unwrap();
        assert!(raw.contains("\n  {\n    \"id\": 1\n  }"));

        let leftovers: Vec<_> = std::fs::read_dir(store.data_dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect();
        assert!(leftovers.is_empty());
    }

    #[tokio::test]
    async fn test_init_seeds_once() {
        let (store, _dir) = setup();
        store.init().await.unwrap();

        for collection in Collection::ALL {
            assert_eq!(store.read(collection).await, collection.seed());
        }

        store.write(Collection::WorldGov, &json!([])).await.unwrap();
        store.init().await.unwrap();
        assert_eq!(store.read(Collection::WorldGov).await, json!([]));
    }

    fn temp_files(store: &Store) -> Vec<std::fs::DirEntry> {
        std::fs::read_dir(store.data_dir())
            .unwrap()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_name().to_string_lossy().ends_with(".tmp"))
            .collect()
    }

    #[tokio::test]
    async fn test_failed_replace_removes_temp_file() {
        let (store, _dir) = setup();
        store.init().await.unwrap();
        let target = store.path(Collection::WorldGov);
        std::fs::remove_file(&target).unwrap();
        std::fs::create_dir(&target).unwrap();

        let err = store
            .write(Collection::WorldGov, &json!([]))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
        assert!(temp_files(&store).is_empty());
    }

    #[tokio::test]
    async fn test_discard_removes_partial_file() {
        let (store, _dir) = setup();
        store.init().await.unwrap();
        let partial = store.data_dir().join(".pirates.json.partial.tmp");
        std::fs::write(&partial, "[{\"id\"").unwrap();

        discard(&partial).await;
        assert!(!partial.exists());
        assert!(temp_files(&store).is_empty());

        // already gone is fine
        discard(&partial).await;
    }

    #[tokio::test]
    async fn test_write_into_missing_directory_fails() {
        let (store, _dir) = setup();
        let err = store
            .write(Collection::Pirates, &json!([]))
            .await
            .unwrap_err();
        assert!(matches!(err, StoreError::Io { .. }));
    }
}
