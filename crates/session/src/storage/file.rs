use async_trait::async_trait;
use shared::errors::StoreError;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::storage::DurableStore;

/// JSON-file backed [`DurableStore`]. The whole map is rewritten on every
/// mutation; the payload is a handful of short flags, not a database.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<HashMap<String, String>>,
}

impl FileStore {
    pub async fn load(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            tokio::fs::create_dir_all(parent).await?;
        }

        let entries = match tokio::fs::read(&path).await {
            Ok(raw) => match serde_json::from_slice::<HashMap<String, String>>(&raw) {
                Ok(entries) => {
                    debug!("loaded {} durable entries from {}", entries.len(), path.display());
                    entries
                }
                Err(err) => {
                    warn!(
                        "discarding unreadable state file {}: {err}",
                        path.display()
                    );
                    HashMap::new()
                }
            },
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => HashMap::new(),
            Err(err) => return Err(err.into()),
        };

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    async fn persist(&self, entries: &HashMap<String, String>) -> Result<(), StoreError> {
        let raw = serde_json::to_vec_pretty(entries)?;
        tokio::fs::write(&self.path, raw).await?;
        Ok(())
    }
}

#[async_trait]
impl DurableStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.entries.lock().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        entries.insert(key.to_string(), value.to_string());
        self.persist(&entries).await
    }

    async fn remove(&self, key: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        entries.remove(key);
        self.persist(&entries).await
    }

    async fn clear(&self) -> Result<(), StoreError> {
        let mut entries = self.entries.lock().await;
        entries.clear();
        self.persist(&entries).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::keys;

    #[tokio::test]
    async fn survives_reload_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let store = FileStore::load(&path).await.unwrap();
        store.set(keys::EVER_LOGGED_IN, "true").await.unwrap();

        let reloaded = FileStore::load(&path).await.unwrap();
        assert_eq!(
            reloaded.get(keys::EVER_LOGGED_IN).await.unwrap().as_deref(),
            Some("true")
        );
    }

    #[tokio::test]
    async fn clear_empties_the_backing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");

        let store = FileStore::load(&path).await.unwrap();
        store.set("a", "1").await.unwrap();
        store.set("b", "2").await.unwrap();
        store.clear().await.unwrap();

        let reloaded = FileStore::load(&path).await.unwrap();
        assert_eq!(reloaded.get("a").await.unwrap(), None);
        assert_eq!(reloaded.get("b").await.unwrap(), None);
    }

    #[tokio::test]
    async fn tolerates_corrupt_state_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        tokio::fs::write(&path, b"not json").await.unwrap();

        let store = FileStore::load(&path).await.unwrap();
        assert_eq!(store.get("anything").await.unwrap(), None);
    }
}
