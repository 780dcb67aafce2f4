use crate::storage::backend::{StorageBackend, key_or_generated};
use crate::storage::errors::StorageError;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::{Component, Path, PathBuf};
use tokio::fs;

/// Files under a media root, served by the web server under `base_url`.
pub struct LocalStorage {
    root: PathBuf,
    base_url: String,
}

impl LocalStorage {
    pub fn new(root: impl Into<PathBuf>, base_url: &str) -> Self {
        let mut base_url = base_url.to_string();
        if !base_url.ends_with('/') {
            base_url.push('/');
        }

        LocalStorage {
            root: root.into(),
            base_url,
        }
    }

    /// Maps a key onto the media root, refusing anything that could escape it.
    fn path_for(&self, name: &str) -> Result<PathBuf, StorageError> {
        let relative = Path::new(name);
        let escapes = relative
            .components()
            .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));

        if name.is_empty() || escapes {
            return Err(StorageError::InvalidKey(name.to_string()));
        }
        Ok(self.root.join(relative))
    }

    async fn write(&self, key: &str, content: &[u8]) -> Result<(), StorageError> {
        let path = self.path_for(key)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).await?;
        }
        if fs::try_exists(&path).await? {
            fs::remove_file(&path).await?;
        }
        fs::write(&path, content).await?;
        Ok(())
    }
}

#[async_trait]
impl StorageBackend for LocalStorage {
    async fn save(&self, name: &str, content: Bytes) -> Option<String> {
        let key = key_or_generated(name);

        match self.write(&key, &content).await {
            Ok(()) => {
                tracing::info!(key = %key, "File stored in media root");
                Some(key)
            }
            Err(e) => {
                tracing::error!("Error storing file {}: {}", key, e);
                None
            }
        }
    }

    async fn delete(&self, name: &str) -> bool {
        let removed = match self.path_for(name) {
            Ok(path) => fs::remove_file(path).await.map_err(StorageError::from),
            Err(e) => Err(e),
        };

        match removed {
            Ok(()) => true,
            Err(e) => {
                tracing::warn!("Error deleting file {}: {}", name, e);
                false
            }
        }
    }

    async fn exists(&self, name: &str) -> bool {
        match self.path_for(name) {
            Ok(path) => fs::try_exists(path).await.unwrap_or(false),
            Err(_) => false,
        }
    }

    async fn open(&self, name: &str) -> Option<Bytes> {
        let path = self.path_for(name).ok()?;
        match fs::read(&path).await {
            Ok(content) => Some(Bytes::from(content)),
            Err(e) => {
                tracing::warn!("Error opening file {}: {}", name, e);
                None
            }
        }
    }

    async fn size(&self, name: &str) -> u64 {
        match self.path_for(name) {
            Ok(path) => fs::metadata(path).await.map(|m| m.len()).unwrap_or(0),
            Err(_) => 0,
        }
    }

    fn url(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }
        format!("{}{}", self.base_url, name.trim_start_matches('/'))
    }

    fn is_remote(&self) -> bool {
        false
    }
}
