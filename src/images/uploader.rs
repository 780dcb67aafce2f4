use crate::images::optimizer::{ImageOptimizer, OutputFormat};
use crate::images::sources::{HasImageSources, ImageSources};
use crate::storage::StorageBackend;
use crate::storage::backend::generated_name;
use crate::storage::content_type::extension_of;
use bytes::Bytes;
use std::sync::Arc;

/// Pushes new images to remote storage and cleans them up on delete.
#[derive(Clone)]
pub struct ImageUploader {
    storage: Arc<dyn StorageBackend>,
    optimizer: ImageOptimizer,
}

impl ImageUploader {
    pub fn new(storage: Arc<dyn StorageBackend>) -> Self {
        ImageUploader {
            storage,
            optimizer: ImageOptimizer::new(),
        }
    }

    pub fn with_optimizer(storage: Arc<dyn StorageBackend>, optimizer: ImageOptimizer) -> Self {
        ImageUploader { storage, optimizer }
    }

    /// Uploads a new picture for `entity`.
    ///
    /// Returns the entity's sources with the remote key set and the local file
    /// cleared, or `None` if storage rejected the upload. The caller persists
    /// the returned sources.
    pub async fn upload<E: HasImageSources>(
        &self,
        entity: &E,
        file_name: &str,
        content: Bytes,
    ) -> Option<ImageSources> {
        let key = self.store(E::UPLOAD_FOLDER, file_name, content).await?;
        Some(entity.image_sources().promote_to_storage(key))
    }

    /// Uploads into `folder` for an entity that does not exist yet.
    pub async fn upload_new(
        &self,
        folder: &str,
        file_name: &str,
        content: Bytes,
    ) -> Option<ImageSources> {
        let key = self.store(folder, file_name, content).await?;
        Some(ImageSources::default().promote_to_storage(key))
    }

    /// Deletes the remote copy of the entity's picture, if it has one.
    pub async fn purge<E: HasImageSources>(&self, entity: &E) -> bool {
        let sources = entity.image_sources();
        match sources.storage_path() {
            Some(key) => self.purge_key(key).await,
            None => false,
        }
    }

    /// Deletes one remote object by key.
    pub async fn purge_key(&self, key: &str) -> bool {
        let deleted = self.storage.delete(key).await;
        if !deleted {
            tracing::warn!("Could not delete stored image {}", key);
        }
        deleted
    }

    /// Passes `saved` through. When it is an error the freshly uploaded
    /// object in `sources` is deleted, since no row will reference it.
    pub async fn discard_on_error<T, E>(
        &self,
        sources: &ImageSources,
        saved: Result<T, E>,
    ) -> Result<T, E> {
        if saved.is_err() {
            if let Some(key) = sources.storage_path() {
                self.purge_key(key).await;
            }
        }
        saved
    }

    async fn store(&self, folder: &str, file_name: &str, content: Bytes) -> Option<String> {
        let key = generated_name(folder, file_name);
        let payload = self.prepare(&key, content).await;

        tracing::info!(key = %key, bytes = payload.len(), "Uploading image");

        let stored = self.storage.save(&key, payload).await;
        if stored.is_none() {
            tracing::warn!("Image upload for {} failed, keeping previous image", key);
        }
        stored
    }

    async fn prepare(&self, key: &str, content: Bytes) -> Bytes {
        let Some(format) = OutputFormat::from_extension(&extension_of(key)) else {
            return content;
        };

        match self.optimizer.optimize_blocking(content.clone(), format).await {
            Ok(optimized) => Bytes::from(optimized),
            Err(e) => {
                tracing::warn!("Optimization of {} failed, uploading original: {}", key, e);
                content
            }
        }
    }
}
