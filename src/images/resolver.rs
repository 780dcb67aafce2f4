use crate::images::sources::{HasImageSources, ImageSources};
use crate::storage::StorageBackend;
use std::sync::Arc;

/// Turns an entity's image sources into the one URL to show.
#[derive(Clone)]
pub struct ImageResolver {
    remote: Arc<dyn StorageBackend>,
    local: Arc<dyn StorageBackend>,
}

impl ImageResolver {
    pub fn new(remote: Arc<dyn StorageBackend>, local: Arc<dyn StorageBackend>) -> Self {
        ImageResolver { remote, local }
    }

    pub fn resolve<E: HasImageSources>(&self, entity: &E) -> Option<String> {
        self.resolve_sources(&entity.image_sources())
    }

    pub fn resolve_sources(&self, sources: &ImageSources) -> Option<String> {
        if let Some(path) = sources.storage_path() {
            return Some(self.remote.url(path));
        }
        if let Some(file) = sources.local_file() {
            return Some(self.local.url(file));
        }
        sources.external_url().map(str::to_string)
    }
}
