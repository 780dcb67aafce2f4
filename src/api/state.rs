use crate::api::config::Config;
use crate::data::database::Database;
use crate::images::{ImageResolver, ImageUploader};
use crate::storage::{LocalStorage, StorageBackend, SupabaseStorage};
use std::sync::Arc;

/// Shared handles every controller works with.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub db: Database,
    pub resolver: ImageResolver,
    pub uploader: ImageUploader,
}

#[derive(Debug)]
pub enum StateError {
    Database(String),
    Storage(String),
}

impl std::error::Error for StateError {}

impl std::fmt::Display for StateError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StateError::Database(e) => write!(f, "Failed to create database pool: {}", e),
            StateError::Storage(e) => write!(f, "Failed to create storage client: {}", e),
        }
    }
}

impl AppState {
    /// Builds the pool and both storage backends from `config`.
    pub fn from_config(config: Config) -> Result<Self, StateError> {
        let db = Database::new(&config.database_url)
            .map_err(|e| StateError::Database(e.to_string()))?;
        let remote: Arc<dyn StorageBackend> = Arc::new(
            SupabaseStorage::new(&config.supabase).map_err(|e| StateError::Storage(e.to_string()))?,
        );
        let local: Arc<dyn StorageBackend> =
            Arc::new(LocalStorage::new(config.media_root.clone(), &config.media_url));

        Ok(AppState::new(config, db, remote, local))
    }

    pub fn new(
        config: Config,
        db: Database,
        remote: Arc<dyn StorageBackend>,
        local: Arc<dyn StorageBackend>,
    ) -> Self {
        AppState {
            config: Arc::new(config),
            db,
            resolver: ImageResolver::new(remote.clone(), local),
            uploader: ImageUploader::new(remote),
        }
    }
}
