use crate::storage::backend::{StorageBackend, key_or_generated};
use crate::storage::content_type::content_type_for;
use crate::storage::errors::StorageError;
use async_trait::async_trait;
use bytes::Bytes;
use reqwest::{Client, RequestBuilder, Response, header};
use serde::{Deserialize, Serialize};

const UPLOAD_CACHE_CONTROL: &str = "public, max-age=31536000";
const LIST_LIMIT: u32 = 100;

#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project URL, e.g. `https://xyz.supabase.co`
    pub url: String,
    pub service_key: String,
    pub bucket: String,
}

/// Supabase Storage over its REST API.
pub struct SupabaseStorage {
    client: Client,
    base_url: String,
    service_key: String,
    bucket: String,
}

#[derive(Serialize)]
struct RemoveObjects<'a> {
    prefixes: Vec<&'a str>,
}

#[derive(Serialize)]
struct ListObjects<'a> {
    prefix: &'a str,
    search: &'a str,
    limit: u32,
    offset: u32,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ObjectInfo {
    pub name: String,
    #[serde(default)]
    pub metadata: Option<ObjectMetadata>,
}

#[derive(Deserialize, Debug, Clone)]
pub struct ObjectMetadata {
    #[serde(default)]
    pub size: u64,
}

impl SupabaseStorage {
    pub fn new(config: &SupabaseConfig) -> Result<Self, StorageError> {
        let client = Client::builder().build()?;
        Ok(Self::with_client(client, config))
    }

    pub fn with_client(client: Client, config: &SupabaseConfig) -> Self {
        SupabaseStorage {
            client,
            base_url: config.url.trim_end_matches('/').to_string(),
            service_key: config.service_key.clone(),
            bucket: config.bucket.clone(),
        }
    }

    fn object_endpoint(&self, key: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, self.bucket, key)
    }

    fn authorized(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .bearer_auth(&self.service_key)
            .header("apikey", &self.service_key)
    }

    pub async fn upload_object(&self, key: &str, content: Bytes) -> Result<(), StorageError> {
        let request = self
            .client
            .post(self.object_endpoint(key))
            .header(header::CONTENT_TYPE, content_type_for(key))
            .header(header::CACHE_CONTROL, UPLOAD_CACHE_CONTROL)
            .header("x-upsert", "false")
            .body(content);

        ensure_success(self.authorized(request).send().await?).await?;
        Ok(())
    }

    pub async fn remove_objects(&self, keys: &[&str]) -> Result<(), StorageError> {
        let url = format!("{}/storage/v1/object/{}", self.base_url, self.bucket);
        let request = self.client.delete(url).json(&RemoveObjects {
            prefixes: keys.to_vec(),
        });

        ensure_success(self.authorized(request).send().await?).await?;
        Ok(())
    }

    pub async fn download_object(&self, key: &str) -> Result<Bytes, StorageError> {
        let request = self.client.get(self.object_endpoint(key));
        let response = ensure_success(self.authorized(request).send().await?).await?;
        Ok(response.bytes().await?)
    }

    /// Lists objects directly under `prefix` whose names contain `search`.
    pub async fn list_objects(
        &self,
        prefix: &str,
        search: &str,
    ) -> Result<Vec<ObjectInfo>, StorageError> {
        let url = format!("{}/storage/v1/object/list/{}", self.base_url, self.bucket);
        let request = self.client.post(url).json(&ListObjects {
            prefix,
            search,
            limit: LIST_LIMIT,
            offset: 0,
        });

        let response = ensure_success(self.authorized(request).send().await?).await?;
        Ok(response.json::<Vec<ObjectInfo>>().await?)
    }

    async fn find_object(&self, name: &str) -> Result<Option<ObjectInfo>, StorageError> {
        let (prefix, file_name) = match name.rsplit_once('/') {
            Some((dir, file)) => (dir, file),
            None => ("", name),
        };

        let objects = self.list_objects(prefix, file_name).await?;
        Ok(objects.into_iter().find(|o| o.name == file_name))
    }
}

async fn ensure_success(response: Response) -> Result<Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().await.unwrap_or_default();
    Err(StorageError::Status {
        status: status.as_u16(),
        body,
    })
}

#[async_trait]
impl StorageBackend for SupabaseStorage {
    async fn save(&self, name: &str, content: Bytes) -> Option<String> {
        let key = key_or_generated(name);

        // Uploads do not overwrite, so clear the key first. Missing objects are fine.
        if let Err(e) = self.remove_objects(&[&key]).await {
            tracing::debug!("Could not clear {} before upload: {}", key, e);
        }

        match self.upload_object(&key, content).await {
            Ok(()) => {
                tracing::info!(bucket = %self.bucket, key = %key, "File uploaded to Supabase");
                Some(key)
            }
            Err(e) => {
                tracing::error!("Error uploading file {} to Supabase: {}", key, e);
                None
            }
        }
    }

    async fn delete(&self, name: &str) -> bool {
        if name.is_empty() {
            return false;
        }

        match self.remove_objects(&[name]).await {
            Ok(()) => {
                tracing::info!(bucket = %self.bucket, key = %name, "File deleted from Supabase");
                true
            }
            Err(e) => {
                tracing::warn!("Error deleting file {} from Supabase: {}", name, e);
                false
            }
        }
    }

    async fn exists(&self, name: &str) -> bool {
        match self.find_object(name).await {
            Ok(found) => found.is_some(),
            Err(e) => {
                tracing::warn!("Error checking existence of {}: {}", name, e);
                false
            }
        }
    }

    async fn open(&self, name: &str) -> Option<Bytes> {
        match self.download_object(name).await {
            Ok(bytes) => Some(bytes),
            Err(e) => {
                tracing::warn!("Error opening file {}: {}", name, e);
                None
            }
        }
    }

    async fn size(&self, name: &str) -> u64 {
        match self.find_object(name).await {
            Ok(found) => found.and_then(|o| o.metadata).map(|m| m.size).unwrap_or(0),
            Err(e) => {
                tracing::warn!("Error reading size of {}: {}", name, e);
                0
            }
        }
    }

    fn url(&self, name: &str) -> String {
        if name.is_empty() {
            return String::new();
        }
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            self.bucket,
            name.trim_start_matches('/')
        )
    }

    fn is_remote(&self) -> bool {
        true
    }
}
