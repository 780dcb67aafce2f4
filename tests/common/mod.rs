#![allow(dead_code)]

use async_trait::async_trait;
use bytes::Bytes;
use construction_store_lib::data::models::category::Category;
use construction_store_lib::storage::StorageBackend;
use std::collections::HashMap;
use std::sync::Mutex;

/// In-memory backend that records every call made to it.
pub struct RecordingStorage {
    base_url: String,
    remote: bool,
    fail_saves: bool,
    pub objects: Mutex<HashMap<String, Bytes>>,
    pub deleted: Mutex<Vec<String>>,
}

impl RecordingStorage {
    pub fn remote(base_url: &str) -> Self {
        RecordingStorage {
            base_url: base_url.to_string(),
            remote: true,
            fail_saves: false,
            objects: Mutex::new(HashMap::new()),
            deleted: Mutex::new(Vec::new()),
        }
    }

    pub fn local(base_url: &str) -> Self {
        RecordingStorage {
            remote: false,
            ..RecordingStorage::remote(base_url)
        }
    }

    pub fn failing(base_url: &str) -> Self {
        RecordingStorage {
            fail_saves: true,
            ..RecordingStorage::remote(base_url)
        }
    }

    pub fn stored_keys(&self) -> Vec<String> {
        self.objects.lock().unwrap().keys().cloned().collect()
    }

    pub fn deleted_keys(&self) -> Vec<String> {
        self.deleted.lock().unwrap().clone()
    }
}

#[async_trait]
impl StorageBackend for RecordingStorage {
    async fn save(&self, name: &str, content: Bytes) -> Option<String> {
        if self.fail_saves {
            return None;
        }
        self.objects
            .lock()
            .unwrap()
            .insert(name.to_string(), content);
        Some(name.to_string())
    }

    async fn delete(&self, name: &str) -> bool {
        self.deleted.lock().unwrap().push(name.to_string());
        self.objects.lock().unwrap().remove(name).is_some()
    }

    async fn exists(&self, name: &str) -> bool {
        self.objects.lock().unwrap().contains_key(name)
    }

    async fn open(&self, name: &str) -> Option<Bytes> {
        self.objects.lock().unwrap().get(name).cloned()
    }

    async fn size(&self, name: &str) -> u64 {
        self.objects
            .lock()
            .unwrap()
            .get(name)
            .map(|b| b.len() as u64)
            .unwrap_or(0)
    }

    fn url(&self, name: &str) -> String {
        format!("{}/{}", self.base_url, name)
    }

    fn is_remote(&self) -> bool {
        self.remote
    }
}

pub fn category(
    image: Option<&str>,
    image_file: Option<&str>,
    image_url: Option<&str>,
) -> Category {
    Category {
        id: 1,
        name: "Cement".to_string(),
        slug: "cement".to_string(),
        description: String::new(),
        image: image.map(str::to_string),
        image_file: image_file.map(str::to_string),
        image_url: image_url.map(str::to_string),
    }
}

pub fn png_bytes(width: u32, height: u32) -> Bytes {
    let img = image::RgbImage::from_pixel(width, height, image::Rgb([180, 90, 30]));
    let mut out = std::io::Cursor::new(Vec::new());
    image::DynamicImage::ImageRgb8(img)
        .write_to(&mut out, image::ImageFormat::Png)
        .unwrap();
    Bytes::from(out.into_inner())
}
