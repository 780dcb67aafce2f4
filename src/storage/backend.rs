use crate::storage::content_type::extension_of;
use async_trait::async_trait;
use bytes::Bytes;
use std::path::Path;
use uuid::Uuid;

/// Where image bytes live.
///
/// Implementations never propagate their own failures: they log them and hand
/// back `None`, `false` or `0`, so callers can fall back to another image
/// source instead of failing the request.
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Stores `content` under `name`, replacing whatever was there, and
    /// returns the key it was stored under.
    async fn save(&self, name: &str, content: Bytes) -> Option<String>;

    /// Removes the object. Returns whether the backend accepted the removal.
    async fn delete(&self, name: &str) -> bool;

    async fn exists(&self, name: &str) -> bool;

    async fn open(&self, name: &str) -> Option<Bytes>;

    /// Object size in bytes, 0 when unknown.
    async fn size(&self, name: &str) -> u64;

    /// Public URL of the object. Does not check that it exists.
    fn url(&self, name: &str) -> String;

    fn is_remote(&self) -> bool;

    /// Returns `name` if it is free, otherwise `name` with a random suffix on the stem.
    async fn available_name(&self, name: &str) -> String {
        let mut candidate = name.to_string();
        while self.exists(&candidate).await {
            let suffix = Uuid::new_v4().simple().to_string();
            candidate = suffixed_name(name, &suffix[..8]);
        }
        candidate
    }
}

/// A fresh `<folder>/<uuid><ext>` key for an uploaded file.
pub fn generated_name(folder: &str, original_name: &str) -> String {
    let extension = extension_of(original_name);
    let folder = folder.trim_matches('/');

    if folder.is_empty() {
        format!("{}{}", Uuid::new_v4(), extension)
    } else {
        format!("{}/{}{}", folder, Uuid::new_v4(), extension)
    }
}

/// Key used by `save` when the caller gives no name at all.
pub(crate) fn key_or_generated(name: &str) -> String {
    let trimmed = name.trim_start_matches('/');
    if trimmed.is_empty() {
        Uuid::new_v4().to_string()
    } else {
        trimmed.to_string()
    }
}

fn suffixed_name(name: &str, suffix: &str) -> String {
    let path = Path::new(name);
    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or_default();
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| format!(".{}", e))
        .unwrap_or_default();

    match path.parent().and_then(|p| p.to_str()) {
        Some(dir) if !dir.is_empty() => format!("{}/{}_{}{}", dir, stem, suffix, extension),
        _ => format!("{}_{}{}", stem, suffix, extension),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generated_name_keeps_folder_and_lowercased_extension() {
        let name = generated_name("products/gallery/", "Photo.JPG");
        assert!(name.starts_with("products/gallery/"));
        assert!(name.ends_with(".jpg"));

        let uuid_part = &name["products/gallery/".len()..name.len() - ".jpg".len()];
        assert!(Uuid::parse_str(uuid_part).is_ok());
    }

    #[test]
    fn generated_names_do_not_repeat() {
        assert_ne!(generated_name("products", "a.png"), generated_name("products", "a.png"));
    }

    #[test]
    fn suffix_goes_between_stem_and_extension() {
        assert_eq!(suffixed_name("products/brick.png", "abcd1234"), "products/brick_abcd1234.png");
        assert_eq!(suffixed_name("brick", "abcd1234"), "brick_abcd1234");
    }

    #[test]
    fn empty_key_is_replaced() {
        assert_eq!(key_or_generated("/products/a.png"), "products/a.png");
        assert!(Uuid::parse_str(&key_or_generated("")).is_ok());
    }
}
