use serde::{Deserialize, Serialize};

/// The three places an entity's picture can come from.
///
/// Resolution order is fixed: remote storage path, then local file, then
/// external URL. Empty strings count as unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageSources {
    pub storage_path: Option<String>,
    pub local_file: Option<String>,
    pub external_url: Option<String>,
}

impl ImageSources {
    pub fn new(
        storage_path: Option<String>,
        local_file: Option<String>,
        external_url: Option<String>,
    ) -> Self {
        ImageSources {
            storage_path,
            local_file,
            external_url,
        }
    }

    pub fn storage_path(&self) -> Option<&str> {
        non_empty(&self.storage_path)
    }

    pub fn local_file(&self) -> Option<&str> {
        non_empty(&self.local_file)
    }

    pub fn external_url(&self) -> Option<&str> {
        non_empty(&self.external_url)
    }

    pub fn is_empty(&self) -> bool {
        self.storage_path().is_none()
            && self.local_file().is_none()
            && self.external_url().is_none()
    }

    /// Makes `key` the authoritative copy and drops the local file.
    pub fn promote_to_storage(mut self, key: String) -> Self {
        self.storage_path = Some(key);
        self.local_file = None;
        self
    }
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().map(str::trim).filter(|v| !v.is_empty())
}

/// Entities that carry an [`ImageSources`] triple.
pub trait HasImageSources {
    /// Storage folder new uploads for this entity go into.
    const UPLOAD_FOLDER: &'static str;

    fn image_sources(&self) -> ImageSources;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_unset() {
        let sources = ImageSources::new(Some("  ".into()), Some(String::new()), None);
        assert!(sources.is_empty());
        assert_eq!(sources.storage_path(), None);
    }

    #[test]
    fn promotion_clears_local_file_and_keeps_external_url() {
        let sources = ImageSources::new(
            None,
            Some("products/gallery/tmp.jpg".into()),
            Some("https://cdn.example.com/a.jpg".into()),
        )
        .promote_to_storage("products/abc.jpg".into());

        assert_eq!(sources.storage_path(), Some("products/abc.jpg"));
        assert_eq!(sources.local_file(), None);
        assert_eq!(sources.external_url(), Some("https://cdn.example.com/a.jpg"));
    }
}
