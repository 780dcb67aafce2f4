use once_cell::sync::Lazy;
use std::collections::HashMap;
use std::path::Path;

pub const FALLBACK_CONTENT_TYPE: &str = "application/octet-stream";

static CONTENT_TYPES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("jpg", "image/jpeg"),
        ("jpeg", "image/jpeg"),
        ("png", "image/png"),
        ("gif", "image/gif"),
        ("webp", "image/webp"),
        ("pdf", "application/pdf"),
    ])
});

/// Lowercased extension of `name` including the leading dot, or "" if it has none.
pub fn extension_of(name: &str) -> String {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| format!(".{}", ext.to_lowercase()))
        .unwrap_or_default()
}

/// Content type sent with an upload, decided by the file extension only.
pub fn content_type_for(name: &str) -> &'static str {
    Path::new(name)
        .extension()
        .and_then(|ext| ext.to_str())
        .and_then(|ext| CONTENT_TYPES.get(ext.to_lowercase().as_str()).copied())
        .unwrap_or(FALLBACK_CONTENT_TYPE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_image_extensions() {
        assert_eq!(content_type_for("products/a.jpg"), "image/jpeg");
        assert_eq!(content_type_for("products/a.JPEG"), "image/jpeg");
        assert_eq!(content_type_for("a.png"), "image/png");
        assert_eq!(content_type_for("a.gif"), "image/gif");
        assert_eq!(content_type_for("a.webp"), "image/webp");
    }

    #[test]
    fn unknown_or_missing_extension_falls_back() {
        assert_eq!(content_type_for("archive.tar.bz2"), FALLBACK_CONTENT_TYPE);
        assert_eq!(content_type_for("README"), FALLBACK_CONTENT_TYPE);
    }

    #[test]
    fn extension_is_lowercased_with_dot() {
        assert_eq!(extension_of("IMG_001.PNG"), ".png");
        assert_eq!(extension_of("no_extension"), "");
    }
}
