mod common;

use common::{RecordingStorage, category};
use construction_store_lib::images::{ImageResolver, ImageSources};
use std::sync::Arc;

const REMOTE: &str = "https://xyz.supabase.co/storage/v1/object/public/products";
const LOCAL: &str = "/media";

fn resolver() -> ImageResolver {
    ImageResolver::new(
        Arc::new(RecordingStorage::remote(REMOTE)),
        Arc::new(RecordingStorage::local(LOCAL)),
    )
}

#[test]
fn storage_path_beats_local_file_and_url() {
    let entity = category(
        Some("categories/a.jpg"),
        Some("categories/old.jpg"),
        Some("https://cdn.example.com/a.jpg"),
    );

    assert_eq!(
        resolver().resolve(&entity),
        Some(format!("{}/categories/a.jpg", REMOTE))
    );
}

#[test]
fn local_file_beats_external_url() {
    let entity = category(
        None,
        Some("categories/old.jpg"),
        Some("https://cdn.example.com/a.jpg"),
    );

    assert_eq!(
        resolver().resolve(&entity),
        Some("/media/categories/old.jpg".to_string())
    );
}

#[test]
fn external_url_is_returned_verbatim() {
    let entity = category(None, None, Some("https://cdn.example.com/a.jpg"));

    assert_eq!(
        resolver().resolve(&entity),
        Some("https://cdn.example.com/a.jpg".to_string())
    );
}

#[test]
fn blank_sources_resolve_to_nothing() {
    assert_eq!(resolver().resolve(&category(None, None, None)), None);
    assert_eq!(
        resolver().resolve(&category(Some(""), Some("   "), Some(""))),
        None
    );
}

#[test]
fn resolving_sources_directly_matches_entity_resolution() {
    let sources = ImageSources::new(None, Some("products/x.png".into()), None);
    assert_eq!(
        resolver().resolve_sources(&sources),
        Some("/media/products/x.png".to_string())
    );
}
