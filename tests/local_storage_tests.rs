use bytes::Bytes;
use construction_store_lib::storage::{LocalStorage, StorageBackend};
use tempfile::TempDir;

fn storage() -> (TempDir, LocalStorage) {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path(), "/media");
    (dir, storage)
}

#[tokio::test]
async fn save_creates_folders_and_reads_back() {
    let (dir, storage) = storage();

    let key = storage
        .save("products/gallery/a.jpg", Bytes::from_static(b"jpeg"))
        .await;

    assert_eq!(key.as_deref(), Some("products/gallery/a.jpg"));
    assert!(dir.path().join("products/gallery/a.jpg").exists());
    assert!(storage.exists("products/gallery/a.jpg").await);
    assert_eq!(storage.size("products/gallery/a.jpg").await, 4);
    assert_eq!(
        storage.open("products/gallery/a.jpg").await,
        Some(Bytes::from_static(b"jpeg"))
    );
}

#[tokio::test]
async fn save_overwrites() {
    let (_dir, storage) = storage();

    storage.save("a.png", Bytes::from_static(b"one")).await.unwrap();
    storage.save("a.png", Bytes::from_static(b"two")).await.unwrap();

    assert_eq!(storage.open("a.png").await, Some(Bytes::from_static(b"two")));
}

#[tokio::test]
async fn delete_and_missing_files() {
    let (_dir, storage) = storage();
    storage.save("c/x.png", Bytes::from_static(b"x")).await.unwrap();

    assert!(storage.delete("c/x.png").await);
    assert!(!storage.delete("c/x.png").await);
    assert!(!storage.exists("c/x.png").await);
    assert_eq!(storage.open("c/x.png").await, None);
    assert_eq!(storage.size("c/x.png").await, 0);
}

#[tokio::test]
async fn keys_cannot_escape_the_media_root() {
    let (dir, storage) = storage();

    assert_eq!(storage.save("../outside.png", Bytes::from_static(b"x")).await, None);
    assert!(!dir.path().parent().unwrap().join("outside.png").exists());
    assert!(!storage.exists("/etc/passwd").await);
}

#[test]
fn urls_sit_under_the_media_prefix() {
    let dir = tempfile::tempdir().unwrap();
    let storage = LocalStorage::new(dir.path(), "/media");

    assert!(!storage.is_remote());
    assert_eq!(storage.url("products/a.png"), "/media/products/a.png");
    assert_eq!(storage.url(""), "");
}
