mod common;

use page_cache::cache::enums::cache_client::CacheClient;
use page_cache::cache::enums::failover_state::FailoverState;
use page_cache::cache::errors::{BackendError, CacheError};
use page_cache::cache::structs::cache::Cache;
use page_cache::cache::structs::cache_connector_disk::CacheConnectorDisk;
use page_cache::cache::structs::cache_connector_redis::CacheConnectorRedis;
use page_cache::cache::traits::cache_backend::CacheBackend;
use serde_json::json;
use std::sync::Arc;
use std::sync::atomic::Ordering;
use std::time::Duration;
use tempfile::TempDir;

#[tokio::test]
async fn test_set_then_get_returns_content() {
    let dir = TempDir::new().unwrap();
    let cache = Cache::new(common::create_test_config(CacheClient::memory, &dir, 60_000)).unwrap();
    cache.set("/home", &json!({"html": "<p>hi</p>"}), None).await.unwrap();
    let entry = cache.get("/home", None).await.unwrap();
    assert_eq!(entry.path, "/home");
    assert_eq!(entry.content, json!({"html": "<p>hi</p>"}));
}

#[tokio::test]
async fn test_stale_entry_is_reported_and_removed() {
    let dir = TempDir::new().unwrap();
    let cache = Cache::new(common::create_test_config(CacheClient::disk, &dir, 1000)).unwrap();
    cache.set("/home", &json!({"html": "<p>hi</p>"}), None).await.unwrap();
    tokio::time::sleep(Duration::from_millis(1500)).await;

    let error = cache.get("/home", None).await.unwrap_err();
    assert!(matches!(error, CacheError::StaleEntry { .. }), "got {:?}", error);
    assert!(error.is_no_usable_value());

    let key = cache.key("/home", None);
    assert!(common::wait_until_absent(&cache.active_backend(), &key, Duration::from_secs(2)).await);
    assert!(matches!(cache.get("/home", None).await, Err(CacheError::CacheMiss { .. })));
}

#[tokio::test]
async fn test_suffixes_are_cached_independently() {
    let dir = TempDir::new().unwrap();
    let cache = Cache::new(common::create_test_config(CacheClient::disk, &dir, 60_000)).unwrap();
    let pdf_bytes: Vec<u8> = vec![0x25, 0x50, 0x44, 0x46];
    cache.set("/report", &pdf_bytes, Some("pdf")).await.unwrap();
    cache.set("/report", "<h1>Report</h1>", Some("html")).await.unwrap();

    let pdf = cache.get("/report", Some("pdf")).await.unwrap();
    let html = cache.get("/report", Some("html")).await.unwrap();
    assert_eq!(pdf.content_as::<Vec<u8>>().unwrap(), pdf_bytes);
    assert_eq!(html.content_as::<String>().unwrap(), "<h1>Report</h1>");
    assert!(matches!(cache.get("/report", None).await, Err(CacheError::CacheMiss { .. })));

    cache.clear("/report", Some("pdf")).await.unwrap();
    assert!(cache.get("/report", Some("pdf")).await.is_err());
    assert!(cache.get("/report", Some("html")).await.is_ok());
}

#[tokio::test]
async fn test_connection_lost_fails_over_to_disk() {
    let dir = TempDir::new().unwrap();
    let primary = common::FlakyBackend::new();
    let cache = Cache::with_backend(common::create_test_config(CacheClient::redis, &dir, 60_000), primary.clone());
    cache.set("/home", "from primary", None).await.unwrap();
    assert_eq!(cache.state(), FailoverState::PrimaryActive);

    primary.lose_connection();
    assert!(common::wait_for_fallback(&cache, Duration::from_secs(2)).await);
    assert!(primary.closed.load(Ordering::SeqCst));
    assert_eq!(cache.active_backend().name(), "disk");

    // The disk store starts empty; nothing is migrated.
    assert!(matches!(cache.get("/home", None).await, Err(CacheError::CacheMiss { .. })));
    cache.set("/home", "from disk", None).await.unwrap();
    let entry = cache.get("/home", None).await.unwrap();
    assert_eq!(entry.content_as::<String>().unwrap(), "from disk");
    assert!(dir.path().join("pages").is_dir());
}

#[tokio::test]
async fn test_failover_is_one_way() {
    let dir = TempDir::new().unwrap();
    let primary = common::FlakyBackend::new();
    let cache = Cache::with_backend(common::create_test_config(CacheClient::redis, &dir, 60_000), primary.clone());
    primary.lose_connection();
    primary.lose_connection();
    assert!(common::wait_for_fallback(&cache, Duration::from_secs(2)).await);
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(cache.state(), FailoverState::FallbackActive);
    assert_eq!(cache.active_backend().name(), "disk");
}

#[tokio::test]
async fn test_non_redis_primary_ignores_error_events() {
    let dir = TempDir::new().unwrap();
    let primary = common::FlakyBackend::new();
    let cache = Cache::with_backend(common::create_test_config(CacheClient::memory, &dir, 60_000), primary.clone());
    primary.lose_connection();
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert_eq!(cache.state(), FailoverState::PrimaryActive);
    assert_eq!(cache.active_backend().name(), "flaky");
    assert!(!primary.closed.load(Ordering::SeqCst));
}

#[tokio::test]
async fn test_corrupt_entry_is_reported_and_removed() {
    let dir = TempDir::new().unwrap();
    let cache = Cache::new(common::create_test_config(CacheClient::disk, &dir, 60_000)).unwrap();
    let key = cache.key("/broken", None);
    let backend = cache.active_backend();
    backend.set(&key, b"{\"path\":\"/broken\",\"content\":").await.unwrap();

    let error = cache.get("/broken", None).await.unwrap_err();
    assert!(matches!(error, CacheError::CorruptEntry { .. }), "got {:?}", error);
    assert!(common::wait_until_absent(&backend, &key, Duration::from_secs(2)).await);
}

#[tokio::test]
async fn test_slow_clear_does_not_delay_stale_get() {
    let dir = TempDir::new().unwrap();
    let backend = common::SlowDeleteBackend::new(Duration::from_secs(3));
    let cache = Cache::with_backend(common::create_test_config(CacheClient::memory, &dir, 50), backend.clone());
    cache.set("/home", "old", None).await.unwrap();
    tokio::time::sleep(Duration::from_millis(100)).await;

    let started = std::time::Instant::now();
    let error = cache.get("/home", None).await.unwrap_err();
    assert!(matches!(error, CacheError::StaleEntry { .. }), "got {:?}", error);
    assert!(started.elapsed() < Duration::from_secs(1), "get took {:?}", started.elapsed());
}

#[test]
fn test_with_backend_outside_runtime_leaves_failover_unarmed() {
    let dir = TempDir::new().unwrap();
    let primary = common::FlakyBackend::new();
    let cache = Cache::with_backend(common::create_test_config(CacheClient::redis, &dir, 60_000), primary.clone());
    assert_eq!(cache.state(), FailoverState::PrimaryActive);
    assert_eq!(cache.active_backend().name(), "flaky");
    assert!(primary.take_error_events().is_some());
}

#[tokio::test]
async fn test_clear_missing_key_succeeds() {
    let dir = TempDir::new().unwrap();
    for client in [CacheClient::disk, CacheClient::memory] {
        let cache = Cache::new(common::create_test_config(client, &dir, 60_000)).unwrap();
        cache.clear("/never-set", None).await.unwrap();
        cache.clear("/never-set", Some("pdf")).await.unwrap();
    }
}

#[tokio::test]
async fn test_prefix_isolates_caches_on_one_backend() {
    let dir = TempDir::new().unwrap();
    let base = common::create_test_config(CacheClient::disk, &dir, 60_000);
    let mut other = (*base).clone();
    other.cache_prefix = "other:".to_string();
    let first = Cache::new(base).unwrap();
    let second = Cache::new(Arc::new(other)).unwrap();
    first.set("/home", "first", None).await.unwrap();
    assert!(matches!(second.get("/home", None).await, Err(CacheError::CacheMiss { .. })));
}

#[tokio::test]
async fn test_disk_backend_keeps_keys_inside_root() {
    let dir = TempDir::new().unwrap();
    let disk = CacheConnectorDisk::with_root(dir.path());
    let path = disk.entry_path("../../etc/passwd");
    assert_eq!(path.parent().unwrap(), dir.path());
    disk.set("../escape", b"data").await.unwrap();
    assert_eq!(disk.get("../escape").await.unwrap(), Some(b"data".to_vec()));
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[tokio::test]
async fn test_disk_backend_removes_temp_file_when_rename_fails() {
    let dir = TempDir::new().unwrap();
    let disk = CacheConnectorDisk::with_root(dir.path());
    std::fs::create_dir(disk.entry_path("site:page")).unwrap();
    assert!(disk.set("site:page", b"data").await.is_err());
    let names: Vec<String> = std::fs::read_dir(dir.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().to_string())
        .collect();
    assert_eq!(names, vec!["site%3Apage".to_string()]);
}

#[tokio::test]
async fn test_disk_backend_rejects_overlong_keys() {
    let dir = TempDir::new().unwrap();
    let disk = CacheConnectorDisk::with_root(dir.path());
    let key = format!("site:{}", ":".repeat(100));
    match disk.set(&key, b"data").await {
        Err(BackendError::Io(e)) => assert_eq!(e.kind(), std::io::ErrorKind::InvalidInput),
        other => panic!("unexpected result: {:?}", other),
    }
    assert!(disk.get(&key).await.is_err());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[tokio::test]
async fn test_unreachable_redis_fails_over_to_disk() {
    let dir = TempDir::new().unwrap();
    let cache = Cache::new(common::create_test_config(CacheClient::redis, &dir, 60_000)).unwrap();
    assert!(common::wait_for_fallback(&cache, Duration::from_secs(5)).await);
    cache.set("/home", &json!({"html": "<p>hi</p>"}), None).await.unwrap();
    assert_eq!(cache.get("/home", None).await.unwrap().content, json!({"html": "<p>hi</p>"}));
}

#[tokio::test]
async fn test_invalid_redis_url_fails_over_to_disk() {
    let dir = TempDir::new().unwrap();
    let mut config = (*common::create_test_config(CacheClient::redis, &dir, 60_000)).clone();
    config.connection_url = "redis://:secret@[::1".to_string();
    let cache = Cache::new(Arc::new(config)).unwrap();
    assert!(common::wait_for_fallback(&cache, Duration::from_secs(2)).await);
    assert_eq!(cache.active_backend().name(), "disk");
}

#[test]
fn test_redis_adapter_requires_runtime() {
    let dir = TempDir::new().unwrap();
    let config = common::create_test_config(CacheClient::redis, &dir, 60_000);
    assert!(CacheConnectorRedis::new(&config).is_err());
}
