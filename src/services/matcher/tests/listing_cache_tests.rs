use super::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_listing_cache_reuses_listing_until_invalidated() {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("TKB_41.pdf"), "x").unwrap();
    let cache = ListingCache::new();

    let first = cache.candidates(dir.path()).unwrap();
    assert_eq!(first.len(), 1);

    // New file is invisible while the listing is cached
    fs::write(dir.path().join("TKB_42.pdf"), "x").unwrap();
    let cached = cache.candidates(dir.path()).unwrap();
    assert!(Arc::ptr_eq(&first, &cached));
    assert_eq!(cached.len(), 1);

    cache.invalidate(dir.path());
    let fresh = cache.candidates(dir.path()).unwrap();
    assert_eq!(fresh.len(), 2);
}

#[test]
fn test_listing_cache_does_not_cache_errors() {
    let root = TempDir::new().unwrap();
    let dir = root.path().join("later");
    let cache = ListingCache::new();

    assert!(cache.candidates(&dir).unwrap_err().is_directory_unavailable());
    assert!(cache.is_empty());

    fs::create_dir(&dir).unwrap();
    assert!(cache.candidates(&dir).unwrap().is_empty());
    assert_eq!(cache.len(), 1);
}

#[test]
fn test_listing_cache_evicts_least_recent() {
    let a = TempDir::new().unwrap();
    let b = TempDir::new().unwrap();
    let cache = ListingCache::with_capacity(1);

    cache.candidates(a.path()).unwrap();
    cache.candidates(b.path()).unwrap();
    assert_eq!(cache.len(), 1);

    cache.clear();
    assert!(cache.is_empty());
}
