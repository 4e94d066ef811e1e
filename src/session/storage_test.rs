use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_starts_empty() {
    let storage = MemoryStorage::new();
    assert!(storage.is_empty());
    assert_eq!(storage.get_item("access_token"), None);
}

#[test]
fn memory_storage_set_then_get() {
    let storage = MemoryStorage::new();
    storage.set_item("k", "v1").unwrap();
    storage.set_item("k", "v2").unwrap();
    assert_eq!(storage.get_item("k").as_deref(), Some("v2"));
    assert_eq!(storage.len(), 1);
}

#[test]
fn memory_storage_remove_missing_key_is_noop() {
    let storage = MemoryStorage::new();
    storage.remove_item("missing");
    storage.set_item("k", "v").unwrap();
    storage.remove_item("k");
    storage.remove_item("k");
    assert!(storage.is_empty());
}

#[test]
fn read_only_storage_rejects_writes() {
    let storage = MemoryStorage::read_only();
    let err = storage.set_item("k", "v").unwrap_err();
    assert_eq!(err, StorageError::Write { key: "k".to_owned(), reason: "read-only store".to_owned() });
    assert!(storage.is_empty());
}

#[test]
fn borrowed_storage_forwards_to_owner() {
    let storage = MemoryStorage::new();
    let borrowed = &storage;
    borrowed.set_item("k", "v").unwrap();
    assert_eq!(storage.get_item("k").as_deref(), Some("v"));
    borrowed.remove_item("k");
    assert!(storage.is_empty());
}

// =============================================================
// BrowserStorage outside the browser
// =============================================================

#[cfg(not(feature = "csr"))]
#[test]
fn browser_storage_is_unavailable_natively() {
    let storage = BrowserStorage;
    assert_eq!(storage.get_item("access_token"), None);
    assert_eq!(storage.set_item("access_token", "tok"), Err(StorageError::Unavailable));
    storage.remove_item("access_token");
}
