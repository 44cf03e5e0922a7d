use super::*;

#[test]
fn memory_store_get_missing_is_none() {
    let store = MemoryStore::new();
    assert_eq!(store.get("missing"), None);
}

#[test]
fn memory_store_set_overwrites() {
    let store = MemoryStore::new();
    store.set("k", "one");
    store.set("k", "two");
    assert_eq!(store.get("k").as_deref(), Some("two"));
}

#[test]
fn memory_store_remove_is_idempotent() {
    let store = MemoryStore::new();
    store.set("k", "v");
    store.remove("k");
    store.remove("k");
    assert_eq!(store.get("k"), None);
}

#[test]
fn shared_handles_see_the_same_entries() {
    let store = MemoryStore::shared();
    let other = Arc::clone(&store);
    store.set("k", "v");
    assert_eq!(other.get("k").as_deref(), Some("v"));
}
