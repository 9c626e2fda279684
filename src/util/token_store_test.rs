use super::*;

#[test]
fn memory_store_set_then_get_round_trips() {
    let store = MemoryTokenStore::default();
    assert_eq!(store.get(), None);
    store.set("abc.def.ghi");
    assert_eq!(store.get(), Some("abc.def.ghi".to_owned()));
}

#[test]
fn memory_store_set_overwrites_previous_value() {
    let store = MemoryTokenStore::default();
    store.set("first");
    store.set("second");
    assert_eq!(store.get(), Some("second".to_owned()));
}

#[test]
fn memory_store_clear_removes_value() {
    let store = MemoryTokenStore::default();
    store.set("abc");
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn memory_store_clear_is_idempotent() {
    let store = MemoryTokenStore::default();
    store.clear();
    store.clear();
    assert_eq!(store.get(), None);
}

#[test]
fn browser_store_reads_absent_outside_the_browser() {
    // Without a window the store behaves as logged out.
    let store = BrowserTokenStore;
    store.set("ignored");
    assert_eq!(store.get(), None);
}
