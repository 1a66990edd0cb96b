use std::collections::HashMap;

/// The persistence boundary: string keys to serialized snapshots. Writes are
/// fire-and-forget from the caller's point of view; implementations log
/// failures instead of propagating them, so a broken data file never takes
/// the storefront down.
pub trait KeyValueStore: Send {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
    fn remove(&mut self, key: &str);
}

/// Process-local store used as the default and in tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_string(), value.to_string());
    }

    fn remove(&mut self, key: &str) {
        self.entries.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::{KeyValueStore, MemoryStore};

    #[test]
    fn set_get_remove_round_trip() {
        let mut store = MemoryStore::new();
        assert_eq!(store.get("gothic-cart"), None);

        store.set("gothic-cart", "[]");
        assert_eq!(store.get("gothic-cart"), Some("[]".to_string()));

        store.remove("gothic-cart");
        assert_eq!(store.get("gothic-cart"), None);
    }

    #[test]
    fn removing_an_absent_key_is_a_no_op() {
        let mut store = MemoryStore::new();
        store.remove("never-set");
    }
}
