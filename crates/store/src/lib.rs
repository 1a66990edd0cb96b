//! File-backed implementation of the storefront's key-value persistence
//! boundary. One JSON document holds every key; a missing or malformed
//! document is discarded and the store starts empty.

mod file;

pub use file::{FileStore, StoreError};

pub use noctis_core::storage::{KeyValueStore, MemoryStore};
