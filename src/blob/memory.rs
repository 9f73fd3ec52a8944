//! In-memory blob store

use std::collections::HashMap;
use std::sync::RwLock;

use super::errors::BlobResult;
use super::BlobStore;

/// Process-local blob store backed by a hash map.
///
/// Used as the test backend and by embedders that want the cache semantics
/// without an external store.
#[derive(Debug, Default)]
pub struct MemoryBlobStore {
    entries: RwLock<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored blobs.
    pub fn blob_count(&self) -> usize {
        self.entries.read().unwrap().len()
    }
}

impl BlobStore for MemoryBlobStore {
    fn get(&self, key: &str) -> BlobResult<Option<Vec<u8>>> {
        Ok(self.entries.read().unwrap().get(key).cloned())
    }

    fn set(&self, key: &str, bytes: Vec<u8>) -> BlobResult<()> {
        self.entries.write().unwrap().insert(key.to_string(), bytes);
        Ok(())
    }
}
