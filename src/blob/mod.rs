//! Blob store boundary for rowcache
//!
//! Persistence is delegated to an opaque key-to-bytes store behind the
//! [`BlobStore`] trait: one blob per schema name, no transactions exposed.
//! An in-memory implementation is provided for tests and embedders that do
//! not need an external store.

mod errors;
mod memory;

pub use errors::{BlobError, BlobResult};
pub use memory::MemoryBlobStore;

/// Opaque key-to-bytes store the row store persists into.
///
/// Write failures must propagate to the caller; implementations must not
/// swallow them.
pub trait BlobStore: Send + Sync {
    /// Returns the stored bytes for `key`, or `None` if absent.
    fn get(&self, key: &str) -> BlobResult<Option<Vec<u8>>>;

    /// Stores `bytes` under `key`, replacing any existing value.
    fn set(&self, key: &str, bytes: Vec<u8>) -> BlobResult<()>;
}
