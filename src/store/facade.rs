//! Row store facade
//!
//! Each schema name's row set is either absent (no blob stored) or present
//! (one row set value). First successful push creates it; every later push
//! appends. Nothing here removes a row set.

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use crate::blob::BlobStore;
use crate::codec;
use crate::registry::{FieldValue, Record, RowSet, SchemaRegistry};

use super::errors::{StoreError, StoreResult};

/// Typed row cache over a blob store.
///
/// Owns the read-modify-write cycle for every row set. Pushes to the same
/// schema name are serialized through a per-name mutex, so concurrent
/// in-process pushes cannot lose appends.
pub struct RowStore<B: BlobStore> {
    registry: SchemaRegistry,
    blobs: B,
    compress: bool,
    locks: Mutex<HashMap<String, Arc<Mutex<()>>>>,
}

impl<B: BlobStore> RowStore<B> {
    /// Creates a row store with compression disabled.
    pub fn new(registry: SchemaRegistry, blobs: B) -> Self {
        Self {
            registry,
            blobs,
            compress: false,
            locks: Mutex::new(HashMap::new()),
        }
    }

    /// Sets whether blobs are zlib-compressed at rest.
    ///
    /// Must match across all readers and writers of the same store: the
    /// stored format carries no header identifying the setting.
    pub fn with_compression(mut self, compress: bool) -> Self {
        self.compress = compress;
        self
    }

    /// Returns the schema registry backing this store.
    pub fn registry(&self) -> &SchemaRegistry {
        &self.registry
    }

    /// Validates `values` against the named schema, appends the resulting
    /// record to the stored row set, and writes the sequence back.
    ///
    /// Unset fields stay at the null marker; they are never carried over
    /// from prior records. Every failure is raised before any write occurs.
    ///
    /// # Errors
    ///
    /// - `StoreError::UnknownSchema` if `name` is unregistered
    /// - `StoreError::UnknownField` for keys not declared in the schema
    /// - `StoreError::TypeMismatch` for values whose tag differs from the
    ///   declared field type
    /// - codec and blob errors from the read-modify-write cycle
    pub fn push<I, K>(&self, name: &str, values: I) -> StoreResult<()>
    where
        I: IntoIterator<Item = (K, FieldValue)>,
        K: Into<String>,
    {
        let schema = self
            .registry
            .lookup(name)
            .ok_or_else(|| StoreError::UnknownSchema(name.to_string()))?;

        let mut record = schema.empty_record();
        for (key, value) in values {
            let key = key.into();
            let declared = schema
                .field(&key)
                .ok_or_else(|| StoreError::UnknownField {
                    schema: name.to_string(),
                    field: key.clone(),
                })?;
            if value.kind() != declared {
                return Err(StoreError::TypeMismatch {
                    field: key,
                    expected: declared.type_name(),
                    actual: value.kind().type_name(),
                });
            }
            record.insert(key, codec::lower_value(value)?);
        }

        let lock = self.lock_for(name);
        let _guard = lock.lock().unwrap();

        let mut rows = self.read_rows(name)?.unwrap_or_default();
        rows.push(record);
        let blob = codec::encode(&rows, self.compress)?;
        self.blobs.set(name, blob)?;
        Ok(())
    }

    /// Returns the last stored record for `name` as field-to-value, or
    /// `None` if the name is unregistered or no row set exists.
    ///
    /// With an empty `fields` slice the full record is returned, unset
    /// fields at the null marker included. A non-empty slice selects only
    /// the named fields.
    pub fn get(&self, name: &str, fields: &[&str]) -> StoreResult<Option<Record>> {
        if !self.registry.contains(name) {
            return Ok(None);
        }
        let rows = match self.read_rows(name)? {
            Some(rows) => rows,
            None => return Ok(None),
        };
        let Some(last) = rows.into_iter().next_back() else {
            return Ok(None);
        };
        if fields.is_empty() {
            return Ok(Some(last));
        }
        let selected = last
            .into_iter()
            .filter(|(k, _)| fields.contains(&k.as_str()))
            .collect();
        Ok(Some(selected))
    }

    /// Returns the entire stored row set for `name`, or `None` if the name
    /// is unregistered or no row set exists.
    pub fn all(&self, name: &str) -> StoreResult<Option<RowSet>> {
        if !self.registry.contains(name) {
            return Ok(None);
        }
        self.read_rows(name)
    }

    /// Reads and decodes the stored row set, `None` when the blob is absent.
    fn read_rows(&self, name: &str) -> StoreResult<Option<RowSet>> {
        match self.blobs.get(name)? {
            Some(blob) => Ok(Some(codec::decode(&blob, self.compress)?)),
            None => Ok(None),
        }
    }

    /// Returns the mutex serializing mutation of one schema name's row set.
    fn lock_for(&self, name: &str) -> Arc<Mutex<()>> {
        let mut locks = self.locks.lock().unwrap();
        locks
            .entry(name.to_string())
            .or_insert_with(|| Arc::new(Mutex::new(())))
            .clone()
    }
}
