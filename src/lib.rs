//! rowcache - A typed, schema-validated row cache over a pluggable blob store
//!
//! Callers declare named caches with a fixed set of typed fields, then push
//! and retrieve rows through a schema-validated serialization layer. Each
//! cache is persisted as a single serialized blob per schema name in an
//! external key-value store.

pub mod blob;
pub mod codec;
pub mod registry;
pub mod store;
