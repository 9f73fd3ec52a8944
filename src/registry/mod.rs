//! Schema Registry subsystem for rowcache
//!
//! Schemas are mandatory first-class artifacts: every push is validated
//! against a registered schema before anything is read or written.
//!
//! # Design Principles
//!
//! - Schema names are unique; re-registration is rejected
//! - Field types come from a closed primitive universe
//! - Type checking is tag equality, never coercion (timestamps excepted,
//!   which the codec lowers to their canonical string form)
//! - Lookup never mutates registry state

mod errors;
mod registry;
mod types;

pub use errors::{RegistryError, RegistryResult};
pub use registry::SchemaRegistry;
pub use types::{FieldType, FieldValue, Record, RowSet, Schema};
