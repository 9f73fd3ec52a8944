//! Row Store Facade subsystem for rowcache
//!
//! Orchestrates registry validation, codec encode/decode, and blob-store
//! calls behind get/push/all operations keyed by schema name.
//!
//! # Design Principles
//!
//! - Validation before any read or write; a failed push never mutates state
//! - `push` raises, `get`/`all` fail closed with an absence signal
//! - Per-schema mutex serializes the read-modify-write cycle
//! - Blob write failures propagate, never swallowed

mod errors;
mod facade;

pub use errors::{StoreError, StoreResult};
pub use facade::RowStore;
