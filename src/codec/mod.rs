//! Codec subsystem for rowcache
//!
//! Serializes an ordered sequence of records into a byte blob and
//! reconstitutes it losslessly on read. The canonical text form is JSON: a
//! deterministic, self-describing encoding of the sequence-of-mappings that
//! preserves every key, value, and nesting level with no implicit float/int
//! coercion. Compression, when enabled, is zlib over the text bytes.
//!
//! Timestamp values are lowered to fixed-format strings on encode; decode
//! leaves them as plain strings. The conversion is one-way.

mod compress;
mod errors;
mod rows;

pub use compress::{compress, decompress};
pub use errors::{CodecError, CodecResult};
pub use rows::{decode, encode, lower_value, TIMESTAMP_FORMAT};
