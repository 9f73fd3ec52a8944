//! Row set encoding and decoding
//!
//! `decode(encode(rows, c), c) == rows` for any row set without timestamp
//! values, for both compression settings. Timestamp values are lowered to
//! strings before they reach the text form, so after one round-trip they
//! compare equal to their formatted string, not to a timestamp.

use serde_json::{Number, Value};

use crate::registry::{FieldValue, RowSet};

use super::compress::{compress, decompress};
use super::errors::{CodecError, CodecResult};

/// Canonical timestamp representation: second precision, no timezone.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Lowers a typed field value into the canonical text form.
///
/// Timestamps become fixed-format strings here; every other variant maps to
/// its JSON counterpart unchanged.
///
/// # Errors
///
/// Returns `CodecError::Encode` for non-finite floats, which have no
/// canonical text representation.
pub fn lower_value(value: FieldValue) -> CodecResult<Value> {
    match value {
        FieldValue::Int(v) => Ok(Value::Number(v.into())),
        FieldValue::Str(v) => Ok(Value::String(v)),
        FieldValue::Bool(v) => Ok(Value::Bool(v)),
        FieldValue::List(v) => Ok(Value::Array(v)),
        FieldValue::Float(v) => Number::from_f64(v)
            .map(Value::Number)
            .ok_or_else(|| CodecError::Encode(format!("non-finite float {}", v))),
        FieldValue::Map(v) => Ok(Value::Object(v)),
        FieldValue::Timestamp(ts) => {
            Ok(Value::String(ts.format(TIMESTAMP_FORMAT).to_string()))
        }
    }
}

/// Encodes an ordered sequence of records into a byte blob.
///
/// The blob is the canonical JSON text of the sequence, zlib-compressed when
/// `compress` is set. Exact inverse of [`decode`] for the matching flag.
pub fn encode(rows: &RowSet, compress_blob: bool) -> CodecResult<Vec<u8>> {
    let text = serde_json::to_vec(rows)
        .map_err(|e| CodecError::Encode(e.to_string()))?;
    if compress_blob {
        compress(&text)
    } else {
        Ok(text)
    }
}

/// Decodes a byte blob back into the ordered sequence of records.
///
/// # Errors
///
/// Returns `CodecError::Decompression` if `decompressed` is set and the
/// bytes are not a valid zlib stream, or `CodecError::CorruptBlob` if the
/// text does not parse as a sequence of records.
pub fn decode(blob: &[u8], decompressed: bool) -> CodecResult<RowSet> {
    let text;
    let bytes = if decompressed {
        text = decompress(blob)?;
        text.as_slice()
    } else {
        blob
    };
    serde_json::from_slice(bytes).map_err(|e| CodecError::CorruptBlob(e.to_string()))
}
