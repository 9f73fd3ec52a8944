//! Codec Round-Trip Tests
//!
//! For any row set R without timestamp values:
//! - decode(encode(R, compress=false), decompressed=false) == R
//! - decode(encode(R, compress=true), decompressed=true) == R
//!
//! Timestamp values are lowered to fixed-format strings on encode and come
//! back as plain strings; the conversion is one-way.

use chrono::NaiveDate;
use rowcache::codec::{decode, encode, lower_value, CodecError, TIMESTAMP_FORMAT};
use rowcache::registry::{FieldValue, Record, RowSet};
use serde_json::{json, Value};

// =============================================================================
// Helper Functions
// =============================================================================

fn mixed_rows() -> RowSet {
    let mut first = Record::new();
    first.insert("name".into(), json!("Alice"));
    first.insert("age".into(), json!(30));
    first.insert("active".into(), json!(true));
    first.insert("score".into(), json!(99.5));
    first.insert("tags".into(), json!(["rust", "cache"]));
    first.insert("meta".into(), json!({"city": "NYC", "zip": "10001"}));

    let mut second = Record::new();
    second.insert("name".into(), json!("Bob"));
    second.insert("age".into(), Value::Null);
    second.insert("active".into(), json!(false));
    second.insert("score".into(), Value::Null);
    second.insert("tags".into(), json!([]));
    second.insert("meta".into(), json!({}));

    vec![first, second]
}

// =============================================================================
// Round-Trip Law Tests
// =============================================================================

#[test]
fn test_roundtrip_law_uncompressed() {
    let rows = mixed_rows();
    let blob = encode(&rows, false).unwrap();
    assert_eq!(decode(&blob, false).unwrap(), rows);
}

#[test]
fn test_roundtrip_law_compressed() {
    let rows = mixed_rows();
    let blob = encode(&rows, true).unwrap();
    assert_eq!(decode(&blob, true).unwrap(), rows);
}

#[test]
fn test_empty_row_set_roundtrips() {
    let rows: RowSet = Vec::new();
    for compress in [false, true] {
        let blob = encode(&rows, compress).unwrap();
        assert!(decode(&blob, compress).unwrap().is_empty());
    }
}

/// Repeated encodes of the same row set produce identical bytes.
#[test]
fn test_encoding_deterministic() {
    let rows = mixed_rows();
    assert_eq!(encode(&rows, false).unwrap(), encode(&rows, false).unwrap());
}

// =============================================================================
// Timestamp One-Way Tests
// =============================================================================

#[test]
fn test_timestamp_becomes_formatted_string() {
    let ts = NaiveDate::from_ymd_opt(2021, 12, 24)
        .unwrap()
        .and_hms_opt(23, 59, 59)
        .unwrap();

    let lowered = lower_value(FieldValue::Timestamp(ts)).unwrap();
    assert_eq!(lowered, json!("2021-12-24 23:59:59"));

    let mut record = Record::new();
    record.insert("at".into(), lowered);
    let decoded = decode(&encode(&vec![record], false).unwrap(), false).unwrap();

    // Decodes as a plain string, not a timestamp
    assert_eq!(decoded[0]["at"], json!("2021-12-24 23:59:59"));
}

#[test]
fn test_timestamp_format_second_precision() {
    let ts = NaiveDate::from_ymd_opt(2020, 1, 2)
        .unwrap()
        .and_hms_opt(3, 4, 5)
        .unwrap();
    assert_eq!(ts.format(TIMESTAMP_FORMAT).to_string(), "2020-01-02 03:04:05");
}

// =============================================================================
// Failure Mode Tests
// =============================================================================

#[test]
fn test_corrupt_bytes_rejected() {
    let result = decode(b"not json at all", false);
    assert!(matches!(result, Err(CodecError::CorruptBlob(_))));
}

/// A record sequence truncated mid-stream does not parse.
#[test]
fn test_truncated_blob_rejected() {
    let rows = mixed_rows();
    let blob = encode(&rows, false).unwrap();
    let truncated = &blob[..blob.len() / 2];
    assert!(matches!(
        decode(truncated, false),
        Err(CodecError::CorruptBlob(_))
    ));
}

#[test]
fn test_uncompressed_bytes_fail_decompression() {
    let rows = mixed_rows();
    let blob = encode(&rows, false).unwrap();
    assert!(matches!(
        decode(&blob, true),
        Err(CodecError::Decompression(_))
    ));
}

#[test]
fn test_corrupted_zlib_stream_rejected() {
    let rows = mixed_rows();
    let mut blob = encode(&rows, true).unwrap();
    let mid = blob.len() / 2;
    blob[mid] ^= 0xFF;
    let result = decode(&blob, true);
    assert!(matches!(
        result,
        Err(CodecError::Decompression(_)) | Err(CodecError::CorruptBlob(_))
    ));
}
