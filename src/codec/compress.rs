//! Zlib compression helpers for blob payloads

use std::io::{Read, Write};

use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use flate2::Compression;

use super::errors::{CodecError, CodecResult};

/// Compresses bytes with zlib at the default level.
pub fn compress(data: &[u8]) -> CodecResult<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    encoder
        .write_all(data)
        .map_err(|e| CodecError::Encode(format!("zlib write failed: {}", e)))?;
    encoder
        .finish()
        .map_err(|e| CodecError::Encode(format!("zlib finish failed: {}", e)))
}

/// Reverses [`compress`].
///
/// # Errors
///
/// Returns `CodecError::Decompression` if the bytes are not a valid zlib
/// stream.
pub fn decompress(data: &[u8]) -> CodecResult<Vec<u8>> {
    let mut decoder = ZlibDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| CodecError::Decompression(format!("zlib read failed: {}", e)))?;
    Ok(out)
}
