use std::io::Read;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use flate2::read::{GzDecoder, ZlibDecoder};

use crate::errors::DecompressionError;

/// Decodes a base64-wrapped compressed message body into plain text.
///
/// The wire format is two layers: base64 text around a deflate-family byte
/// stream. Producers have used both gzip and zlib framing, so the stream is
/// sniffed by its magic bytes and decoded accordingly. Pure function, safe to
/// call concurrently.
///
/// # Errors
///
/// Returns [`DecompressionError`] when the input is not valid base64, the
/// decoded bytes are not a well-formed compressed stream (bad header or
/// truncated data), or the inflated bytes are not UTF-8.
pub fn decompress(encoded: &str) -> Result<String, DecompressionError> {
    let compressed = STANDARD.decode(encoded)?;
    let mut inflated = Vec::new();
    if compressed.starts_with(&[0x1f, 0x8b]) {
        GzDecoder::new(compressed.as_slice()).read_to_end(&mut inflated)?;
    } else {
        ZlibDecoder::new(compressed.as_slice()).read_to_end(&mut inflated)?;
    }
    Ok(String::from_utf8(inflated)?)
}
