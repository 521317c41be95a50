//! Symmetric gzip compression helpers.
//!
//! Reversible byte transforms independent of the key's contract: a
//! [`crate::ContentKey`] computed over compressed bytes identifies the
//! compressed bytes, not the original content.

use crate::error::{BlobkeyError, Result};
use flate2::read::GzDecoder;
use flate2::write::GzEncoder;
use std::io::{Read, Write};

/// Compress bytes with gzip at the default level.
///
/// # Errors
///
/// Returns an error if the encoder fails to write.
pub fn compress(data: &[u8]) -> Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(
        Vec::with_capacity(data.len() / 2),
        flate2::Compression::default(),
    );
    encoder.write_all(data)?;
    Ok(encoder.finish()?)
}

/// Decompress gzip bytes produced by [`compress`].
///
/// # Errors
///
/// Returns [`BlobkeyError::Compression`] if the input is not a valid
/// gzip stream.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    let mut decoder = GzDecoder::new(data);
    let mut out = Vec::new();
    decoder
        .read_to_end(&mut out)
        .map_err(|e| BlobkeyError::Compression(e.to_string()))?;
    Ok(out)
}
