//! Stream helpers for preparing key input.

use std::io::{self, Read};

/// Read a stream to exhaustion into an owned buffer.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn read_all<R: Read>(mut reader: R) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    reader.read_to_end(&mut data)?;
    Ok(data)
}

/// Read a stream to exhaustion with a pre-sized buffer.
///
/// `capacity` is a hint only; the returned buffer holds however many
/// bytes the stream actually produced.
///
/// # Errors
///
/// Returns an error if reading fails.
pub fn read_all_with_capacity<R: Read>(mut reader: R, capacity: usize) -> io::Result<Vec<u8>> {
    let mut data = Vec::with_capacity(capacity);
    reader.read_to_end(&mut data)?;
    Ok(data)
}
