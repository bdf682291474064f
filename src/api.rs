//! Validating entry points: these check the caller's `start`/`len` arguments against the
//! supplied buffer before handing off to the unchecked block codec in [`crate::block`].

use crate::block::compress::compress_into;
use crate::block::{decompress::decompress as decompress_block, get_maximum_output_size};
use crate::error::{CompressError, DecompressError};

/// Compresses `data[start..start + len]` with the given acceleration (`1` if `None`).
pub fn compress(
    data: &[u8],
    start: usize,
    len: usize,
    acceleration: Option<u32>,
) -> Result<Vec<u8>, CompressError> {
    if let Some(a) = acceleration {
        if a < 1 {
            return Err(CompressError::InvalidAcceleration);
        }
    }
    let region = region(data, start, len).ok_or(CompressError::OutOfBounds)?;
    let mut output = Vec::with_capacity(get_maximum_output_size(region.len()));
    compress_into(region, acceleration.unwrap_or(1), &mut output);
    Ok(output)
}

/// Compresses the whole of `data` with the given acceleration (`1` if `None`).
pub fn compress_blob(data: &[u8], acceleration: Option<u32>) -> Result<Vec<u8>, CompressError> {
    compress(data, 0, data.len(), acceleration)
}

/// Decompresses `data[start..start + len]`, which must hold exactly one block.
///
/// `decompressed_len` sizes and bounds the output, see
/// [`crate::block::decompress::decompress`]: a positive value is an exact, non-growable size;
/// a negative value's absolute value is a growable upper bound; `None` defaults to a generous
/// cap with a modest initial allocation.
pub fn decompress(
    data: &[u8],
    start: usize,
    len: usize,
    decompressed_len: Option<i64>,
) -> Result<Vec<u8>, DecompressError> {
    let region = region(data, start, len).ok_or(DecompressError::OutOfBounds)?;
    decompress_block(region, decompressed_len)
}

/// Decompresses the whole of `data`, which must hold exactly one block.
pub fn decompress_blob(
    data: &[u8],
    decompressed_len: Option<i64>,
) -> Result<Vec<u8>, DecompressError> {
    decompress(data, 0, data.len(), decompressed_len)
}

#[inline]
fn region(data: &[u8], start: usize, len: usize) -> Option<&[u8]> {
    let end = start.checked_add(len)?;
    data.get(start..end)
}
