//! The decompression algorithm.
//!
//! The output buffer starts small and grows geometrically as the decoder discovers it needs
//! more room, up to a caller-chosen (or default) cap. This lets the decoder run without the
//! caller knowing the exact decompressed size ahead of time, at the cost of the occasional
//! doubling copy.

use crate::error::DecompressError;

use super::MINMATCH;

/// Default initial output capacity when the caller gives no size hint: 512 KiB.
const DEFAULT_INITIAL_CAPACITY: usize = 512 * 1024;

/// Conservative cap used when the caller gives no size hint at all: 2^31 bytes.
const DEFAULT_MAX_CAPACITY: usize = 1 << 31;

/// How a `decompressed_len` hint constrains the output buffer's growth.
struct OutputPolicy {
    /// Hard ceiling; growth stops here and further growth requests fail.
    cap: usize,
    /// Buffer size to start with.
    initial: usize,
    /// Set when the hint was an exact (positive) size: the decoded length must match it
    /// precisely, not merely stay under it.
    exact: Option<usize>,
}

impl OutputPolicy {
    fn from_hint(decompressed_len: Option<i64>) -> Self {
        match decompressed_len {
            // Exact expected size: growth is effectively disabled, since cap == initial already
            // covers it and any further growth request immediately exceeds the cap. A decode
            // that finishes short of `exact` is just as much a mismatch as one that overflows it.
            Some(n) if n > 0 => {
                let exact = n as usize;
                OutputPolicy {
                    cap: exact,
                    initial: exact,
                    exact: Some(exact),
                }
            }
            Some(0) => OutputPolicy {
                cap: 0,
                initial: 0,
                exact: Some(0),
            },
            // Negative: `abs(n)` is an upper bound the output may grow up to.
            Some(n) => {
                let cap = n.unsigned_abs() as usize;
                OutputPolicy {
                    cap,
                    initial: cap.min(DEFAULT_INITIAL_CAPACITY),
                    exact: None,
                }
            }
            None => OutputPolicy {
                cap: DEFAULT_MAX_CAPACITY,
                initial: DEFAULT_INITIAL_CAPACITY,
                exact: None,
            },
        }
    }
}

/// Decompresses `input`, which must hold exactly one LZ4 block (no framing).
///
/// `decompressed_len` controls the output buffer's sizing, see [`OutputPolicy::from_hint`]:
/// a positive value is an exact, non-growable size; a negative value's absolute value is a
/// growable upper bound; `None` defaults to a generous cap with a modest initial allocation.
pub fn decompress(
    input: &[u8],
    decompressed_len: Option<i64>,
) -> Result<Vec<u8>, DecompressError> {
    let policy = OutputPolicy::from_hint(decompressed_len);
    let mut output = vec![0u8; policy.initial];
    let mut out_pos = 0usize;
    let mut in_pos = 0usize;

    loop {
        let token = *input
            .get(in_pos)
            .ok_or(DecompressError::ExpectedAnotherByte)?;
        in_pos += 1;

        let mut literal_len = (token >> 4) as usize;
        if literal_len == 15 {
            literal_len += read_length_extra(input, &mut in_pos)? as usize;
        }

        grow_to_fit(&mut output, policy.cap, out_pos + literal_len)?;
        let literal_end = in_pos + literal_len;
        let literals = input
            .get(in_pos..literal_end)
            .ok_or(DecompressError::LiteralOutOfBounds)?;
        output[out_pos..out_pos + literal_len].copy_from_slice(literals);
        out_pos += literal_len;
        in_pos = literal_end;

        // Running out of input right after a literal copy marks the block's final sequence.
        if in_pos >= input.len() {
            break;
        }

        let offset_bytes = input
            .get(in_pos..in_pos + 2)
            .ok_or(DecompressError::ExpectedAnotherByte)?;
        let offset = u16::from_le_bytes([offset_bytes[0], offset_bytes[1]]) as usize;
        in_pos += 2;
        if offset == 0 || offset > out_pos {
            return Err(DecompressError::OffsetOutOfBounds);
        }

        let match_hint = (token & 0x0F) as usize;
        let match_extra = if match_hint == 15 {
            15 + read_length_extra(input, &mut in_pos)? as usize
        } else {
            match_hint
        };
        let match_len = match_extra + MINMATCH;

        grow_to_fit(&mut output, policy.cap, out_pos + match_len)?;
        copy_match(&mut output, out_pos, offset, match_len);
        out_pos += match_len;
    }

    if let Some(expected) = policy.exact {
        if out_pos != expected {
            return Err(DecompressError::UncompressedSizeDiffers(expected, out_pos));
        }
    }

    output.truncate(out_pos);
    Ok(output)
}

/// Reads a literal- or match-length extension: a run of `0xFF` bytes, terminated by (and
/// including) the first byte below `0xFF`.
#[inline]
fn read_length_extra(input: &[u8], in_pos: &mut usize) -> Result<u32, DecompressError> {
    let mut extra = 0u32;
    loop {
        let byte = *input
            .get(*in_pos)
            .ok_or(DecompressError::ExpectedAnotherByte)?;
        *in_pos += 1;
        extra += byte as u32;
        if byte != 0xFF {
            return Ok(extra);
        }
    }
}

/// Grows `output` geometrically until it has room for `needed` bytes, without exceeding `cap`.
fn grow_to_fit(output: &mut Vec<u8>, cap: usize, needed: usize) -> Result<(), DecompressError> {
    if needed <= output.len() {
        return Ok(());
    }
    let mut new_len = output.len();
    while new_len < needed {
        if new_len >= cap {
            return Err(DecompressError::MaximumSizeExceeded(cap));
        }
        new_len = (new_len * 2).clamp(new_len + 1, cap);
    }
    output.resize(new_len, 0);
    Ok(())
}

/// Copies a match of `len` bytes from `offset` bytes behind `write_pos` into `output`.
///
/// When `len > offset` the source and destination ranges overlap: the match is re-reading bytes
/// it is itself in the middle of writing (LZ4 uses this for run-length style repetition, e.g.
/// `"AAAA..."` encoded as a 1-byte match replicated forward). A plain slice copy assumes
/// non-overlapping source and destination and would either panic or, via `copy_within`'s
/// memmove semantics, silently produce the wrong bytes by copying stale, not-yet-overwritten
/// data. Copying in chunks no larger than `offset` keeps each chunk's source and destination
/// disjoint, which makes every individual chunk copy correct, and lets later chunks read bytes
/// the earlier chunks just wrote.
#[inline]
fn copy_match(output: &mut [u8], write_pos: usize, offset: usize, mut len: usize) {
    let mut read = write_pos - offset;
    let mut write = write_pos;
    while len > offset {
        output.copy_within(read..read + offset, write);
        read += offset;
        write += offset;
        len -= offset;
    }
    output.copy_within(read..read + len, write);
}
