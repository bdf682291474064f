/*!

<https://github.com/lz4/lz4/blob/dev/doc/lz4_Block_format.md>

LZ4 block layout:

```text
[Token] 1 byte [Literal Length | Match Length]  -- 4 bits each, 0-15
[Optional Literal Length bytes] [Literals] [Offset, 2 bytes LE] [Optional Match Length bytes]
```

The final sequence in a block is truncated: token + literal-length extension + literals only,
no offset and no match-length. The decoder recognizes it by running out of input right after
the literal copy.

*/

pub mod compress;
pub mod decompress;
pub mod hashtable;

/// The last match must start at least 12 bytes before the end of the block. The last match is
/// part of the penultimate sequence; it is followed by the last sequence, which contains only
/// literals.
///
/// As a consequence an input shorter than 13 bytes is never run through the match finder: the
/// match itself needs to copy something, so it needs at least one byte before it, and then still
/// leave room for the mandatory trailing literals.
pub(crate) const MFLIMIT: usize = 12;

/// The last 5 bytes of the input always end up as literals, never as part of a match.
pub(crate) const END_OFFSET: usize = 5;

/// Minimum input length for which the match finder runs at all (`MFLIMIT` + 1 token byte).
pub(crate) const LZ4_MIN_LENGTH: usize = MFLIMIT + 1;

/// A match offset is a 16-bit value; it can therefore never reach further back than this.
pub(crate) const MAX_DISTANCE: usize = 0xFFFF;

/// The shortest duplicate a token can describe; shorter runs are not worth a back-reference.
pub(crate) const MINMATCH: usize = 4;

/// Number of slots in the compressor's hash table. Fixed, unlike variable dictionary-sized
/// implementations of this format: every 4-byte window maps into one of these via `fingerprint`.
pub(crate) const HASH_TABLE_SIZE: usize = 1 << 16;

/// Hashes a 4-byte little-endian window down to a 16-bit bucket index.
///
/// This is the textbook LZ4 multiplicative hash: multiply by a fixed odd constant and keep the
/// upper bits, which mix in all four input bytes. It does not need to be cryptographic, only to
/// spread common byte patterns across the table.
#[inline]
pub(crate) fn fingerprint(word: u32) -> u16 {
    (word.wrapping_mul(2_654_435_761)) >> 16
}

/// Reads a native 4-byte little-endian window out of `input` at `pos`.
///
/// # Panics
/// Panics if `pos + 4 > input.len()`. Callers keep `pos` inside the safe scan region, which is
/// always at least 4 bytes before the end of `input`.
#[inline]
pub(crate) fn get_batch(input: &[u8], pos: usize) -> u32 {
    u32::from_le_bytes(input[pos..pos + 4].try_into().unwrap())
}

/// Worst-case size of a compressed block for `input_len` bytes of input.
///
/// LZ4's standard worst-case growth factor is `1 + 1/250`; allocating this much up front means
/// the compressor never has to grow its output buffer mid-call. A floor of one byte is kept for
/// the empty input, whose block is a single zero token.
#[inline]
pub fn get_maximum_output_size(input_len: usize) -> usize {
    ((input_len * 251 + 249) / 250).max(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maximum_output_size_never_below_one() {
        assert_eq!(get_maximum_output_size(0), 1);
    }

    #[test]
    fn maximum_output_size_matches_growth_factor() {
        assert_eq!(get_maximum_output_size(250), 251);
        assert_eq!(get_maximum_output_size(12), 13);
        assert_eq!(get_maximum_output_size(500), 502);
    }

    #[test]
    fn fingerprint_is_deterministic() {
        let word = u32::from_le_bytes(*b"abcd");
        assert_eq!(fingerprint(word), fingerprint(word));
    }
}
