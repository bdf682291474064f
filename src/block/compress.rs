//! The compression algorithm.
//!
//! A single pass over the input, backed by the fixed hash table in [`super::hashtable`]. Every
//! four bytes are fingerprinted and looked up; a hit that verifies against the actual bytes
//! becomes a back-reference, extended backwards into already-scanned literals and forwards as
//! far as it matches. Misses are skipped over with a step that grows the longer a stretch of
//! input goes without producing a match, which keeps incompressible data cheap to scan.

use super::hashtable::HashTable;
use super::{fingerprint, get_batch, get_maximum_output_size};
use super::{END_OFFSET, LZ4_MIN_LENGTH, MAX_DISTANCE, MINMATCH};

/// Number of low bits of the skip counter dedicated to the miss tally; the remaining high bits
/// are the current step. Every 64 (`1 << 6`) consecutive misses therefore grow the step by one.
const SKIP_COUNTER_SHIFT: u32 = 6;

/// Compresses `input` into a freshly allocated block.
///
/// `acceleration` controls the initial skip step used while scanning past non-matching data;
/// `1` is the standard, most thorough setting. The returned buffer never exceeds
/// [`get_maximum_output_size`].
pub fn compress(input: &[u8], acceleration: u32) -> Vec<u8> {
    let mut output = Vec::with_capacity(get_maximum_output_size(input.len()));
    compress_into(input, acceleration, &mut output);
    output
}

/// Compresses `input`, appending the block to `output`.
///
/// `output` should have at least [`get_maximum_output_size`] spare capacity; this function
/// relies on that bound to never exceed it, but does not allocate it itself.
pub(crate) fn compress_into(input: &[u8], acceleration: u32, output: &mut Vec<u8>) {
    debug_assert!(acceleration >= 1);

    let input_len = input.len();
    if input_len < LZ4_MIN_LENGTH {
        write_last_literals(output, input, 0);
        return;
    }

    let mut table = HashTable::new();
    let mut anchor = 0usize;
    let mut pos = 0usize;
    // Skip counter: high bits are the step, low SKIP_COUNTER_SHIFT bits are the miss tally.
    let mut skip_counter = acceleration << SKIP_COUNTER_SHIFT;

    loop {
        // Search for the next match, widening the step on every miss.
        let (match_pos, candidate) = loop {
            // pos + 4 >= input_end - 5: no room left for a safe 4-byte probe.
            if pos + MINMATCH >= input_len - END_OFFSET {
                write_last_literals(output, input, anchor);
                return;
            }

            let word = get_batch(input, pos);
            let hash = fingerprint(word);
            let prev = table.replace(hash, pos);

            if let Some(m) = prev {
                if pos - m <= MAX_DISTANCE && get_batch(input, m) == word {
                    break (pos, m);
                }
            }

            let step = skip_counter >> SKIP_COUNTER_SHIFT;
            pos += step as usize;
            skip_counter += 1;
        };

        skip_counter = acceleration << SKIP_COUNTER_SHIFT;

        // Extend backwards into literals not yet emitted.
        let mut match_start = match_pos;
        let mut candidate_start = candidate;
        while match_start > anchor
            && candidate_start > 0
            && input[match_start - 1] == input[candidate_start - 1]
        {
            match_start -= 1;
            candidate_start -= 1;
        }

        let literal_len = match_start - anchor;
        let offset = (match_pos - candidate) as u16;

        // Extend forwards past the 4 bytes the hash lookup already verified. This resumes from
        // the backward-extended positions, not the original hash-hit positions: backward
        // extension already moved match_start/candidate_start behind match_pos/candidate, and
        // those extended bytes must still count towards the match length.
        let mut fwd = match_start + MINMATCH;
        let mut fwd_candidate = candidate_start + MINMATCH;
        while fwd < input_len - END_OFFSET && input[fwd] == input[fwd_candidate] {
            fwd += 1;
            fwd_candidate += 1;
        }
        let match_length = fwd - (match_start + MINMATCH);

        write_sequence(
            output,
            &input[anchor..anchor + literal_len],
            offset,
            match_length,
        );

        pos = fwd;
        anchor = fwd;
    }
}

/// Writes one non-final sequence: token, literal-length extension, literals, offset, and
/// match-length extension.
fn write_sequence(output: &mut Vec<u8>, literals: &[u8], offset: u16, match_length: usize) {
    let literal_len = literals.len();
    let token = ((literal_len.min(15) as u8) << 4) | (match_length.min(15) as u8);
    output.push(token);
    if literal_len >= 15 {
        write_length_extra(output, literal_len - 15);
    }
    output.extend_from_slice(literals);
    output.extend_from_slice(&offset.to_le_bytes());
    if match_length >= 15 {
        write_length_extra(output, match_length - 15);
    }
}

/// Writes the block's final, truncated sequence: a token and the remaining literals, nothing
/// else. The decoder recognizes the end of the block by running out of input right after this.
fn write_last_literals(output: &mut Vec<u8>, input: &[u8], anchor: usize) {
    let literal_len = input.len() - anchor;
    let token = (literal_len.min(15) as u8) << 4;
    output.push(token);
    if literal_len >= 15 {
        write_length_extra(output, literal_len - 15);
    }
    output.extend_from_slice(&input[anchor..]);
}

/// Writes a length beyond the 15-value token hint as a run of `0xFF` bytes followed by a
/// remainder byte (which may be `0`, e.g. when a literal run is exactly 15 bytes long).
#[inline]
fn write_length_extra(output: &mut Vec<u8>, mut extra: usize) {
    while extra >= 0xFF {
        output.push(0xFF);
        extra -= 0xFF;
    }
    output.push(extra as u8);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_a_single_zero_token() {
        assert_eq!(compress(b"", 1), vec![0x00]);
    }

    #[test]
    fn single_byte_is_a_bare_literal() {
        assert_eq!(compress(b"A", 1), vec![0x10, b'A']);
    }

    #[test]
    fn thirteen_bytes_with_no_match_is_all_literals() {
        let input = b"0123456789abc";
        let out = compress(input, 1);
        assert_eq!(out[0], 0xD0);
        assert_eq!(&out[1..], input);
    }

    #[test]
    fn long_literal_run_extends_the_token() {
        // 300 distinct bytes: [0, 1, .., 255, 0, 1, .., 43], chosen so no 4-byte match exists.
        let input: Vec<u8> = (0..300u32).map(|i| (i % 256) as u8).collect();
        let out = compress(&input, 1);
        assert_eq!(out[0], 0xF0);
        assert_eq!(out[1], 0xFF);
        assert_eq!(out[2], 300 - 15 - 255);
        assert_eq!(&out[3..], &input[..]);
    }

    #[test]
    fn repeated_byte_run_produces_a_match() {
        let input = vec![b'A'; 20];
        let out = compress(&input, 1);
        // Some literals, then an offset of 1 somewhere in the stream.
        assert!(out.len() < input.len());
    }

    #[test]
    fn round_trips_when_backward_extension_fires_at_a_nonzero_offset() {
        // A repeating low-alphabet pattern whose first duplicate 4-byte window sits well past
        // absolute position 0, so backward extension walks candidate_start back into the middle
        // of the buffer rather than stopping immediately at 0. This is exactly the shape that
        // silently dropped bytes when forward extension resumed from the pre-backward-extension
        // positions instead of the backward-extended ones.
        let input: Vec<u8> = b"the cat sat on the mat while the cat sat on the mat again"
            .iter()
            .copied()
            .collect();
        let compressed = compress(&input, 1);
        let decompressed =
            crate::block::decompress::decompress(&compressed, Some(-(input.len() as i64)))
                .unwrap();
        assert_eq!(decompressed, input);
    }
}
