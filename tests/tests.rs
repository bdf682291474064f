use lz4_block_codec::{compress_blob, decompress_blob, get_maximum_output_size};
use more_asserts::assert_le;
use proptest::prelude::*;

#[test]
fn empty_input_round_trips() {
    let compressed = compress_blob(b"", None).unwrap();
    assert_eq!(compressed, vec![0x00]);
    let decompressed = decompress_blob(&compressed, Some(0)).unwrap();
    assert_eq!(decompressed, b"");
}

#[test]
fn short_input_round_trips() {
    let input = b"hello";
    let compressed = compress_blob(input, None).unwrap();
    let decompressed = decompress_blob(&compressed, Some(-(input.len() as i64))).unwrap();
    assert_eq!(decompressed, input);
}

#[test]
fn highly_repetitive_input_round_trips_and_shrinks() {
    let input = vec![b'A'; 10_000];
    let compressed = compress_blob(&input, None).unwrap();
    assert!(compressed.len() < input.len() / 10);
    let decompressed = decompress_blob(&compressed, Some(-(input.len() as i64))).unwrap();
    assert_eq!(decompressed, input);
}

#[test]
fn overlapping_match_round_trips() {
    // "AB" repeated: every match's offset (2) is smaller than the match length it ends up
    // describing once later repeats extend it, forcing the decoder's overlap-copy path.
    let input = b"ABABABABABABABABABABABABABABAB".to_vec();
    let compressed = compress_blob(&input, None).unwrap();
    let decompressed = decompress_blob(&compressed, Some(-(input.len() as i64))).unwrap();
    assert_eq!(decompressed, input);
}

#[test]
fn acceleration_changes_ratio_but_not_correctness() {
    let input: Vec<u8> = (0..2000u32)
        .map(|i| if i % 7 == 0 { b'x' } else { (i % 251) as u8 })
        .collect();
    for acceleration in [1, 2, 8, 64] {
        let compressed = compress_blob(&input, Some(acceleration)).unwrap();
        let decompressed = decompress_blob(&compressed, Some(-(input.len() as i64))).unwrap();
        assert_eq!(decompressed, input, "acceleration {acceleration} broke round-trip");
    }
}

#[test]
fn compressed_size_never_exceeds_the_documented_bound() {
    for len in [1usize, 4, 12, 13, 250, 251, 1000, 65536, 70000] {
        let input = vec![0u8; len];
        let compressed = compress_blob(&input, None).unwrap();
        assert_le!(compressed.len(), get_maximum_output_size(len));
    }
}

#[test]
fn exact_size_hint_that_is_too_small_fails_instead_of_truncating() {
    let input = b"some data that is not a single byte";
    let compressed = compress_blob(input, None).unwrap();
    assert!(decompress_blob(&compressed, Some((input.len() - 1) as i64)).is_err());
}

#[test]
fn growable_cap_one_byte_short_fails() {
    let input = b"some data that is not a single byte";
    let compressed = compress_blob(input, None).unwrap();
    assert!(decompress_blob(&compressed, Some(-((input.len() - 1) as i64))).is_err());
}

#[test]
fn truncated_block_is_rejected() {
    // A token claiming 2 literal bytes, but the block is cut off right after it.
    assert!(decompress_blob(&[0x20], None).is_err());
}

proptest! {
    #[test]
    fn round_trip_is_lossless(ref input in proptest::collection::vec(any::<u8>(), 0..4096)) {
        let compressed = compress_blob(input, None).unwrap();
        prop_assert!(compressed.len() <= get_maximum_output_size(input.len()));
        let decompressed = decompress_blob(&compressed, Some(-(input.len() as i64))).unwrap();
        prop_assert_eq!(&decompressed, input);
    }

    #[test]
    fn round_trip_is_lossless_for_highly_repetitive_bytes(
        byte in any::<u8>(),
        len in 0usize..4096,
    ) {
        let input = vec![byte; len];
        let compressed = compress_blob(&input, None).unwrap();
        let decompressed = decompress_blob(&compressed, Some(-(input.len() as i64))).unwrap();
        prop_assert_eq!(decompressed, input);
    }
}
