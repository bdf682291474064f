//! Error types returned by the compressor and decompressor.

quick_error! {
    /// Failure modes of the validating compression entry points.
    #[derive(Debug)]
    pub enum CompressError {
        /// `start + len` reached past the end of the supplied data.
        OutOfBounds {
            display("the supplied start/len is out of bounds of the input data")
        }
        /// `acceleration` was present but not `>= 1`.
        InvalidAcceleration {
            display("acceleration must be an integer >= 1")
        }
    }
}

quick_error! {
    /// Failure modes of the validating decompression entry points, and of the block decoder
    /// itself when it encounters a malformed block.
    #[derive(Debug)]
    pub enum DecompressError {
        /// `start + len` reached past the end of the supplied data.
        OutOfBounds {
            display("the supplied start/len is out of bounds of the input data")
        }
        /// The block ended (or contained too few bytes) where a token, offset, or length
        /// extension byte was expected.
        ExpectedAnotherByte {
            display("expected another byte in the compressed block, found none")
        }
        /// A sequence's literal run claims more bytes than remain in the input.
        LiteralOutOfBounds {
            display("literal length exceeds the remaining input")
        }
        /// A match's offset is zero, or reaches further back than has been decoded so far.
        OffsetOutOfBounds {
            display("match offset is zero or points before the start of the output")
        }
        /// Growing the output buffer to fit the next literal or match run would exceed the
        /// configured (or default) maximum decompressed size.
        MaximumSizeExceeded(limit: usize) {
            display("decompressed output would exceed the maximum size of {} bytes", limit)
        }
        /// An exact (positive) `decompressed_len` hint was given, but the block actually decoded
        /// to a different number of bytes.
        UncompressedSizeDiffers(expected: usize, actual: usize) {
            display("expected decompressed size {} but got {}", expected, actual)
        }
    }
}
