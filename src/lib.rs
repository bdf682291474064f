//! A pure Rust implementation of the [LZ4 block format], with no `unsafe`.
//!
//! This crate implements the block format only: a single compressed unit with no framing,
//! headers, checksums, or dictionaries. Callers who need to ship blocks over the wire or into a
//! file are expected to handle that themselves, e.g. by prefixing a length.
//!
//! The two entry points most callers want are [`compress_blob`] and [`decompress_blob`]; the
//! `start`/`len`-taking variants ([`compress`], [`decompress`]) exist for compressing or
//! decompressing a sub-region of a larger buffer without copying it out first.
//!
//! [LZ4 block format]: https://github.com/lz4/lz4/blob/dev/doc/lz4_Block_format.md
#![cfg_attr(docsrs, feature(doc_cfg))]

#[macro_use]
extern crate quick_error;

pub mod block;
mod api;
pub mod error;

pub use api::{compress, compress_blob, decompress, decompress_blob};
pub use block::get_maximum_output_size;
pub use error::{CompressError, DecompressError};
