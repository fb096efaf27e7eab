//! Compact binary codec for postings lists.
//!
//! Postings are ordered lists of series references. Since the references are
//! sorted, consecutive values tend to be close to each other, so instead of
//! storing absolute values the codec stores the difference from the previous
//! value as an unsigned LEB128 varint and snappy-compresses the result.
//! Every encoded block starts with a short codec header, which lets readers
//! cheaply detect the format before committing to a full decode.
//!
//! Decoding reuses decompression buffers through a [`DecodeBufferPool`] and
//! yields a lazy [`DiffVarintPostings`] cursor instead of materializing the
//! whole list.

mod decode;
mod encode;
mod error;
mod pool;
mod postings;
mod varint;


/// Opaque reference to a series within the storage engine.
pub type SeriesRef = u64;

/// Header prepended to every diff + varint + snappy encoded block.
pub const CODEC_HEADER_SNAPPY: &[u8] = b"dvs";

pub use decode::{diff_varint_snappy_decode, DiffVarintPostings};
pub use encode::{diff_varint_encode, diff_varint_snappy_encode, is_diff_varint_snappy_encoded};
pub use error::{CodecError, Result};
pub use pool::{DecodeBufferPool, PooledBufferHandle};
pub use postings::{ListPostings, Postings};
