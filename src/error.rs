use thiserror::Error;

use crate::SeriesRef;

pub type Result<T> = std::result::Result<T, CodecError>;

/// Failures produced while encoding or decoding postings blocks.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Postings entries out of order, current: {current}, previous: {previous}")]
    OutOfOrder {
        current: SeriesRef,
        previous: SeriesRef,
    },
    /// The postings producer feeding the encoder failed. Reported by the
    /// producer through [`Postings::last_error`](crate::Postings::last_error)
    /// and propagated as is.
    #[error("Postings sequence failed: {description}")]
    Sequence { description: String },
    #[error("Header mismatch: block is not diff + varint + snappy encoded")]
    HeaderMismatch,
    #[error("Snappy compression failed: {description}")]
    Compress { description: String },
    #[error("Snappy decompression failed: {description}")]
    Decompress { description: String },
    #[error("Malformed varint at offset {offset}")]
    MalformedVarint { offset: usize },
    #[error("Series reference overflow at offset {offset}")]
    Overflow { offset: usize },
}

impl CodecError {
    pub fn sequence(description: impl Into<String>) -> Self {
        Self::Sequence {
            description: description.into(),
        }
    }
}
