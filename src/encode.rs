use crate::error::{CodecError, Result};
use crate::postings::Postings;
use crate::varint::write_uvarint;
use crate::{CODEC_HEADER_SNAPPY, SeriesRef};

/// Checks whether `input` starts with the diff + varint + snappy header.
#[inline]
pub fn is_diff_varint_snappy_encoded(input: &[u8]) -> bool {
    input.starts_with(CODEC_HEADER_SNAPPY)
}

/// Encodes `postings` as deltas between consecutive entries, each delta an
/// unsigned varint. No codec header is prepended and no count is stored;
/// decoding relies on buffer exhaustion.
///
/// `expected_count` sizes the preallocation and may be 0 when the caller
/// does not know the length upfront.
pub fn diff_varint_encode<P: Postings + ?Sized>(
    postings: &mut P,
    expected_count: usize,
) -> Result<Vec<u8>> {
    // Mostly single byte deltas; 1.25 bytes per entry covers the
    // occasional larger gap.
    let mut buf = Vec::with_capacity(5 * expected_count / 4);

    let mut prev: SeriesRef = 0;
    while postings.advance() {
        let v = postings.current();
        if v < prev {
            return Err(CodecError::OutOfOrder {
                current: v,
                previous: prev,
            });
        }

        write_uvarint(v - prev, &mut buf);
        prev = v;
    }
    if let Some(err) = postings.last_error() {
        return Err(err.clone());
    }

    Ok(buf)
}

/// Encodes `postings` with [`diff_varint_encode`] and wraps the result into
/// a snappy block prefixed with [`CODEC_HEADER_SNAPPY`].
pub fn diff_varint_snappy_encode<P: Postings + ?Sized>(
    postings: &mut P,
    expected_count: usize,
) -> Result<Vec<u8>> {
    let raw = diff_varint_encode(postings, expected_count)?;

    let header_len = CODEC_HEADER_SNAPPY.len();
    let mut block = vec![0; header_len + snap::raw::max_compress_len(raw.len())];
    block[..header_len].copy_from_slice(CODEC_HEADER_SNAPPY);

    let compressed_len = snap::raw::Encoder::new()
        .compress(&raw, &mut block[header_len..])
        .map_err(|err| CodecError::Compress {
            description: err.to_string(),
        })?;
    block.truncate(header_len + compressed_len);

    Ok(block)
}
