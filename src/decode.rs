use crate::error::{CodecError, Result};
use crate::pool::{DecodeBufferPool, PooledBufferHandle};
use crate::postings::Postings;
use crate::varint::read_uvarint;
use crate::{CODEC_HEADER_SNAPPY, SeriesRef};

/// Decodes a diff + varint + snappy block into a lazy postings cursor.
///
/// The decompression buffer is drawn from `pool` and handed back when the
/// cursor is closed or dropped. `input` only needs to outlive this call;
/// the cursor does not borrow it.
pub fn diff_varint_snappy_decode<'a>(
    input: &[u8],
    pool: &'a DecodeBufferPool,
) -> Result<DiffVarintPostings<'a>> {
    if !input.starts_with(CODEC_HEADER_SNAPPY) {
        return Err(CodecError::HeaderMismatch);
    }
    let payload = &input[CODEC_HEADER_SNAPPY.len()..];

    let raw_len = snap::raw::decompress_len(payload).map_err(|err| CodecError::Decompress {
        description: err.to_string(),
    })?;

    let mut handle = pool.get();
    handle.buf.resize(raw_len, 0);
    let decoded_len = snap::raw::Decoder::new()
        .decompress(payload, &mut handle.buf)
        .map_err(|err| CodecError::Decompress {
            description: err.to_string(),
        })?;
    handle.buf.truncate(decoded_len);

    Ok(DiffVarintPostings::new(DecodeBuf::Pooled(handle)))
}

/// Backing bytes of a cursor, tagged by who owns them.
#[derive(Debug)]
enum DecodeBuf<'a> {
    /// Checked out of a [`DecodeBufferPool`], released on drop.
    Pooled(PooledBufferHandle<'a>),
    /// Caller owned bytes; nothing to release.
    Borrowed(&'a [u8]),
}

impl DecodeBuf<'_> {
    #[inline]
    fn bytes(&self) -> &[u8] {
        match self {
            DecodeBuf::Pooled(handle) => &handle.buf,
            DecodeBuf::Borrowed(bytes) => bytes,
        }
    }
}

#[derive(Debug)]
enum State {
    Ready,
    Exhausted,
    Errored(CodecError),
}

/// Lazy cursor over a delta + varint encoded postings buffer.
///
/// Decoding happens one entry per [`Postings::advance`] call. A malformed
/// buffer moves the cursor into a sticky error state instead of yielding
/// wrong values; see [`Postings::last_error`].
#[derive(Debug)]
pub struct DiffVarintPostings<'a> {
    buf: DecodeBuf<'a>,
    pos: usize,
    cur: SeriesRef,
    state: State,
}

impl<'a> DiffVarintPostings<'a> {
    fn new(buf: DecodeBuf<'a>) -> Self {
        Self {
            buf,
            pos: 0,
            cur: 0,
            state: State::Ready,
        }
    }

    /// Cursor over a header-less buffer produced by
    /// [`diff_varint_encode`](crate::diff_varint_encode), borrowing the
    /// caller's bytes instead of a pooled buffer.
    pub fn from_raw(data: &'a [u8]) -> Self {
        Self::new(DecodeBuf::Borrowed(data))
    }

    /// Releases the decode buffer back to its pool.
    ///
    /// Dropping the cursor has the same effect.
    pub fn close(self) {}
}

impl Postings for DiffVarintPostings<'_> {
    fn advance(&mut self) -> bool {
        if !matches!(self.state, State::Ready) {
            return false;
        }
        let bytes = self.buf.bytes();
        if self.pos >= bytes.len() {
            self.state = State::Exhausted;
            return false;
        }

        let Some((delta, read)) = read_uvarint(&bytes[self.pos..]) else {
            self.state = State::Errored(CodecError::MalformedVarint { offset: self.pos });
            return false;
        };
        let Some(next) = self.cur.checked_add(delta) else {
            self.state = State::Errored(CodecError::Overflow { offset: self.pos });
            return false;
        };

        self.pos += read;
        self.cur = next;
        true
    }

    #[inline]
    fn current(&self) -> SeriesRef {
        self.cur
    }

    fn last_error(&self) -> Option<&CodecError> {
        match &self.state {
            State::Errored(err) => Some(err),
            State::Ready | State::Exhausted => None,
        }
    }
}
