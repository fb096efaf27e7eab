use parking_lot::Mutex;

/// Max buffers retained for reuse; buffers released beyond this are dropped.
const POOL_KEEP_LIMIT: usize = 16;

/// Pool of reusable decompression buffers shared between decode calls.
///
/// Decoding checks a buffer out with [`DecodeBufferPool::get`]; the returned
/// handle hands the buffer back when dropped, so distinct in-flight cursors
/// always hold distinct buffers. Buffers allocated on a pool miss are donated
/// to the pool on release.
#[derive(Debug, Default)]
pub struct DecodeBufferPool {
    pool: Mutex<Vec<Vec<u8>>>,
}

impl DecodeBufferPool {
    pub fn new() -> Self {
        Self::default()
    }

    /// Checks a buffer out of the pool, allocating a fresh one when the
    /// free list is empty.
    pub fn get(&self) -> PooledBufferHandle<'_> {
        let buf = match self.pool.lock().pop() {
            Some(buf) => buf,
            None => {
                log::trace!("Decode buffer pool empty, allocating a fresh buffer");
                Vec::new()
            }
        };
        PooledBufferHandle { buf, pool: self }
    }

    /// Number of buffers currently available for checkout.
    pub fn size(&self) -> usize {
        self.pool.lock().len()
    }

    fn return_back(&self, buf: Vec<u8>) {
        let mut pool = self.pool.lock();
        if pool.len() < POOL_KEEP_LIMIT {
            pool.push(buf);
        }
    }
}

/// Exclusive checkout of one pool buffer; returns the buffer on drop.
#[derive(Debug)]
pub struct PooledBufferHandle<'a> {
    pub buf: Vec<u8>,
    pool: &'a DecodeBufferPool,
}

impl Drop for PooledBufferHandle<'_> {
    fn drop(&mut self) {
        self.pool.return_back(std::mem::take(&mut self.buf));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_get_reuses_released_buffers() {
        let pool = DecodeBufferPool::new();
        assert_eq!(pool.size(), 0);

        {
            let mut handle = pool.get();
            handle.buf.extend_from_slice(b"scratch");
            assert_eq!(pool.size(), 0);
        }
        assert_eq!(pool.size(), 1);

        let handle = pool.get();
        assert_eq!(pool.size(), 0);
        // Reused buffers keep their capacity, contents are overwritten by
        // the next decode.
        assert!(handle.buf.capacity() >= 7);
    }

    #[test]
    fn test_keep_limit_bounds_free_list() {
        let pool = DecodeBufferPool::new();

        let handles: Vec<_> = (0..POOL_KEEP_LIMIT + 5).map(|_| pool.get()).collect();
        assert_eq!(pool.size(), 0);
        drop(handles);

        assert_eq!(pool.size(), POOL_KEEP_LIMIT);
    }
}
