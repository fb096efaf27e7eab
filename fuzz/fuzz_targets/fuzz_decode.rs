#![no_main]

use libfuzzer_sys::fuzz_target;
use postings_codec::{diff_varint_snappy_decode, DecodeBufferPool, Postings as _};

fuzz_target!(|data: &[u8]| {
    let pool = DecodeBufferPool::new();

    // Arbitrary input must either be rejected or decode cleanly; it must
    // never panic.
    if let Ok(mut postings) = diff_varint_snappy_decode(data, &pool) {
        let mut prev = 0;
        while postings.advance() {
            assert!(postings.current() >= prev);
            prev = postings.current();
        }
        postings.close();
    }
});
