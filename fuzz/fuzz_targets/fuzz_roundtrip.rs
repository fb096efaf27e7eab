#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use postings_codec::{
    diff_varint_snappy_decode, diff_varint_snappy_encode, DecodeBufferPool, ListPostings,
    Postings as _,
};

#[derive(Arbitrary, Debug)]
struct Ctx {
    deltas: Vec<u32>,
    seek_stride: u8,
}

fuzz_target!(|ctx: Ctx| {
    let mut cur = 0u64;
    let mut refs = Vec::with_capacity(ctx.deltas.len());
    for delta in &ctx.deltas {
        cur += u64::from(*delta);
        refs.push(cur);
    }

    let block = diff_varint_snappy_encode(&mut ListPostings::new(&refs), refs.len()).unwrap();

    let pool = DecodeBufferPool::new();
    let mut postings = diff_varint_snappy_decode(&block, &pool).unwrap();
    for &expected in &refs {
        assert!(postings.advance());
        assert_eq!(postings.current(), expected);
    }
    assert!(!postings.advance());
    assert!(postings.last_error().is_none());
    postings.close();

    // Seeking must agree with a linear scan.
    let mut postings = diff_varint_snappy_decode(&block, &pool).unwrap();
    let stride = u64::from(ctx.seek_stride) + 1;
    let mut target = 0u64;
    loop {
        target = target.saturating_add(stride);
        if !postings.seek_to(target) {
            break;
        }
        let expected = refs.iter().copied().find(|&r| r >= target).unwrap();
        assert_eq!(postings.current(), expected);
    }
});
