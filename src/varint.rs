/// Appends `value` to `output` as an unsigned LEB128 varint.
#[inline]
pub fn write_uvarint(mut value: u64, output: &mut Vec<u8>) {
    while value >= 0x80 {
        output.push(value as u8 | 0x80);
        value >>= 7;
    }
    output.push(value as u8);
}

/// Reads an unsigned LEB128 varint from the start of `input`.
///
/// Returns the value and the number of bytes consumed, or `None` when the
/// input is truncated or the encoding does not fit into 64 bits.
#[inline]
pub fn read_uvarint(input: &[u8]) -> Option<(u64, usize)> {
    let mut value = 0u64;
    let mut shift = 0u32;
    for (i, &byte) in input.iter().enumerate() {
        // The tenth byte may only carry the single remaining bit.
        if shift == 63 && byte > 1 {
            return None;
        }
        value |= u64::from(byte & 0x7f) << shift;
        if byte < 0x80 {
            return Some((value, i + 1));
        }
        shift += 7;
    }
    None
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::{Rng as _, SeedableRng as _};

    use super::*;

    #[test]
    fn test_write_read_random() {
        let mut rng = StdRng::seed_from_u64(42);

        let mut buf = Vec::new();
        for _ in 0..10_000 {
            let value = rng.gen::<u64>() >> rng.gen_range(0..64);
            buf.clear();
            write_uvarint(value, &mut buf);
            assert_eq!(read_uvarint(&buf), Some((value, buf.len())));
        }
    }

    #[test]
    fn test_boundaries() {
        for (value, encoded_len) in [
            (0u64, 1),
            (0x7f, 1),
            (0x80, 2),
            (0x3fff, 2),
            (0x4000, 3),
            (u64::MAX, 10),
        ] {
            let mut buf = Vec::new();
            write_uvarint(value, &mut buf);
            assert_eq!(buf.len(), encoded_len);
            assert_eq!(read_uvarint(&buf), Some((value, encoded_len)));
        }
    }

    #[test]
    fn test_truncated() {
        assert_eq!(read_uvarint(&[]), None);

        let mut buf = Vec::new();
        write_uvarint(u64::MAX, &mut buf);
        for len in 0..buf.len() {
            assert_eq!(read_uvarint(&buf[..len]), None);
        }
    }

    #[test]
    fn test_overflow() {
        // Eleven continuation bytes can never terminate within 64 bits.
        assert_eq!(read_uvarint(&[0x80; 11]), None);
        // Ten byte encoding whose final byte spills past bit 63.
        let buf = [0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0x02];
        assert_eq!(read_uvarint(&buf), None);
    }

    #[test]
    fn test_reads_only_one_value() {
        let mut buf = Vec::new();
        write_uvarint(300, &mut buf);
        let first_len = buf.len();
        write_uvarint(7, &mut buf);

        assert_eq!(read_uvarint(&buf), Some((300, first_len)));
        assert_eq!(read_uvarint(&buf[first_len..]), Some((7, 1)));
    }
}
