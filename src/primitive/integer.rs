//! Fixed-width two's-complement integer codecs, big-endian throughout.

use super::util::take;
use crate::error::Result;

macro_rules! fixed_int_codec {
    ($pack:ident, $unpack:ident, $ty:ty, $width:expr) => {
        pub(crate) fn $pack(out: &mut Vec<u8>, value: $ty) {
            out.extend_from_slice(&value.to_be_bytes());
        }

        pub(crate) fn $unpack(data: &[u8], offset: usize) -> Result<(usize, $ty)> {
            let slice = take(data, offset, $width)?;
            let mut buf = [0u8; $width];
            buf.copy_from_slice(slice);
            Ok((offset + $width, <$ty>::from_be_bytes(buf)))
        }
    };
}

fixed_int_codec!(pack_sint8, unpack_sint8, i8, 1);
fixed_int_codec!(pack_uint8, unpack_uint8, u8, 1);
fixed_int_codec!(pack_sint16, unpack_sint16, i16, 2);
fixed_int_codec!(pack_uint16, unpack_uint16, u16, 2);
fixed_int_codec!(pack_sint32, unpack_sint32, i32, 4);
fixed_int_codec!(pack_uint32, unpack_uint32, u32, 4);
fixed_int_codec!(pack_sint64, unpack_sint64, i64, 8);
fixed_int_codec!(pack_uint64, unpack_uint64, u64, 8);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint16_round_trips_the_seed_scenario() {
        let mut out = Vec::new();
        pack_uint16(&mut out, 258);
        assert_eq!(out, vec![0x01, 0x02]);
        assert_eq!(unpack_uint16(&out, 0).unwrap(), (2, 258));
    }

    #[test]
    fn sint8_preserves_sign() {
        let mut out = Vec::new();
        pack_sint8(&mut out, -5);
        assert_eq!(out, vec![0xfb]);
        assert_eq!(unpack_sint8(&out, 0).unwrap(), (1, -5));
    }

    #[test]
    fn unpack_fails_on_truncated_buffer() {
        assert!(unpack_uint32(&[0, 1], 0).is_err());
    }
}
