//! `STRING` (§4.1.4): `BYTES` semantics wrapped around a text encoding.
//!
//! Only UTF-8 is implemented — the reference library's `encoding` option
//! covers arbitrary codecs, but this catalog's caller-visible contract is
//! limited to the one encoding every Rust `String` already guarantees.

use super::bytes::{pack_bytes, unpack_bytes, BytesOptions};
use crate::error::{Error, Result};

pub(crate) fn pack_string(out: &mut Vec<u8>, value: &str, options: &BytesOptions) -> Result<()> {
    pack_bytes(out, value.as_bytes(), options)
}

pub(crate) fn unpack_string(
    data: &[u8],
    offset: usize,
    options: &BytesOptions,
) -> Result<(usize, String)> {
    let (pointer, bytes) = unpack_bytes(data, offset, options)?;
    let text = String::from_utf8(bytes).map_err(|_| Error::InvalidUtf8)?;
    Ok((pointer, text))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_form_round_trips() {
        let options = BytesOptions::default();
        let mut out = Vec::new();
        pack_string(&mut out, "hello", &options).unwrap();
        assert_eq!(unpack_string(&out, 0, &options).unwrap(), (out.len(), "hello".to_string()));
    }

    #[test]
    fn fixed_form_pads_with_spaces_by_default() {
        let options = BytesOptions {
            fixed: Some((6, Some(b' '))),
        };
        let mut out = Vec::new();
        pack_string(&mut out, "abcdef", &options).unwrap();
        assert_eq!(out, b"abcdef");
    }

    #[test]
    fn rejects_invalid_utf8() {
        let options = BytesOptions::default();
        let bytes = vec![0x02, 0xff, 0xfe];
        assert!(unpack_string(&bytes, 0, &options).is_err());
    }
}
