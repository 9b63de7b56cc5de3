//! `BYTES` (§4.1.4): a `SIZE`-prefixed variable form, or a fixed-width
//! padded/truncated-on-encode form.

use super::size::{pack_size, unpack_size};
use super::util::take;
use crate::error::{Error, Result};

/// `None` selects the variable, `SIZE`-prefixed form. `Some((width, fill))`
/// selects the fixed form; `fill = None` means "no padding, fail on
/// underrun".
#[derive(Default)]
pub(crate) struct BytesOptions {
    pub(crate) fixed: Option<(usize, Option<u8>)>,
}

pub(crate) fn pack_bytes(out: &mut Vec<u8>, value: &[u8], options: &BytesOptions) -> Result<()> {
    match options.fixed {
        None => {
            pack_size(out, value.len() as u128)?;
            out.extend_from_slice(value);
        }
        Some((width, fill)) => {
            if value.len() > width {
                return Err(Error::LengthExceeded);
            }
            let missing = width - value.len();
            if missing > 0 && fill.is_none() {
                return Err(Error::LengthUnderrun);
            }
            out.extend_from_slice(value);
            if let Some(fill) = fill {
                out.extend(std::iter::repeat(fill).take(missing));
            }
        }
    }
    Ok(())
}

pub(crate) fn unpack_bytes(
    data: &[u8],
    offset: usize,
    options: &BytesOptions,
) -> Result<(usize, Vec<u8>)> {
    match options.fixed {
        None => {
            let (pointer, len) = unpack_size(data, offset)?;
            let slice = take(data, pointer, len as usize)?;
            Ok((pointer + len as usize, slice.to_vec()))
        }
        Some((width, _)) => {
            let slice = take(data, offset, width)?;
            Ok((offset + width, slice.to_vec()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variable_form_round_trips() {
        let options = BytesOptions::default();
        let mut out = Vec::new();
        pack_bytes(&mut out, b"hello", &options).unwrap();
        assert_eq!(out, vec![0x05, b'h', b'e', b'l', b'l', b'o']);
        assert_eq!(
            unpack_bytes(&out, 0, &options).unwrap(),
            (out.len(), b"hello".to_vec())
        );
    }

    #[test]
    fn fixed_form_pads_with_fill() {
        let options = BytesOptions {
            fixed: Some((6, Some(0x00))),
        };
        let mut out = Vec::new();
        pack_bytes(&mut out, b"abcdef", &options).unwrap();
        assert_eq!(out, b"abcdef");
        assert_eq!(
            unpack_bytes(&out, 0, &options).unwrap(),
            (6, b"abcdef".to_vec())
        );
    }

    #[test]
    fn fixed_form_rejects_overlong_values() {
        let options = BytesOptions {
            fixed: Some((3, Some(0))),
        };
        assert!(pack_bytes(&mut Vec::new(), b"abcd", &options).is_err());
    }

    #[test]
    fn fixed_form_without_fill_rejects_underrun() {
        let options = BytesOptions { fixed: Some((6, None)) };
        assert!(pack_bytes(&mut Vec::new(), b"abc", &options).is_err());
    }
}
