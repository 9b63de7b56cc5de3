//! IEEE-754 binary32/binary64 codecs.

use super::util::take;
use crate::error::Result;

pub(crate) fn pack_float(out: &mut Vec<u8>, value: f32) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub(crate) fn unpack_float(data: &[u8], offset: usize) -> Result<(usize, f32)> {
    let slice = take(data, offset, 4)?;
    let mut buf = [0u8; 4];
    buf.copy_from_slice(slice);
    Ok((offset + 4, f32::from_be_bytes(buf)))
}

pub(crate) fn pack_double(out: &mut Vec<u8>, value: f64) {
    out.extend_from_slice(&value.to_be_bytes());
}

pub(crate) fn unpack_double(data: &[u8], offset: usize) -> Result<(usize, f64)> {
    let slice = take(data, offset, 8)?;
    let mut buf = [0u8; 8];
    buf.copy_from_slice(slice);
    Ok((offset + 8, f64::from_be_bytes(buf)))
}
