//! RFC 4122 `UUID`: 16 raw bytes, no byte-order reinterpretation.

use super::util::take;
use crate::error::Result;
use uuid::Uuid;

pub(crate) fn pack_uuid(out: &mut Vec<u8>, value: Uuid) {
    out.extend_from_slice(value.as_bytes());
}

pub(crate) fn unpack_uuid(data: &[u8], offset: usize) -> Result<(usize, Uuid)> {
    let slice = take(data, offset, 16)?;
    let mut buf = [0u8; 16];
    buf.copy_from_slice(slice);
    Ok((offset + 16, Uuid::from_bytes(buf)))
}
