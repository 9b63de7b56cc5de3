//! Bounds-checked slice access shared by the primitive codecs.

use crate::error::{Error, Result};

/// Returns the `n`-byte slice of `data` starting at `offset`, failing with
/// [`Error::TruncatedBuffer`] if fewer than `n` bytes remain.
pub(crate) fn take(data: &[u8], offset: usize, n: usize) -> Result<&[u8]> {
    let end = offset.checked_add(n).ok_or(Error::TruncatedBuffer {
        needed: n,
        available: data.len().saturating_sub(offset),
    })?;
    data.get(offset..end)
        .ok_or_else(|| Error::truncated(n, data.len().saturating_sub(offset)))
}

/// Returns the single byte at `offset`, failing with
/// [`Error::TruncatedBuffer`] if the buffer is exhausted.
pub(crate) fn byte_at(data: &[u8], offset: usize) -> Result<u8> {
    data.get(offset)
        .copied()
        .ok_or_else(|| Error::truncated(1, data.len().saturating_sub(offset)))
}
