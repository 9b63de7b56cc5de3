//! The narrow contract shared by primitives, enums, and structures.

use crate::error::Result;
use crate::value::Value;

/// A wire-format type: something that can pack a [`Value`] into bytes and
/// unpack bytes back into a [`Value`].
///
/// Implementations realize `pack` as option (b) from the design notes: a
/// writer that appends fragments to a caller-owned buffer, rather than
/// building and concatenating a separate sequence of slices. `unpack` reads
/// the minimum bytes required starting at `offset` and returns the first
/// unread position alongside the decoded value.
pub trait Kind {
    /// Diagnostic name, also used for structure introspection.
    fn name(&self) -> &str;

    /// Fixed wire size in bytes, or `None` if the encoding is variable-length.
    fn size(&self) -> Option<usize>;

    /// Appends the wire encoding of `value` to `out`.
    fn pack(&self, value: &Value, out: &mut Vec<u8>) -> Result<()>;

    /// Reads a value starting at `offset`, returning the offset of the first
    /// unread byte alongside the decoded value.
    fn unpack(&self, data: &[u8], offset: usize) -> Result<(usize, Value)>;
}

/// Convenience wrapper that allocates a fresh buffer for a single `pack`.
pub fn encode<K: Kind + ?Sized>(kind: &K, value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::with_capacity(kind.size().unwrap_or(16));
    kind.pack(value, &mut out)?;
    Ok(out)
}

/// Convenience wrapper that unpacks starting at offset `0` and discards the
/// trailing offset.
pub fn decode<K: Kind + ?Sized>(kind: &K, data: &[u8]) -> Result<Value> {
    let (_, value) = kind.unpack(data, 0)?;
    Ok(value)
}
