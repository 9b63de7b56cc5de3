//! `BOOLEAN`: `0x01`/`0x00` on encode; any non-zero byte decodes to `true`.

use super::util::byte_at;
use crate::error::Result;

pub(crate) fn pack_boolean(out: &mut Vec<u8>, value: bool) {
    out.push(if value { 0x01 } else { 0x00 });
}

pub(crate) fn unpack_boolean(data: &[u8], offset: usize) -> Result<(usize, bool)> {
    Ok((offset + 1, byte_at(data, offset)? != 0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_seed_scenario() {
        let mut out = Vec::new();
        pack_boolean(&mut out, true);
        assert_eq!(out, vec![0x01]);
        pack_boolean(&mut out, false);
        assert_eq!(out[1], 0x00);
    }

    #[test]
    fn any_nonzero_byte_decodes_true() {
        assert_eq!(unpack_boolean(&[0xff], 0).unwrap(), (1, true));
    }
}
