//! `IPV4`/`IPV6`: raw network-order octets, no textual form.

use super::util::take;
use crate::error::Result;
use std::net::{Ipv4Addr, Ipv6Addr};

pub(crate) fn pack_ipv4(out: &mut Vec<u8>, value: Ipv4Addr) {
    out.extend_from_slice(&value.octets());
}

pub(crate) fn unpack_ipv4(data: &[u8], offset: usize) -> Result<(usize, Ipv4Addr)> {
    let slice = take(data, offset, 4)?;
    let mut buf = [0u8; 4];
    buf.copy_from_slice(slice);
    Ok((offset + 4, Ipv4Addr::from(buf)))
}

pub(crate) fn pack_ipv6(out: &mut Vec<u8>, value: Ipv6Addr) {
    out.extend_from_slice(&value.octets());
}

pub(crate) fn unpack_ipv6(data: &[u8], offset: usize) -> Result<(usize, Ipv6Addr)> {
    let slice = take(data, offset, 16)?;
    let mut buf = [0u8; 16];
    buf.copy_from_slice(slice);
    Ok((offset + 16, Ipv6Addr::from(buf)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ipv4_round_trips() {
        let value = Ipv4Addr::new(192, 0, 2, 1);
        let mut out = Vec::new();
        pack_ipv4(&mut out, value);
        assert_eq!(out, vec![192, 0, 2, 1]);
        assert_eq!(unpack_ipv4(&out, 0).unwrap(), (4, value));
    }

    #[test]
    fn ipv6_reads_all_sixteen_bytes() {
        let value = Ipv6Addr::new(0x2001, 0xdb8, 0, 0, 0, 0, 0, 1);
        let mut out = Vec::new();
        pack_ipv6(&mut out, value);
        assert_eq!(out.len(), 16);
        assert_eq!(unpack_ipv6(&out, 0).unwrap(), (16, value));
    }
}
