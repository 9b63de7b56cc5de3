//! Tiered size prefix (`SIZE`, §4.1.2): five frames sized 1/2/3/5/9 bytes,
//! chosen by the smallest range that contains the value.
//!
//! Each frame's base equals the previous frame's ceiling, so the payload
//! width is derived from the tier boundaries rather than copied from the
//! spec's prose (which undercounts the last two tiers by a couple of bits
//! relative to the actual ranges and the reference implementation).

use super::util::{byte_at, take};
use crate::error::{Error, Result};

const TIER1_LIMIT: u128 = 128;
const TIER2_LIMIT: u128 = 8_320;
const TIER3_LIMIT: u128 = 2_105_472;
const TIER4_LIMIT: u128 = 137_441_058_944;
const TIER5_LIMIT: u128 = 590_295_810_496_146_710_656;

const TIER2_BITS: u32 = 13; // TIER2_LIMIT - TIER1_LIMIT == 2^13
const TIER3_BITS: u32 = 21; // TIER3_LIMIT - TIER2_LIMIT == 2^21
const TIER4_BITS: u32 = 37; // TIER4_LIMIT - TIER3_LIMIT == 2^37
const TIER5_BITS: u32 = 69; // TIER5_LIMIT - TIER4_LIMIT == 2^69

pub(crate) fn pack_size(out: &mut Vec<u8>, size: u128) -> Result<()> {
    if size < TIER1_LIMIT {
        out.push(size as u8);
    } else if size < TIER2_LIMIT {
        let payload: u16 = (0b100 << 13) | (size - TIER1_LIMIT) as u16;
        out.extend_from_slice(&payload.to_be_bytes());
    } else if size < TIER3_LIMIT {
        let payload: u32 = (0b101 << 21) | (size - TIER2_LIMIT) as u32;
        out.extend_from_slice(&payload.to_be_bytes()[1..]);
    } else if size < TIER4_LIMIT {
        let payload: u64 = (0b110u64 << 37) | (size - TIER3_LIMIT) as u64;
        out.extend_from_slice(&payload.to_be_bytes()[3..]);
    } else if size < TIER5_LIMIT {
        let payload: u128 = (0b111u128 << 69) | (size - TIER4_LIMIT);
        out.extend_from_slice(&payload.to_be_bytes()[7..]);
    } else {
        return Err(Error::out_of_range(
            "SIZE",
            format!("{size} is at or beyond the maximum representable size {TIER5_LIMIT}"),
        ));
    }
    Ok(())
}

pub(crate) fn unpack_size(data: &[u8], offset: usize) -> Result<(usize, u128)> {
    let first = byte_at(data, offset)?;
    if first >> 7 == 0 {
        return Ok((offset + 1, first as u128));
    }
    match (first >> 5) & 0b11 {
        0b00 => {
            let slice = take(data, offset, 2)?;
            let raw = u16::from_be_bytes([slice[0], slice[1]]) as u128;
            Ok((offset + 2, (raw & mask(TIER2_BITS)) + TIER1_LIMIT))
        }
        0b01 => {
            let slice = take(data, offset, 3)?;
            let raw = u32::from_be_bytes([0, slice[0], slice[1], slice[2]]) as u128;
            Ok((offset + 3, (raw & mask(TIER3_BITS)) + TIER2_LIMIT))
        }
        0b10 => {
            let slice = take(data, offset, 5)?;
            let mut buf = [0u8; 8];
            buf[3..].copy_from_slice(slice);
            let raw = u64::from_be_bytes(buf) as u128;
            Ok((offset + 5, (raw & mask(TIER4_BITS)) + TIER3_LIMIT))
        }
        _ => {
            let slice = take(data, offset, 9)?;
            let mut buf = [0u8; 16];
            buf[7..].copy_from_slice(slice);
            let raw = u128::from_be_bytes(buf);
            Ok((offset + 9, (raw & mask(TIER5_BITS)) + TIER4_LIMIT))
        }
    }
}

fn mask(bits: u32) -> u128 {
    (1u128 << bits) - 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(n: u128) {
        let mut out = Vec::new();
        pack_size(&mut out, n).unwrap();
        assert_eq!(unpack_size(&out, 0).unwrap(), (out.len(), n));
    }

    #[test]
    fn matches_the_seed_scenarios() {
        let mut out = Vec::new();
        pack_size(&mut out, 0).unwrap();
        assert_eq!(out, vec![0x00]);

        let mut out = Vec::new();
        pack_size(&mut out, 127).unwrap();
        assert_eq!(out, vec![0x7f]);

        let mut out = Vec::new();
        pack_size(&mut out, 128).unwrap();
        assert_eq!(out, vec![0x80, 0x00]);

        let mut out = Vec::new();
        pack_size(&mut out, 8319).unwrap();
        assert_eq!(out, vec![0x9f, 0xff]);

        let mut out = Vec::new();
        pack_size(&mut out, 8320).unwrap();
        assert_eq!(out, vec![0xa0, 0x00, 0x00]);
    }

    #[test]
    fn round_trips_every_tier_boundary() {
        for n in [
            0,
            127,
            128,
            8319,
            8320,
            TIER3_LIMIT - 1,
            TIER3_LIMIT,
            TIER4_LIMIT - 1,
            TIER4_LIMIT,
            TIER4_LIMIT + 12345,
            TIER5_LIMIT - 1,
        ] {
            roundtrip(n);
        }
    }

    #[test]
    fn chooses_minimal_frame_width() {
        let mut out = Vec::new();
        pack_size(&mut out, 8319).unwrap();
        assert_eq!(out.len(), 2);
        let mut out = Vec::new();
        pack_size(&mut out, 8320).unwrap();
        assert_eq!(out.len(), 3);
    }

    #[test]
    fn rejects_sizes_past_the_top_tier() {
        assert!(pack_size(&mut Vec::new(), TIER5_LIMIT).is_err());
    }
}
