//! Encoder for the self-describing codec (§4.5/§6.2): dispatches on a
//! [`Value`]'s runtime variant and emits a one-byte constructor followed by
//! its payload.

use super::constructor::*;
use crate::error::{Error, Result};
use crate::primitive::decimal;
use crate::value::Value;

/// Encodes `value` into a fresh buffer.
pub fn encode(value: &Value) -> Result<Vec<u8>> {
    let mut out = Vec::new();
    pack(value, &mut out)?;
    Ok(out)
}

/// Appends `value`'s dynamic encoding to `out`.
pub fn pack(value: &Value, out: &mut Vec<u8>) -> Result<()> {
    match value {
        Value::Null => {
            out.push(NULL);
            Ok(())
        }
        Value::Bool(b) => {
            out.push(if *b { TRUE } else { FALSE });
            Ok(())
        }
        Value::Int(i) if *i < 0 => {
            pack_magnitude(out, i.unsigned_abs(), SMALL_NEGINT_BASE, &NEGINT_TAGS);
            Ok(())
        }
        Value::Int(i) => {
            pack_magnitude(out, *i as u64, SMALL_UINT_BASE, &UINT_TAGS);
            Ok(())
        }
        Value::UInt(u) => {
            pack_magnitude(out, *u, SMALL_UINT_BASE, &UINT_TAGS);
            Ok(())
        }
        Value::Double(d) => {
            out.push(DOUBLE);
            out.extend_from_slice(&d.into_inner().to_be_bytes());
            Ok(())
        }
        Value::Decimal(value) => {
            // The original encoder always widens to 128 bits regardless of
            // the decimal's natural precision.
            out.push(DECIMAL128);
            decimal::pack_decimal128(out, value)
        }
        Value::Str(s) => {
            pack_length_prefixed(out, SHORT_STRING_BASE, &LONG_STRING_TAGS, s.as_bytes());
            Ok(())
        }
        Value::Bytes(b) => {
            pack_length_prefixed(out, SHORT_BYTES_BASE, &LONG_BYTES_TAGS, b);
            Ok(())
        }
        Value::Uuid(u) => {
            out.push(UUID);
            out.extend_from_slice(u.as_bytes());
            Ok(())
        }
        Value::Ipv4(a) => {
            out.push(IPV4);
            out.extend_from_slice(&a.octets());
            Ok(())
        }
        Value::Ipv6(a) => {
            out.push(IPV6);
            out.extend_from_slice(&a.octets());
            Ok(())
        }
        Value::Date(_) | Value::Time(_) => Err(Error::InvalidValue(value.kind_name())),
        Value::Seq(items) => {
            let length = items.len();
            if length < COMPACT_LIMIT {
                out.push(SHORT_SEQ_BASE | length as u8);
            } else {
                out.push(INDEFINITE_SEQ);
            }
            for item in items {
                pack(item, out)?;
            }
            if length >= COMPACT_LIMIT {
                out.push(END);
            }
            Ok(())
        }
        Value::Map(pairs) => {
            let length = pairs.len();
            if length < COMPACT_LIMIT {
                out.push(SHORT_MAP_BASE | length as u8);
            } else {
                out.push(INDEFINITE_MAP);
            }
            for (key, value) in pairs {
                pack(key, out)?;
                pack(value, out)?;
            }
            if length >= COMPACT_LIMIT {
                out.push(END);
            }
            Ok(())
        }
    }
}

const UINT_TAGS: [u8; 4] = [UINT8, UINT16, UINT32, UINT64];
const NEGINT_TAGS: [u8; 4] = [NEG_UINT8, NEG_UINT16, NEG_UINT32, NEG_UINT64];

/// Encodes a non-negative magnitude using the compact form below 32 and the
/// narrowest fixed-width extended form otherwise. `small_base` is ORed with
/// the magnitude itself for the compact form (so it also serves negative
/// magnitudes, whose sign is carried by the base, not the value).
fn pack_magnitude(out: &mut Vec<u8>, magnitude: u64, small_base: u8, tags: &[u8; 4]) {
    if magnitude < COMPACT_LIMIT as u64 {
        out.push(small_base | magnitude as u8);
    } else if magnitude < 1 << 8 {
        out.push(tags[0]);
        out.push(magnitude as u8);
    } else if magnitude < 1 << 16 {
        out.push(tags[1]);
        out.extend_from_slice(&(magnitude as u16).to_be_bytes());
    } else if magnitude < 1 << 32 {
        out.push(tags[2]);
        out.extend_from_slice(&(magnitude as u32).to_be_bytes());
    } else {
        out.push(tags[3]);
        out.extend_from_slice(&magnitude.to_be_bytes());
    }
}

fn pack_length_prefixed(out: &mut Vec<u8>, short_base: u8, long_tags: &[u8; 4], bytes: &[u8]) {
    let length = bytes.len();
    if length < COMPACT_LIMIT {
        out.push(short_base | length as u8);
    } else if length < 1 << 8 {
        out.push(long_tags[0]);
        out.push(length as u8);
    } else if length < 1 << 16 {
        out.push(long_tags[1]);
        out.extend_from_slice(&(length as u16).to_be_bytes());
    } else if length < 1usize << 32 {
        out.push(long_tags[2]);
        out.extend_from_slice(&(length as u32).to_be_bytes());
    } else {
        out.push(long_tags[3]);
        out.extend_from_slice(&(length as u64).to_be_bytes());
    }
    out.extend_from_slice(bytes);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_the_seed_scenario() {
        let mut map = indexmap::IndexMap::new();
        map.insert(Value::from("compact"), Value::Bool(true));
        map.insert(Value::from("schema"), Value::UInt(0));
        let bytes = encode(&Value::Map(map)).unwrap();
        assert_eq!(bytes[0], 0xA2);
        assert_eq!(bytes[1], 0x47);
        assert_eq!(&bytes[2..9], b"compact");
        assert_eq!(bytes[9], 0xCD);
        assert_eq!(bytes[10], 0x46);
        assert_eq!(&bytes[11..17], b"schema");
        assert_eq!(bytes[17], 0x00);
    }

    #[test]
    fn small_nonneg_int_is_compact() {
        let bytes = encode(&Value::UInt(5)).unwrap();
        assert_eq!(bytes, vec![0x05]);
    }

    #[test]
    fn negative_int_uses_the_negint_group() {
        let bytes = encode(&Value::Int(-5)).unwrap();
        assert_eq!(bytes, vec![0x25]);
    }

    #[test]
    fn long_sequence_uses_indefinite_form() {
        let items: Vec<Value> = (0..40).map(Value::UInt).collect();
        let bytes = encode(&Value::Seq(items)).unwrap();
        assert_eq!(bytes[0], INDEFINITE_SEQ);
        assert_eq!(*bytes.last().unwrap(), END);
    }

    #[test]
    fn decimal_always_widens_to_128_bits() {
        let value = crate::primitive::decimal::Decimal::from_parts(false, 5, 0);
        let bytes = encode(&Value::Decimal(value)).unwrap();
        assert_eq!(bytes[0], DECIMAL128);
        assert_eq!(bytes.len(), 1 + 16);
    }

    #[test]
    fn ipv6_emits_all_sixteen_bytes() {
        let addr: std::net::Ipv6Addr = "::1".parse().unwrap();
        let bytes = encode(&Value::Ipv6(addr)).unwrap();
        assert_eq!(bytes.len(), 1 + 16);
    }
}
