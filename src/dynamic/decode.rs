//! Decoder for the self-describing codec (§4.5/§6.2): reads a constructor
//! byte and dispatches via the tag table, recursing for sequences and maps.

use indexmap::IndexMap;

use super::constructor::*;
use crate::error::{Error, Result};
use crate::primitive::decimal;
use crate::primitive::util::{byte_at, take};
use crate::value::Value;

/// Decodes a single value starting at offset `0`, failing if any trailing
/// bytes remain unconsumed would be the caller's concern — this only
/// decodes the first value found.
pub fn decode(data: &[u8]) -> Result<Value> {
    let (_, value) = unpack(data, 0)?;
    Ok(value)
}

/// Reads one value starting at `offset`, returning the offset of the first
/// unread byte alongside the decoded value.
pub fn unpack(data: &[u8], offset: usize) -> Result<(usize, Value)> {
    let constructor = byte_at(data, offset)?;
    let pointer = offset + 1;
    match constructor >> 5 {
        0 => Ok((pointer, Value::UInt(constructor as u64))),
        1 => Ok((pointer, Value::Int(-((constructor & 0x1f) as i64)))), // magnitude < 32, never overflows
        2 => unpack_short_string(data, pointer, (constructor & 0x1f) as usize),
        3 => unpack_short_bytes(data, pointer, (constructor & 0x1f) as usize),
        4 => unpack_fixed_seq(data, pointer, (constructor & 0x1f) as usize),
        5 => unpack_fixed_map(data, pointer, (constructor & 0x1f) as usize),
        6 => unpack_extended(constructor, data, pointer),
        _ => Err(Error::InvalidConstructor(constructor)),
    }
}

fn unpack_short_string(data: &[u8], pointer: usize, length: usize) -> Result<(usize, Value)> {
    let slice = take(data, pointer, length)?;
    let s = std::str::from_utf8(slice)
        .map_err(|_| Error::InvalidUtf8)?
        .to_string();
    Ok((pointer + length, Value::Str(s)))
}

fn unpack_short_bytes(data: &[u8], pointer: usize, length: usize) -> Result<(usize, Value)> {
    let slice = take(data, pointer, length)?;
    Ok((pointer + length, Value::Bytes(slice.to_vec())))
}

fn unpack_fixed_seq(data: &[u8], mut pointer: usize, count: usize) -> Result<(usize, Value)> {
    let mut items = Vec::with_capacity(count);
    for _ in 0..count {
        let (next, item) = unpack(data, pointer)?;
        pointer = next;
        items.push(item);
    }
    Ok((pointer, Value::Seq(items)))
}

fn unpack_fixed_map(data: &[u8], mut pointer: usize, count: usize) -> Result<(usize, Value)> {
    let mut pairs = IndexMap::with_capacity(count);
    for _ in 0..count {
        let (next, key) = unpack(data, pointer)?;
        pointer = next;
        let (next, value) = unpack(data, pointer)?;
        pointer = next;
        pairs.insert(key, value);
    }
    Ok((pointer, Value::Map(pairs)))
}

fn unpack_indefinite_seq(data: &[u8], mut pointer: usize) -> Result<(usize, Value)> {
    let mut items = Vec::new();
    loop {
        if byte_at(data, pointer)? == END {
            pointer += 1;
            break;
        }
        let (next, item) = unpack(data, pointer)?;
        pointer = next;
        items.push(item);
    }
    Ok((pointer, Value::Seq(items)))
}

fn unpack_indefinite_map(data: &[u8], mut pointer: usize) -> Result<(usize, Value)> {
    let mut pairs = IndexMap::new();
    loop {
        if byte_at(data, pointer)? == END {
            pointer += 1;
            break;
        }
        let (next, key) = unpack(data, pointer)?;
        pointer = next;
        let (next, value) = unpack(data, pointer)?;
        pointer = next;
        pairs.insert(key, value);
    }
    Ok((pointer, Value::Map(pairs)))
}

/// Negates a magnitude read off the wire, correctly handling
/// `magnitude == 2^63` (the one negative `i64` with no positive
/// counterpart) instead of overflowing a plain `-(magnitude as i64)`.
fn negate_magnitude(magnitude: u64) -> i64 {
    if magnitude == 1u64 << 63 {
        i64::MIN
    } else {
        -(magnitude as i64)
    }
}

fn read_length(data: &[u8], pointer: usize, width: usize) -> Result<(usize, u64)> {
    let slice = take(data, pointer, width)?;
    let mut buf = [0u8; 8];
    buf[(8 - width)..].copy_from_slice(slice);
    Ok((pointer + width, u64::from_be_bytes(buf)))
}

fn unpack_extended(constructor: u8, data: &[u8], pointer: usize) -> Result<(usize, Value)> {
    match constructor {
        UINT8 => {
            let b = byte_at(data, pointer)?;
            Ok((pointer + 1, Value::UInt(b as u64)))
        }
        NEG_UINT8 => {
            let b = byte_at(data, pointer)?;
            Ok((pointer + 1, Value::Int(negate_magnitude(b as u64))))
        }
        UINT16 => {
            let (p, v) = read_length(data, pointer, 2)?;
            Ok((p, Value::UInt(v)))
        }
        NEG_UINT16 => {
            let (p, v) = read_length(data, pointer, 2)?;
            Ok((p, Value::Int(negate_magnitude(v))))
        }
        UINT32 => {
            let (p, v) = read_length(data, pointer, 4)?;
            Ok((p, Value::UInt(v)))
        }
        NEG_UINT32 => {
            let (p, v) = read_length(data, pointer, 4)?;
            Ok((p, Value::Int(negate_magnitude(v))))
        }
        UINT64 => {
            let (p, v) = read_length(data, pointer, 8)?;
            Ok((p, Value::UInt(v)))
        }
        NEG_UINT64 => {
            let (p, v) = read_length(data, pointer, 8)?;
            Ok((p, Value::Int(negate_magnitude(v))))
        }
        DOUBLE => {
            let slice = take(data, pointer, 8)?;
            let mut buf = [0u8; 8];
            buf.copy_from_slice(slice);
            Ok((pointer + 8, Value::from(f64::from_be_bytes(buf))))
        }
        DECIMAL32 => {
            let (p, v) = decimal::unpack_decimal32(data, pointer)?;
            Ok((p, Value::Decimal(v)))
        }
        DECIMAL64 => {
            let (p, v) = decimal::unpack_decimal64(data, pointer)?;
            Ok((p, Value::Decimal(v)))
        }
        DECIMAL128 => {
            let (p, v) = decimal::unpack_decimal128(data, pointer)?;
            Ok((p, Value::Decimal(v)))
        }
        TRUE => Ok((pointer, Value::Bool(true))),
        FALSE => Ok((pointer, Value::Bool(false))),
        NULL => Ok((pointer, Value::Null)),
        POS_VARINT => {
            let (p, v) = crate::primitive::varint::unpack_varint(data, pointer)?;
            Ok((p, Value::UInt(v)))
        }
        NEG_VARINT => {
            let (p, v) = crate::primitive::varint::unpack_varint(data, pointer)?;
            Ok((p, Value::Int(negate_magnitude(v))))
        }
        IPV4 => {
            let slice = take(data, pointer, 4)?;
            let addr = std::net::Ipv4Addr::new(slice[0], slice[1], slice[2], slice[3]);
            Ok((pointer + 4, Value::Ipv4(addr)))
        }
        // REDESIGN FLAG: the original reads only 8 bytes here; a full
        // 128-bit address requires all 16.
        IPV6 => {
            let slice = take(data, pointer, 16)?;
            let mut buf = [0u8; 16];
            buf.copy_from_slice(slice);
            Ok((pointer + 16, Value::Ipv6(std::net::Ipv6Addr::from(buf))))
        }
        UUID => {
            let slice = take(data, pointer, 16)?;
            let mut buf = [0u8; 16];
            buf.copy_from_slice(slice);
            Ok((pointer + 16, Value::Uuid(::uuid::Uuid::from_bytes(buf))))
        }
        INDEFINITE_SEQ => unpack_indefinite_seq(data, pointer),
        INDEFINITE_MAP => unpack_indefinite_map(data, pointer),
        // Long string/bytes length prefixes use plain big-endian
        // uint16/uint32/uint64 decoders (the original names an unbound
        // `struct_uint16`/`struct_uint32` here).
        LONG_STRING_U8 => unpack_long_string(data, pointer, 1),
        LONG_STRING_U16 => unpack_long_string(data, pointer, 2),
        LONG_STRING_U32 => unpack_long_string(data, pointer, 4),
        LONG_STRING_U64 => unpack_long_string(data, pointer, 8),
        LONG_BYTES_U8 => unpack_long_bytes(data, pointer, 1),
        LONG_BYTES_U16 => unpack_long_bytes(data, pointer, 2),
        LONG_BYTES_U32 => unpack_long_bytes(data, pointer, 4),
        LONG_BYTES_U64 => unpack_long_bytes(data, pointer, 8),
        other => Err(Error::InvalidConstructor(other)),
    }
}

fn unpack_long_string(data: &[u8], pointer: usize, width: usize) -> Result<(usize, Value)> {
    let (pointer, length) = read_length(data, pointer, width)?;
    let slice = take(data, pointer, length as usize)?;
    let s = std::str::from_utf8(slice)
        .map_err(|_| Error::InvalidUtf8)?
        .to_string();
    Ok((pointer + length as usize, Value::Str(s)))
}

fn unpack_long_bytes(data: &[u8], pointer: usize, width: usize) -> Result<(usize, Value)> {
    let (pointer, length) = read_length(data, pointer, width)?;
    let slice = take(data, pointer, length as usize)?;
    Ok((pointer + length as usize, Value::Bytes(slice.to_vec())))
}
