//! The primitive codec catalog (§4.1): one [`Primitive`] per catalog entry,
//! each a thin [`crate::kind::Kind`] adapter over the bit-exact codec
//! functions in this module's children.

pub(crate) mod boolean;
pub(crate) mod bytes;
pub mod decimal;
pub(crate) mod datetime;
pub(crate) mod float;
pub(crate) mod integer;
pub(crate) mod ip;
pub(crate) mod size;
pub(crate) mod string;
pub(crate) mod util;
pub(crate) mod uuid;
pub(crate) mod varint;

use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::value::{TimeValue, Value};
use bytes::BytesOptions;
use decimal::Decimal;

/// Which catalog entry a [`Primitive`] adapts. Each variant corresponds to
/// exactly one row of the §4.1 table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveBase {
    Sint8,
    Uint8,
    Sint16,
    Uint16,
    Sint32,
    Uint32,
    Sint64,
    Uint64,
    Float,
    Double,
    Decimal32,
    Decimal64,
    Decimal128,
    Varint,
    Size,
    Uuid,
    Ipv4,
    Ipv6,
    Date,
    Time,
    Bytes,
    String,
    Boolean,
}

/// Parameterization options a `Primitive` can be derived with (§4.1.5).
///
/// Only `BYTES`/`STRING` recognize any option today; every other base
/// ignores an empty `PrimitiveOptions` and rejects a non-empty one at
/// derivation (there is nothing for e.g. `UINT8(...)` to mean).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct PrimitiveOptions {
    /// Fixed wire width. Absent selects the `SIZE`-prefixed variable form.
    pub size: Option<usize>,
    /// Explicit pad byte for the fixed form. `Some(None)` means "no
    /// padding, fail on underrun"; `None` means "use the base's default
    /// fill" (`0x00` for `BYTES`, `0x20` for `STRING`).
    pub fill: Option<Option<u8>>,
}

impl PrimitiveOptions {
    /// Merges `other` over `self`, right-overrides-left, field by field.
    pub fn merged_with(&self, other: &PrimitiveOptions) -> PrimitiveOptions {
        PrimitiveOptions {
            size: other.size.or(self.size),
            fill: other.fill.or(self.fill),
        }
    }

    fn bytes_options(&self, default_fill: u8) -> BytesOptions {
        match self.size {
            None => BytesOptions::default(),
            Some(width) => BytesOptions {
                fixed: Some((width, self.fill.unwrap_or(Some(default_fill)))),
            },
        }
    }
}

/// A Type over the primitive catalog. Two primitives are behaviorally equal
/// iff they share the same `base` and equal `options` (§3) — which, since
/// each `base` names exactly one catalog singleton here, also coincides
/// with "the same declared constant," satisfying the by-identity rule for
/// un-derived primitives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primitive {
    name: &'static str,
    base: PrimitiveBase,
    options: PrimitiveOptions,
}

impl Primitive {
    const fn catalog(name: &'static str, base: PrimitiveBase) -> Primitive {
        Primitive {
            name,
            base,
            options: PrimitiveOptions {
                size: None,
                fill: None,
            },
        }
    }

    /// Returns a derived primitive sharing `self`'s `base`, with `options`
    /// merged over `self`'s own (right-overrides-left).
    pub fn derive(&self, options: PrimitiveOptions) -> Primitive {
        Primitive {
            name: self.name,
            base: self.base,
            options: self.options.merged_with(&options),
        }
    }

    /// The catalog base this primitive (or its ancestor, if derived) adapts.
    pub fn base(&self) -> PrimitiveBase {
        self.base
    }

    /// The options this primitive was derived with, if any.
    pub fn options(&self) -> &PrimitiveOptions {
        &self.options
    }
}

fn expect_int(value: &Value) -> Result<i64> {
    match value {
        Value::Int(i) => Ok(*i),
        Value::UInt(u) => i64::try_from(*u).map_err(|_| Error::InvalidValue("int")),
        other => Err(Error::InvalidValue(other.kind_name())),
    }
}

fn expect_uint(value: &Value) -> Result<u64> {
    match value {
        Value::UInt(u) => Ok(*u),
        Value::Int(i) if *i >= 0 => Ok(*i as u64),
        other => Err(Error::InvalidValue(other.kind_name())),
    }
}

fn expect_double(value: &Value) -> Result<f64> {
    match value {
        Value::Double(d) => Ok(d.into_inner()),
        other => Err(Error::InvalidValue(other.kind_name())),
    }
}

fn expect_decimal(value: &Value) -> Result<&Decimal> {
    match value {
        Value::Decimal(d) => Ok(d),
        other => Err(Error::InvalidValue(other.kind_name())),
    }
}

fn expect_str(value: &Value) -> Result<&str> {
    match value {
        Value::Str(s) => Ok(s),
        other => Err(Error::InvalidValue(other.kind_name())),
    }
}

fn expect_bytes(value: &Value) -> Result<&[u8]> {
    match value {
        Value::Bytes(b) => Ok(b),
        other => Err(Error::InvalidValue(other.kind_name())),
    }
}

fn expect_bool(value: &Value) -> Result<bool> {
    match value {
        Value::Bool(b) => Ok(*b),
        other => Err(Error::InvalidValue(other.kind_name())),
    }
}

fn expect_uuid(value: &Value) -> Result<::uuid::Uuid> {
    match value {
        Value::Uuid(u) => Ok(*u),
        other => Err(Error::InvalidValue(other.kind_name())),
    }
}

fn expect_ipv4(value: &Value) -> Result<Ipv4Addr> {
    match value {
        Value::Ipv4(a) => Ok(*a),
        other => Err(Error::InvalidValue(other.kind_name())),
    }
}

fn expect_ipv6(value: &Value) -> Result<Ipv6Addr> {
    match value {
        Value::Ipv6(a) => Ok(*a),
        other => Err(Error::InvalidValue(other.kind_name())),
    }
}

fn expect_date(value: &Value) -> Result<NaiveDate> {
    match value {
        Value::Date(d) => Ok(*d),
        other => Err(Error::InvalidValue(other.kind_name())),
    }
}

fn expect_time(value: &Value) -> Result<&TimeValue> {
    match value {
        Value::Time(t) => Ok(t),
        other => Err(Error::InvalidValue(other.kind_name())),
    }
}

macro_rules! signed_arm {
    ($value:expr, $out:expr, $ty:ty, $pack:path) => {{
        let i = expect_int($value)?;
        let narrowed = <$ty>::try_from(i)
            .map_err(|_| Error::out_of_range(stringify!($ty), format!("{i} out of range")))?;
        $pack($out, narrowed);
        Ok(())
    }};
}

macro_rules! unsigned_arm {
    ($value:expr, $out:expr, $ty:ty, $pack:path) => {{
        let u = expect_uint($value)?;
        let narrowed = <$ty>::try_from(u)
            .map_err(|_| Error::out_of_range(stringify!($ty), format!("{u} out of range")))?;
        $pack($out, narrowed);
        Ok(())
    }};
}

impl Kind for Primitive {
    fn name(&self) -> &str {
        self.name
    }

    fn size(&self) -> Option<usize> {
        use PrimitiveBase::*;
        match self.base {
            Sint8 | Uint8 | Boolean => Some(1),
            Sint16 | Uint16 => Some(2),
            Sint32 | Uint32 | Float | Decimal32 | Ipv4 => Some(4),
            Sint64 | Uint64 | Double | Decimal64 => Some(8),
            Decimal128 | Uuid | Ipv6 => Some(16),
            Date => Some(3),
            Varint | Size | Time => None,
            Bytes | String => self.options.size,
        }
    }

    fn pack(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        use PrimitiveBase::*;
        match self.base {
            Sint8 => signed_arm!(value, out, i8, integer::pack_sint8),
            Uint8 => unsigned_arm!(value, out, u8, integer::pack_uint8),
            Sint16 => signed_arm!(value, out, i16, integer::pack_sint16),
            Uint16 => unsigned_arm!(value, out, u16, integer::pack_uint16),
            Sint32 => signed_arm!(value, out, i32, integer::pack_sint32),
            Uint32 => unsigned_arm!(value, out, u32, integer::pack_uint32),
            Sint64 => {
                integer::pack_sint64(out, expect_int(value)?);
                Ok(())
            }
            Uint64 => {
                integer::pack_uint64(out, expect_uint(value)?);
                Ok(())
            }
            Float => {
                float::pack_float(out, expect_double(value)? as f32);
                Ok(())
            }
            Double => {
                float::pack_double(out, expect_double(value)?);
                Ok(())
            }
            Decimal32 => decimal::pack_decimal32(out, expect_decimal(value)?),
            Decimal64 => decimal::pack_decimal64(out, expect_decimal(value)?),
            Decimal128 => decimal::pack_decimal128(out, expect_decimal(value)?),
            Varint => {
                varint::pack_varint(out, expect_uint(value)?);
                Ok(())
            }
            Size => {
                size::pack_size(out, expect_uint(value)? as u128)
            }
            Uuid => {
                uuid::pack_uuid(out, expect_uuid(value)?);
                Ok(())
            }
            Ipv4 => {
                ip::pack_ipv4(out, expect_ipv4(value)?);
                Ok(())
            }
            Ipv6 => {
                ip::pack_ipv6(out, expect_ipv6(value)?);
                Ok(())
            }
            Date => {
                datetime::pack_date(out, expect_date(value)?);
                Ok(())
            }
            Time => {
                datetime::pack_time(out, expect_time(value)?);
                Ok(())
            }
            Bytes => bytes::pack_bytes(out, expect_bytes(value)?, &self.options.bytes_options(0x00)),
            String => string::pack_string(out, expect_str(value)?, &self.options.bytes_options(0x20)),
            Boolean => {
                boolean::pack_boolean(out, expect_bool(value)?);
                Ok(())
            }
        }
    }

    fn unpack(&self, data: &[u8], offset: usize) -> Result<(usize, Value)> {
        use PrimitiveBase::*;
        match self.base {
            Sint8 => integer::unpack_sint8(data, offset).map(|(p, v)| (p, Value::Int(v as i64))),
            Uint8 => integer::unpack_uint8(data, offset).map(|(p, v)| (p, Value::UInt(v as u64))),
            Sint16 => integer::unpack_sint16(data, offset).map(|(p, v)| (p, Value::Int(v as i64))),
            Uint16 => integer::unpack_uint16(data, offset).map(|(p, v)| (p, Value::UInt(v as u64))),
            Sint32 => integer::unpack_sint32(data, offset).map(|(p, v)| (p, Value::Int(v as i64))),
            Uint32 => integer::unpack_uint32(data, offset).map(|(p, v)| (p, Value::UInt(v as u64))),
            Sint64 => integer::unpack_sint64(data, offset).map(|(p, v)| (p, Value::Int(v))),
            Uint64 => integer::unpack_uint64(data, offset).map(|(p, v)| (p, Value::UInt(v))),
            Float => float::unpack_float(data, offset).map(|(p, v)| (p, Value::from(v as f64))),
            Double => float::unpack_double(data, offset).map(|(p, v)| (p, Value::from(v))),
            Decimal32 => decimal::unpack_decimal32(data, offset).map(|(p, v)| (p, Value::Decimal(v))),
            Decimal64 => decimal::unpack_decimal64(data, offset).map(|(p, v)| (p, Value::Decimal(v))),
            Decimal128 => decimal::unpack_decimal128(data, offset).map(|(p, v)| (p, Value::Decimal(v))),
            Varint => varint::unpack_varint(data, offset).map(|(p, v)| (p, Value::UInt(v))),
            Size => {
                let (p, raw) = size::unpack_size(data, offset)?;
                let narrowed = u64::try_from(raw)
                    .map_err(|_| Error::out_of_range("SIZE", format!("{raw} exceeds u64::MAX")))?;
                Ok((p, Value::UInt(narrowed)))
            }
            Uuid => uuid::unpack_uuid(data, offset).map(|(p, v)| (p, Value::Uuid(v))),
            Ipv4 => ip::unpack_ipv4(data, offset).map(|(p, v)| (p, Value::Ipv4(v))),
            Ipv6 => ip::unpack_ipv6(data, offset).map(|(p, v)| (p, Value::Ipv6(v))),
            Date => datetime::unpack_date(data, offset).map(|(p, v)| (p, Value::Date(v))),
            Time => datetime::unpack_time(data, offset).map(|(p, v)| (p, Value::Time(v))),
            Bytes => bytes::unpack_bytes(data, offset, &self.options.bytes_options(0x00))
                .map(|(p, v)| (p, Value::Bytes(v))),
            String => string::unpack_string(data, offset, &self.options.bytes_options(0x20))
                .map(|(p, v)| (p, Value::Str(v))),
            Boolean => boolean::unpack_boolean(data, offset).map(|(p, v)| (p, Value::Bool(v))),
        }
    }
}

macro_rules! catalog_entry {
    ($ident:ident, $name:literal, $base:ident) => {
        pub const $ident: Primitive = Primitive::catalog($name, PrimitiveBase::$base);
    };
}

catalog_entry!(SINT8, "SINT8", Sint8);
catalog_entry!(UINT8, "UINT8", Uint8);
catalog_entry!(SINT16, "SINT16", Sint16);
catalog_entry!(UINT16, "UINT16", Uint16);
catalog_entry!(SINT32, "SINT32", Sint32);
catalog_entry!(UINT32, "UINT32", Uint32);
catalog_entry!(SINT64, "SINT64", Sint64);
catalog_entry!(UINT64, "UINT64", Uint64);
catalog_entry!(FLOAT, "FLOAT", Float);
catalog_entry!(DOUBLE, "DOUBLE", Double);
catalog_entry!(DECIMAL32, "DECIMAL32", Decimal32);
catalog_entry!(DECIMAL64, "DECIMAL64", Decimal64);
catalog_entry!(DECIMAL128, "DECIMAL128", Decimal128);
catalog_entry!(VARINT, "VARINT", Varint);
catalog_entry!(SIZE, "SIZE", Size);
catalog_entry!(UUID, "UUID", Uuid);
catalog_entry!(IPV4, "IPV4", Ipv4);
catalog_entry!(IPV6, "IPV6", Ipv6);
catalog_entry!(DATE, "DATE", Date);
catalog_entry!(TIME, "TIME", Time);
catalog_entry!(BYTES, "BYTES", Bytes);
catalog_entry!(STRING, "STRING", String);
catalog_entry!(BOOLEAN, "BOOLEAN", Boolean);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn uint16_round_trips_through_the_kind_trait() {
        let value = Value::UInt(258);
        let bytes = crate::kind::encode(&UINT16, &value).unwrap();
        assert_eq!(bytes, vec![0x01, 0x02]);
        assert_eq!(crate::kind::decode(&UINT16, &bytes).unwrap(), value);
    }

    #[test]
    fn sint8_rejects_out_of_range_values() {
        let err = crate::kind::encode(&SINT8, &Value::Int(200));
        assert!(err.is_err());
    }

    #[test]
    fn derivation_equality_matches_base_and_options() {
        let a = STRING.derive(PrimitiveOptions {
            size: Some(6),
            fill: None,
        });
        let b = STRING.derive(PrimitiveOptions {
            size: Some(6),
            fill: None,
        });
        let c = STRING.derive(PrimitiveOptions {
            size: Some(7),
            fill: None,
        });
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_ne!(a, STRING);
    }

    #[test]
    fn fixed_string_round_trips_through_the_kind_trait() {
        let fixed = STRING.derive(PrimitiveOptions {
            size: Some(6),
            fill: None,
        });
        let value = Value::from("abcdef");
        let bytes = crate::kind::encode(&fixed, &value).unwrap();
        assert_eq!(bytes, b"abcdef");
        assert_eq!(crate::kind::decode(&fixed, &bytes).unwrap(), value);
    }

    #[test]
    fn boolean_matches_the_seed_scenario() {
        assert_eq!(crate::kind::encode(&BOOLEAN, &Value::Bool(true)).unwrap(), vec![0x01]);
        assert_eq!(crate::kind::encode(&BOOLEAN, &Value::Bool(false)).unwrap(), vec![0x00]);
    }
}
