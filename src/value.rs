//! The runtime value type shared by the schema and dynamic codecs.
//!
//! A [`Value`] is what a [`crate::kind::Kind`] packs from and unpacks into.
//! The dynamic codec additionally uses it as the unit of self-description:
//! encoding discovers the constructor from the variant, decoding builds the
//! variant from the constructor.

use std::net::{Ipv4Addr, Ipv6Addr};

use chrono::{NaiveDate, NaiveTime};
use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use uuid::Uuid;

use crate::primitive::decimal::Decimal;

/// A local time of day, optionally anchored to a UTC offset in minutes.
///
/// Mirrors `TIME`'s wire form (§4.1.3): a naive time, plus an optional
/// signed offset that is only present on the wire when it is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TimeValue {
    /// Wall-clock time with microsecond resolution.
    pub time: NaiveTime,
    /// Offset from UTC in minutes, if the value carries a timezone.
    pub offset_minutes: Option<i32>,
}

/// The discriminated union accepted and produced by every [`crate::kind::Kind`].
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Absence of a value.
    Null,
    /// `BOOLEAN`.
    Bool(bool),
    /// Any of the signed integer primitives, widened to `i64`.
    Int(i64),
    /// Any of the unsigned integer primitives (and `VARINT`/`SIZE`), widened
    /// to `u64`.
    UInt(u64),
    /// `FLOAT`/`DOUBLE`, widened to `f64`.
    Double(OrderedFloat<f64>),
    /// `DECIMAL32`/`DECIMAL64`/`DECIMAL128`.
    Decimal(Decimal),
    /// `STRING`.
    Str(String),
    /// `BYTES`.
    Bytes(Vec<u8>),
    /// `UUID`.
    Uuid(Uuid),
    /// `IPV4`.
    Ipv4(Ipv4Addr),
    /// `IPV6`.
    Ipv6(Ipv6Addr),
    /// `DATE`.
    Date(NaiveDate),
    /// `TIME`.
    Time(TimeValue),
    /// A sequence, used by the dynamic codec and by `Kind` impls for nested
    /// structures/enums is not needed here.
    Seq(Vec<Value>),
    /// A map, keyed by `Value` so that any scalar can be a key.
    Map(IndexMap<Value, Value>),
}

// `Value` needs `Eq`/`Hash` so it can key `Value::Map`. `f64`/`f32` only
// implement these via `OrderedFloat`, which is already used for `Double`;
// `Decimal` derives them structurally.
impl Eq for Value {}

impl std::hash::Hash for Value {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        core::mem::discriminant(self).hash(state);
        match self {
            Value::Null => {}
            Value::Bool(b) => b.hash(state),
            Value::Int(i) => i.hash(state),
            Value::UInt(u) => u.hash(state),
            Value::Double(d) => d.hash(state),
            Value::Decimal(d) => d.hash(state),
            Value::Str(s) => s.hash(state),
            Value::Bytes(b) => b.hash(state),
            Value::Uuid(u) => u.hash(state),
            Value::Ipv4(a) => a.hash(state),
            Value::Ipv6(a) => a.hash(state),
            Value::Date(d) => d.hash(state),
            Value::Time(t) => t.hash(state),
            Value::Seq(s) => s.hash(state),
            Value::Map(m) => {
                for pair in m {
                    pair.hash(state);
                }
            }
        }
    }
}

impl Value {
    /// Name of the runtime kind, used in `InvalidValue` error messages.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::UInt(_) => "uint",
            Value::Double(_) => "double",
            Value::Decimal(_) => "decimal",
            Value::Str(_) => "string",
            Value::Bytes(_) => "bytes",
            Value::Uuid(_) => "uuid",
            Value::Ipv4(_) => "ipv4",
            Value::Ipv6(_) => "ipv6",
            Value::Date(_) => "date",
            Value::Time(_) => "time",
            Value::Seq(_) => "sequence",
            Value::Map(_) => "map",
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<u64> for Value {
    fn from(v: u64) -> Self {
        Value::UInt(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Double(OrderedFloat(v))
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Str(v.to_string())
    }
}

impl From<Vec<u8>> for Value {
    fn from(v: Vec<u8>) -> Self {
        Value::Bytes(v)
    }
}
