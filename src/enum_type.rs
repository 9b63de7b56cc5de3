//! `EnumType`: adapts a finite ordered symbol set to a [`Kind`] by encoding
//! its ordinal (§4.3).

use crate::error::{Error, Result};
use crate::kind::Kind;
use crate::primitive::{self, PrimitiveBase};
use crate::value::Value;

/// Which primitive carries the ordinal on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Ordinal {
    Uint8,
    Uint16,
    Varint,
}

/// An enum over a fixed, ordered list of symbolic values (strings here —
/// the symbolic payload itself is opaque to the wire format, only its
/// position in `items` is encoded).
#[derive(Debug, Clone)]
pub struct EnumType {
    items: Vec<String>,
    ordinal: Ordinal,
}

impl EnumType {
    /// Builds an enum over `items` in the given order. Selects `uint8` when
    /// `items.len() <= 255`, `uint16` when `<= 65535`. Cardinalities beyond
    /// that fail unless `varint` is opted into.
    pub fn new(items: Vec<String>) -> Result<Self> {
        Self::with_ordinal(items, false)
    }

    /// As [`EnumType::new`], but allows opting into a `varint`-encoded
    /// ordinal regardless of cardinality.
    pub fn with_varint(items: Vec<String>) -> Result<Self> {
        Self::with_ordinal(items, true)
    }

    fn with_ordinal(items: Vec<String>, allow_varint: bool) -> Result<Self> {
        let ordinal = if allow_varint {
            Ordinal::Varint
        } else if items.len() <= 255 {
            Ordinal::Uint8
        } else if items.len() <= 65535 {
            Ordinal::Uint16
        } else {
            return Err(Error::InvalidValue(
                "enum cardinality exceeds 65535 without a varint opt-in",
            ));
        };
        Ok(EnumType { items, ordinal })
    }

    /// The ordered symbol list.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    fn ordinal_base(&self) -> PrimitiveBase {
        match self.ordinal {
            Ordinal::Uint8 => PrimitiveBase::Uint8,
            Ordinal::Uint16 => PrimitiveBase::Uint16,
            Ordinal::Varint => PrimitiveBase::Varint,
        }
    }

    fn ordinal_of(&self, symbol: &str) -> Result<u64> {
        self.items
            .iter()
            .position(|item| item == symbol)
            .map(|i| i as u64)
            .ok_or(Error::InvalidValue("symbol not a member of this enum"))
    }
}

impl Kind for EnumType {
    fn name(&self) -> &str {
        "ENUM"
    }

    fn size(&self) -> Option<usize> {
        match self.ordinal {
            Ordinal::Uint8 => Some(1),
            Ordinal::Uint16 => Some(2),
            Ordinal::Varint => None,
        }
    }

    fn pack(&self, value: &Value, out: &mut Vec<u8>) -> Result<()> {
        let symbol = match value {
            Value::Str(s) => s.as_str(),
            other => return Err(Error::InvalidValue(other.kind_name())),
        };
        let ordinal = self.ordinal_of(symbol)?;
        match self.ordinal_base() {
            PrimitiveBase::Uint8 => primitive::UINT8.pack(&Value::UInt(ordinal), out),
            PrimitiveBase::Uint16 => primitive::UINT16.pack(&Value::UInt(ordinal), out),
            PrimitiveBase::Varint => primitive::VARINT.pack(&Value::UInt(ordinal), out),
            _ => unreachable!("ordinal_base only returns uint8/uint16/varint"),
        }
    }

    fn unpack(&self, data: &[u8], offset: usize) -> Result<(usize, Value)> {
        let (pointer, ordinal) = match self.ordinal_base() {
            PrimitiveBase::Uint8 => primitive::UINT8.unpack(data, offset)?,
            PrimitiveBase::Uint16 => primitive::UINT16.unpack(data, offset)?,
            PrimitiveBase::Varint => primitive::VARINT.unpack(data, offset)?,
            _ => unreachable!("ordinal_base only returns uint8/uint16/varint"),
        };
        let ordinal = match ordinal {
            Value::UInt(u) => u,
            _ => unreachable!("uint8/uint16/varint always decode to Value::UInt"),
        };
        let symbol = self.items.get(ordinal as usize).ok_or_else(|| {
            Error::InvalidEnumOrdinal {
                ordinal,
                cardinality: self.items.len(),
            }
        })?;
        Ok((pointer, Value::Str(symbol.clone())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("item{i}")).collect()
    }

    #[test]
    fn small_cardinality_uses_uint8() {
        let e = EnumType::new(vec!["red".into(), "green".into(), "blue".into()]).unwrap();
        assert_eq!(e.size(), Some(1));
        let mut out = Vec::new();
        e.pack(&Value::Str("green".into()), &mut out).unwrap();
        assert_eq!(out, vec![0x01]);
        assert_eq!(
            e.unpack(&out, 0).unwrap(),
            (1, Value::Str("green".into()))
        );
    }

    #[test]
    fn cardinality_above_255_uses_uint16() {
        let e = EnumType::new(items(300)).unwrap();
        assert_eq!(e.size(), Some(2));
    }

    #[test]
    fn cardinality_above_65535_fails_without_varint_opt_in() {
        assert!(EnumType::new(items(65536)).is_err());
        assert!(EnumType::with_varint(items(65536)).is_ok());
    }

    #[test]
    fn unpack_rejects_out_of_range_ordinal() {
        let e = EnumType::new(vec!["only".into()]).unwrap();
        assert!(e.unpack(&[5], 0).is_err());
    }
}
