//! Crate-wide error type.

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = core::result::Result<T, Error>;

/// Everything that can go wrong while packing or unpacking a value.
#[derive(Debug, Error, PartialEq, Clone)]
pub enum Error {
    /// An integer, decimal exponent/digit count, or size exceeded the range
    /// the target primitive can represent.
    #[error("value out of range for {kind}: {detail}")]
    ValueOutOfRange {
        /// Name of the primitive that rejected the value.
        kind: &'static str,
        /// Human readable detail (bound that was violated).
        detail: String,
    },

    /// A fixed-size `BYTES`/`STRING` value was longer than its declared size.
    #[error("length exceeded fixed size")]
    LengthExceeded,

    /// A fixed-size `BYTES`/`STRING` value was shorter than its declared
    /// size and no `fill` byte was configured.
    #[error("length underrun with no fill configured")]
    LengthUnderrun,

    /// Malformed UTF-8 encountered while unpacking a `STRING`.
    #[error("invalid utf-8 encoding")]
    InvalidUtf8,

    /// An enum ordinal decoded outside the bounds of its item list.
    #[error("invalid enum ordinal {ordinal} for {cardinality} item(s)")]
    InvalidEnumOrdinal {
        /// The ordinal that was read off the wire.
        ordinal: u64,
        /// Number of symbols the enum was defined with.
        cardinality: usize,
    },

    /// A `DATE`/`TIME` field did not form a valid calendar value.
    #[error("invalid calendar value")]
    InvalidCalendarValue,

    /// The decoder needed more bytes than the buffer had left.
    #[error("truncated buffer: needed {needed} byte(s), {available} available")]
    TruncatedBuffer {
        /// Bytes required to satisfy the read.
        needed: usize,
        /// Bytes actually remaining in the buffer.
        available: usize,
    },

    /// An unknown dynamic-codec constructor byte was encountered.
    #[error("invalid constructor byte 0x{0:02x}")]
    InvalidConstructor(u8),

    /// A decimal's combination field selected a reserved bit pattern.
    #[error("invalid decimal special encoding")]
    InvalidDecimalSpecial,

    /// A structure was constructed with more positional values than it has
    /// fields.
    #[error("arity mismatch: expected at most {expected} field(s), got {got}")]
    ArityMismatch {
        /// Number of declared fields.
        expected: usize,
        /// Number of values supplied.
        got: usize,
    },

    /// A structure was encoded while one of its fields was never assigned.
    #[error("missing field {0:?}")]
    MissingField(String),

    /// A value of the wrong runtime kind was handed to a primitive/field.
    #[error("invalid value for {0}")]
    InvalidValue(&'static str),
}

impl Error {
    pub(crate) fn out_of_range(kind: &'static str, detail: impl Into<String>) -> Self {
        Self::ValueOutOfRange {
            kind,
            detail: detail.into(),
        }
    }

    pub(crate) fn truncated(needed: usize, available: usize) -> Self {
        Self::TruncatedBuffer { needed, available }
    }
}
