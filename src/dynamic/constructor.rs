//! Named constructor bytes for the self-describing codec (§6.2).

pub(crate) const SMALL_UINT_BASE: u8 = 0x00;
pub(crate) const SMALL_NEGINT_BASE: u8 = 0x20;
pub(crate) const SHORT_STRING_BASE: u8 = 0x40;
pub(crate) const SHORT_BYTES_BASE: u8 = 0x60;
pub(crate) const SHORT_SEQ_BASE: u8 = 0x80;
pub(crate) const SHORT_MAP_BASE: u8 = 0xA0;

/// Compact forms (the four bases above) fold a length/magnitude under 32
/// into the constructor byte itself; at or above this, an extended
/// constructor plus explicit length/magnitude is used instead.
pub(crate) const COMPACT_LIMIT: usize = 32;

pub(crate) const UINT8: u8 = 0xC0;
pub(crate) const NEG_UINT8: u8 = 0xC1;
pub(crate) const UINT16: u8 = 0xC2;
pub(crate) const NEG_UINT16: u8 = 0xC3;
pub(crate) const UINT32: u8 = 0xC4;
pub(crate) const NEG_UINT32: u8 = 0xC5;
pub(crate) const UINT64: u8 = 0xC6;
pub(crate) const NEG_UINT64: u8 = 0xC7;
pub(crate) const DOUBLE: u8 = 0xC8;
pub(crate) const DECIMAL32: u8 = 0xCA;
pub(crate) const DECIMAL64: u8 = 0xCB;
pub(crate) const DECIMAL128: u8 = 0xCC;
pub(crate) const TRUE: u8 = 0xCD;
pub(crate) const FALSE: u8 = 0xCE;
pub(crate) const NULL: u8 = 0xCF;
pub(crate) const POS_VARINT: u8 = 0xD0;
pub(crate) const NEG_VARINT: u8 = 0xD1;
pub(crate) const IPV4: u8 = 0xD2;
pub(crate) const IPV6: u8 = 0xD3;
pub(crate) const UUID: u8 = 0xD4;
pub(crate) const INDEFINITE_SEQ: u8 = 0xD5;
pub(crate) const INDEFINITE_MAP: u8 = 0xD6;
pub(crate) const END: u8 = 0xD7;
pub(crate) const LONG_STRING_U8: u8 = 0xD8;
pub(crate) const LONG_STRING_U16: u8 = 0xD9;
pub(crate) const LONG_STRING_U32: u8 = 0xDA;
pub(crate) const LONG_STRING_U64: u8 = 0xDB;
pub(crate) const LONG_BYTES_U8: u8 = 0xDC;
pub(crate) const LONG_BYTES_U16: u8 = 0xDD;
pub(crate) const LONG_BYTES_U32: u8 = 0xDE;
pub(crate) const LONG_BYTES_U64: u8 = 0xDF;

/// Long-form length-prefix constructors for strings, in ascending width.
pub(crate) const LONG_STRING_TAGS: [u8; 4] = [
    LONG_STRING_U8,
    LONG_STRING_U16,
    LONG_STRING_U32,
    LONG_STRING_U64,
];

/// Long-form length-prefix constructors for byte strings, in ascending width.
pub(crate) const LONG_BYTES_TAGS: [u8; 4] = [
    LONG_BYTES_U8,
    LONG_BYTES_U16,
    LONG_BYTES_U32,
    LONG_BYTES_U64,
];
