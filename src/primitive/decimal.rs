//! IEEE-754-2008 decimal floats using the Binary Integer Decimal (BID)
//! encoding (§4.1.1), for widths 32/64/128.
//!
//! The combination field's first four bits select one of three layouts:
//! `0b11` as the top two bits routes to a large-coefficient form (implicit
//! leading digit 8 or 9) *unless* the next two bits are also `11`, in which
//! case the value is a special (infinity or NaN). Any other top two bits
//! select the direct form. This nesting — not "bits1..2 both 1 always means
//! special" — is what distinguishes the large-coefficient finite values from
//! the specials; it is also what IEEE 754-2008 actually specifies.

use super::util::take;
use crate::error::{Error, Result};

/// A decoded/to-be-encoded decimal float: either finite (sign, decimal
/// digits most-significant-first, base-10 exponent) or one of the four
/// non-finite specials.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Decimal {
    /// A finite value `(-1)^sign * digits * 10^exponent`.
    Finite {
        /// Sign bit; `true` means negative.
        sign: bool,
        /// Significant digits, most significant first, each in `0..=9`.
        digits: Vec<u8>,
        /// Base-10 exponent applied to the digit string read as an integer.
        exponent: i32,
    },
    /// Signed infinity.
    Infinity {
        /// `true` for negative infinity.
        sign: bool,
    },
    /// Not-a-number, quiet or signaling.
    Nan {
        /// `true` for a signaling NaN, `false` for quiet.
        signaling: bool,
    },
}

impl Decimal {
    /// Builds a finite decimal from an integer significand and exponent.
    pub fn from_parts(sign: bool, significand: u128, exponent: i32) -> Self {
        Decimal::Finite {
            sign,
            digits: digits_of(significand),
            exponent,
        }
    }
}

struct Layout {
    total_bits: u32,
    exp_bits: u32,
    trailing_bits: u32,
    bias: i32,
    max_digits: usize,
    min_exp: i32,
    max_exp: i32,
}

const D32: Layout = Layout {
    total_bits: 32,
    exp_bits: 8,
    trailing_bits: 20,
    bias: 101,
    max_digits: 7,
    min_exp: -101,
    max_exp: 90,
};
const D64: Layout = Layout {
    total_bits: 64,
    exp_bits: 10,
    trailing_bits: 50,
    bias: 398,
    max_digits: 16,
    min_exp: -398,
    max_exp: 369,
};
const D128: Layout = Layout {
    total_bits: 128,
    exp_bits: 14,
    trailing_bits: 110,
    bias: 6176,
    max_digits: 34,
    min_exp: -6176,
    max_exp: 6111,
};

fn digits_of(mut n: u128) -> Vec<u8> {
    if n == 0 {
        return vec![0];
    }
    let mut digits = Vec::new();
    while n > 0 {
        digits.push((n % 10) as u8);
        n /= 10;
    }
    digits.reverse();
    digits
}

fn value_of(digits: &[u8]) -> u128 {
    digits.iter().fold(0u128, |acc, &d| acc * 10 + d as u128)
}

fn decode_special(sign: bool, field: u128) -> Decimal {
    if (field >> 3) & 1 == 1 {
        Decimal::Nan {
            signaling: (field >> 2) & 1 == 1,
        }
    } else {
        Decimal::Infinity { sign }
    }
}

fn decode_bid(layout: &Layout, integer: u128) -> Decimal {
    let total = layout.total_bits;
    let sign = (integer >> (total - 1)) & 1 == 1;
    let exp_mask: u128 = (1u128 << layout.exp_bits) - 1;

    if (integer >> (total - 3)) & 3 == 3 {
        if (integer >> (total - 5)) & 3 == 3 {
            return decode_special(sign, integer >> (total - 9));
        }
        let exponent = (((integer >> (layout.trailing_bits + 1)) & exp_mask) as i32) - layout.bias;
        let payload_mask: u128 = (1u128 << (layout.trailing_bits + 1)) - 1;
        let significand = (1u128 << (layout.trailing_bits + 3)) | (integer & payload_mask);
        Decimal::Finite {
            sign,
            digits: digits_of(significand),
            exponent,
        }
    } else {
        let exponent = (((integer >> (layout.trailing_bits + 3)) & exp_mask) as i32) - layout.bias;
        let direct_mask: u128 = (1u128 << (layout.trailing_bits + 3)) - 1;
        let significand = integer & direct_mask;
        Decimal::Finite {
            sign,
            digits: digits_of(significand),
            exponent,
        }
    }
}

fn special_bytes(lead: u8, width: usize) -> Vec<u8> {
    let mut out = vec![0u8; width];
    out[0] = lead;
    out
}

fn encode_bid(layout: &Layout, name: &'static str, value: &Decimal) -> Result<Vec<u8>> {
    let width = (layout.total_bits / 8) as usize;
    let raw: u128 = match value {
        Decimal::Infinity { sign } => {
            return Ok(special_bytes(if *sign { 0xf8 } else { 0x78 }, width));
        }
        Decimal::Nan { signaling } => {
            return Ok(special_bytes(if *signaling { 0x7e } else { 0x7c }, width));
        }
        Decimal::Finite {
            sign,
            digits,
            exponent,
        } => {
            if digits.len() > layout.max_digits
                || *exponent < layout.min_exp
                || *exponent > layout.max_exp
            {
                return Err(Error::out_of_range(
                    name,
                    format!(
                        "{} digit(s) at exponent {} exceeds {} digits or [{}, {}]",
                        digits.len(),
                        exponent,
                        layout.max_digits,
                        layout.min_exp,
                        layout.max_exp
                    ),
                ));
            }
            let significand = value_of(digits);
            let sign_bit: u128 = if *sign { 1 } else { 0 } << (layout.total_bits - 1);
            let biased = (*exponent + layout.bias) as u128;
            if (significand >> (layout.trailing_bits + 1)) == 4 {
                let payload_mask: u128 = (1u128 << (layout.trailing_bits + 1)) - 1;
                sign_bit
                    | (0b11u128 << (layout.total_bits - 3))
                    | (biased << (layout.trailing_bits + 1))
                    | (significand & payload_mask)
            } else {
                sign_bit | (biased << (layout.trailing_bits + 3)) | significand
            }
        }
    };
    Ok(raw.to_be_bytes()[(16 - width)..].to_vec())
}

macro_rules! decimal_codec {
    ($pack:ident, $unpack:ident, $layout:expr, $name:literal) => {
        pub(crate) fn $pack(out: &mut Vec<u8>, value: &Decimal) -> Result<()> {
            out.extend_from_slice(&encode_bid(&$layout, $name, value)?);
            Ok(())
        }

        pub(crate) fn $unpack(data: &[u8], offset: usize) -> Result<(usize, Decimal)> {
            let width = ($layout.total_bits / 8) as usize;
            let slice = take(data, offset, width)?;
            let mut buf = [0u8; 16];
            buf[(16 - width)..].copy_from_slice(slice);
            let integer = u128::from_be_bytes(buf);
            Ok((offset + width, decode_bid(&$layout, integer)))
        }
    };
}

decimal_codec!(pack_decimal32, unpack_decimal32, D32, "DECIMAL32");
decimal_codec!(pack_decimal64, unpack_decimal64, D64, "DECIMAL64");
decimal_codec!(pack_decimal128, unpack_decimal128, D128, "DECIMAL128");
