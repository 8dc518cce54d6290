//! Big integer conversions from native and textual inputs.

use crate::NumberError;
use std::string::ToString;

use alloy_primitives::{I256, U256};

/// Parses the text into a [`U256`].
///
/// Decimal text is tried first, then hexadecimal with an optional `0x` prefix. The order matters
/// for inputs like `"10"` which are valid in both bases.
pub fn parse_u256(text: &str) -> Result<U256, NumberError> {
    if let Some(magnitude) = text.strip_prefix('-') {
        parse_magnitude(magnitude).ok_or_else(|| NumberError::InvalidText(text.to_string()))??;
        return Err(NumberError::Negative)
    }
    parse_magnitude(text).ok_or_else(|| NumberError::InvalidText(text.to_string()))?
}

/// Parses the text into an [`I256`]. Accepts an optional leading sign followed by a decimal or
/// hexadecimal magnitude.
pub fn parse_i256(text: &str) -> Result<I256, NumberError> {
    let (negative, magnitude) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text.strip_prefix('+').unwrap_or(text)),
    };
    let magnitude =
        parse_magnitude(magnitude).ok_or_else(|| NumberError::InvalidText(text.to_string()))??;
    signed_from_magnitude(negative, magnitude)
}

/// Returns [`None`] if the text is not a number in either base.
fn parse_magnitude(text: &str) -> Option<Result<U256, NumberError>> {
    if !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit()) {
        return Some(U256::from_str_radix(text, 10).map_err(|_| NumberError::Overflow))
    }

    let hex = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text);
    if !hex.is_empty() && hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Some(U256::from_str_radix(hex, 16).map_err(|_| NumberError::Overflow))
    }

    None
}

/// Builds the two's complement [`I256`] for the provided sign and magnitude.
fn signed_from_magnitude(negative: bool, magnitude: U256) -> Result<I256, NumberError> {
    let limit: U256 = U256::from(1u8) << 255;
    if negative {
        if magnitude > limit {
            return Err(NumberError::Overflow)
        }
        Ok(I256::from_raw(U256::ZERO.wrapping_sub(magnitude)))
    } else {
        if magnitude >= limit {
            return Err(NumberError::Overflow)
        }
        Ok(I256::from_raw(magnitude))
    }
}

/// Converts a native signed integer into an [`I256`].
pub fn signed_from_i128(value: i128) -> I256 {
    let magnitude = U256::from(value.unsigned_abs());
    if value < 0 {
        I256::from_raw(U256::ZERO.wrapping_sub(magnitude))
    } else {
        I256::from_raw(magnitude)
    }
}

/// Returns true if the value is representable on an unsigned integer of `bits` width.
pub fn fits_unsigned(value: &U256, bits: usize) -> bool {
    bits >= 256 || value.bit_len() <= bits
}

/// Returns true if the value is representable on a signed integer of `bits` width.
pub fn fits_signed(value: &I256, bits: usize) -> bool {
    if bits >= 256 {
        return true
    }
    if bits == 0 {
        return false
    }
    let limit = U256::from(1u8) << (bits - 1);
    if value.is_negative() {
        value.unsigned_abs() <= limit
    } else {
        value.into_raw() < limit
    }
}
