use super::AbiEncoder;
use crate::{AbiError, EncodableValue, ParameterType};
use ambrosus_primitives::{
    fits_signed, fits_unsigned, parse_i256, parse_u256,
    word::{left_pad_word, right_pad_to_words, right_pad_word, u256_word, usize_word},
    NumberError, StringEncoding,
};
use std::{borrow::Cow, string::ToString, vec::Vec};

use alloy_primitives::{hex, Address, I256, U256};

/// The number of bytes of a function reference: an address followed by a selector.
const FUNCTION_SIZE: usize = 24;

impl AbiEncoder {
    /// Encodes a single value of the type. Static values return their head words, dynamic values
    /// return their tail.
    pub(crate) fn encode_value(
        &self,
        ty: &ParameterType,
        value: &EncodableValue,
        depth: usize,
    ) -> Result<Vec<u8>, AbiError> {
        let mismatch =
            || AbiError::TypeMismatch { expected: ty.to_string(), found: value.kind() };

        let encoded = match ty {
            ParameterType::UInt(bits) => {
                let value = match value {
                    EncodableValue::Uint(value) => *value,
                    EncodableValue::Int(value) if value.is_negative() => {
                        return Err(NumberError::Negative.into())
                    }
                    EncodableValue::Int(value) => value.into_raw(),
                    EncodableValue::Text(text) => parse_u256(text)?,
                    _ => return Err(mismatch()),
                };
                if !fits_unsigned(&value, *bits) {
                    return Err(AbiError::ValueOutOfRange(ty.to_string()))
                }
                u256_word(&value).to_vec()
            }
            ParameterType::Int(bits) => {
                let value = match value {
                    EncodableValue::Int(value) => *value,
                    EncodableValue::Uint(value) => I256::try_from(*value)
                        .map_err(|_| AbiError::ValueOutOfRange(ty.to_string()))?,
                    EncodableValue::Text(text) => parse_i256(text)?,
                    _ => return Err(mismatch()),
                };
                if !fits_signed(&value, *bits) {
                    return Err(AbiError::ValueOutOfRange(ty.to_string()))
                }
                u256_word(&value.into_raw()).to_vec()
            }
            ParameterType::Address => {
                let address = match value {
                    EncodableValue::Address(address) => *address,
                    EncodableValue::Text(text) => parse_address(text)?,
                    EncodableValue::Bytes(bytes) => address_from_bytes(bytes)?,
                    _ => return Err(mismatch()),
                };
                address.into_word().to_vec()
            }
            ParameterType::Bool => match value {
                EncodableValue::Bool(value) => u256_word(&U256::from(*value as u8)).to_vec(),
                _ => return Err(mismatch()),
            },
            ParameterType::FixedBytes(length) => {
                let bytes = byte_data(value).ok_or_else(mismatch)?;
                if bytes.len() > *length {
                    return Err(length_violation(ty, *length, bytes.len()))
                }
                right_pad_word(&bytes)
                    .ok_or_else(|| length_violation(ty, *length, bytes.len()))?
                    .to_vec()
            }
            ParameterType::DynamicBytes => {
                let bytes = byte_data(value).ok_or_else(mismatch)?;
                length_prefixed(&bytes)
            }
            ParameterType::String => match value {
                EncodableValue::Text(text) => length_prefixed(&self.config.strings.to_bytes(text)),
                EncodableValue::Bytes(bytes) => length_prefixed(bytes),
                _ => return Err(mismatch()),
            },
            ParameterType::Function => {
                let bytes = byte_data(value).ok_or_else(mismatch)?;
                if bytes.len() > FUNCTION_SIZE {
                    return Err(length_violation(ty, FUNCTION_SIZE, bytes.len()))
                }
                left_pad_word(&bytes)
                    .ok_or_else(|| length_violation(ty, FUNCTION_SIZE, bytes.len()))?
                    .to_vec()
            }
            ParameterType::Array { element, length } => {
                let EncodableValue::List(values) = value else { return Err(mismatch()) };
                self.check_depth(depth)?;

                if *length != 0 && values.len() != *length {
                    return Err(AbiError::ArrayLengthMismatch {
                        expected: *length,
                        actual: values.len(),
                    })
                }

                let elements =
                    self.encode_sequence(core::iter::repeat(element.as_ref()), values, depth + 1)?;
                if *length == 0 {
                    let mut out = usize_word(values.len()).to_vec();
                    out.extend(elements);
                    out
                } else {
                    elements
                }
            }
            ParameterType::Tuple(types) => {
                let values = value.as_sequence().ok_or_else(mismatch)?;
                self.check_depth(depth)?;

                if values.len() != types.len() {
                    return Err(AbiError::TypeCountMismatch {
                        types: types.len(),
                        values: values.len(),
                    })
                }
                self.encode_sequence(types.iter(), values, depth + 1)?
            }
        };

        Ok(encoded)
    }

    fn check_depth(&self, depth: usize) -> Result<(), AbiError> {
        if depth >= self.config.max_depth {
            tracing::trace!(target: "ambrosus::abi", depth, "nesting exceeds limit");
            return Err(AbiError::DepthLimitExceeded(self.config.max_depth))
        }
        Ok(())
    }
}

/// Returns the raw bytes of a value provided for a byte string parameter. Text is decoded as hex
/// if it looks like hex, and used as UTF-8 otherwise.
fn byte_data(value: &EncodableValue) -> Option<Cow<'_, [u8]>> {
    match value {
        EncodableValue::Bytes(bytes) => Some(Cow::Borrowed(bytes)),
        EncodableValue::Text(text) => Some(Cow::Owned(StringEncoding::sniff(text))),
        EncodableValue::Address(address) => Some(Cow::Borrowed(address.as_slice())),
        _ => None,
    }
}

/// Returns the length word followed by the data, right padded to a word boundary.
fn length_prefixed(data: &[u8]) -> Vec<u8> {
    let mut out = usize_word(data.len()).to_vec();
    out.extend(right_pad_to_words(data));
    out
}

fn length_violation(ty: &ParameterType, max: usize, actual: usize) -> AbiError {
    AbiError::LengthViolation { ty: ty.to_string(), max, actual }
}

/// Parses a hex address. Mixed case addresses must carry a valid checksum.
fn parse_address(text: &str) -> Result<Address, AbiError> {
    let invalid = || AbiError::InvalidAddress(text.to_string());
    let digits = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")).unwrap_or(text);
    if digits.len() != 40 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(invalid())
    }

    let mixed_case = digits.bytes().any(|b| b.is_ascii_lowercase()) &&
        digits.bytes().any(|b| b.is_ascii_uppercase());
    if mixed_case {
        return Address::parse_checksummed(["0x", digits].concat(), None).map_err(|_| {
            tracing::trace!(target: "ambrosus::abi", address = text, "invalid address checksum");
            invalid()
        })
    }

    let bytes = hex::decode(digits).map_err(|_| invalid())?;
    Ok(Address::from_slice(&bytes))
}

/// Reads an address from 20 raw bytes, or from a word left padded with zeroes.
fn address_from_bytes(bytes: &[u8]) -> Result<Address, AbiError> {
    match bytes.len() {
        20 => Ok(Address::from_slice(bytes)),
        32 if bytes[..12].iter().all(|b| *b == 0) => Ok(Address::from_slice(&bytes[12..])),
        _ => Err(AbiError::InvalidAddress(hex::encode_prefixed(bytes))),
    }
}
