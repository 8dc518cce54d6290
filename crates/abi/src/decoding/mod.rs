//! Decoding of contract call data, return data and event logs.

pub use params::DecodedParams;
mod params;

use crate::{AbiConfig, AbiError, AbiValue, Element, Event, InOut, ParameterType};
use ambrosus_primitives::{fits_signed, fits_unsigned, word::word_to_usize, WORD_SIZE};
use std::{
    string::{String, ToString},
    vec::Vec,
};

use alloy_primitives::{Address, Bytes, FixedBytes, LogData, Selector, I256, U256};

/// The size of a function selector.
const SELECTOR_SIZE: usize = 4;

/// Decodes buffers with a fixed [`AbiConfig`].
#[derive(Debug, Default, Clone, Copy)]
pub struct AbiDecoder {
    config: AbiConfig,
}

impl AbiDecoder {
    /// Returns a new [`AbiDecoder`] using the provided configuration.
    pub const fn new(config: AbiConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of the decoder.
    pub const fn config(&self) -> &AbiConfig {
        &self.config
    }

    /// Decodes the parameter list described by the types.
    pub fn decode_values(
        &self,
        types: &[ParameterType],
        data: &[u8],
    ) -> Result<Vec<AbiValue>, AbiError> {
        let heads_len = types.iter().try_fold(0usize, |len, ty| {
            len.checked_add(head_size(ty)?).ok_or(AbiError::InvalidOffset)
        })?;
        if data.len() < heads_len {
            tracing::trace!(
                target: "ambrosus::abi",
                expected = heads_len,
                available = data.len(),
                "buffer shorter than heads"
            );
            return Err(AbiError::too_short(heads_len, data.len()))
        }
        self.decode_sequence(types.iter(), data, 0)
    }

    /// Decodes the parameters into a mapping keyed by position and name. A single parameter
    /// decodes from an empty buffer to its empty value.
    pub fn decode(&self, params: &[InOut], data: &[u8]) -> Result<DecodedParams, AbiError> {
        if let ([param], true) = (params, data.is_empty()) {
            let mut decoded = DecodedParams::default();
            decoded.insert(0, &param.name, empty_value(&param.ty)?);
            return Ok(decoded)
        }

        let types: Vec<_> = params.iter().map(|param| param.ty.clone()).collect();
        let values = self.decode_values(&types, data)?;

        let mut decoded = DecodedParams::default();
        for (index, (param, value)) in params.iter().zip(values).enumerate() {
            decoded.insert(index, &param.name, value);
        }
        Ok(decoded)
    }

    /// Decodes the data returned by a call to the element.
    pub fn decode_return_data(
        &self,
        element: &Element,
        data: &[u8],
    ) -> Result<DecodedParams, AbiError> {
        match element {
            Element::Function(function) => self.decode(&function.outputs, data),
            Element::Constructor(_) => Err(AbiError::UnsupportedElement("constructor")),
            Element::Fallback(_) => Err(AbiError::UnsupportedElement("fallback")),
            Element::Event(_) => Err(AbiError::UnsupportedElement("event")),
        }
    }

    /// Decodes the input data of a call to the element. Function inputs may be prefixed with
    /// the selector of the function. Constructors have no selector, so a four byte prefix of
    /// their inputs is dropped without being checked.
    pub fn decode_input_data(
        &self,
        element: &Element,
        data: &[u8],
    ) -> Result<DecodedParams, AbiError> {
        let (selector, data) = split_selector(data)?;
        match element {
            Element::Function(function) => {
                if let Some(actual) = selector {
                    let expected = function.selector();
                    if actual != expected {
                        tracing::trace!(
                            target: "ambrosus::abi",
                            %expected,
                            %actual,
                            "selector mismatch"
                        );
                        return Err(AbiError::SelectorMismatch { expected, actual })
                    }
                }
                self.decode(&function.inputs, data)
            }
            Element::Constructor(constructor) => self.decode(&constructor.inputs, data),
            Element::Fallback(_) => Err(AbiError::UnsupportedElement("fallback")),
            Element::Event(_) => Err(AbiError::UnsupportedElement("event")),
        }
    }

    /// Decodes the non-indexed inputs of the event from the body of the log. Values are keyed by
    /// their position among all the inputs of the event and by their name.
    pub fn decode_log(&self, event: &Event, log: &LogData) -> Result<DecodedParams, AbiError> {
        if !event.anonymous {
            if let Some(actual) = log.topics().first() {
                let expected = event.topic();
                if *actual != expected {
                    tracing::trace!(target: "ambrosus::abi", %expected, %actual, "topic mismatch");
                    return Err(AbiError::TopicMismatch { expected, actual: *actual })
                }
            }
        }

        let (positions, body): (Vec<_>, Vec<_>) = event
            .inputs
            .iter()
            .enumerate()
            .filter(|(_, input)| !input.indexed)
            .map(|(position, input)| ((position, input.name.as_str()), input.ty.clone()))
            .unzip();

        let values = if let ([ty], true) = (body.as_slice(), log.data.is_empty()) {
            Vec::from([empty_value(ty)?])
        } else {
            self.decode_values(&body, &log.data)?
        };

        let mut decoded = DecodedParams::default();
        for ((position, name), value) in positions.into_iter().zip(values) {
            decoded.insert(position, name, value);
        }
        Ok(decoded)
    }

    /// Decodes the values of the block. Static values are read inline from the heads, dynamic
    /// values from the offset held by their head, relative to the start of the block.
    fn decode_sequence<'a>(
        &self,
        types: impl Iterator<Item = &'a ParameterType>,
        data: &[u8],
        depth: usize,
    ) -> Result<Vec<AbiValue>, AbiError> {
        let mut head = 0usize;
        let mut values = Vec::new();
        for ty in types {
            let at = if ty.is_static() { head } else { read_usize(data, head)? };
            values.push(self.decode_value(ty, data, at, depth)?);
            head = head.checked_add(head_size(ty)?).ok_or(AbiError::InvalidOffset)?;
        }
        Ok(values)
    }

    /// Decodes the value of the type located at `at` in the block.
    fn decode_value(
        &self,
        ty: &ParameterType,
        data: &[u8],
        at: usize,
        depth: usize,
    ) -> Result<AbiValue, AbiError> {
        let value = match ty {
            ParameterType::UInt(bits) => {
                let value = U256::from_be_slice(read_word(data, at)?);
                if !fits_unsigned(&value, *bits) {
                    return Err(AbiError::ValueOutOfRange(ty.to_string()))
                }
                AbiValue::Uint(value)
            }
            ParameterType::Int(bits) => {
                let value = I256::from_raw(U256::from_be_slice(read_word(data, at)?));
                if !fits_signed(&value, *bits) {
                    return Err(AbiError::ValueOutOfRange(ty.to_string()))
                }
                AbiValue::Int(value)
            }
            ParameterType::Address => {
                AbiValue::Address(Address::from_slice(&read_word(data, at)?[12..]))
            }
            ParameterType::Bool => match U256::from_be_slice(read_word(data, at)?) {
                value if value == U256::ZERO => AbiValue::Bool(false),
                value if value == U256::from(1) => AbiValue::Bool(true),
                _ => return Err(AbiError::InvalidBool),
            },
            ParameterType::FixedBytes(length) => {
                let bytes = read_word(data, at)?
                    .get(..*length)
                    .ok_or_else(|| AbiError::InvalidType(ty.to_string()))?;
                AbiValue::FixedBytes(Bytes::copy_from_slice(bytes))
            }
            ParameterType::Function => AbiValue::Function(FixedBytes::from_slice(
                &read_word(data, at)?[WORD_SIZE - FixedBytes::<24>::len_bytes()..],
            )),
            ParameterType::DynamicBytes => {
                AbiValue::Bytes(Bytes::copy_from_slice(read_length_prefixed(data, at)?))
            }
            ParameterType::String => {
                let bytes = read_length_prefixed(data, at)?;
                let text = core::str::from_utf8(bytes).map_err(|_| AbiError::InvalidUtf8)?;
                AbiValue::String(String::from(text))
            }
            ParameterType::Array { element, length: 0 } => {
                self.check_depth(depth)?;
                let count = read_usize(data, at)?;
                let start = at.checked_add(WORD_SIZE).ok_or(AbiError::InvalidOffset)?;
                let block = block_at(data, start)?;

                // every element needs at least its head in the block, and no head is empty.
                let required =
                    count.checked_mul(head_size(element)?).ok_or(AbiError::InvalidOffset)?;
                if block.len() < required {
                    return Err(AbiError::too_short(required, block.len()))
                }

                AbiValue::Array(self.decode_sequence(
                    core::iter::repeat(element.as_ref()).take(count),
                    block,
                    depth + 1,
                )?)
            }
            ParameterType::Array { element, length } => {
                self.check_depth(depth)?;
                AbiValue::Array(self.decode_sequence(
                    core::iter::repeat(element.as_ref()).take(*length),
                    block_at(data, at)?,
                    depth + 1,
                )?)
            }
            ParameterType::Tuple(types) => {
                self.check_depth(depth)?;
                AbiValue::Tuple(self.decode_sequence(types.iter(), block_at(data, at)?, depth + 1)?)
            }
        };

        Ok(value)
    }

    fn check_depth(&self, depth: usize) -> Result<(), AbiError> {
        if depth >= self.config.max_depth {
            tracing::trace!(target: "ambrosus::abi", depth, "nesting exceeds limit");
            return Err(AbiError::DepthLimitExceeded(self.config.max_depth))
        }
        Ok(())
    }
}

/// Splits the optional selector from the input data, which must be word aligned once the
/// selector is removed.
fn split_selector(data: &[u8]) -> Result<(Option<Selector>, &[u8]), AbiError> {
    match data.len() % WORD_SIZE {
        0 => Ok((None, data)),
        SELECTOR_SIZE => {
            let (selector, data) = data.split_at(SELECTOR_SIZE);
            Ok((Some(Selector::from_slice(selector)), data))
        }
        _ => {
            tracing::trace!(target: "ambrosus::abi", len = data.len(), "malformed input data");
            Err(AbiError::MalformedInputLength(data.len()))
        }
    }
}

/// Returns the word at `at`.
fn read_word(data: &[u8], at: usize) -> Result<&[u8], AbiError> {
    let end = at.checked_add(WORD_SIZE).ok_or(AbiError::InvalidOffset)?;
    data.get(at..end).ok_or_else(|| AbiError::too_short(end, data.len()))
}

/// Returns the head size of the type, rejecting types without a decodable head.
fn head_size(ty: &ParameterType) -> Result<usize, AbiError> {
    ty.head_size().ok_or_else(|| AbiError::InvalidType(ty.to_string()))
}

/// Returns the empty value of the type, rejecting types too large to build.
fn empty_value(ty: &ParameterType) -> Result<AbiValue, AbiError> {
    ty.empty_value().ok_or_else(|| AbiError::InvalidType(ty.to_string()))
}

/// Reads the word at `at` as an offset or a length.
fn read_usize(data: &[u8], at: usize) -> Result<usize, AbiError> {
    word_to_usize(read_word(data, at)?).ok_or(AbiError::InvalidOffset)
}

/// Returns the block starting at `at`.
fn block_at(data: &[u8], at: usize) -> Result<&[u8], AbiError> {
    data.get(at..).ok_or_else(|| AbiError::too_short(at, data.len()))
}

/// Returns the payload of a length prefixed byte string at `at`.
fn read_length_prefixed(data: &[u8], at: usize) -> Result<&[u8], AbiError> {
    let length = read_usize(data, at)?;
    let start = at.checked_add(WORD_SIZE).ok_or(AbiError::InvalidOffset)?;
    let end = start.checked_add(length).ok_or(AbiError::InvalidOffset)?;
    data.get(start..end).ok_or_else(|| AbiError::too_short(end, data.len()))
}

/// Decodes the parameter list described by the types using the default configuration.
pub fn decode_values(types: &[ParameterType], data: &[u8]) -> Result<Vec<AbiValue>, AbiError> {
    AbiDecoder::default().decode_values(types, data)
}

/// Decodes the parameters into a mapping keyed by position and name using the default
/// configuration.
pub fn decode(params: &[InOut], data: &[u8]) -> Result<DecodedParams, AbiError> {
    AbiDecoder::default().decode(params, data)
}
