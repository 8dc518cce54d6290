//! RLP encoding.

use crate::{RlpConfig, RlpValue, LIST_OFFSET, SHORT_PAYLOAD_LIMIT, STRING_OFFSET};
use std::vec::Vec;

use alloy_primitives::U256;

/// Encodes values with a fixed [`RlpConfig`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RlpEncoder {
    config: RlpConfig,
}

impl RlpEncoder {
    /// Returns a new [`RlpEncoder`] using the provided configuration.
    pub const fn new(config: RlpConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration of the encoder.
    pub const fn config(&self) -> &RlpConfig {
        &self.config
    }

    /// Encodes the value.
    pub fn encode(&self, value: &RlpValue) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_into(value, &mut out);
        out
    }

    /// Encodes the values as a list.
    pub fn encode_list(&self, values: &[RlpValue]) -> Vec<u8> {
        let mut out = Vec::new();
        self.encode_list_into(values, &mut out);
        out
    }

    fn encode_into(&self, value: &RlpValue, out: &mut Vec<u8>) {
        match value {
            RlpValue::Bytes(bytes) => encode_bytes_into(bytes, out),
            RlpValue::Uint(value) => encode_bytes_into(&minimal_be_bytes(value), out),
            RlpValue::Text(text) => encode_bytes_into(&self.config.strings.to_bytes(text), out),
            RlpValue::List(values) => self.encode_list_into(values, out),
        }
    }

    fn encode_list_into(&self, values: &[RlpValue], out: &mut Vec<u8>) {
        let mut payload = Vec::new();
        for value in values {
            self.encode_into(value, &mut payload);
        }
        encode_length(payload.len(), LIST_OFFSET, out);
        out.extend_from_slice(&payload);
    }
}

/// Encodes the value using the default configuration.
pub fn encode(value: &RlpValue) -> Vec<u8> {
    RlpEncoder::default().encode(value)
}

/// Encodes the values as a list using the default configuration.
pub fn encode_list(values: &[RlpValue]) -> Vec<u8> {
    RlpEncoder::default().encode_list(values)
}

/// Encodes the byte string.
pub fn encode_bytes(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() + 1);
    encode_bytes_into(data, &mut out);
    out
}

/// Encodes the integer as its minimal big-endian byte string. Zero encodes as the empty string.
pub fn encode_u256(value: &U256) -> Vec<u8> {
    encode_bytes(&minimal_be_bytes(value))
}

/// Encodes the integer as its minimal big-endian byte string.
pub fn encode_u64(value: u64) -> Vec<u8> {
    encode_u256(&U256::from(value))
}

fn encode_bytes_into(data: &[u8], out: &mut Vec<u8>) {
    // a single byte below the string offset is its own encoding.
    if let [byte] = data {
        if *byte < STRING_OFFSET {
            out.push(*byte);
            return
        }
    }
    encode_length(data.len(), STRING_OFFSET, out);
    out.extend_from_slice(data);
}

/// Writes the prefix for a payload of `len` bytes.
fn encode_length(len: usize, offset: u8, out: &mut Vec<u8>) {
    if len < SHORT_PAYLOAD_LIMIT {
        out.push(offset + len as u8);
    } else {
        let be = minimal_be_bytes(&U256::from(len));
        out.push(offset + 55 + be.len() as u8);
        out.extend_from_slice(&be);
    }
}

/// Returns the big-endian bytes of the value without leading zeroes.
fn minimal_be_bytes(value: &U256) -> Vec<u8> {
    let bytes = value.to_be_bytes::<32>();
    let start = bytes.iter().position(|b| *b != 0).unwrap_or(bytes.len());
    bytes[start..].to_vec()
}
