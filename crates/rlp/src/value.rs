use std::{string::String, vec::Vec};

use alloy_primitives::{Bytes, U256};

/// A value that can be RLP encoded.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::From)]
pub enum RlpValue {
    /// A raw byte string.
    Bytes(Bytes),
    /// An unsigned integer, encoded as its minimal big-endian byte string.
    Uint(U256),
    /// Text, turned into a byte string according to the configured
    /// [`StringEncoding`](ambrosus_primitives::StringEncoding).
    Text(String),
    /// A list of values.
    List(Vec<RlpValue>),
}

impl From<&[u8]> for RlpValue {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(value))
    }
}

impl From<Vec<u8>> for RlpValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value.into())
    }
}

impl From<&str> for RlpValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<u64> for RlpValue {
    fn from(value: u64) -> Self {
        Self::Uint(U256::from(value))
    }
}
