use ambrosus_primitives::NumberError;
use std::string::String;

use alloy_primitives::{Selector, B256};

/// An error occurring while encoding or decoding ABI data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AbiError {
    /// The number of values does not match the number of types.
    #[error("expected {types} values, got {values}")]
    TypeCountMismatch {
        /// The number of types.
        types: usize,
        /// The number of values.
        values: usize,
    },
    /// The value cannot be encoded as the declared type.
    #[error("cannot encode {found} as {expected}")]
    TypeMismatch {
        /// The declared type.
        expected: String,
        /// The kind of value provided.
        found: &'static str,
    },
    /// The integer does not fit the declared width.
    #[error("value out of range for {0}")]
    ValueOutOfRange(String),
    /// The text could not be converted into a number.
    #[error(transparent)]
    Number(#[from] NumberError),
    /// The address is malformed or fails the checksum.
    #[error("invalid address: {0}")]
    InvalidAddress(String),
    /// The value is longer than the declared type allows.
    #[error("{actual} bytes exceed the {max} bytes of {ty}")]
    LengthViolation {
        /// The declared type.
        ty: String,
        /// The maximum length of the type.
        max: usize,
        /// The length of the value.
        actual: usize,
    },
    /// The number of elements does not match the length of a fixed size array.
    #[error("expected {expected} array elements, got {actual}")]
    ArrayLengthMismatch {
        /// The declared length.
        expected: usize,
        /// The number of elements provided.
        actual: usize,
    },
    /// The buffer is too short for the data it declares.
    #[error("buffer too short: expected {expected} bytes, got {available}")]
    BufferTooShort {
        /// The number of bytes required.
        expected: usize,
        /// The number of bytes available.
        available: usize,
    },
    /// An offset or a length does not fit in a [`usize`].
    #[error("invalid offset or length")]
    InvalidOffset,
    /// A boolean word holds a value other than zero or one.
    #[error("invalid boolean word")]
    InvalidBool,
    /// A string is not valid UTF-8.
    #[error("invalid utf-8 string")]
    InvalidUtf8,
    /// The input data is neither word aligned nor prefixed by a selector.
    #[error("malformed input data of {0} bytes")]
    MalformedInputLength(usize),
    /// The selector of the input data does not match the function.
    #[error("selector mismatch: expected {expected}, got {actual}")]
    SelectorMismatch {
        /// The selector of the function.
        expected: Selector,
        /// The selector found in the data.
        actual: Selector,
    },
    /// The first topic of a log does not match the event.
    #[error("topic mismatch: expected {expected}, got {actual}")]
    TopicMismatch {
        /// The topic of the event.
        expected: B256,
        /// The topic found in the log.
        actual: B256,
    },
    /// The operation is not defined for the element.
    #[error("operation unsupported for {0}")]
    UnsupportedElement(&'static str),
    /// The type string cannot be parsed.
    #[error("invalid type: {0}")]
    InvalidType(String),
    /// Arrays and tuples are nested deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {0}")]
    DepthLimitExceeded(usize),
}

impl AbiError {
    /// Returns a [`AbiError::BufferTooShort`] error.
    pub(crate) const fn too_short(expected: usize, available: usize) -> Self {
        Self::BufferTooShort { expected, available }
    }
}
