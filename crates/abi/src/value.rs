//! Values provided to the encoder and returned by the decoder.

use ambrosus_primitives::signed_from_i128;
use std::{string::String, vec::Vec};

use alloy_primitives::{Address, Bytes, FixedBytes, I256, U256};

/// A value provided for encoding. The encoder coerces it into the declared
/// [`ParameterType`](crate::ParameterType), failing if the shapes do not match.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EncodableValue {
    /// An unsigned integer.
    Uint(U256),
    /// A signed integer.
    Int(I256),
    /// Raw bytes.
    Bytes(Bytes),
    /// Text. Numeric types parse it as a decimal or hex number, addresses as a hex address and
    /// byte types as hex if it looks like hex.
    Text(String),
    /// An address.
    Address(Address),
    /// A boolean.
    Bool(bool),
    /// The elements of an array.
    List(Vec<EncodableValue>),
    /// The components of a tuple.
    Nested(Vec<EncodableValue>),
}

impl EncodableValue {
    /// Returns a [`EncodableValue::List`] from the values.
    pub fn list<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::List(values.into_iter().map(Into::into).collect())
    }

    /// Returns a [`EncodableValue::Nested`] from the values.
    pub fn nested<I, T>(values: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Self>,
    {
        Self::Nested(values.into_iter().map(Into::into).collect())
    }

    /// Returns the name of the kind of value.
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Uint(_) => "unsigned integer",
            Self::Int(_) => "signed integer",
            Self::Bytes(_) => "bytes",
            Self::Text(_) => "text",
            Self::Address(_) => "address",
            Self::Bool(_) => "bool",
            Self::List(_) => "list",
            Self::Nested(_) => "tuple",
        }
    }

    /// Returns the elements of a list or a tuple.
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::List(values) | Self::Nested(values) => Some(values),
            _ => None,
        }
    }
}

macro_rules! impl_from_unsigned {
    ($($ty:ty),*) => {$(
        impl From<$ty> for EncodableValue {
            fn from(value: $ty) -> Self {
                Self::Uint(U256::from(value))
            }
        }
    )*};
}

macro_rules! impl_from_signed {
    ($($ty:ty),*) => {$(
        impl From<$ty> for EncodableValue {
            fn from(value: $ty) -> Self {
                Self::Int(signed_from_i128(value as i128))
            }
        }
    )*};
}

impl_from_unsigned!(u8, u16, u32, u64, u128, usize);
impl_from_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_from_variant {
    ($($ty:ty => $variant:ident),*) => {$(
        impl From<$ty> for EncodableValue {
            fn from(value: $ty) -> Self {
                Self::$variant(value)
            }
        }
    )*};
}

impl_from_variant!(
    U256 => Uint,
    I256 => Int,
    Bytes => Bytes,
    String => Text,
    Address => Address,
    bool => Bool,
    Vec<EncodableValue> => List
);

impl From<&str> for EncodableValue {
    fn from(value: &str) -> Self {
        Self::Text(value.into())
    }
}

impl From<&[u8]> for EncodableValue {
    fn from(value: &[u8]) -> Self {
        Self::Bytes(Bytes::copy_from_slice(value))
    }
}

impl From<Vec<u8>> for EncodableValue {
    fn from(value: Vec<u8>) -> Self {
        Self::Bytes(value.into())
    }
}

impl<const N: usize> From<FixedBytes<N>> for EncodableValue {
    fn from(value: FixedBytes<N>) -> Self {
        Self::Bytes(Bytes::copy_from_slice(value.as_slice()))
    }
}

/// A decoded value, in the canonical form of its [`ParameterType`](crate::ParameterType).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AbiValue {
    /// An unsigned integer.
    Uint(U256),
    /// A signed integer.
    Int(I256),
    /// An address.
    Address(Address),
    /// A boolean.
    Bool(bool),
    /// A fixed length byte string.
    FixedBytes(Bytes),
    /// A dynamic length byte string.
    Bytes(Bytes),
    /// A string.
    String(String),
    /// The elements of an array.
    Array(Vec<AbiValue>),
    /// The components of a tuple.
    Tuple(Vec<AbiValue>),
    /// A function reference: an address followed by a selector.
    Function(FixedBytes<24>),
}

impl AbiValue {
    /// Returns the value of an unsigned integer.
    pub const fn as_uint(&self) -> Option<&U256> {
        match self {
            Self::Uint(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the value of a signed integer.
    pub const fn as_int(&self) -> Option<&I256> {
        match self {
            Self::Int(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the address.
    pub const fn as_address(&self) -> Option<&Address> {
        match self {
            Self::Address(address) => Some(address),
            _ => None,
        }
    }

    /// Returns the boolean.
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the bytes of a fixed or dynamic length byte string.
    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Self::FixedBytes(bytes) | Self::Bytes(bytes) => Some(bytes),
            Self::Function(function) => Some(function.as_slice()),
            _ => None,
        }
    }

    /// Returns the string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(value) => Some(value),
            _ => None,
        }
    }

    /// Returns the elements of an array or the components of a tuple.
    pub fn as_sequence(&self) -> Option<&[Self]> {
        match self {
            Self::Array(values) | Self::Tuple(values) => Some(values),
            _ => None,
        }
    }
}

impl From<AbiValue> for EncodableValue {
    fn from(value: AbiValue) -> Self {
        match value {
            AbiValue::Uint(value) => Self::Uint(value),
            AbiValue::Int(value) => Self::Int(value),
            AbiValue::Address(address) => Self::Address(address),
            AbiValue::Bool(value) => Self::Bool(value),
            AbiValue::FixedBytes(bytes) | AbiValue::Bytes(bytes) => Self::Bytes(bytes),
            AbiValue::String(value) => Self::Text(value),
            AbiValue::Array(values) => Self::list(values),
            AbiValue::Tuple(values) => Self::nested(values),
            AbiValue::Function(function) => function.into(),
        }
    }
}
