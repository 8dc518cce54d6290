//! ABI parameter types and their classification.

use crate::{AbiError, AbiValue};
use ambrosus_primitives::WORD_SIZE;
use std::{
    boxed::Box,
    fmt,
    str::FromStr,
    string::{String, ToString},
    vec,
    vec::Vec,
};

use alloy_primitives::{Address, Bytes, FixedBytes, I256, U256};

/// The type of a contract parameter.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParameterType {
    /// An unsigned integer of the provided bit width.
    UInt(usize),
    /// A signed integer of the provided bit width.
    Int(usize),
    /// A 20-byte address.
    Address,
    /// A boolean.
    Bool,
    /// A byte string of the provided length, at most one word.
    FixedBytes(usize),
    /// A byte string of any length.
    DynamicBytes,
    /// A UTF-8 string.
    String,
    /// An array of elements. A length of zero denotes a dynamic size array.
    Array {
        /// The type of the elements.
        element: Box<ParameterType>,
        /// The number of elements, zero for a dynamic size array.
        length: usize,
    },
    /// An ordered list of heterogeneous elements.
    Tuple(Vec<ParameterType>),
    /// A function reference: an address followed by a selector.
    Function,
}

/// The largest number of bytes a static type may occupy in the head of its enclosing block.
pub const MAX_STATIC_SIZE: usize = 1 << 20;

/// The size class of an array-like type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArraySize {
    /// A fixed number of elements or bytes.
    StaticSize(usize),
    /// A number of elements or bytes only known from the value.
    DynamicSize,
    /// Any other type.
    NotArray,
}

impl ParameterType {
    /// Returns a fixed size array of `length` elements.
    pub fn array(element: Self, length: usize) -> Self {
        Self::Array { element: Box::new(element), length }
    }

    /// Returns a dynamic size array of elements.
    pub fn dynamic_array(element: Self) -> Self {
        Self::array(element, 0)
    }

    /// Returns true if the encoding of the type has a fixed size and is placed inline in the
    /// head of its enclosing block.
    pub fn is_static(&self) -> bool {
        match self {
            Self::UInt(_) |
            Self::Int(_) |
            Self::Address |
            Self::Bool |
            Self::FixedBytes(_) |
            Self::Function => true,
            Self::DynamicBytes | Self::String => false,
            Self::Array { element, length } => *length != 0 && element.is_static(),
            Self::Tuple(types) => types.iter().all(Self::is_static),
        }
    }

    /// Returns the size class of the type. Byte strings are classified like arrays of bytes.
    pub const fn array_size(&self) -> ArraySize {
        match self {
            Self::Array { length: 0, .. } | Self::DynamicBytes | Self::String => {
                ArraySize::DynamicSize
            }
            Self::Array { length, .. } | Self::FixedBytes(length) => ArraySize::StaticSize(*length),
            _ => ArraySize::NotArray,
        }
    }

    /// Returns the number of bytes the type occupies in the head of its enclosing block.
    ///
    /// Returns [`None`] for empty tuples, which occupy no bytes, and for static types larger
    /// than [`MAX_STATIC_SIZE`].
    pub fn head_size(&self) -> Option<usize> {
        if !self.is_static() {
            return Some(WORD_SIZE)
        }
        let size = match self {
            Self::Array { element, length } => element.head_size()?.checked_mul(*length)?,
            Self::Tuple(types) if types.is_empty() => return None,
            Self::Tuple(types) => types
                .iter()
                .try_fold(0usize, |size, ty| size.checked_add(ty.head_size()?))?,
            _ => WORD_SIZE,
        };
        (size <= MAX_STATIC_SIZE).then_some(size)
    }

    /// Returns the value used when a single value decodes from an empty buffer. Returns [`None`]
    /// for the types without a head size, and for values built from more than
    /// `2 * MAX_STATIC_SIZE / WORD_SIZE` arrays, tuples and scalars.
    pub fn empty_value(&self) -> Option<AbiValue> {
        self.head_size()?;
        let mut budget = 2 * MAX_STATIC_SIZE / WORD_SIZE;
        self.zero_value(&mut budget)
    }

    fn zero_value(&self, budget: &mut usize) -> Option<AbiValue> {
        *budget = budget.checked_sub(1)?;
        let value = match self {
            Self::UInt(_) => AbiValue::Uint(U256::ZERO),
            Self::Int(_) => AbiValue::Int(I256::ZERO),
            Self::Address => AbiValue::Address(Address::ZERO),
            Self::Bool => AbiValue::Bool(false),
            Self::FixedBytes(length) => AbiValue::FixedBytes(vec![0u8; *length].into()),
            Self::DynamicBytes => AbiValue::Bytes(Bytes::new()),
            Self::String => AbiValue::String(String::new()),
            Self::Array { length: 0, .. } => AbiValue::Array(Vec::new()),
            Self::Array { element, length } => {
                if *length > *budget {
                    return None
                }
                AbiValue::Array(
                    (0..*length).map(|_| element.zero_value(budget)).collect::<Option<_>>()?,
                )
            }
            Self::Tuple(types) => AbiValue::Tuple(
                types.iter().map(|ty| ty.zero_value(budget)).collect::<Option<_>>()?,
            ),
            Self::Function => AbiValue::Function(FixedBytes::ZERO),
        };
        Some(value)
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UInt(bits) => write!(f, "uint{bits}"),
            Self::Int(bits) => write!(f, "int{bits}"),
            Self::Address => f.write_str("address"),
            Self::Bool => f.write_str("bool"),
            Self::FixedBytes(length) => write!(f, "bytes{length}"),
            Self::DynamicBytes => f.write_str("bytes"),
            Self::String => f.write_str("string"),
            Self::Array { element, length: 0 } => write!(f, "{element}[]"),
            Self::Array { element, length } => write!(f, "{element}[{length}]"),
            Self::Tuple(types) => {
                f.write_str("(")?;
                for (i, ty) in types.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    write!(f, "{ty}")?;
                }
                f.write_str(")")
            }
            Self::Function => f.write_str("function"),
        }
    }
}

impl FromStr for ParameterType {
    type Err = AbiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || AbiError::InvalidType(s.to_string());
        let s = s.trim();

        if let Some(rest) = s.strip_suffix(']') {
            let open = rest.rfind('[').ok_or_else(invalid)?;
            let element = rest[..open].parse::<Self>()?;
            let length = match &rest[open + 1..] {
                "" => 0,
                digits => match digits.parse::<usize>() {
                    Ok(length) if length > 0 => length,
                    _ => return Err(invalid()),
                },
            };
            return Ok(Self::array(element, length))
        }

        if let Some(inner) = s.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
            return split_components(inner)
                .ok_or_else(invalid)?
                .into_iter()
                .map(str::parse::<Self>)
                .collect::<Result<_, _>>()
                .map(Self::Tuple)
        }

        let ty = match s {
            "address" => Self::Address,
            "bool" => Self::Bool,
            "string" => Self::String,
            "bytes" => Self::DynamicBytes,
            "function" => Self::Function,
            "uint" => Self::UInt(256),
            "int" => Self::Int(256),
            _ => {
                if let Some(bits) = s.strip_prefix("uint") {
                    Self::UInt(parse_bits(bits).ok_or_else(invalid)?)
                } else if let Some(bits) = s.strip_prefix("int") {
                    Self::Int(parse_bits(bits).ok_or_else(invalid)?)
                } else if let Some(length) = s.strip_prefix("bytes") {
                    match length.parse::<usize>() {
                        Ok(length) if (1..=WORD_SIZE).contains(&length) => Self::FixedBytes(length),
                        _ => return Err(invalid()),
                    }
                } else {
                    return Err(invalid())
                }
            }
        };
        Ok(ty)
    }
}

/// Parses an integer width, which must be a multiple of 8 between 8 and 256.
fn parse_bits(bits: &str) -> Option<usize> {
    let bits = bits.parse::<usize>().ok()?;
    (bits % 8 == 0 && (8..=256).contains(&bits)).then_some(bits)
}

/// Splits the components of a tuple on the commas which are not nested in parentheses.
fn split_components(inner: &str) -> Option<Vec<&str>> {
    if inner.trim().is_empty() {
        return Some(Vec::new())
    }

    let mut components = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => depth = depth.checked_sub(1)?,
            ',' if depth == 0 => {
                components.push(&inner[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    if depth != 0 {
        return None
    }
    components.push(&inner[start..]);
    Some(components)
}
