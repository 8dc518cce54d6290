use std::string::String;

/// An error occurring when converting a value into a big integer.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NumberError {
    /// The text is neither a decimal nor a hexadecimal number.
    #[error("invalid number: {0:?}")]
    InvalidText(String),
    /// The value does not fit in 256 bits.
    #[error("number overflows 256 bits")]
    Overflow,
    /// A negative value was provided where an unsigned one is expected.
    #[error("negative value for an unsigned integer")]
    Negative,
}
