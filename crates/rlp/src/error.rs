/// An error occurring while decoding or reading RLP data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RlpError {
    /// The buffer ends before the length announced by a prefix.
    #[error("buffer too short: expected {expected} bytes, got {available}")]
    BufferTooShort {
        /// The number of bytes the prefix requires.
        expected: usize,
        /// The number of bytes left in the buffer.
        available: usize,
    },
    /// The length of a payload does not fit in a [`usize`].
    #[error("payload length overflows")]
    LengthOverflow,
    /// The buffer holds more than a single top level item.
    #[error("trailing bytes: item ends at {consumed} of {available} bytes")]
    TrailingBytes {
        /// The number of bytes consumed by the first item.
        consumed: usize,
        /// The total length of the buffer.
        available: usize,
    },
    /// Lists are nested deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {0}")]
    DepthLimitExceeded(usize),
    /// A byte string was found where a list was expected.
    #[error("unexpected byte string, expected a list")]
    UnexpectedData,
    /// A list was found where a byte string was expected.
    #[error("unexpected list, expected a byte string")]
    UnexpectedList,
    /// The cursor has no more items.
    #[error("no more items in the list")]
    EndOfList,
    /// An integer payload is wider than 256 bits.
    #[error("integer payload of {0} bytes overflows 256 bits")]
    IntegerOverflow(usize),
}
