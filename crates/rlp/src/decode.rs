//! RLP decoding.

use crate::{RlpConfig, RlpError, RlpItem, LIST_OFFSET, STRING_OFFSET};
use std::vec::Vec;

use alloy_primitives::Bytes;

/// The header of an encoded item, classified from its prefix byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// The number of bytes preceding the payload.
    pub offset: usize,
    /// The length of the payload.
    pub length: usize,
    /// True if the payload is a list.
    pub list: bool,
}

impl Header {
    /// Decodes the header of the first item in the buffer and checks the buffer holds its whole
    /// payload.
    pub fn decode(buf: &[u8]) -> Result<Self, RlpError> {
        let prefix = *buf.first().ok_or(RlpError::BufferTooShort { expected: 1, available: 0 })?;

        let header = match prefix {
            0x00..=0x7f => Self { offset: 0, length: 1, list: false },
            0x80..=0xb7 => {
                Self { offset: 1, length: (prefix - STRING_OFFSET) as usize, list: false }
            }
            0xb8..=0xbf => {
                let length_of_length = (prefix - 0xb7) as usize;
                Self {
                    offset: 1 + length_of_length,
                    length: read_length(&buf[1..], length_of_length)?,
                    list: false,
                }
            }
            0xc0..=0xf7 => Self { offset: 1, length: (prefix - LIST_OFFSET) as usize, list: true },
            0xf8..=0xff => {
                let length_of_length = (prefix - 0xf7) as usize;
                Self {
                    offset: 1 + length_of_length,
                    length: read_length(&buf[1..], length_of_length)?,
                    list: true,
                }
            }
        };

        let expected = header.length_with_payload()?;
        if buf.len() < expected {
            return Err(RlpError::BufferTooShort { expected, available: buf.len() })
        }

        Ok(header)
    }

    /// Returns the length of the header and the payload.
    pub fn length_with_payload(&self) -> Result<usize, RlpError> {
        self.offset.checked_add(self.length).ok_or(RlpError::LengthOverflow)
    }
}

/// Reads a big-endian length of `length_of_length` bytes.
fn read_length(buf: &[u8], length_of_length: usize) -> Result<usize, RlpError> {
    let bytes = buf.get(..length_of_length).ok_or(RlpError::BufferTooShort {
        expected: length_of_length + 1,
        available: buf.len() + 1,
    })?;
    if length_of_length > core::mem::size_of::<usize>() {
        return Err(RlpError::LengthOverflow)
    }
    Ok(bytes.iter().fold(0usize, |acc, b| (acc << 8) | *b as usize))
}

/// Decodes buffers with a fixed [`RlpConfig`].
#[derive(Debug, Default, Clone, Copy)]
pub struct RlpDecoder {
    config: RlpConfig,
}

impl RlpDecoder {
    /// Returns a new [`RlpDecoder`] using the provided configuration.
    pub const fn new(config: RlpConfig) -> Self {
        Self { config }
    }

    /// Decodes the single item held by the buffer. An empty buffer decodes to
    /// [`RlpItem::NoItem`].
    pub fn decode(&self, buf: &[u8]) -> Result<RlpItem, RlpError> {
        if buf.is_empty() {
            return Ok(RlpItem::NoItem)
        }

        let header = Header::decode(buf)?;
        let consumed = header.length_with_payload()?;
        if consumed != buf.len() {
            tracing::trace!(
                target: "ambrosus::rlp",
                consumed,
                available = buf.len(),
                "trailing bytes after item"
            );
            return Err(RlpError::TrailingBytes { consumed, available: buf.len() })
        }

        self.decode_item(buf, header, 0)
    }

    /// Decodes every item of the buffer, consuming it until exhausted.
    pub fn decode_stream(&self, buf: &[u8]) -> Result<Vec<RlpItem>, RlpError> {
        self.decode_items(buf, 0)
    }

    fn decode_items(&self, mut buf: &[u8], depth: usize) -> Result<Vec<RlpItem>, RlpError> {
        let mut items = Vec::new();
        while !buf.is_empty() {
            let header = Header::decode(buf)?;
            let consumed = header.length_with_payload()?;
            items.push(self.decode_item(buf, header, depth)?);
            buf = &buf[consumed..];
        }
        Ok(items)
    }

    fn decode_item(&self, buf: &[u8], header: Header, depth: usize) -> Result<RlpItem, RlpError> {
        let payload = &buf[header.offset..header.offset + header.length];
        if !header.list {
            return Ok(RlpItem::Data(Bytes::copy_from_slice(payload)))
        }

        if depth >= self.config.max_depth {
            tracing::trace!(target: "ambrosus::rlp", depth, "list nesting exceeds limit");
            return Err(RlpError::DepthLimitExceeded(self.config.max_depth))
        }
        Ok(RlpItem::List(self.decode_items(payload, depth + 1)?))
    }
}

/// Decodes the single item held by the buffer using the default configuration.
pub fn decode(buf: &[u8]) -> Result<RlpItem, RlpError> {
    RlpDecoder::default().decode(buf)
}

/// Decodes every item of the buffer using the default configuration.
pub fn decode_stream(buf: &[u8]) -> Result<Vec<RlpItem>, RlpError> {
    RlpDecoder::default().decode_stream(buf)
}
