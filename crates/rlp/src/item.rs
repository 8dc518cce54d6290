//! Decoded RLP items and their sequential reader.

use crate::RlpError;
use std::vec::Vec;

use alloy_primitives::{Bytes, U256};

/// A decoded RLP item.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RlpItem {
    /// The decoding of an empty buffer.
    NoItem,
    /// A byte string.
    Data(Bytes),
    /// A list of items.
    List(Vec<RlpItem>),
}

impl RlpItem {
    /// Returns true if the item is a byte string.
    pub const fn is_data(&self) -> bool {
        matches!(self, Self::Data(_))
    }

    /// Returns true if the item is a list.
    pub const fn is_list(&self) -> bool {
        matches!(self, Self::List(_))
    }

    /// Returns the number of items for a list, [`None`] otherwise.
    pub fn len(&self) -> Option<usize> {
        match self {
            Self::List(items) => Some(items.len()),
            Self::NoItem | Self::Data(_) => None,
        }
    }

    /// Returns the item at the index for a list.
    pub fn get(&self, index: usize) -> Option<&Self> {
        match self {
            Self::List(items) => items.get(index),
            Self::NoItem | Self::Data(_) => None,
        }
    }

    /// Returns the bytes for a byte string.
    pub const fn data(&self) -> Option<&Bytes> {
        match self {
            Self::Data(data) => Some(data),
            Self::NoItem | Self::List(_) => None,
        }
    }

    /// Interprets a byte string as a big-endian unsigned integer.
    pub fn as_u256(&self) -> Result<U256, RlpError> {
        match self {
            Self::Data(data) => {
                U256::try_from_be_slice(data).ok_or(RlpError::IntegerOverflow(data.len()))
            }
            Self::List(_) => Err(RlpError::UnexpectedList),
            Self::NoItem => Err(RlpError::EndOfList),
        }
    }

    /// Returns a cursor over the items of a list. The cursor is empty for any other item.
    pub fn cursor(&self) -> RlpCursor<'_> {
        match self {
            Self::List(items) => RlpCursor::new(items),
            Self::NoItem | Self::Data(_) => RlpCursor::new(&[]),
        }
    }
}

/// Reads the items of a decoded list in order.
#[derive(Debug, Clone)]
pub struct RlpCursor<'a> {
    items: &'a [RlpItem],
    position: usize,
}

impl<'a> RlpCursor<'a> {
    /// Returns a cursor positioned on the first of the items.
    pub const fn new(items: &'a [RlpItem]) -> Self {
        Self { items, position: 0 }
    }

    /// Returns true if items remain to be read.
    pub const fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    /// Returns the index of the next item.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Returns the number of items left.
    pub const fn remaining(&self) -> usize {
        self.items.len() - self.position
    }

    /// Reads the next item, which must be a byte string.
    pub fn next_data(&mut self) -> Result<&'a Bytes, RlpError> {
        match self.next().ok_or(RlpError::EndOfList)? {
            RlpItem::Data(data) => Ok(data),
            RlpItem::List(_) => Err(RlpError::UnexpectedList),
            RlpItem::NoItem => Err(RlpError::EndOfList),
        }
    }

    /// Reads the next item as a big-endian unsigned integer.
    pub fn next_u256(&mut self) -> Result<U256, RlpError> {
        self.next().ok_or(RlpError::EndOfList)?.as_u256()
    }

    /// Reads the next item, which must be a list, and returns a cursor over it.
    pub fn next_list(&mut self) -> Result<RlpCursor<'a>, RlpError> {
        match self.next().ok_or(RlpError::EndOfList)? {
            RlpItem::List(items) => Ok(RlpCursor::new(items)),
            RlpItem::Data(_) => Err(RlpError::UnexpectedData),
            RlpItem::NoItem => Err(RlpError::EndOfList),
        }
    }
}

impl<'a> Iterator for RlpCursor<'a> {
    type Item = &'a RlpItem;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.items.get(self.position)?;
        self.position += 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining(), Some(self.remaining()))
    }
}

impl ExactSizeIterator for RlpCursor<'_> {}
