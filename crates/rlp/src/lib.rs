//! Recursive Length Prefix encoding and decoding.
//!
//! Byte strings, integers, text and arbitrarily nested lists are encoded with [`encode`] (or an
//! [`RlpEncoder`] carrying a custom [`RlpConfig`]). Decoding produces an immutable [`RlpItem`]
//! tree which is read sequentially through an [`RlpCursor`].

#![cfg_attr(not(feature = "std"), no_std)]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub use config::RlpConfig;
mod config;

pub use decode::{decode, decode_stream, Header, RlpDecoder};
mod decode;

pub use encode::{encode, encode_bytes, encode_list, encode_u256, encode_u64, RlpEncoder};
mod encode;

pub use error::RlpError;
mod error;

pub use item::{RlpCursor, RlpItem};
mod item;

pub use value::RlpValue;
mod value;

/// The offset added to the length of a byte string in its prefix.
pub const STRING_OFFSET: u8 = 0x80;

/// The offset added to the payload length of a list in its prefix.
pub const LIST_OFFSET: u8 = 0xc0;

/// Payloads shorter than this use a single byte prefix.
pub const SHORT_PAYLOAD_LIMIT: usize = 56;
