//! Primitive helpers shared by the ABI and RLP codecs.
//!
//! The crate provides the leaf utilities both codecs build on: big integer parsing from text,
//! fixed width checks, 32-byte word padding and the string interpretation policy.

#![cfg_attr(not(feature = "std"), no_std)]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub use error::NumberError;
mod error;

pub use number::{fits_signed, fits_unsigned, parse_i256, parse_u256, signed_from_i128};
mod number;

pub use strings::{is_hex_like, StringEncoding};
mod strings;

pub mod word;
pub use word::{Word, WORD_SIZE};

/// The default bound on nesting depth for recursive encoding and decoding.
pub const DEFAULT_MAX_DEPTH: usize = 64;
