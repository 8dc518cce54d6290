//! Contract ABI encoding and decoding.
//!
//! Parameter lists are described by [`ParameterType`]s and filled with [`EncodableValue`]s. The
//! [`AbiEncoder`] lays them out in 32-byte words using the head/tail scheme and the
//! [`AbiDecoder`] reads them back into [`AbiValue`]s, keyed by position and by name in
//! [`DecodedParams`]. Function, constructor and event descriptors ([`Element`]) add selector
//! handling on top.

#![cfg_attr(not(feature = "std"), no_std)]
#[cfg(not(feature = "std"))]
extern crate alloc as std;

pub use config::AbiConfig;
mod config;

pub mod decoding;
pub use decoding::{decode, decode_values, AbiDecoder, DecodedParams};

pub use element::{Constructor, Element, Event, EventInput, Fallback, Function, InOut};
mod element;

pub mod encoding;
pub use encoding::{encode, encode_single, AbiEncoder};

pub use error::AbiError;
mod error;

pub use types::{ArraySize, ParameterType, MAX_STATIC_SIZE};
mod types;

pub use value::{AbiValue, EncodableValue};
mod value;
