//! Helpers for 32-byte words, the atomic slot of the ABI encoding.

use std::vec::Vec;

use alloy_primitives::U256;

/// The size in bytes of a word.
pub const WORD_SIZE: usize = 32;

/// A 32-byte big-endian word.
pub type Word = [u8; WORD_SIZE];

/// Returns the word holding the big-endian representation of the value.
pub fn u256_word(value: &U256) -> Word {
    value.to_be_bytes::<WORD_SIZE>()
}

/// Returns the word holding the big-endian representation of the value.
pub fn usize_word(value: usize) -> Word {
    u256_word(&U256::from(value))
}

/// Reads the word as an offset or a length. Returns [`None`] if the value does not fit a
/// [`usize`].
pub fn word_to_usize(word: &[u8]) -> Option<usize> {
    let value = U256::try_from_be_slice(word)?;
    let value = u64::try_from(value).ok()?;
    usize::try_from(value).ok()
}

/// Left pads the data with zeroes to a full word. Returns [`None`] if the data is longer than a
/// word.
pub fn left_pad_word(data: &[u8]) -> Option<Word> {
    if data.len() > WORD_SIZE {
        return None
    }
    let mut word = [0u8; WORD_SIZE];
    word[WORD_SIZE - data.len()..].copy_from_slice(data);
    Some(word)
}

/// Right pads the data with zeroes to a full word. Returns [`None`] if the data is longer than a
/// word.
pub fn right_pad_word(data: &[u8]) -> Option<Word> {
    if data.len() > WORD_SIZE {
        return None
    }
    let mut word = [0u8; WORD_SIZE];
    word[..data.len()].copy_from_slice(data);
    Some(word)
}

/// Returns the number of words required to hold `len` bytes.
pub const fn words_for(len: usize) -> usize {
    len.div_ceil(WORD_SIZE)
}

/// Copies the data, right padded with zeroes up to the next word boundary.
pub fn right_pad_to_words(data: &[u8]) -> Vec<u8> {
    let mut padded = Vec::with_capacity(words_for(data.len()) * WORD_SIZE);
    padded.extend_from_slice(data);
    padded.resize(words_for(data.len()) * WORD_SIZE, 0);
    padded
}
