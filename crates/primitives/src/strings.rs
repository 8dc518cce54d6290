//! Interpretation of free-form text as bytes.

use std::{
    fmt,
    str::FromStr,
    string::{String, ToString},
    vec::Vec,
};

use alloy_primitives::hex;

/// Returns true if the text is a `0x` prefixed, even length, hexadecimal string.
pub fn is_hex_like(text: &str) -> bool {
    text.strip_prefix("0x")
        .or_else(|| text.strip_prefix("0X"))
        .is_some_and(|digits| {
            digits.len() % 2 == 0 && digits.bytes().all(|b| b.is_ascii_hexdigit())
        })
}

/// How text values are turned into bytes by the codecs.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum StringEncoding {
    /// The text is always encoded as its UTF-8 bytes.
    #[default]
    Utf8,
    /// Text that looks like hex (see [`is_hex_like`]) is decoded into the raw bytes it spells,
    /// any other text is encoded as its UTF-8 bytes. Text such as `"0xcafe"` is therefore never
    /// encoded verbatim.
    HexSniffing,
}

impl StringEncoding {
    /// Returns the bytes for the text according to the encoding.
    pub fn to_bytes(self, text: &str) -> Vec<u8> {
        match self {
            Self::Utf8 => text.as_bytes().to_vec(),
            Self::HexSniffing => Self::sniff(text),
        }
    }

    /// Decodes hex-looking text into its raw bytes and falls back to UTF-8 otherwise. This is
    /// the interpretation used for byte-typed values independently of the configured encoding.
    pub fn sniff(text: &str) -> Vec<u8> {
        if is_hex_like(text) {
            if let Ok(bytes) = hex::decode(text) {
                return bytes
            }
        }
        text.as_bytes().to_vec()
    }
}

impl FromStr for StringEncoding {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("utf8") || s.eq_ignore_ascii_case("utf-8") {
            Ok(Self::Utf8)
        } else if s.eq_ignore_ascii_case("hex-sniffing") {
            Ok(Self::HexSniffing)
        } else {
            Err("Expected 'utf8' or 'hex-sniffing'".to_string())
        }
    }
}

impl fmt::Display for StringEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Utf8 => write!(f, "utf8"),
            Self::HexSniffing => write!(f, "hex-sniffing"),
        }
    }
}
