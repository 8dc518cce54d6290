use ambrosus_primitives::{StringEncoding, DEFAULT_MAX_DEPTH};

/// Configuration for the RLP encoder and decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RlpConfig {
    /// How text values are turned into byte strings.
    pub strings: StringEncoding,
    /// The maximum nesting depth of lists accepted by the decoder.
    pub max_depth: usize,
}

impl RlpConfig {
    /// Returns the configuration with the provided string encoding.
    pub const fn with_strings(mut self, strings: StringEncoding) -> Self {
        self.strings = strings;
        self
    }

    /// Returns the configuration with the provided maximum nesting depth.
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }
}

impl Default for RlpConfig {
    fn default() -> Self {
        Self { strings: StringEncoding::Utf8, max_depth: DEFAULT_MAX_DEPTH }
    }
}
