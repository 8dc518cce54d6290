use ambrosus_primitives::{StringEncoding, DEFAULT_MAX_DEPTH};

/// Configuration for the ABI encoder and decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbiConfig {
    /// How text provided for `string` parameters is turned into bytes.
    pub strings: StringEncoding,
    /// The maximum nesting depth of arrays and tuples.
    pub max_depth: usize,
}

impl AbiConfig {
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

impl Default for AbiConfig {
    fn default() -> Self {
        Self { strings: StringEncoding::Utf8, max_depth: DEFAULT_MAX_DEPTH }
    }
}
