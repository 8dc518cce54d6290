use crate::AbiValue;
use std::{
    collections::BTreeMap,
    string::{String, ToString},
};

/// Decoded parameters, keyed by their position and, for named parameters, by their name.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DecodedParams {
    values: BTreeMap<String, AbiValue>,
    count: usize,
}

impl DecodedParams {
    /// Inserts the value of the parameter at the index. Named parameters are also reachable by
    /// their name.
    pub fn insert(&mut self, index: usize, name: &str, value: AbiValue) {
        if !name.is_empty() {
            self.values.insert(name.to_string(), value.clone());
        }
        self.values.insert(index.to_string(), value);
        self.count += 1;
    }

    /// Returns the value for the key, either a position (`"0"`, `"1"`, ...) or a name.
    pub fn get(&self, key: &str) -> Option<&AbiValue> {
        self.values.get(key)
    }

    /// Returns the value of the parameter at the index.
    pub fn get_index(&self, index: usize) -> Option<&AbiValue> {
        self.values.get(&index.to_string())
    }

    /// Returns an iterator over every key and value.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &AbiValue)> {
        self.values.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns the number of decoded parameters.
    pub const fn len(&self) -> usize {
        self.count
    }

    /// Returns true if no parameter was decoded.
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns the map of keys to values.
    pub fn into_map(self) -> BTreeMap<String, AbiValue> {
        self.values
    }
}
