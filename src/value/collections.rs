// Author: Dustin Pilgrim
// License: MIT

use std::collections::BTreeMap;

use indexmap::IndexMap;

use super::ParameterValue;

/// Collection addressed by non-negative integer index.
///
/// Indices need not be contiguous; iteration is always in ascending index order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Tuple {
    items: BTreeMap<usize, ParameterValue>,
}

impl Tuple {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `value` and stores it at `index`.
    ///
    /// Returns the child previously stored there, if any.
    pub fn insert(&mut self, index: usize, value: impl Into<ParameterValue>) -> Option<ParameterValue> {
        self.items.insert(index, value.into())
    }

    /// Builder-style insertion.
    pub fn with(mut self, index: usize, value: impl Into<ParameterValue>) -> Self {
        self.insert(index, value);
        self
    }

    pub fn get(&self, index: usize) -> Option<&ParameterValue> {
        self.items.get(&index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut ParameterValue> {
        self.items.get_mut(&index)
    }

    pub fn remove(&mut self, index: usize) -> Option<ParameterValue> {
        self.items.remove(&index)
    }

    pub fn contains(&self, index: usize) -> bool {
        self.items.contains_key(&index)
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &ParameterValue)> {
        self.items.iter().map(|(i, v)| (*i, v))
    }
}

impl<V: Into<ParameterValue>> FromIterator<(usize, V)> for Tuple {
    fn from_iter<I: IntoIterator<Item = (usize, V)>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(|(i, v)| (i, v.into())).collect(),
        }
    }
}

/// Collection addressed by string key.
///
/// Keys are unique. Lookup is by equality; insertion order is kept only so key
/// listings come out stable.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dictionary {
    entries: IndexMap<String, ParameterValue>,
}

impl Dictionary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes ownership of `value` and stores it under `key`.
    ///
    /// Returns the child previously stored there, if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Option<ParameterValue> {
        self.entries.insert(key.into(), value.into())
    }

    /// Builder-style insertion.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParameterValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn get(&self, key: &str) -> Option<&ParameterValue> {
        self.entries.get(key)
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ParameterValue> {
        self.entries.get_mut(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<ParameterValue> {
        self.entries.shift_remove(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParameterValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<ParameterValue>> FromIterator<(K, V)> for Dictionary {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}
