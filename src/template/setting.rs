//! Parameter settings: placeholder key -> replacement value

use serde::{Deserialize, Serialize};
use serde_yaml::Value;
use std::collections::BTreeMap;

use crate::error::{Error, Result};

/// Prefixes marking a regular (templated) parameter key
pub const REGULAR_PREFIXES: [char; 2] = ['_', '~'];

/// Whether `key` follows the regular-parameter naming convention
pub fn is_regular_key(key: &str) -> bool {
    key.starts_with(REGULAR_PREFIXES)
}

/// Mapping from placeholder key to the value substituted for it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSetting(BTreeMap<String, Value>);

impl ParameterSetting {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.insert(key.into(), value.into())
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.0.get(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Merge `other` into this setting; keys in `other` win
    pub fn extend(&mut self, other: ParameterSetting) {
        self.0.extend(other.0);
    }

    /// Parse a `key=value` assignment. The value is read as YAML, so
    /// `_lr=0.01` yields a float and `_kernel=rbf` a string.
    pub fn parse_assignment(input: &str) -> Result<(String, Value)> {
        let (key, raw) = input
            .split_once('=')
            .filter(|(key, _)| !key.trim().is_empty())
            .ok_or_else(|| Error::InvalidAssignment { input: input.to_string() })?;
        let value = match raw.trim() {
            "" => Value::String(String::new()),
            _ => serde_yaml::from_str(raw).unwrap_or_else(|_| Value::String(raw.to_string())),
        };
        Ok((key.trim().to_string(), value))
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for ParameterSetting {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect())
    }
}
