//! Per-index item values

use crate::error::{ElementError, Result};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Values of a multi-value field keyed by row index
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ItemValues(BTreeMap<usize, Value>);

impl ItemValues {
    /// Parse a configured default value.
    ///
    /// Accepts a list or a map keyed by row index. Absent and null defaults
    /// mean no items; any other shape is a configuration error.
    pub fn from_default(path: &[String], default: Option<&Value>) -> Result<Self> {
        let malformed = |reason: String| ElementError::MalformedDefault {
            path: path.join("/"),
            reason,
        };
        match default {
            None | Some(Value::Null) => Ok(Self::default()),
            Some(Value::Array(items)) => Ok(Self(items.iter().cloned().enumerate().collect())),
            Some(Value::Object(map)) => map
                .iter()
                .map(|(key, value)| {
                    key.parse::<usize>()
                        .map(|index| (index, value.clone()))
                        .map_err(|_| malformed(format!("key '{key}' is not a row index")))
                })
                .collect::<Result<BTreeMap<_, _>>>()
                .map(Self),
            Some(other) => Err(malformed(format!(
                "expected a list or an index map, got {}",
                kind_name(other)
            ))),
        }
    }

    /// Read submitted rows, skipping anything that is not keyed by a row index
    pub fn from_submitted(value: &Value) -> Self {
        match value {
            Value::Array(items) => Self(items.iter().cloned().enumerate().collect()),
            Value::Object(map) => Self(
                map.iter()
                    .filter_map(|(key, value)| {
                        key.parse::<usize>().ok().map(|index| (index, value.clone()))
                    })
                    .collect(),
            ),
            _ => Self::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Value> {
        self.0.get(&index)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Value)> {
        self.0.iter().map(|(index, value)| (*index, value))
    }

    /// Apply `f` to every value, keeping the indices
    pub fn map_values(self, mut f: impl FnMut(Value) -> Value) -> Self {
        Self(self.0.into_iter().map(|(i, v)| (i, f(v))).collect())
    }

    /// Convert into the index-keyed map shape used for submitted values
    pub fn into_value(self) -> Value {
        Value::Object(
            self.0
                .into_iter()
                .map(|(index, value)| (index.to_string(), value))
                .collect::<Map<_, _>>(),
        )
    }
}

impl FromIterator<(usize, Value)> for ItemValues {
    fn from_iter<I: IntoIterator<Item = (usize, Value)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "a map",
    }
}
