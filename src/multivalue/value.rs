//! Value callback: shapes defaults into per-row, per-child values

use crate::element::{Children, ItemValues};
use crate::error::Result;
use serde_json::{Map, Value};

/// Input handed to the value callback
#[derive(Debug, Clone, PartialEq)]
pub enum RawInput {
    /// No submission for this element; fall back to defaults
    NoSubmission,
    /// Resubmitted input, already keyed by row index
    Submitted(Value),
}

/// Resolve the value of a multi-value element.
///
/// Submitted input is trusted as-is. Defaults are keyed by row index, with
/// bare values wrapped for single-child templates.
pub fn value_callback(
    parents: &[String],
    default: Option<&Value>,
    template: &Children,
    input: RawInput,
) -> Result<Value> {
    match input {
        RawInput::Submitted(value) => Ok(value),
        RawInput::NoSubmission => {
            let items = ItemValues::from_default(parents, default)?;
            Ok(wrap_single_child_values(template, items).into_value())
        }
    }
}

/// Wrap bare default values for templates with exactly one child.
///
/// A value is bare when it is a scalar, or a nested structure that does not
/// contain the child key. This is a heuristic: a keyed list value (say a
/// multi-select selection) of a single child is wrapped as well.
pub fn wrap_single_child_values(template: &Children, items: ItemValues) -> ItemValues {
    let Some(child_key) = single_child_key(template) else {
        return items;
    };
    items.map_values(|value| {
        if contains_key(&value, child_key) {
            value
        } else {
            let mut wrapped = Map::new();
            wrapped.insert(child_key.to_string(), value);
            Value::Object(wrapped)
        }
    })
}

fn single_child_key(template: &Children) -> Option<&str> {
    match template.len() {
        1 => template.keys().next().map(String::as_str),
        _ => None,
    }
}

fn contains_key(value: &Value, key: &str) -> bool {
    match value {
        Value::Object(map) => map.contains_key(key),
        Value::Array(items) => key.parse::<usize>().is_ok_and(|index| index < items.len()),
        _ => false,
    }
}
