//! Reading manual row order back from submitted values

use super::expand::WEIGHT_KEY;
use crate::element::ItemValues;
use serde_json::Value;

/// Rows of a submitted field value sorted by their ordering control.
///
/// Rows without a readable weight keep their index as weight, ties keep
/// index order. The ordering control and any non-row keys (the trigger's own
/// submitted value) are dropped.
pub fn order_by_weight(value: &Value) -> Vec<Value> {
    let mut rows: Vec<(f64, Value)> = ItemValues::from_submitted(value)
        .iter()
        .map(|(index, row)| {
            let weight = row_weight(row).unwrap_or(index as f64);
            (weight, strip_weight(row.clone()))
        })
        .collect();
    rows.sort_by(|a, b| a.0.total_cmp(&b.0));
    rows.into_iter().map(|(_, row)| row).collect()
}

fn row_weight(row: &Value) -> Option<f64> {
    match row.get(WEIGHT_KEY)? {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

fn strip_weight(mut row: Value) -> Value {
    if let Value::Object(map) = &mut row {
        map.remove(WEIGHT_KEY);
    }
    row
}
