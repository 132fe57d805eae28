//! In-memory session store

use super::traits::SessionStore;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Session store backed by a nested JSON map.
///
/// Serializable so a host can persist it between requests.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MemorySessionStore {
    root: Map<String, Value>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_empty()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &[String]) -> Option<Value> {
        let (first, rest) = key.split_first()?;
        rest.iter()
            .try_fold(self.root.get(first)?, |node, segment| {
                node.as_object()?.get(segment)
            })
            .cloned()
    }

    fn set(&mut self, key: &[String], value: Value) {
        let Some((last, branch)) = key.split_last() else {
            return;
        };
        let mut node = &mut self.root;
        for segment in branch {
            let entry = node
                .entry(segment.clone())
                .or_insert_with(|| Value::Object(Map::new()));
            if !entry.is_object() {
                *entry = Value::Object(Map::new());
            }
            node = match entry {
                Value::Object(map) => map,
                _ => return,
            };
        }
        node.insert(last.clone(), value);
    }
}
