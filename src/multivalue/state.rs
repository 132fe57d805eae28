//! Element state accessors over the session store

use crate::error::{ElementError, Result};
use crate::session::SessionStore;
use serde::{Deserialize, Serialize};

/// Namespace of all multi-value bookkeeping in the session store
pub const STORAGE_NAMESPACE: &str = "multivalue_form_element_storage";

/// Literal separating the structural path from the element name. Element
/// keys never start with `#`, so neither literal collides with a path segment.
pub const PARENTS_KEY: &str = "#parents";
pub const ELEMENTS_KEY: &str = "#elements";

/// Per-field-instance record kept for the life of a form session
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ElementState {
    /// Number of rows to display
    pub items_count: usize,
    /// Runtime location of the expanded element, empty until the first
    /// add-more submit records it
    #[serde(default)]
    pub array_parents: Vec<String>,
}

impl ElementState {
    pub fn new(items_count: usize) -> Self {
        Self {
            items_count,
            array_parents: Vec::new(),
        }
    }
}

/// Compose the store key for an element
pub fn state_key(parents: &[String], name: &str) -> Vec<String> {
    let mut key = Vec::with_capacity(parents.len() + 4);
    key.push(STORAGE_NAMESPACE.to_string());
    key.push(PARENTS_KEY.to_string());
    key.extend(parents.iter().cloned());
    key.push(ELEMENTS_KEY.to_string());
    key.push(name.to_string());
    key
}

/// Read the state of an element, `None` if it was never initialized
pub fn get_element_state(
    store: &dyn SessionStore,
    parents: &[String],
    name: &str,
) -> Result<Option<ElementState>> {
    let key = state_key(parents, name);
    store
        .get(&key)
        .map(|raw| {
            serde_json::from_value(raw).map_err(|source| ElementError::CorruptState {
                key: key.join("/"),
                source,
            })
        })
        .transpose()
}

/// Store the state of an element, replacing whatever was there
pub fn set_element_state(
    store: &mut dyn SessionStore,
    parents: &[String],
    name: &str,
    state: &ElementState,
) -> Result<()> {
    let key = state_key(parents, name);
    let raw = serde_json::to_value(state).map_err(|source| ElementError::CorruptState {
        key: key.join("/"),
        source,
    })?;
    store.set(&key, raw);
    Ok(())
}
