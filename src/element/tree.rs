//! Render tree nodes

use crate::multivalue::MultiValue;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Ordered mapping from child key to child element
pub type Children = IndexMap<String, Element>;

/// Where an element's title is displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TitleDisplay {
    #[default]
    Before,
    After,
    /// Rendered for assistive technology only
    Invisible,
}

/// What a trigger does when activated
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TriggerAction {
    /// Increment the owning field's row count and rebuild
    AddMore,
}

/// Asynchronous update settings for a trigger
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AjaxSettings {
    /// Container id replaced by the response
    pub wrapper: String,
    pub effect: String,
}

/// A submit control that runs a narrow-scope update instead of a full submission
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trigger {
    /// Submitted name, unique per structural path
    pub name: String,
    pub label: String,
    pub action: TriggerAction,
    /// Runtime locations whose subtrees are the only ones validated
    pub limit_validation: Vec<Vec<String>>,
    pub ajax: Option<AjaxSettings>,
}

/// Type-specific part of an element
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ElementKind {
    /// Groups children without a value of its own
    #[default]
    Container,
    /// Input widget rendered by the host, e.g. "textfield" or "select"
    Field { widget: String },
    /// Ordering control selecting a value in `-delta..=delta`
    Weight { delta: usize },
    Submit(Trigger),
    MultiValue(MultiValue),
}

/// A node of the form render tree
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Element {
    pub kind: ElementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub title_display: TitleDisplay,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_value: Option<Value>,
    /// Value resolved by the builder for the current request
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    pub weight: i32,
    /// Children submit values nested under this element's key
    pub tree: bool,
    /// Structural path used for submitted values and session state
    pub parents: Vec<String>,
    /// Runtime location within the render tree
    pub array_parents: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prefix: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suffix: Option<String>,
    #[serde(skip_serializing_if = "IndexMap::is_empty")]
    pub children: Children,
}

impl Element {
    /// Create a container element
    pub fn container() -> Self {
        Self::default()
    }

    /// Create an input field rendered with the given widget
    pub fn field(widget: &str) -> Self {
        Self {
            kind: ElementKind::Field {
                widget: widget.to_string(),
            },
            ..Self::default()
        }
    }

    /// Create a multi-value element; its children form the repeated row template
    pub fn multi_value(settings: MultiValue) -> Self {
        Self {
            kind: ElementKind::MultiValue(settings),
            ..Self::default()
        }
    }

    /// Create a submit control
    pub fn submit(trigger: Trigger) -> Self {
        Self {
            kind: ElementKind::Submit(trigger),
            ..Self::default()
        }
    }

    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    pub fn with_default(mut self, value: Value) -> Self {
        self.default_value = Some(value);
        self
    }

    pub fn with_tree(mut self, tree: bool) -> Self {
        self.tree = tree;
        self
    }

    /// Append a child, replacing any existing child with the same key
    pub fn with_child(mut self, key: &str, child: Element) -> Self {
        self.children.insert(key.to_string(), child);
        self
    }

    pub fn with_children(mut self, children: Children) -> Self {
        self.children = children;
        self
    }

    /// Last segment of the structural path
    pub fn name(&self) -> Option<&str> {
        self.parents.last().map(String::as_str)
    }

    pub fn child(&self, key: &str) -> Option<&Element> {
        self.children.get(key)
    }

    /// Locate a descendant by runtime location relative to this element
    pub fn find(&self, array_parents: &[String]) -> Option<&Element> {
        array_parents
            .iter()
            .try_fold(self, |element, key| element.children.get(key))
    }

    pub fn as_multi_value(&self) -> Option<&MultiValue> {
        match &self.kind {
            ElementKind::MultiValue(settings) => Some(settings),
            _ => None,
        }
    }

    pub fn as_trigger(&self) -> Option<&Trigger> {
        match &self.kind {
            ElementKind::Submit(trigger) => Some(trigger),
            _ => None,
        }
    }

    /// Returns true if the element holds a user-editable value
    pub fn has_input(&self) -> bool {
        matches!(
            self.kind,
            ElementKind::Field { .. } | ElementKind::Weight { .. }
        )
    }
}
