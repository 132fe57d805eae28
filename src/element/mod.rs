//! Form render tree
//!
//! Typed element nodes with an ordered child map, plus the per-index value
//! shape multi-value fields work with.

mod tree;
mod values;

pub use tree::{
    AjaxSettings, Children, Element, ElementKind, TitleDisplay, Trigger, TriggerAction,
};
pub use values::ItemValues;
