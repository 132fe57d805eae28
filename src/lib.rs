//! Multi-value form element
//!
//! Wraps a child element template and renders it as a variable-length,
//! reorderable list of rows. An "add another item" trigger grows the list
//! through a submit-then-fetch cycle, with the row count kept in the form's
//! session store between requests.
//!
//! The pieces:
//! - [`element`]: the typed render tree
//! - [`session`]: session store and per-request [`session::FormState`]
//! - [`multivalue`]: expansion, value callback, state accessors and trigger handlers
//! - [`builder`]: walks a form definition and runs the hooks

pub mod builder;
pub mod config;
pub mod element;
pub mod error;
pub mod multivalue;
pub mod session;

pub use builder::FormBuilder;
pub use config::MultiValueConfig;
pub use element::{Element, ElementKind};
pub use error::{ElementError, Result};
pub use multivalue::{AjaxUpdate, Cardinality, MultiValue};
pub use session::{FormState, MemorySessionStore, SessionStore};
