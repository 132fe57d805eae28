//! Session-scoped storage and per-request form state

mod form_state;
mod ids;
mod memory;
mod traits;

pub use form_state::FormState;
pub use ids::HtmlIdGenerator;
pub use memory::MemorySessionStore;
pub use traits::{IdGenerator, SessionStore};

#[cfg(test)]
pub use traits::{MockIdGenerator, MockSessionStore};
