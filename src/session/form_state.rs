//! Per-request form state

use super::ids::HtmlIdGenerator;
use super::traits::{IdGenerator, SessionStore};

/// Context shared by the build hooks and trigger handlers of one request.
///
/// Borrows the session store for the duration of the request; nothing else
/// outlives it.
pub struct FormState<'s> {
    store: &'s mut dyn SessionStore,
    ids: Box<dyn IdGenerator + 's>,
    rebuild: bool,
    programmed: bool,
}

impl<'s> FormState<'s> {
    pub fn new(store: &'s mut dyn SessionStore) -> Self {
        Self {
            store,
            ids: Box::new(HtmlIdGenerator::new()),
            rebuild: false,
            programmed: false,
        }
    }

    /// Replace the id generator used for wrapper ids
    pub fn with_id_generator(mut self, ids: impl IdGenerator + 's) -> Self {
        self.ids = Box::new(ids);
        self
    }

    /// Mark the build as a headless, programmatic submission
    pub fn with_programmed(mut self, programmed: bool) -> Self {
        self.programmed = programmed;
        self
    }

    pub fn store(&self) -> &dyn SessionStore {
        &*self.store
    }

    pub fn store_mut(&mut self) -> &mut dyn SessionStore {
        &mut *self.store
    }

    pub fn unique_id(&mut self, base: &str) -> String {
        self.ids.unique_id(base)
    }

    /// Start a new build pass; ids issued by earlier passes may be reused
    pub fn begin_build(&mut self) {
        self.ids.reset();
    }

    pub fn is_programmed(&self) -> bool {
        self.programmed
    }

    /// Request that the whole form is built again before responding
    pub fn set_rebuild(&mut self) {
        self.rebuild = true;
    }

    pub fn is_rebuilding(&self) -> bool {
        self.rebuild
    }
}
