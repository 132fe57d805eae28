//! Trait abstractions for host collaborators to enable mocking in tests

use serde_json::Value;

/// Request-scoped nested storage that survives across the requests of one
/// form-editing session
#[cfg_attr(test, mockall::automock)]
pub trait SessionStore {
    /// Read the value stored at a nested key
    fn get(&self, key: &[String]) -> Option<Value>;

    /// Replace the value stored at a nested key
    fn set(&mut self, key: &[String], value: Value);
}

/// Produces collision-free container ids
#[cfg_attr(test, mockall::automock)]
pub trait IdGenerator {
    /// Derive a unique id from a base string
    fn unique_id(&mut self, base: &str) -> String;

    /// Forget issued ids so the next build derives the same ones again
    fn reset(&mut self);
}
