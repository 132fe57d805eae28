//! Unique HTML id generation

use super::traits::IdGenerator;
use std::collections::HashMap;

/// Generates HTML-safe ids, suffixing repeats with `--N` within one request
#[derive(Debug, Clone, Default)]
pub struct HtmlIdGenerator {
    seen: HashMap<String, usize>,
}

impl HtmlIdGenerator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clean a string into a valid HTML id
    pub fn clean(base: &str) -> String {
        let mut id = String::with_capacity(base.len());
        for c in base.chars() {
            match c {
                ' ' | '_' | '[' => id.push('-'),
                c if c.is_ascii_alphanumeric() || c == '-' => id.push(c.to_ascii_lowercase()),
                _ => {}
            }
        }
        // Collapse dash runs so generated `--N` suffixes stay unambiguous
        let mut collapsed = String::with_capacity(id.len());
        for c in id.chars() {
            if c == '-' && collapsed.ends_with('-') {
                continue;
            }
            collapsed.push(c);
        }
        collapsed
    }
}

impl IdGenerator for HtmlIdGenerator {
    fn unique_id(&mut self, base: &str) -> String {
        let id = Self::clean(base);
        let count = self.seen.entry(id.clone()).or_insert(0);
        *count += 1;
        if *count == 1 {
            id
        } else {
            format!("{id}--{count}")
        }
    }

    fn reset(&mut self) {
        self.seen.clear();
    }
}
