use crate::sbom_generation::domain::{Component, ComponentKey};
use std::collections::HashSet;

/// Drops components whose `(name, version, package manager)` key was already seen
///
/// Keeps state between calls so several batches (scanner results, or the
/// component lists of several BOMs) can be fed through one instance. The
/// first occurrence of a key wins and input order is preserved.
#[derive(Debug, Default)]
pub struct ComponentDeduplicator {
    seen: HashSet<ComponentKey>,
}

impl ComponentDeduplicator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the components of `batch` not seen before, in order
    pub fn retain_new<I>(&mut self, batch: I) -> Vec<Component>
    where
        I: IntoIterator<Item = Component>,
    {
        batch
            .into_iter()
            .filter(|component| self.seen.insert(component.key()))
            .collect()
    }

    /// One-shot deduplication of a single list
    pub fn deduplicate(components: Vec<Component>) -> Vec<Component> {
        Self::new().retain_new(components)
    }
}
