//! Output-structure collection.

use indexmap::IndexSet;

/// The structures that at least one command populates through an output
/// parameter, and which contain handles.
///
/// Iteration order is first-seen scan order, so generated output is stable
/// across runs. A structure used as an input elsewhere still belongs here;
/// membership is derived purely from having at least one output usage.
#[derive(Debug, Default, Clone)]
pub struct OutputStructSet {
    names: IndexSet<String>,
}

impl OutputStructSet {
    /// Record an output structure. Duplicate insertions are no-ops.
    pub fn insert(&mut self, name: impl Into<String>) -> bool {
        self.names.insert(name.into())
    }

    /// Returns true if the structure was recorded.
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    /// Iterate recorded structures in first-seen order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Number of recorded structures.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Returns true if no output structures were recorded.
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
