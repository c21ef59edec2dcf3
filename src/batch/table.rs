//! Order-preserving result table.

use std::collections::BTreeMap;

use crate::census::DocumentStats;
use crate::error_handling::TaskFailure;

/// Stats for one document, or why its task produced none.
pub type DocumentOutcome = Result<DocumentStats, TaskFailure>;

/// Census outcomes keyed by input position.
///
/// Populated in completion order, iterated in ascending index order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResultTable {
    entries: BTreeMap<usize, DocumentOutcome>,
    expected: usize,
}

impl ResultTable {
    pub(crate) fn with_expected(expected: usize) -> Self {
        Self {
            entries: BTreeMap::new(),
            expected,
        }
    }

    /// Stores the outcome for `index`. Each index is written once.
    pub(crate) fn insert(&mut self, index: usize, outcome: DocumentOutcome) {
        let previous = self.entries.insert(index, outcome);
        debug_assert!(previous.is_none(), "document {index} counted twice");
    }

    pub fn get(&self, index: usize) -> Option<&DocumentOutcome> {
        self.entries.get(&index)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// True once every submitted document has an entry.
    pub fn is_complete(&self) -> bool {
        self.entries.len() == self.expected
    }

    /// Entries in ascending index order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &DocumentOutcome)> {
        self.entries.iter().map(|(index, outcome)| (*index, outcome))
    }

    /// Successfully counted documents, in index order.
    pub fn stats(&self) -> impl Iterator<Item = (usize, &DocumentStats)> {
        self.iter()
            .filter_map(|(index, outcome)| outcome.as_ref().ok().map(|stats| (index, stats)))
    }

    /// Failed tasks, in index order.
    pub fn failures(&self) -> impl Iterator<Item = &TaskFailure> {
        self.entries.values().filter_map(|outcome| outcome.as_ref().err())
    }
}

impl<'a> IntoIterator for &'a ResultTable {
    type Item = (usize, &'a DocumentOutcome);
    type IntoIter = Box<dyn Iterator<Item = Self::Item> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
