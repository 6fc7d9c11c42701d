//! Pure three-way snapshot comparison

use crate::{Formula, Snapshot};

/// A formula present in both snapshots whose fields differ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormulaUpdate {
    pub previous: Formula,
    pub current: Formula,
}

/// Changes between two snapshots, split into the three mutually exclusive
/// categories. Each list is ordered by name ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DiffResult {
    pub added: Vec<Formula>,
    pub removed: Vec<Formula>,
    pub updated: Vec<FormulaUpdate>,
}

impl DiffResult {
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty() && self.updated.is_empty()
    }
}

/// Compare two snapshots by name.
///
/// A name only in `current` is added, a name only in `previous` is removed,
/// and a name in both with unequal records is updated. Updates are decided
/// by full field equality, not just the version label. Both passes walk the
/// snapshots in name order, so every category comes out sorted without a
/// separate sort step.
pub fn diff(previous: &Snapshot, current: &Snapshot) -> DiffResult {
    let mut result = DiffResult::default();

    for (name, record) in current.iter() {
        match previous.get(name) {
            None => result.added.push(record.clone()),
            Some(prev) if prev != record => result.updated.push(FormulaUpdate {
                previous: prev.clone(),
                current: record.clone(),
            }),
            Some(_) => {}
        }
    }

    for (name, record) in previous.iter() {
        if !current.contains(name) {
            result.removed.push(record.clone());
        }
    }

    result
}
