//! Seen-set diff for one run.
//!
//! Splits the fetched sequences into already-announced and new, and
//! produces the updated seen-set. Retention is monotonic: every fetched
//! id is folded in and ids are never pruned, so a sequence announced
//! once is never announced again.

use crate::models::Sequence;
use crate::storage::SeenSet;

/// Result of diffing one run's fetch against the checkpoint.
#[derive(Debug, Clone, Default)]
pub struct DiffOutcome {
    /// Sequences not present in the previous seen-set, sorted by id
    pub new_records: Vec<Sequence>,
    /// Seen-set to persist: previous ids plus every fetched id
    pub seen: SeenSet,
}

impl DiffOutcome {
    /// Whether this run observed anything new.
    pub fn has_new(&self) -> bool {
        !self.new_records.is_empty()
    }
}

/// Partition fetched sequences against the previously seen ids.
pub fn partition(records: &[Sequence], seen: &SeenSet) -> DiffOutcome {
    let mut updated = seen.clone();
    let mut new_records = Vec::new();

    for record in records {
        if updated.insert(record.number) {
            new_records.push(record.clone());
        }
    }

    new_records.sort_by_key(|r| r.number);

    DiffOutcome {
        new_records,
        seen: updated,
    }
}
