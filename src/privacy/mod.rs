pub mod gate;

use std::collections::BTreeSet;

use crate::record::Note;
pub use gate::{GateResult, KAnonymityGate, SuppressionReason};

/// Sample size of a note batch: the number of distinct authors behind it.
pub fn distinct_authors(notes: &[Note]) -> u64 {
    notes.iter().map(|n| &n.author).collect::<BTreeSet<_>>().len() as u64
}
