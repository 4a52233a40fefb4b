use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::record::Note;
use crate::types::identifiers::NoteId;

/// One (categorical value, count) pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionBucket {
    pub value: String,
    pub count: u64,
}

/// Display-ready summary of one categorical field.
///
/// `total` always covers every record considered, even when `buckets`
/// was truncated to a top-N; `remainder` is what the truncation hid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Distribution {
    pub buckets: Vec<DistributionBucket>,
    pub total: u64,
    pub distinct_values: usize,
    pub remainder: u64,
}

/// A note with its engagement scores attached.
/// Owns the note because it is part of the final output payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScoredNote {
    #[serde(flatten)]
    pub note: Note,
    pub interaction_score: u64,
    pub normalized_score: f64,
}

/// Ranked output of one scoring pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedNotes {
    pub notes: Vec<ScoredNote>,
    pub notes_considered: usize,
    pub max_interaction_score: u64,
}

/// Internal: a note that has been scored but not yet normalized.
/// Borrows the note so content is only cloned for what gets returned.
#[derive(Debug, Clone)]
pub(crate) struct ScoredRef<'a> {
    pub note: &'a Note,
    pub interaction_score: u64,
}

#[derive(Debug, thiserror::Error)]
pub enum InsightError {
    #[error("Negative count {count} for value {value:?}")]
    NegativeCount { value: String, count: i64 },

    #[error("Note {note}: {counter} must not be negative (got {value})")]
    NegativeCounter {
        note: NoteId,
        counter: &'static str,
        value: i64,
    },

    #[error("Note {note}: {counter} exceeds the supported range (got {value})")]
    CounterOverflow {
        note: NoteId,
        counter: &'static str,
        value: i64,
    },

    #[error("Count total overflowed")]
    TotalOverflow,

    #[error("Invalid configuration: {0}")]
    InvalidConfig(#[from] ConfigError),
}
