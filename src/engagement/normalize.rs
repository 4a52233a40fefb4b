use crate::types::insight_bundle::{ScoredNote, ScoredRef};

/// Rescale a batch to [0, 100] relative to its own maximum.
///
/// Batch-relative on purpose: the same note normalizes differently in a
/// different batch. An empty or all-zero batch normalizes to 0 everywhere.
pub(crate) fn normalize_batch(scored: Vec<ScoredRef>) -> Vec<ScoredNote> {
    let max = max_score(&scored);

    scored
        .into_iter()
        .map(|sref| ScoredNote {
            note: sref.note.clone(),
            interaction_score: sref.interaction_score,
            normalized_score: normalized(sref.interaction_score, max),
        })
        .collect()
}

fn max_score(scored: &[ScoredRef]) -> u64 {
    scored.iter().map(|s| s.interaction_score).max().unwrap_or(0)
}

/// `score` must not exceed `max`; both come from the same batch.
fn normalized(score: u64, max: u64) -> f64 {
    let value = if max == 0 {
        0.0
    } else {
        score as f64 / max as f64 * 100.0
    };
    debug_assert!(
        (0.0..=100.0).contains(&value),
        "normalized score {value} out of range [0, 100]"
    );
    value
}
