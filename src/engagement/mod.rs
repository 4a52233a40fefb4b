mod normalize;
pub mod scoring;

use crate::record::Note;
use crate::types::insight_bundle::{InsightError, ScoredNote, ScoredRef};
use normalize::normalize_batch;
pub use scoring::{EngagementScorer, EngagementSignals, WeightedEngagementScorer};

/// Score every note, normalize against the whole batch, then order by
/// normalized score descending. Ties keep input order.
///
/// Two passes: the batch maximum must be known before any note can be
/// normalized. Any invalid counter aborts the whole batch.
pub(crate) fn score_and_rank<S: EngagementScorer>(
    scorer: &S,
    notes: &[Note],
) -> Result<Vec<ScoredNote>, InsightError> {
    // 1. Scoring Phase
    let mut scored: Vec<ScoredRef> = notes
        .iter()
        .map(|note| -> Result<ScoredRef, InsightError> {
            Ok(ScoredRef {
                note,
                interaction_score: scorer.score_note(note)?,
            })
        })
        .collect::<Result<_, _>>()?;

    // 2. Ordering Phase
    // Integer scores order exactly like their normalized values.
    // Stable sort keeps input order on ties.
    scored.sort_by(|a, b| b.interaction_score.cmp(&a.interaction_score));

    // 3. Normalization Phase
    let ranked = normalize_batch(scored);

    debug_assert!(ranked
        .windows(2)
        .all(|w| w[0].normalized_score >= w[1].normalized_score));

    Ok(ranked)
}
