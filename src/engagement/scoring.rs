use crate::record::Note;
use crate::types::insight_bundle::InsightError;

/// Validated engagement counters of a single note.
/// Missing counters read as zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct EngagementSignals {
    pub likes: u32,
    pub replies: u32,
}

impl EngagementSignals {
    pub fn from_note(note: &Note) -> Result<Self, InsightError> {
        Ok(Self {
            likes: counter(note, "likes", note.likes)?,
            replies: counter(note, "replies", note.replies)?,
        })
    }
}

fn counter(note: &Note, name: &'static str, raw: Option<i64>) -> Result<u32, InsightError> {
    let value = raw.unwrap_or(0);
    if value < 0 {
        return Err(InsightError::NegativeCounter {
            note: note.id.clone(),
            counter: name,
            value,
        });
    }
    u32::try_from(value).map_err(|_| InsightError::CounterOverflow {
        note: note.id.clone(),
        counter: name,
        value,
    })
}

pub trait EngagementScorer {
    fn score(&self, signals: &EngagementSignals) -> u64;

    fn score_note(&self, note: &Note) -> Result<u64, InsightError> {
        let signals = EngagementSignals::from_note(note)?;
        Ok(self.score(&signals))
    }
}

/// v0: `likes * 1 + replies * reply_weight`
///
/// Strictly increasing in each counter as long as `reply_weight >= 1`;
/// the config layer keeps it in `2..=MAX_REPLY_WEIGHT` so replies always
/// outweigh likes and the sum cannot overflow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeightedEngagementScorer {
    pub reply_weight: u32,
}

impl WeightedEngagementScorer {
    pub fn new(reply_weight: u32) -> Self {
        Self { reply_weight }
    }
}

impl Default for WeightedEngagementScorer {
    fn default() -> Self {
        Self { reply_weight: 3 }
    }
}

impl EngagementScorer for WeightedEngagementScorer {
    fn score(&self, signals: &EngagementSignals) -> u64 {
        u64::from(signals.likes) + u64::from(signals.replies) * u64::from(self.reply_weight)
    }
}
