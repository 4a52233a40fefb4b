pub mod identifiers;
pub mod insight_bundle;

pub use identifiers::{AuthorId, DatasetVersion, NoteId, RecordId};
pub use insight_bundle::{Distribution, DistributionBucket, InsightError, RankedNotes, ScoredNote};
