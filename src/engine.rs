use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::config::InsightConfig;
use crate::distribution::{self, group_counts, DistributionOptions, GroupedCount};
use crate::engagement::{self, EngagementScorer, WeightedEngagementScorer};
use crate::privacy::{distinct_authors, GateResult, KAnonymityGate};
use crate::record::{CategoricalField, Note, ProductRecord, RecordId};
use crate::types::insight_bundle::{Distribution, InsightError, RankedNotes};

/// Presentation options for a ranked note list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankOptions {
    /// Return at most this many notes. Normalization still covers the
    /// whole batch.
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Entry point for every aggregate the dashboard may expose.
///
/// Each engine owns its own thresholds, so tenants or test scenarios with
/// different settings can run side by side. Every public output passes
/// through the gate.
#[derive(Debug, Clone)]
pub struct InsightEngine<S = WeightedEngagementScorer> {
    config: InsightConfig,
    scorer: S,
    gate: KAnonymityGate,
}

impl InsightEngine<WeightedEngagementScorer> {
    pub fn new(config: InsightConfig) -> Result<Self, InsightError> {
        let scorer = WeightedEngagementScorer::new(config.reply_weight);
        Self::with_scorer(config, scorer)
    }
}

impl<S> InsightEngine<S>
where
    S: EngagementScorer,
{
    pub fn with_scorer(config: InsightConfig, scorer: S) -> Result<Self, InsightError> {
        config.validate()?;
        let gate = KAnonymityGate::new(config.min_sample_size)?;
        Ok(Self {
            config,
            scorer,
            gate,
        })
    }

    pub fn config(&self) -> &InsightConfig {
        &self.config
    }

    /// Shape raw grouped counts for one field and gate them on the number
    /// of records they cover.
    pub fn aggregate_distribution(
        &self,
        field_values: &[GroupedCount],
        options: &DistributionOptions,
    ) -> Result<GateResult<Distribution>, InsightError> {
        let dist = distribution::aggregate(field_values, options)?;
        let sample_size = dist.total;

        tracing::debug!(
            pairs = field_values.len(),
            buckets = dist.buckets.len(),
            distinct_values = dist.distinct_values,
            "distribution aggregated"
        );

        Ok(self.gate.apply(dist, sample_size))
    }

    /// Distribution of one field over in-memory records.
    pub fn field_distribution(
        &self,
        records: &[ProductRecord],
        field: CategoricalField,
        options: &DistributionOptions,
    ) -> Result<GateResult<Distribution>, InsightError> {
        tracing::debug!(field = %field, records = records.len(), "grouping field");
        self.aggregate_distribution(&group_counts(records, field), options)
    }

    /// Gated distribution of every categorical field, keyed by field.
    pub fn catalog_overview(
        &self,
        records: &[ProductRecord],
        options: &DistributionOptions,
    ) -> Result<BTreeMap<CategoricalField, GateResult<Distribution>>, InsightError> {
        CategoricalField::ALL
            .iter()
            .map(|field| -> Result<_, InsightError> {
                Ok((*field, self.field_distribution(records, *field, options)?))
            })
            .collect()
    }

    pub fn score_and_rank_notes(
        &self,
        notes: &[Note],
    ) -> Result<GateResult<RankedNotes>, InsightError> {
        self.score_and_rank_notes_with(notes, &RankOptions::default())
    }

    /// Score, normalize and rank a batch, gated on its distinct authors.
    pub fn score_and_rank_notes_with(
        &self,
        notes: &[Note],
        options: &RankOptions,
    ) -> Result<GateResult<RankedNotes>, InsightError> {
        let mut ranked = engagement::score_and_rank(&self.scorer, notes)?;
        let max_interaction_score = ranked.first().map(|n| n.interaction_score).unwrap_or(0);
        if let Some(limit) = options.limit {
            ranked.truncate(limit);
        }

        let sample_size = distinct_authors(notes);
        tracing::debug!(
            notes = notes.len(),
            returned = ranked.len(),
            max_interaction_score,
            "notes ranked"
        );

        let payload = RankedNotes {
            notes: ranked,
            notes_considered: notes.len(),
            max_interaction_score,
        };
        Ok(self.gate.apply(payload, sample_size))
    }

    /// Rank only the notes about one product; that subset is the batch
    /// normalized and gated together.
    pub fn rank_notes_for_product(
        &self,
        notes: &[Note],
        product: &RecordId,
        options: &RankOptions,
    ) -> Result<GateResult<RankedNotes>, InsightError> {
        let subset: Vec<Note> = notes
            .iter()
            .filter(|note| &note.product == product)
            .cloned()
            .collect();
        self.score_and_rank_notes_with(&subset, options)
    }
}
