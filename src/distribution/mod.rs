pub mod grouping;

use std::cmp::Ordering;
use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::FieldValue;
use crate::types::insight_bundle::{Distribution, DistributionBucket, InsightError};
pub(crate) use grouping::group_counts;
pub use grouping::GroupedCount;

/// Presentation options for a distribution.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistributionOptions {
    /// Keep only the first `top_n` buckets. `None` keeps all of them.
    #[serde(default)]
    pub top_n: Option<usize>,
}

impl DistributionOptions {
    pub fn top(n: usize) -> Self {
        Self { top_n: Some(n) }
    }
}

/// Shape raw grouped counts into an ordered distribution.
///
/// Buckets are sorted by (count desc, value asc). Values whose labels
/// coincide (e.g. null and blank) are merged. Fails on the first negative
/// count instead of clamping it.
pub(crate) fn aggregate(
    field_values: &[GroupedCount],
    options: &DistributionOptions,
) -> Result<Distribution, InsightError> {
    // 1. Validation + label mapping
    let mut merged: BTreeMap<String, u64> = BTreeMap::new();
    for pair in field_values {
        let value = FieldValue::label_of(pair.value.as_ref());
        let count = u64::try_from(pair.count).map_err(|_| InsightError::NegativeCount {
            value: value.clone(),
            count: pair.count,
        })?;
        let slot = merged.entry(value).or_insert(0);
        *slot = slot.checked_add(count).ok_or(InsightError::TotalOverflow)?;
    }

    let total = merged
        .values()
        .try_fold(0u64, |acc, count| acc.checked_add(*count))
        .ok_or(InsightError::TotalOverflow)?;

    // 2. Ordering Phase
    // Sort globally by (count desc, value asc)
    let mut buckets: Vec<DistributionBucket> = merged
        .into_iter()
        .map(|(value, count)| DistributionBucket { value, count })
        .collect();
    buckets.sort_by(|a, b| match b.count.cmp(&a.count) {
        Ordering::Equal => a.value.cmp(&b.value),
        other => other,
    });

    debug_assert!(buckets
        .windows(2)
        .all(|w| w[0].count > w[1].count || (w[0].count == w[1].count && w[0].value < w[1].value)));

    // 3. Truncation Phase
    let distinct_values = buckets.len();
    if let Some(n) = options.top_n {
        buckets.truncate(n);
    }
    let shown: u64 = buckets.iter().map(|b| b.count).sum();

    Ok(Distribution {
        buckets,
        total,
        distinct_values,
        remainder: total - shown,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn null_and_blank_values_merge_into_one_bucket() {
        let pairs = vec![
            GroupedCount::missing(2),
            GroupedCount::new("", 1),
            GroupedCount::new("Whole leaf", 4),
        ];

        let dist = aggregate(&pairs, &DistributionOptions::default()).unwrap();

        assert_eq!(dist.buckets.len(), 2);
        assert_eq!(dist.buckets[1].value, crate::record::UNSPECIFIED);
        assert_eq!(dist.buckets[1].count, 3);
        assert_eq!(dist.total, 7);
    }

    #[test]
    fn empty_input_is_valid_and_empty() {
        let dist = aggregate(&[], &DistributionOptions::default()).unwrap();

        assert!(dist.buckets.is_empty());
        assert_eq!(dist.total, 0);
        assert_eq!(dist.distinct_values, 0);
    }

    #[test]
    fn zero_top_n_hides_everything_but_keeps_total() {
        let pairs = vec![GroupedCount::new("a", 1), GroupedCount::new("b", 2)];

        let dist = aggregate(&pairs, &DistributionOptions::top(0)).unwrap();

        assert!(dist.buckets.is_empty());
        assert_eq!(dist.total, 3);
        assert_eq!(dist.remainder, 3);
        assert_eq!(dist.distinct_values, 2);
    }
}
