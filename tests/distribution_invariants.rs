use insight_core::distribution::{DistributionOptions, GroupedCount};
use insight_core::record::UNSPECIFIED;
use insight_core::types::{Distribution, InsightError};
use insight_core::{InsightConfig, InsightEngine};

fn pairs() -> Vec<GroupedCount> {
    vec![
        GroupedCount::new("Loose leaf", 4),
        GroupedCount::new("Tea bag", 9),
        GroupedCount::missing(2),
        GroupedCount::new("Powder", 4),
        GroupedCount::new("Capsule", 1),
    ]
}

fn permissive_engine() -> InsightEngine {
    let config = InsightConfig {
        min_sample_size: 1,
        reply_weight: 3,
    };
    InsightEngine::new(config).unwrap()
}

fn distribution(input: &[GroupedCount], options: &DistributionOptions) -> Distribution {
    permissive_engine()
        .aggregate_distribution(input, options)
        .unwrap()
        .into_data()
        .expect("non-empty input passes a k=1 gate")
}

#[test]
fn invariant_bucket_counts_conserve_the_input_total() {
    let input = pairs();
    let expected: i64 = input.iter().map(|p| p.count).sum();

    let dist = distribution(&input, &DistributionOptions::default());

    let sum: u64 = dist.buckets.iter().map(|b| b.count).sum();
    assert_eq!(sum, expected as u64, "bucket counts must add up to the input total");
    assert_eq!(dist.total, expected as u64);
    assert_eq!(dist.remainder, 0);
    assert_eq!(dist.distinct_values, 5);
}

#[test]
fn invariant_buckets_sorted_by_count_then_value() {
    let dist = distribution(&pairs(), &DistributionOptions::default());

    let order: Vec<(&str, u64)> = dist
        .buckets
        .iter()
        .map(|b| (b.value.as_str(), b.count))
        .collect();
    assert_eq!(
        order,
        vec![
            ("Tea bag", 9),
            ("Loose leaf", 4),
            ("Powder", 4),
            (UNSPECIFIED, 2),
            ("Capsule", 1),
        ]
    );

    for w in dist.buckets.windows(2) {
        assert!(w[0].count > w[1].count || (w[0].count == w[1].count && w[0].value < w[1].value));
    }
}

#[test]
fn order_does_not_depend_on_input_order() {
    let mut reversed = pairs();
    reversed.reverse();

    let a = distribution(&pairs(), &DistributionOptions::default());
    let b = distribution(&reversed, &DistributionOptions::default());

    assert_eq!(a, b);
}

#[test]
fn top_n_truncates_but_reports_true_total_and_remainder() {
    let dist = distribution(&pairs(), &DistributionOptions::top(2));

    assert_eq!(dist.buckets.len(), 2);
    assert_eq!(dist.total, 20);
    assert_eq!(dist.remainder, 20 - 9 - 4);
    assert_eq!(dist.distinct_values, 5);
    assert!(
        dist.buckets.iter().all(|b| b.value != "other"),
        "no remainder bucket is synthesized"
    );
}

#[test]
fn top_n_larger_than_bucket_count_keeps_everything() {
    let dist = distribution(&pairs(), &DistributionOptions::top(50));

    assert_eq!(dist.buckets.len(), 5);
    assert_eq!(dist.remainder, 0);
}

#[test]
fn missing_values_are_kept_under_the_sentinel() {
    let input = vec![GroupedCount::missing(3)];

    let dist = distribution(&input, &DistributionOptions::default());

    assert_eq!(dist.buckets.len(), 1);
    assert_eq!(dist.buckets[0].value, UNSPECIFIED);
    assert_eq!(dist.buckets[0].count, 3);
}

#[test]
fn negative_count_fails_fast() {
    let input = vec![GroupedCount::new("Tea bag", 9), GroupedCount::new("Powder", -1)];

    let err = permissive_engine()
        .aggregate_distribution(&input, &DistributionOptions::default())
        .unwrap_err();

    match err {
        InsightError::NegativeCount { value, count } => {
            assert_eq!(value, "Powder");
            assert_eq!(count, -1);
        }
        other => panic!("expected NegativeCount, got {other:?}"),
    }
}

#[test]
fn negative_count_aborts_even_when_the_result_would_be_suppressed() {
    let engine = InsightEngine::new(InsightConfig::v0()).unwrap();
    let input = vec![GroupedCount::new(true, 1), GroupedCount::new(false, -3)];

    let result = engine.aggregate_distribution(&input, &DistributionOptions::default());

    assert!(matches!(result, Err(InsightError::NegativeCount { .. })));
}

#[test]
fn small_sample_never_leaves_the_engine_as_a_breakdown() {
    let engine = InsightEngine::new(InsightConfig::v0()).unwrap();
    let input = vec![GroupedCount::new("Tea bag", 1), GroupedCount::new("Powder", 1)];

    let result = engine
        .aggregate_distribution(&input, &DistributionOptions::default())
        .unwrap();

    assert!(result.into_data().is_none());
}

#[test]
fn scenario_boolean_field_is_allowed_and_ordered() {
    let engine = InsightEngine::new(InsightConfig::v0()).unwrap();
    let input = vec![GroupedCount::new(false, 3), GroupedCount::new(true, 7)];

    let result = engine
        .aggregate_distribution(&input, &DistributionOptions::default())
        .unwrap();

    assert!(result.is_allowed());
    assert_eq!(result.sample_size(), Some(10));
    let dist = result.data().unwrap();
    let order: Vec<(&str, u64)> = dist
        .buckets
        .iter()
        .map(|b| (b.value.as_str(), b.count))
        .collect();
    assert_eq!(order, vec![("true", 7), ("false", 3)]);
}
