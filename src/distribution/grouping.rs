use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::record::{CategoricalField, FieldValue, ProductRecord};

/// One raw (value, count) pair as returned by a grouping query.
/// `count` is signed because the store does not guarantee sanity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupedCount {
    #[serde(default)]
    pub value: Option<FieldValue>,
    pub count: i64,
}

impl GroupedCount {
    pub fn new(value: impl Into<FieldValue>, count: i64) -> Self {
        Self {
            value: Some(value.into()),
            count,
        }
    }

    pub fn missing(count: i64) -> Self {
        Self { value: None, count }
    }
}

/// In-memory equivalent of the store's group-by-field primitive.
/// Output is in no particular display order.
pub(crate) fn group_counts(
    records: &[ProductRecord],
    field: CategoricalField,
) -> Vec<GroupedCount> {
    let mut flags: BTreeMap<bool, i64> = BTreeMap::new();
    let mut texts: BTreeMap<String, i64> = BTreeMap::new();
    let mut missing = 0i64;

    for record in records {
        match record.field_value(field) {
            Some(FieldValue::Flag(flag)) => *flags.entry(flag).or_insert(0) += 1,
            Some(FieldValue::Text(text)) => *texts.entry(text).or_insert(0) += 1,
            None => missing += 1,
        }
    }

    let mut grouped: Vec<GroupedCount> = flags
        .into_iter()
        .map(|(flag, count)| GroupedCount::new(flag, count))
        .chain(texts.into_iter().map(|(text, count)| GroupedCount::new(text, count)))
        .collect();

    if missing > 0 {
        grouped.push(GroupedCount::missing(missing));
    }

    grouped
}
