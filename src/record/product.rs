use serde::{Deserialize, Serialize};

use super::field::{CategoricalField, FieldValue};
use crate::types::identifiers::RecordId;

/// A catalog entry. Every categorical attribute may be missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub id: RecordId,
    pub name: String,
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub origin_country: Option<String>,
    #[serde(default)]
    pub product_type: Option<String>,
    #[serde(default)]
    pub certified: Option<bool>,
    #[serde(default)]
    pub production_method: Option<String>,
    #[serde(default)]
    pub cut_style: Option<String>,
    #[serde(default)]
    pub establishment_type: Option<String>,
    #[serde(default)]
    pub packaging_type: Option<String>,
}

impl ProductRecord {
    pub fn new(id: impl Into<RecordId>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            brand: None,
            origin_country: None,
            product_type: None,
            certified: None,
            production_method: None,
            cut_style: None,
            establishment_type: None,
            packaging_type: None,
        }
    }

    pub fn field_value(&self, field: CategoricalField) -> Option<FieldValue> {
        let text = |v: &Option<String>| v.as_ref().map(|s| FieldValue::Text(s.clone()));
        match field {
            CategoricalField::Brand => text(&self.brand),
            CategoricalField::OriginCountry => text(&self.origin_country),
            CategoricalField::ProductType => text(&self.product_type),
            CategoricalField::Certified => self.certified.map(FieldValue::Flag),
            CategoricalField::ProductionMethod => text(&self.production_method),
            CategoricalField::CutStyle => text(&self.cut_style),
            CategoricalField::EstablishmentType => text(&self.establishment_type),
            CategoricalField::PackagingType => text(&self.packaging_type),
        }
    }
}
