use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Label used for missing, null or blank categorical values.
pub const UNSPECIFIED: &str = "unspecified";

/// The categorical attributes of a product record that can be summarized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CategoricalField {
    Brand,
    OriginCountry,
    ProductType,
    Certified,
    ProductionMethod,
    CutStyle,
    EstablishmentType,
    PackagingType,
}

impl CategoricalField {
    pub const ALL: [CategoricalField; 8] = [
        CategoricalField::Brand,
        CategoricalField::OriginCountry,
        CategoricalField::ProductType,
        CategoricalField::Certified,
        CategoricalField::ProductionMethod,
        CategoricalField::CutStyle,
        CategoricalField::EstablishmentType,
        CategoricalField::PackagingType,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Brand => "brand",
            Self::OriginCountry => "origin_country",
            Self::ProductType => "product_type",
            Self::Certified => "certified",
            Self::ProductionMethod => "production_method",
            Self::CutStyle => "cut_style",
            Self::EstablishmentType => "establishment_type",
            Self::PackagingType => "packaging_type",
        }
    }
}

impl fmt::Display for CategoricalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error)]
#[error("Unknown categorical field: {0}")]
pub struct UnknownFieldError(pub String);

impl FromStr for CategoricalField {
    type Err = UnknownFieldError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| UnknownFieldError(s.to_string()))
    }
}

/// A raw categorical value as the store hands it back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    Flag(bool),
    Text(String),
}

impl FieldValue {
    /// Display label for an optional value. Missing and blank values
    /// collapse onto [`UNSPECIFIED`] so they are never dropped.
    pub fn label_of(value: Option<&FieldValue>) -> String {
        match value {
            Some(FieldValue::Flag(flag)) => flag.to_string(),
            Some(FieldValue::Text(text)) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    UNSPECIFIED.to_string()
                } else {
                    trimmed.to_string()
                }
            }
            None => UNSPECIFIED.to_string(),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(flag: bool) -> Self {
        FieldValue::Flag(flag)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}
