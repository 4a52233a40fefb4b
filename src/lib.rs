//! Deterministic aggregation core for catalog dashboards.
//!
//! `insight-core` turns raw grouped counts into ordered categorical
//! distributions, scores and normalizes review notes by engagement, and
//! gates every aggregate behind a minimum-sample-size rule before it can
//! be exposed. All operations are pure: identical inputs always produce
//! identical outputs, and no storage or transport concerns live here.

pub mod config;
pub mod distribution;
pub mod engagement;
pub mod engine;
pub mod privacy;
pub mod record;
pub mod snapshot;
pub mod types;

pub use config::{ConfigError, InsightConfig};
pub use engine::{InsightEngine, RankOptions};
pub use privacy::{GateResult, SuppressionReason};
