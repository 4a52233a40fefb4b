pub mod dataset;
pub mod versioning;

pub use dataset::{DatasetSnapshot, SnapshotError};
