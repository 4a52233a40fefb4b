// Read-only view of what the store handed over for one pass:
// no mutation
// no "update" methods
// validated once on load

use std::collections::BTreeSet;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::record::{Note, ProductRecord};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
    #[error("Duplicate product ID: {0}")]
    DuplicateProductId(String),
    #[error("Duplicate note ID: {0}")]
    DuplicateNoteId(String),
    #[error("Note {note} references unknown product {product}")]
    UnknownProduct { note: String, product: String },
}

/// Products and notes acquired for one aggregation pass.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DatasetSnapshot {
    #[serde(default)]
    pub products: Vec<ProductRecord>,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl DatasetSnapshot {
    /// Build a snapshot from already-fetched records, enforcing integrity.
    pub fn new(products: Vec<ProductRecord>, notes: Vec<Note>) -> Result<Self, SnapshotError> {
        let snapshot = Self { products, notes };
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SnapshotError> {
        let snapshot: DatasetSnapshot = serde_json::from_reader(reader)?;
        snapshot.validate()?;
        tracing::debug!(
            products = snapshot.products.len(),
            notes = snapshot.notes.len(),
            "snapshot loaded"
        );
        Ok(snapshot)
    }

    pub fn from_path(path: &Path) -> Result<Self, SnapshotError> {
        let f = File::open(path).map_err(|source| SnapshotError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_reader(BufReader::new(f))
    }

    /// Duplicate ids and notes pointing at products outside the snapshot
    /// are integrity errors.
    pub fn validate(&self) -> Result<(), SnapshotError> {
        let mut product_ids = BTreeSet::new();
        for product in &self.products {
            if !product_ids.insert(&product.id) {
                return Err(SnapshotError::DuplicateProductId(product.id.to_string()));
            }
        }

        let mut note_ids = BTreeSet::new();
        for note in &self.notes {
            if !note_ids.insert(&note.id) {
                return Err(SnapshotError::DuplicateNoteId(note.id.to_string()));
            }
            if !product_ids.contains(&note.product) {
                return Err(SnapshotError::UnknownProduct {
                    note: note.id.to_string(),
                    product: note.product.to_string(),
                });
            }
        }

        Ok(())
    }
}
