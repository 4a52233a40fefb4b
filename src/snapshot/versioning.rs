use sha2::{Digest, Sha256};

use crate::snapshot::dataset::DatasetSnapshot;
use crate::types::identifiers::DatasetVersion;

impl DatasetSnapshot {
    /// Content version of the snapshot, independent of record order.
    ///
    /// sha256 over "product:" + json for each product sorted by id, then
    /// "note:" + json for each note sorted by id.
    pub fn version(&self) -> Result<DatasetVersion, serde_json::Error> {
        let mut products: Vec<_> = self.products.iter().collect();
        products.sort_by(|a, b| a.id.cmp(&b.id));
        let mut notes: Vec<_> = self.notes.iter().collect();
        notes.sort_by(|a, b| a.id.cmp(&b.id));

        let mut hasher = Sha256::new();
        for product in products {
            hasher.update(b"product:");
            hasher.update(serde_json::to_vec(product)?);
        }
        for note in notes {
            hasher.update(b"note:");
            hasher.update(serde_json::to_vec(note)?);
        }

        Ok(DatasetVersion::from_digest(&hasher.finalize()))
    }
}
