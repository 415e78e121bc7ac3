use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{
    error::Result,
    model::{InteractionRecord, Item},
    store::{MemoryCatalog, MemoryInteractions},
};

/// On-disk image of both stores.
///
/// `.json` files are read and written as JSON, everything else as CBOR.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub items: Vec<Item>,
    #[serde(default)]
    pub interactions: Vec<InteractionRecord>,
}

fn is_json(path: &Path) -> bool {
    path.extension().and_then(|e| e.to_str()) == Some("json")
}

impl Snapshot {
    pub fn from_stores(catalog: &MemoryCatalog, interactions: &MemoryInteractions) -> Self {
        Self {
            items: catalog.iter().cloned().collect(),
            interactions: interactions.iter().copied().collect(),
        }
    }

    pub fn into_stores(self) -> (MemoryCatalog, MemoryInteractions) {
        (
            MemoryCatalog::from_items(self.items),
            MemoryInteractions::from_records(self.interactions),
        )
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let reader = BufReader::new(File::open(path)?);
        let snapshot: Self = if is_json(path) {
            serde_json::from_reader(reader)?
        } else {
            serde_cbor::from_reader(reader)?
        };
        info!(
            path = %path.display(),
            items = snapshot.items.len(),
            interactions = snapshot.interactions.len(),
            "loaded snapshot"
        );
        Ok(snapshot)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        let writer = BufWriter::new(File::create(path)?);
        if is_json(path) {
            serde_json::to_writer_pretty(writer, self)?;
        } else {
            serde_cbor::to_writer(writer, self)?;
        }
        info!(path = %path.display(), items = self.items.len(), "saved snapshot");
        Ok(())
    }
}
