//! Loading and holding the results document

use std::path::Path;

use crate::error::{Error, Result};

use super::model::GameRecord;

/// Immutable store of game records, in file order.
///
/// Built wholesale by [`ResultsStore::load`]; there is no incremental
/// update. A failed load propagates as [`Error::Data`] and never replaces
/// caller-visible state with a synthesized empty store.
#[derive(Debug, Clone)]
pub struct ResultsStore {
    records: Vec<GameRecord>,
}

impl ResultsStore {
    /// Build a store from records already in memory
    pub fn from_records(records: Vec<GameRecord>) -> Self {
        Self { records }
    }

    /// Load a store from a UTF-8 JSON document whose top-level value is an
    /// array of game objects.
    ///
    /// Fails with [`Error::Data`] when the file is absent, unreadable, or
    /// not valid JSON of the expected shape.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::Data {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let records: Vec<GameRecord> = serde_json::from_str(&content).map_err(|e| Error::Data {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        tracing::debug!(
            "loaded {} game records from {}",
            records.len(),
            path.display()
        );
        Ok(Self { records })
    }

    /// Records in file order
    pub fn records(&self) -> &[GameRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &GameRecord> {
        self.records.iter()
    }
}
