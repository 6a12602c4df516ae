//! Reading store
//!
//! One pretty-printed JSON document per reading, named `{reading_id}.json`.
//! No index and no locking: lookup maps the identifier straight to a key.

use bytes::Bytes;
use std::sync::Arc;

use super::StorageBackend;
use crate::types::Reading;
use crate::{Error, Result};

const EXTENSION: &str = "json";

pub struct ReadingStore {
    backend: Arc<dyn StorageBackend>,
}

impl ReadingStore {
    pub fn new(backend: Arc<dyn StorageBackend>) -> Self {
        Self { backend }
    }

    /// Persist a reading, overwriting any reading with the same id.
    ///
    /// Returns the location the document was written to.
    pub async fn save(&self, reading: &Reading) -> Result<String> {
        let key = document_key(&reading.reading_id).ok_or_else(|| {
            Error::storage_write(format!("invalid reading id: {:?}", reading.reading_id))
        })?;

        let data = serde_json::to_vec_pretty(reading)
            .map_err(|e| Error::storage_write(format!("cannot encode reading: {}", e)))?;

        self.backend.put(&key, Bytes::from(data)).await?;

        let location = self.backend.location(&key);
        tracing::info!(reading_id = %reading.reading_id, %location, "Saved reading");
        Ok(location)
    }

    /// Load a previously saved reading
    pub async fn load(&self, reading_id: &str) -> Result<Reading> {
        let key =
            document_key(reading_id).ok_or_else(|| Error::NotFound(reading_id.to_string()))?;

        let data = self.backend.get(&key).await.map_err(|e| match e {
            Error::NotFound(_) => Error::NotFound(reading_id.to_string()),
            other => other,
        })?;

        serde_json::from_slice(&data)
            .map_err(|e| Error::CorruptData(format!("{}: {}", reading_id, e)))
    }
}

/// Storage key for a reading id, or `None` if the id could name a path
fn document_key(reading_id: &str) -> Option<String> {
    let valid = !reading_id.is_empty()
        && reading_id
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    valid.then(|| format!("{}.{}", reading_id, EXTENSION))
}
