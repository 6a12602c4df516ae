//! Storage abstraction layer
//!
//! Readings are addressed by flat keys (`{reading_id}.json`). The reading
//! store sits on top of a [`StorageBackend`].

use async_trait::async_trait;
use bytes::Bytes;

use crate::Result;

pub mod local;
pub mod readings;

pub use local::LocalStorage;
pub use readings::ReadingStore;

/// Storage backend trait
#[async_trait]
pub trait StorageBackend: Send + Sync {
    /// Read object from storage; `Error::NotFound` when absent
    async fn get(&self, key: &str) -> Result<Bytes>;

    /// Write object to storage, replacing any existing object
    async fn put(&self, key: &str, data: Bytes) -> Result<()>;

    /// Human-readable location of an object, for logs and responses
    fn location(&self, key: &str) -> String;
}
