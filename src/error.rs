//! Error types for arcana

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Unknown spread type: {0}")]
    UnknownSpread(String),

    #[error("Reading not found: {0}")]
    NotFound(String),

    #[error("Corrupt reading data: {0}")]
    CorruptData(String),

    #[error("Storage write error: {0}")]
    StorageWrite(String),

    #[error("Storage read error: {0}")]
    StorageRead(String),

    #[error("Invalid catalog: {0}")]
    InvalidCatalog(String),

    #[error("Interpretation error: {0}")]
    Interpretation(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl Error {
    pub fn storage_write(msg: impl Into<String>) -> Self {
        Error::StorageWrite(msg.into())
    }

    pub fn storage_read(msg: impl Into<String>) -> Self {
        Error::StorageRead(msg.into())
    }

    pub fn interpretation(msg: impl Into<String>) -> Self {
        Error::Interpretation(msg.into())
    }
}
