//! Persistence for the single timer document
//!
//! The timer record lives in exactly one place: a JSON file under the data
//! directory, or the same document under a fixed key in a blob store when
//! the deployment provides a token for one.

pub mod blob;
pub mod file;

use thiserror::Error;

use crate::config::Config;
use crate::state::TimerRecord;

pub use blob::BlobStore;
pub use file::FileStore;

/// Key / file name of the single timer document.
pub const TIMER_DOCUMENT: &str = "timer.json";

/// Errors from writing or deleting the timer document. Reads never error:
/// an unreadable or unparsable document is reported as "no timer".
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("blob store returned {status} on {op}")]
    BlobStatus {
        op: &'static str,
        status: reqwest::StatusCode,
    },
}

/// The selected persistence backend.
#[derive(Debug)]
pub enum TimerStore {
    File(FileStore),
    Blob(BlobStore),
}

impl TimerStore {
    /// Select a backend from the configuration: blob when the deployment
    /// credential is present in the environment, the data directory
    /// otherwise.
    pub fn open(config: &Config) -> Self {
        match config.blob_config() {
            Some(blob) => Self::Blob(BlobStore::new(&blob)),
            None => Self::File(FileStore::new(&config.data_dir)),
        }
    }

    /// Backend name for startup logging
    pub fn backend(&self) -> &'static str {
        match self {
            Self::File(_) => "file",
            Self::Blob(_) => "blob",
        }
    }

    /// Load the current record. Missing, unreadable, and unparsable
    /// documents all read as `None`.
    pub async fn load(&self) -> Option<TimerRecord> {
        match self {
            Self::File(store) => store.load().await,
            Self::Blob(store) => store.load().await,
        }
    }

    /// Create or replace the record.
    pub async fn save(&self, record: &TimerRecord) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.save(record).await,
            Self::Blob(store) => store.save(record).await,
        }
    }

    /// Delete the record. Deleting an absent record succeeds.
    pub async fn clear(&self) -> Result<(), StoreError> {
        match self {
            Self::File(store) => store.clear().await,
            Self::Blob(store) => store.clear().await,
        }
    }
}
