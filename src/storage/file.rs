//! File-backed timer document

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use super::{StoreError, TIMER_DOCUMENT};
use crate::state::TimerRecord;

/// Stores the timer document as pretty-printed JSON under the data
/// directory. The directory is created on the first write.
#[derive(Debug)]
pub struct FileStore {
    data_dir: PathBuf,
    path: PathBuf,
}

impl FileStore {
    pub fn new(data_dir: &Path) -> Self {
        Self {
            data_dir: data_dir.to_path_buf(),
            path: data_dir.join(TIMER_DOCUMENT),
        }
    }

    pub async fn load(&self) -> Option<TimerRecord> {
        let raw = match fs::read(&self.path).await {
            Ok(raw) => raw,
            Err(e) if e.kind() == ErrorKind::NotFound => return None,
            Err(e) => {
                warn!("Failed to read {}: {}", self.path.display(), e);
                return None;
            }
        };

        match serde_json::from_slice(&raw) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Ignoring unparsable {}: {}", self.path.display(), e);
                None
            }
        }
    }

    pub async fn save(&self, record: &TimerRecord) -> Result<(), StoreError> {
        fs::create_dir_all(&self.data_dir).await?;
        let json = serde_json::to_vec_pretty(record)?;
        fs::write(&self.path, json).await?;
        debug!("Saved timer document to {}", self.path.display());
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
