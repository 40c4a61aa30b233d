//! Blob-backed timer document

use std::time::Duration;

use reqwest::StatusCode;
use tracing::{debug, warn};

use super::{StoreError, TIMER_DOCUMENT};
use crate::config::BlobConfig;
use crate::state::TimerRecord;

/// Stores the timer document under a fixed key in an HTTP blob store,
/// authenticated with the deployment's read/write token.
#[derive(Debug)]
pub struct BlobStore {
    http: reqwest::Client,
    url: String,
    token: String,
}

impl BlobStore {
    pub fn new(config: &BlobConfig) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(5))
            .connect_timeout(Duration::from_secs(2))
            .build()
            .expect("failed to create HTTP client");

        Self {
            http,
            url: format!(
                "{}/{}",
                config.base_url.trim_end_matches('/'),
                TIMER_DOCUMENT
            ),
            token: config.token.clone(),
        }
    }

    pub async fn load(&self) -> Option<TimerRecord> {
        let response = match self
            .http
            .get(&self.url)
            .bearer_auth(&self.token)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("Failed to fetch timer blob: {}", e);
                return None;
            }
        };

        if response.status() == StatusCode::NOT_FOUND {
            return None;
        }
        if !response.status().is_success() {
            warn!("Blob store returned {} on read", response.status());
            return None;
        }

        match response.json().await {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Ignoring unparsable timer blob: {}", e);
                None
            }
        }
    }

    pub async fn save(&self, record: &TimerRecord) -> Result<(), StoreError> {
        let response = self
            .http
            .put(&self.url)
            .bearer_auth(&self.token)
            .json(record)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(StoreError::BlobStatus {
                op: "save",
                status: response.status(),
            });
        }

        debug!("Saved timer document to {}", self.url);
        Ok(())
    }

    pub async fn clear(&self) -> Result<(), StoreError> {
        let response = self
            .http
            .delete(&self.url)
            .bearer_auth(&self.token)
            .send()
            .await?;

        // Deleting an absent document is a success, same as the file backend
        if response.status() == StatusCode::NOT_FOUND || response.status().is_success() {
            return Ok(());
        }

        Err(StoreError::BlobStatus {
            op: "clear",
            status: response.status(),
        })
    }
}
