//! API response structures

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::state::{TimerRecord, TimerSnapshot};

/// Response body for all three verbs on `/api/timer`.
///
/// `finished` is only reported when a record exists; the empty response is
/// `{ "active": false, "timer": null }`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimerResponse {
    pub active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finished: Option<bool>,
    pub timer: Option<TimerBody>,
}

/// The record together with its derived fields.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerBody {
    pub started_at: i64,
    pub duration_ms: i64,
    pub remaining_ms: i64,
    pub elapsed: i64,
}

impl TimerResponse {
    /// No timer in the slot
    pub fn empty() -> Self {
        Self {
            active: false,
            finished: None,
            timer: None,
        }
    }

    /// A record that was created just now
    pub fn started(record: TimerRecord) -> Self {
        Self {
            active: true,
            finished: None,
            timer: Some(TimerBody {
                started_at: record.started_at,
                duration_ms: record.duration_ms,
                remaining_ms: record.duration_ms,
                elapsed: 0,
            }),
        }
    }

    /// An existing record viewed through a snapshot
    pub fn current(record: TimerRecord, snapshot: TimerSnapshot) -> Self {
        Self {
            active: !snapshot.finished,
            finished: Some(snapshot.finished),
            timer: Some(TimerBody {
                started_at: record.started_at,
                duration_ms: record.duration_ms,
                remaining_ms: snapshot.remaining_ms,
                elapsed: snapshot.elapsed_ms,
            }),
        }
    }
}

impl TimerBody {
    /// The record this body was derived from
    pub fn record(&self) -> TimerRecord {
        TimerRecord {
            started_at: self.started_at,
            duration_ms: self.duration_ms,
        }
    }
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
    pub version: String,
    pub uptime: String,
}

impl HealthResponse {
    /// Create a new health response
    pub fn ok(uptime: String) -> Self {
        Self {
            status: "ok".to_string(),
            timestamp: Utc::now(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            uptime,
        }
    }
}
