//! Timer record structure and snapshot derivation

use chrono::Utc;
use serde::{Deserialize, Serialize};

/// The single persisted timer record. Remaining time is never stored; it is
/// derived from the wall clock on every read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimerRecord {
    /// Unix timestamp in milliseconds when the countdown started
    pub started_at: i64,
    /// Total countdown duration in milliseconds
    pub duration_ms: i64,
}

/// Point-in-time view of a record against a given clock reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerSnapshot {
    pub remaining_ms: i64,
    pub elapsed_ms: i64,
    pub finished: bool,
}

impl TimerRecord {
    /// Create a record starting now for the given duration.
    pub fn starting_now(duration_ms: i64) -> Self {
        Self {
            started_at: now_ms(),
            duration_ms,
        }
    }

    /// Derive remaining/elapsed/finished at the given clock reading.
    ///
    /// Elapsed is not clamped: a client whose clock sits behind the
    /// server's sees a negative elapsed and a remaining above the full
    /// duration, exactly as the stored arithmetic dictates.
    pub fn snapshot(&self, now_ms: i64) -> TimerSnapshot {
        let elapsed_ms = now_ms - self.started_at;
        let remaining_ms = (self.duration_ms - elapsed_ms).max(0);
        TimerSnapshot {
            remaining_ms,
            elapsed_ms,
            finished: remaining_ms == 0,
        }
    }
}

/// Current wall clock as Unix milliseconds.
pub fn now_ms() -> i64 {
    Utc::now().timestamp_millis()
}
