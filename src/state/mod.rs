//! State management module
//!
//! This module contains the timer record, its derived snapshot, and the
//! shared application state.

pub mod app_state;
pub mod record;

// Re-export main types
pub use app_state::AppState;
pub use record::{now_ms, TimerRecord, TimerSnapshot};
