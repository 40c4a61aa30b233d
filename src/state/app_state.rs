//! Main application state management

use std::time::Instant;

use crate::storage::TimerStore;

/// State shared with every HTTP handler. The timer itself lives in the
/// store, not in memory, so concurrent writers resolve as last-write-wins.
#[derive(Debug)]
pub struct AppState {
    /// Persistence backend for the single timer record
    pub store: TimerStore,
    /// Server metadata
    pub start_time: Instant,
    pub port: u16,
    pub host: String,
}

impl AppState {
    /// Create a new AppState around the selected store
    pub fn new(store: TimerStore, port: u16, host: String) -> Self {
        Self {
            store,
            start_time: Instant::now(),
            port,
            host,
        }
    }

    /// Calculate server uptime as a formatted string
    pub fn get_uptime(&self) -> String {
        let duration = self.start_time.elapsed();
        let hours = duration.as_secs() / 3600;
        let minutes = (duration.as_secs() % 3600) / 60;
        let seconds = duration.as_secs() % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}s", seconds)
        }
    }
}
