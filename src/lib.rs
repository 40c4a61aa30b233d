//! Tomatic - a single-slot kitchen timer
//!
//! One global countdown: the server persists its start time and duration,
//! clients re-derive the remaining time from the stored record and fire a
//! one-shot alarm when it reaches zero.

pub mod api;
pub mod assets;
pub mod client;
pub mod config;
pub mod error;
pub mod state;
pub mod storage;
pub mod utils;

// Re-export commonly used types
pub use api::create_router;
pub use config::Config;
pub use state::AppState;
pub use storage::TimerStore;
pub use utils::signals::shutdown_signal;
