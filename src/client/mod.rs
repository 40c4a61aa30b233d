//! Countdown clients
//!
//! The countdown state machine shared by every frontend, and the terminal
//! frontend that drives it. The browser frontend lives in `assets`.

pub mod countdown;
pub mod watch;

// Re-export main types
pub use countdown::{format_clock, Countdown, TimerPhase};
pub use watch::{watch, WatchConfig};
