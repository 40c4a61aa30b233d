//! Static assets for the browser frontend.

/// The countdown page served at `/`.
pub const INDEX_HTML: &str = include_str!("index.html");
