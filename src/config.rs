//! Configuration and CLI argument handling

use std::env;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing::info;

/// Environment variable whose presence selects the blob storage backend.
pub const BLOB_TOKEN_VAR: &str = "BLOB_READ_WRITE_TOKEN";

/// Environment variable overriding the blob store base URL.
pub const BLOB_URL_VAR: &str = "BLOB_STORE_URL";

const DEFAULT_BLOB_URL: &str = "https://blob.vercel-storage.com";

/// CLI argument parsing structure
#[derive(Parser)]
#[command(name = "tomatic")]
#[command(about = "A single-slot kitchen timer server with countdown clients")]
#[command(version)]
pub struct Config {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Port to bind the server to
    #[arg(short, long, default_value = "3000")]
    pub port: u16,

    /// Host address to bind to
    #[arg(long, default_value = "0.0.0.0")]
    pub host: String,

    /// Directory holding the timer document when using file storage
    #[arg(long, default_value = "data")]
    pub data_dir: PathBuf,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Command {
    /// Run the timer server (default)
    Serve,

    /// Follow the server's timer from the terminal
    Watch {
        /// Base URL of a running tomatic server
        #[arg(long, default_value = "http://127.0.0.1:3000")]
        url: String,

        /// Seconds between polls of the server
        #[arg(long, default_value = "2")]
        poll_secs: u64,
    },
}

/// Credentials for the blob storage backend, taken from the environment.
#[derive(Debug, Clone)]
pub struct BlobConfig {
    pub token: String,
    pub base_url: String,
}

impl Config {
    /// Parse configuration from command line arguments
    pub fn parse() -> Self {
        Parser::parse()
    }

    /// Get the server address as a formatted string
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Get the appropriate log level based on verbose flag
    pub fn log_level(&self) -> &'static str {
        if self.verbose {
            "debug"
        } else {
            "info"
        }
    }

    /// Read blob storage credentials from the environment. Presence of the
    /// deployment token switches persistence from the local data directory
    /// to the blob store.
    pub fn blob_config(&self) -> Option<BlobConfig> {
        let token = env::var(BLOB_TOKEN_VAR).ok().filter(|t| !t.is_empty())?;
        let base_url = env::var(BLOB_URL_VAR)
            .ok()
            .filter(|u| !u.is_empty())
            .unwrap_or_else(|| {
                info!("{BLOB_URL_VAR} not set, using default: {DEFAULT_BLOB_URL}");
                DEFAULT_BLOB_URL.to_string()
            });
        Some(BlobConfig { token, base_url })
    }
}
