//! Error types for configuration file I/O.
//!
//! Responsibilities:
//! - Define the error variants surfaced by the loader.
//!
//! Invariants:
//! - Parsing itself never produces an error: once a file is readable, the
//!   parser degrades by skipping malformed lines. Only I/O and path
//!   resolution can fail.

use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by configuration file operations.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file at {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write config file at {path}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("unable to determine config directory: {0}")]
    ConfigDirUnavailable(String),
}
