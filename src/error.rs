//! Error types for yosys-netlist
//!
//! Uses `thiserror` for library errors; the CLI wraps these in `anyhow`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for yosys-netlist operations
pub type NetlistResult<T> = Result<T, NetlistError>;

/// Main error type for yosys-netlist operations
#[derive(Error, Debug)]
pub enum NetlistError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Fixture directory not found
    #[error("directory not found: {path}")]
    DirectoryNotFound { path: PathBuf },

    /// The synthesis tool could not be spawned at all
    ///
    /// Tool failures after a successful spawn are not errors: they are
    /// captured in the per-input log and the batch continues.
    #[error("failed to launch synthesis tool '{binary}': {message}")]
    ToolSpawn { binary: PathBuf, message: String },

    /// Invalid configuration file
    #[error("invalid config {path}: {message}")]
    Config { path: PathBuf, message: String },
}
