//! Error types for restyle
//!
//! Uses `thiserror` for library errors. Per-document failures never surface
//! here; they are recorded in the rewrite result and the run continues.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for restyle operations
pub type RestyleResult<T> = Result<T, RestyleError>;

/// Main error type for restyle operations
#[derive(Error, Debug)]
pub enum RestyleError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Pages root does not exist or is not a directory
    #[error("pages directory not found: {path}")]
    RootNotFound { path: PathBuf },

    /// Directory traversal failed
    #[error("failed to scan {root}: {message}")]
    Walk { root: PathBuf, message: String },

    /// Configuration file could not be parsed
    #[error("invalid config in {file}: {message}")]
    InvalidConfig { file: PathBuf, message: String },

    /// Stylesheet layout cannot produce usable patterns
    #[error("invalid stylesheet layout: {message}")]
    InvalidLayout { message: String },

    /// A matcher could not be compiled from the stylesheet layout
    #[error("invalid {name} pattern: {source}")]
    InvalidPattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },
}
