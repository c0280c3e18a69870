//! Network loading error types.

use std::path::PathBuf;

use crate::network::{LineNumber, NetworkError};

/// Errors that can occur when loading a network description.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The file could not be read
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The document is not valid network JSON
    #[error("invalid network JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A key of the `stations` section is not a line number
    #[error("stations key {0:?} is not a line number")]
    InvalidLineKey(String),

    /// Two `stations` keys name the same line (e.g. "1" and "01")
    #[error("stations for line {0} are listed more than once")]
    DuplicateLineKey(LineNumber),

    /// A connection references a station that was never registered
    #[error("connection station {station} on line {line} not found")]
    UnknownConnectionStation { station: String, line: LineNumber },

    /// The description is inconsistent (duplicates, unknown lines, ...)
    #[error("invalid network: {0}")]
    Network(#[from] NetworkError),
}
