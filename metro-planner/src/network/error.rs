//! Network error types.
//!
//! Lookups on a finished index fail with the `*NotFound` variants. The
//! remaining variants describe a network description that cannot be built.

use super::{LineNumber, Station};

/// Errors from building or querying a station index.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum NetworkError {
    /// No line with this number is registered
    #[error("line {0} not found")]
    LineNotFound(LineNumber),

    /// No station matches the name (and line, when given)
    #[error(
        "station {name} not found{}",
        .line.map(|l| format!(" on line {l}")).unwrap_or_default()
    )]
    StationNotFound {
        name: String,
        line: Option<LineNumber>,
    },

    /// Line number registered twice
    #[error("line {0} is already registered")]
    DuplicateLine(LineNumber),

    /// Same (name, line) registered twice
    #[error("station {0} is already registered")]
    DuplicateStation(Station),

    /// A connection group must link at least two stations
    #[error("a connection needs at least two stations, got {0}")]
    ConnectionTooSmall(usize),
}
