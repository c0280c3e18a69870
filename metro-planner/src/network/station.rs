//! Station types.

use std::fmt;

use super::LineNumber;

/// Stable identifier of a station inside a [`StationIndex`](super::StationIndex).
///
/// Identifiers are handed out in registration order and are only meaningful
/// for the index that produced them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationId(pub(super) usize);

impl StationId {
    /// Position of the station in the index arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A platform on one line.
///
/// Names are not unique across the network: interchange stations usually
/// share a name across lines. Two stations are equal iff both the name and
/// the line match.
///
/// # Examples
///
/// ```
/// use metro_planner::network::{LineNumber, Station};
///
/// let a = Station::new("Алая", LineNumber(1));
/// assert_eq!(a, Station::new("Алая", LineNumber(1)));
/// assert_ne!(a, Station::new("Алая", LineNumber(2)));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Station {
    name: String,
    line: LineNumber,
}

impl Station {
    /// Create a station value.
    pub fn new(name: impl Into<String>, line: LineNumber) -> Self {
        Self {
            name: name.into(),
            line,
        }
    }

    /// The station's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The line this station belongs to.
    pub fn line(&self) -> LineNumber {
        self.line
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (line {})", self.name, self.line)
    }
}
