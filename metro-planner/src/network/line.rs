//! Line types.

use std::fmt;

use super::StationId;

/// Numeric identifier of a line, unique within a network.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineNumber(pub u32);

impl fmt::Display for LineNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// An ordered chain of stations served by one route.
///
/// Stations are stored in physical order: consecutive entries are the only
/// same-line adjacency in the network.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    number: LineNumber,
    name: String,
    stations: Vec<StationId>,
}

impl Line {
    pub(super) fn new(number: LineNumber, name: String) -> Self {
        Self {
            number,
            name,
            stations: Vec::new(),
        }
    }

    /// Append a station to the end of the line, returning the previous
    /// terminus (if any).
    pub(super) fn push(&mut self, station: StationId) -> Option<StationId> {
        let previous = self.stations.last().copied();
        self.stations.push(station);
        previous
    }

    pub fn number(&self) -> LineNumber {
        self.number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Stations in travel order.
    pub fn stations(&self) -> &[StationId] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }
}
