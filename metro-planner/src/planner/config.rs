//! Travel-time configuration for duration calculation.

use crate::network::EdgeKind;

/// Fixed time costs of traversing an edge, in minutes.
///
/// A transfer replaces the segment time rather than adding to it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelTimes {
    /// Time to ride between consecutive stations on one line.
    pub segment_mins: f64,

    /// Time to change between lines through a connection.
    pub transfer_mins: f64,
}

impl TravelTimes {
    /// Create a configuration with the given costs.
    pub fn new(segment_mins: f64, transfer_mins: f64) -> Self {
        Self {
            segment_mins,
            transfer_mins,
        }
    }

    /// Cost of traversing one edge of the given kind.
    pub fn cost(&self, kind: EdgeKind) -> f64 {
        match kind {
            EdgeKind::Line => self.segment_mins,
            EdgeKind::Connection => self.transfer_mins,
        }
    }
}

impl Default for TravelTimes {
    fn default() -> Self {
        Self {
            segment_mins: 2.5,
            transfer_mins: 3.5,
        }
    }
}
