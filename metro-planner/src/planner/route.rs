//! Route result types.

use crate::network::{EdgeKind, Station};

/// One classified step of a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hop<'a> {
    pub from: &'a Station,
    pub to: &'a Station,
    pub kind: EdgeKind,
}

/// A station visited by a journey and how it was reached.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stop {
    pub station: Station,

    /// `None` for the origin.
    pub arrived_by: Option<EdgeKind>,
}

impl Stop {
    /// Whether this station was reached by changing lines.
    pub fn is_transfer(&self) -> bool {
        self.arrived_by == Some(EdgeKind::Connection)
    }
}

/// A planned route together with its duration.
#[derive(Debug, Clone, PartialEq)]
pub struct Journey {
    stops: Vec<Stop>,
    duration_mins: f64,
}

impl Journey {
    pub(super) fn new(stops: Vec<Stop>, duration_mins: f64) -> Self {
        Self {
            stops,
            duration_mins,
        }
    }

    pub fn stops(&self) -> &[Stop] {
        &self.stops
    }

    /// Stations in travel order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stops.iter().map(|stop| &stop.station)
    }

    pub fn origin(&self) -> Option<&Station> {
        self.stops.first().map(|stop| &stop.station)
    }

    pub fn destination(&self) -> Option<&Station> {
        self.stops.last().map(|stop| &stop.station)
    }

    /// Total travel time in minutes.
    pub fn duration_mins(&self) -> f64 {
        self.duration_mins
    }

    /// Number of line changes.
    pub fn transfers(&self) -> usize {
        self.stops
            .iter()
            .filter(|stop| stop.is_transfer())
            .count()
    }
}
