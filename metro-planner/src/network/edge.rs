//! Adjacency edges between stations.

use super::StationId;

/// How two adjacent stations are linked.
///
/// The ordering (`Line` before `Connection`) is the order in which a
/// station's neighbours are explored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EdgeKind {
    /// Consecutive stations on the same line.
    Line,
    /// A transfer between lines at one physical location.
    Connection,
}

/// A directed half of a symmetric adjacency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: StationId,
    pub kind: EdgeKind,
}
