//! Route query error types.

use crate::network::Station;

/// Errors from route and duration queries.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    /// Station is not part of the indexed network
    #[error("station {0} is not part of the network")]
    StationNotFound(Station),

    /// Both stations exist but the graph does not connect them
    #[error("no route from {from} to {to}")]
    NoRoute { from: Station, to: Station },

    /// Duration requested for a route with no stations
    #[error("route must contain at least one station")]
    EmptyRoute,

    /// Consecutive stations in a route are not adjacent
    #[error("stations {from} and {to} are not adjacent")]
    NotAdjacent { from: Station, to: Station },
}
