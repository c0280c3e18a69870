//! Network model: lines, stations and the connection graph.
//!
//! The graph is built in two phases. A [`StationIndexBuilder`] accepts
//! lines, stations and connections; [`StationIndexBuilder::build`] freezes
//! it into a read-only [`StationIndex`] that route queries run against.

mod builder;
mod edge;
mod error;
mod index;
mod line;
mod station;

pub use builder::StationIndexBuilder;
pub use edge::{Edge, EdgeKind};
pub use error::NetworkError;
pub use index::StationIndex;
pub use line::{Line, LineNumber};
pub use station::{Station, StationId};
