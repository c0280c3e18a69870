//! Route planner over a finished station index.
//!
//! Shortest routes are found by breadth-first search (fewest hops);
//! durations are a fold of fixed per-edge costs over a route.

mod calculator;
mod config;
mod error;
mod route;

pub use calculator::RouteCalculator;
pub use config::TravelTimes;
pub use error::RouteError;
pub use route::{Hop, Journey, Stop};
