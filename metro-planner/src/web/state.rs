//! Application state for the web layer.

use std::sync::Arc;

use crate::planner::RouteCalculator;

/// Shared application state.
///
/// The calculator is immutable once built, so handlers share it without
/// locking.
#[derive(Clone)]
pub struct AppState {
    /// Route calculator over the loaded network
    pub calculator: Arc<RouteCalculator>,
}

impl AppState {
    /// Create a new app state.
    pub fn new(calculator: RouteCalculator) -> Self {
        Self {
            calculator: Arc::new(calculator),
        }
    }
}
