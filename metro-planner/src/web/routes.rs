//! HTTP route handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
};
use tower_http::trace::TraceLayer;
use tracing::warn;

use crate::network::{LineNumber, Station, StationIndex};
use crate::planner::RouteError;

use super::dto::*;
use super::state::AppState;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/lines", get(list_lines))
        .route("/route", get(find_route))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}

/// List every line with its stations.
async fn list_lines(State(state): State<AppState>) -> Json<LinesResponse> {
    let index = state.calculator.index();
    let lines = index
        .lines()
        .map(|line| LineResult::from_line(line, index))
        .collect();

    Json(LinesResponse { lines })
}

/// Plan the shortest route between two stations.
async fn find_route(
    State(state): State<AppState>,
    Query(req): Query<RouteRequest>,
) -> Result<Json<RouteResponse>, AppError> {
    let index = state.calculator.index();
    let from = resolve_station(index, &req.from, req.from_line)?;
    let to = resolve_station(index, &req.to, req.to_line)?;

    let journey = state.calculator.plan(from, to)?;

    Ok(Json(RouteResponse::from_journey(&journey, index)))
}

/// Find a station by name, on a specific line when one is given.
fn resolve_station<'a>(
    index: &'a StationIndex,
    name: &str,
    line: Option<u32>,
) -> Result<&'a Station, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest {
            message: "station name must not be empty".to_string(),
        });
    }

    let station = match line {
        Some(number) => index.get_station_on_line(name, LineNumber(number)),
        None => index.get_station(name),
    };
    station.map_err(|e| AppError::NotFound {
        message: e.to_string(),
    })
}

/// Application error type.
#[derive(Debug)]
pub enum AppError {
    BadRequest { message: String },
    NotFound { message: String },
}

impl From<RouteError> for AppError {
    fn from(e: RouteError) -> Self {
        match e {
            RouteError::StationNotFound(_) | RouteError::NoRoute { .. } => AppError::NotFound {
                message: e.to_string(),
            },
            RouteError::EmptyRoute | RouteError::NotAdjacent { .. } => AppError::BadRequest {
                message: e.to_string(),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let (status, message) = match self {
            AppError::BadRequest { message } => (StatusCode::BAD_REQUEST, message),
            AppError::NotFound { message } => (StatusCode::NOT_FOUND, message),
        };

        warn!(%status, %message, "request failed");

        let body = Json(ErrorResponse { error: message });
        (status, body).into_response()
    }
}
