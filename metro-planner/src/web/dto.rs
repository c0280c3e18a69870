//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::network::{Line, StationIndex};
use crate::planner::{Journey, Stop};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Origin station name
    pub from: String,

    /// Origin line; without it the first-registered station of that name is used
    pub from_line: Option<u32>,

    /// Destination station name
    pub to: String,

    /// Destination line
    pub to_line: Option<u32>,
}

/// A station on a planned route.
#[derive(Debug, Serialize)]
pub struct StopResult {
    /// Station name
    pub name: String,

    /// Line number
    pub line: u32,

    /// Line display name
    pub line_name: String,

    /// Whether this station was reached by changing lines
    pub transfer: bool,
}

impl StopResult {
    /// Convert from a journey stop.
    pub fn from_stop(stop: &Stop, index: &StationIndex) -> Self {
        let line = stop.station.line();
        Self {
            name: stop.station.name().to_string(),
            line: line.0,
            line_name: index
                .get_line(line)
                .map(|l| l.name().to_string())
                .unwrap_or_default(),
            transfer: stop.is_transfer(),
        }
    }
}

/// Response with a planned route.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Stations in travel order, origin and destination included
    pub stations: Vec<StopResult>,

    /// Total travel time in minutes
    pub duration_mins: f64,

    /// Number of line changes
    pub transfers: usize,
}

impl RouteResponse {
    /// Convert from a planned journey.
    pub fn from_journey(journey: &Journey, index: &StationIndex) -> Self {
        Self {
            stations: journey
                .stops()
                .iter()
                .map(|stop| StopResult::from_stop(stop, index))
                .collect(),
            duration_mins: journey.duration_mins(),
            transfers: journey.transfers(),
        }
    }
}

/// A line with its stations.
#[derive(Debug, Serialize)]
pub struct LineResult {
    /// Line number
    pub number: u32,

    /// Display name
    pub name: String,

    /// Station names in travel order
    pub stations: Vec<String>,
}

impl LineResult {
    /// Convert from a network line.
    pub fn from_line(line: &Line, index: &StationIndex) -> Self {
        Self {
            number: line.number().0,
            name: line.name().to_string(),
            stations: index
                .stations_on(line)
                .map(|station| station.name().to_string())
                .collect(),
        }
    }
}

/// Response listing every line.
#[derive(Debug, Serialize)]
pub struct LinesResponse {
    pub lines: Vec<LineResult>,
}

/// Error response.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::load_from_str;
    use crate::network::{LineNumber, Station};
    use crate::planner::RouteCalculator;

    fn calculator() -> RouteCalculator {
        RouteCalculator::new(load_from_str(include_str!("../../data/metro.json")).unwrap())
    }

    #[test]
    fn route_response_from_journey() {
        let calculator = calculator();
        let journey = calculator
            .plan(
                &Station::new("Голубая", LineNumber(2)),
                &Station::new("Черная", LineNumber(3)),
            )
            .unwrap();

        let response = RouteResponse::from_journey(&journey, calculator.index());

        let names: Vec<_> = response.stations.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["Голубая", "Серая", "Черная"]);
        let transfers: Vec<_> = response.stations.iter().map(|s| s.transfer).collect();
        assert_eq!(transfers, vec![false, true, false]);
        assert_eq!(response.stations[1].line, 3);
        assert_eq!(response.stations[1].line_name, "Третья");
        assert_eq!(response.duration_mins, 6.0);
        assert_eq!(response.transfers, 1);
    }

    #[test]
    fn route_response_serializes() {
        let calculator = calculator();
        let station = Station::new("Алая", LineNumber(1));
        let journey = calculator.plan(&station, &station).unwrap();

        let json = serde_json::to_value(RouteResponse::from_journey(&journey, calculator.index()))
            .unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "stations": [
                    {"name": "Алая", "line": 1, "line_name": "Первая", "transfer": false}
                ],
                "duration_mins": 0.0,
                "transfers": 0
            })
        );
    }

    #[test]
    fn line_result_lists_stations_in_order() {
        let calculator = calculator();
        let index = calculator.index();
        let line = index.get_line(LineNumber(3)).unwrap();

        let result = LineResult::from_line(line, index);

        assert_eq!(result.number, 3);
        assert_eq!(result.name, "Третья");
        assert_eq!(result.stations, vec!["Серая", "Черная"]);
    }
}
