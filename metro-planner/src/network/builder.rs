//! Build phase of the station index.

use std::collections::HashMap;

use tracing::debug;

use super::{Edge, EdgeKind, Line, LineNumber, NetworkError, Station, StationId, StationIndex};

/// Accumulates lines, stations and connections, then freezes them into a
/// read-only [`StationIndex`].
///
/// Stations must be added in physical order along their line, after the
/// line itself. Connections may only reference stations already added.
///
/// # Examples
///
/// ```
/// use metro_planner::network::{LineNumber, Station, StationIndexBuilder};
///
/// let mut builder = StationIndexBuilder::new();
/// builder.add_line(LineNumber(1), "Первая").unwrap();
/// builder.add_line(LineNumber(2), "Вторая").unwrap();
/// builder.add_station("Алая", LineNumber(1)).unwrap();
/// builder.add_station("Синяя", LineNumber(2)).unwrap();
/// builder
///     .add_connection(&[
///         Station::new("Алая", LineNumber(1)),
///         Station::new("Синяя", LineNumber(2)),
///     ])
///     .unwrap();
///
/// let index = builder.build();
/// assert_eq!(index.station_count(), 2);
/// ```
#[derive(Debug, Default)]
pub struct StationIndexBuilder {
    lines: Vec<Line>,
    line_positions: HashMap<LineNumber, usize>,
    stations: Vec<Station>,
    by_key: HashMap<Station, StationId>,
    by_name: HashMap<String, Vec<StationId>>,
    adjacency: Vec<Vec<Edge>>,
}

impl StationIndexBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a new line.
    pub fn add_line(
        &mut self,
        number: LineNumber,
        name: impl Into<String>,
    ) -> Result<(), NetworkError> {
        if self.line_positions.contains_key(&number) {
            return Err(NetworkError::DuplicateLine(number));
        }
        self.line_positions.insert(number, self.lines.len());
        self.lines.push(Line::new(number, name.into()));
        Ok(())
    }

    /// Register a station at the end of its line.
    ///
    /// The new station becomes line-adjacent to the line's previous terminus.
    pub fn add_station(
        &mut self,
        name: impl Into<String>,
        line: LineNumber,
    ) -> Result<StationId, NetworkError> {
        let position = *self
            .line_positions
            .get(&line)
            .ok_or(NetworkError::LineNotFound(line))?;

        let station = Station::new(name, line);
        if self.by_key.contains_key(&station) {
            return Err(NetworkError::DuplicateStation(station));
        }

        let id = StationId(self.stations.len());
        self.adjacency.push(Vec::new());
        self.by_name
            .entry(station.name().to_string())
            .or_default()
            .push(id);
        self.by_key.insert(station.clone(), id);
        self.stations.push(station);

        if let Some(previous) = self.lines[position].push(id) {
            self.link(previous, id, EdgeKind::Line);
        }

        Ok(id)
    }

    /// Link every pair of stations in the group with a connection edge.
    ///
    /// Pairs that are already adjacent keep their existing edge.
    pub fn add_connection(&mut self, stations: &[Station]) -> Result<(), NetworkError> {
        if stations.len() < 2 {
            return Err(NetworkError::ConnectionTooSmall(stations.len()));
        }

        let ids = stations
            .iter()
            .map(|station| {
                self.station_id(station)
                    .ok_or_else(|| NetworkError::StationNotFound {
                        name: station.name().to_string(),
                        line: Some(station.line()),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;

        for (i, &a) in ids.iter().enumerate() {
            for &b in &ids[i + 1..] {
                self.link(a, b, EdgeKind::Connection);
            }
        }

        Ok(())
    }

    /// Look up an already-registered station.
    pub fn station_id(&self, station: &Station) -> Option<StationId> {
        self.by_key.get(station).copied()
    }

    /// Freeze into a read-only index.
    ///
    /// Each station's neighbours are ordered line edges first (previous stop,
    /// then next stop), then connections in registration order.
    pub fn build(mut self) -> StationIndex {
        for edges in &mut self.adjacency {
            edges.sort_by_key(|edge| edge.kind);
        }

        debug!(
            lines = self.lines.len(),
            stations = self.stations.len(),
            "station index built"
        );

        StationIndex {
            lines: self.lines,
            line_positions: self.line_positions,
            stations: self.stations,
            by_key: self.by_key,
            by_name: self.by_name,
            adjacency: self.adjacency,
        }
    }

    fn link(&mut self, a: StationId, b: StationId, kind: EdgeKind) {
        if a == b || self.adjacency[a.0].iter().any(|edge| edge.to == b) {
            return;
        }
        self.adjacency[a.0].push(Edge { to: b, kind });
        self.adjacency[b.0].push(Edge { to: a, kind });
    }
}
