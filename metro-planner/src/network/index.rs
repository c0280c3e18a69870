//! Read-only station index.

use std::collections::HashMap;
use std::ops;

use super::{Edge, EdgeKind, Line, LineNumber, NetworkError, Station, StationId};

/// The finished network graph.
///
/// Produced by [`StationIndexBuilder::build`](super::StationIndexBuilder::build)
/// and immutable afterwards. Stations live in an arena addressed by
/// [`StationId`]; adjacency is an explicit list of edges per station.
#[derive(Debug, Clone)]
pub struct StationIndex {
    pub(super) lines: Vec<Line>,
    pub(super) line_positions: HashMap<LineNumber, usize>,
    pub(super) stations: Vec<Station>,
    pub(super) by_key: HashMap<Station, StationId>,
    pub(super) by_name: HashMap<String, Vec<StationId>>,
    pub(super) adjacency: Vec<Vec<Edge>>,
}

impl StationIndex {
    /// Look up a line by number.
    pub fn get_line(&self, number: LineNumber) -> Result<&Line, NetworkError> {
        self.line_positions
            .get(&number)
            .map(|&position| &self.lines[position])
            .ok_or(NetworkError::LineNotFound(number))
    }

    /// Look up a station by name alone.
    ///
    /// When several lines have a station with this name, the one registered
    /// first wins. Use [`get_station_on_line`](Self::get_station_on_line)
    /// for an exact lookup.
    pub fn get_station(&self, name: &str) -> Result<&Station, NetworkError> {
        self.by_name
            .get(name)
            .and_then(|ids| ids.first())
            .map(|&id| &self[id])
            .ok_or_else(|| NetworkError::StationNotFound {
                name: name.to_string(),
                line: None,
            })
    }

    /// Look up the station with this exact name on this line.
    pub fn get_station_on_line(
        &self,
        name: &str,
        line: LineNumber,
    ) -> Result<&Station, NetworkError> {
        let key = Station::new(name, line);
        self.by_key
            .get(&key)
            .map(|&id| &self[id])
            .ok_or_else(|| NetworkError::StationNotFound {
                name: name.to_string(),
                line: Some(line),
            })
    }

    /// All stations with this name, in registration order.
    pub fn stations_named<'a>(&'a self, name: &str) -> impl Iterator<Item = &'a Station> + 'a {
        self.by_name
            .get(name)
            .map(Vec::as_slice)
            .unwrap_or_default()
            .iter()
            .map(move |&id| &self[id])
    }

    /// Identifier of a station value, if it belongs to this index.
    pub fn id_of(&self, station: &Station) -> Option<StationId> {
        self.by_key.get(station).copied()
    }

    /// The station with this identifier, if it belongs to this index.
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.stations.get(id.0)
    }

    /// Lines in registration order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.iter()
    }

    /// Stations of a line, in travel order.
    pub fn stations_on<'a>(&'a self, line: &'a Line) -> impl Iterator<Item = &'a Station> + 'a {
        line.stations().iter().map(move |&id| &self[id])
    }

    /// All station identifiers in registration order.
    pub fn station_ids(&self) -> impl Iterator<Item = StationId> {
        (0..self.stations.len()).map(StationId)
    }

    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Adjacent stations: line neighbours first, then connections.
    ///
    /// Returns an empty slice for identifiers from another index.
    pub fn neighbours(&self, id: StationId) -> &[Edge] {
        self.adjacency.get(id.0).map(Vec::as_slice).unwrap_or_default()
    }

    /// How `from` and `to` are linked, if they are adjacent.
    pub fn edge_between(&self, from: StationId, to: StationId) -> Option<EdgeKind> {
        self.neighbours(from)
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.kind)
    }
}

/// Panics if `id` does not belong to this index.
impl ops::Index<StationId> for StationIndex {
    type Output = Station;

    fn index(&self, id: StationId) -> &Station {
        &self.stations[id.0]
    }
}

#[cfg(test)]
mod tests {
    use super::super::StationIndexBuilder;
    use super::*;

    fn line(n: u32) -> LineNumber {
        LineNumber(n)
    }

    /// Two lines sharing a station name ("Узловая") at a connection.
    fn index_with_shared_name() -> StationIndex {
        let mut builder = StationIndexBuilder::new();
        builder.add_line(line(2), "Вторая").unwrap();
        builder.add_line(line(1), "Первая").unwrap();
        builder.add_station("Северная", line(2)).unwrap();
        builder.add_station("Узловая", line(2)).unwrap();
        builder.add_station("Узловая", line(1)).unwrap();
        builder.add_station("Южная", line(1)).unwrap();
        builder
            .add_connection(&[
                Station::new("Узловая", line(2)),
                Station::new("Узловая", line(1)),
            ])
            .unwrap();
        builder.build()
    }

    #[test]
    fn get_line() {
        let index = index_with_shared_name();

        let first = index.get_line(line(1)).unwrap();
        assert_eq!(first.name(), "Первая");
        assert_eq!(first.len(), 2);

        assert_eq!(
            index.get_line(line(3)).unwrap_err(),
            NetworkError::LineNotFound(line(3))
        );
    }

    #[test]
    fn lines_in_registration_order() {
        let index = index_with_shared_name();
        let numbers: Vec<_> = index.lines().map(Line::number).collect();
        assert_eq!(numbers, vec![line(2), line(1)]);
        assert_eq!(index.line_count(), 2);
    }

    #[test]
    fn get_station_by_name_prefers_first_registered() {
        let index = index_with_shared_name();

        let station = index.get_station("Узловая").unwrap();
        assert_eq!(station, &Station::new("Узловая", line(2)));

        let all: Vec<_> = index.stations_named("Узловая").collect();
        assert_eq!(
            all,
            vec![
                &Station::new("Узловая", line(2)),
                &Station::new("Узловая", line(1)),
            ]
        );
    }

    #[test]
    fn get_station_by_unique_name() {
        let index = index_with_shared_name();
        assert_eq!(
            index.get_station("Южная").unwrap(),
            &Station::new("Южная", line(1))
        );
    }

    #[test]
    fn get_station_missing() {
        let index = index_with_shared_name();

        assert_eq!(
            index.get_station("Западная").unwrap_err(),
            NetworkError::StationNotFound {
                name: "Западная".into(),
                line: None,
            }
        );
        assert_eq!(index.stations_named("Западная").count(), 0);
    }

    #[test]
    fn get_station_on_line() {
        let index = index_with_shared_name();

        assert_eq!(
            index.get_station_on_line("Узловая", line(1)).unwrap(),
            &Station::new("Узловая", line(1))
        );
        assert_eq!(
            index.get_station_on_line("Северная", line(1)).unwrap_err(),
            NetworkError::StationNotFound {
                name: "Северная".into(),
                line: Some(line(1)),
            }
        );
    }

    #[test]
    fn stations_on_line_in_travel_order() {
        let index = index_with_shared_name();
        let second = index.get_line(line(2)).unwrap();

        let names: Vec<_> = index.stations_on(second).map(Station::name).collect();
        assert_eq!(names, vec!["Северная", "Узловая"]);
    }

    #[test]
    fn ids_resolve_back_to_stations() {
        let index = index_with_shared_name();

        for id in index.station_ids() {
            let station = index.station(id).unwrap();
            assert_eq!(index.id_of(station), Some(id));
            assert_eq!(&index[id], station);
        }
        assert_eq!(index.station_count(), 4);
        assert!(index.id_of(&Station::new("Южная", line(2))).is_none());
    }

    #[test]
    fn foreign_id_has_no_neighbours() {
        let index = index_with_shared_name();
        assert!(index.station(StationId(99)).is_none());
        assert!(index.neighbours(StationId(99)).is_empty());
        assert_eq!(index.edge_between(StationId(99), StationId(0)), None);
    }
}
