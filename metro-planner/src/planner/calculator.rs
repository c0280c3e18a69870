//! Shortest-route search and duration calculation.
//!
//! Routes are shortest by number of hops: the graph is treated as unweighted
//! and searched breadth-first. Durations are computed separately by folding
//! the per-edge costs from [`TravelTimes`] over a route.

use std::collections::VecDeque;

use tracing::{debug, trace};

use crate::network::{Station, StationId, StationIndex};

use super::config::TravelTimes;
use super::error::RouteError;
use super::route::{Hop, Journey, Stop};

/// Answers route queries against a finished station index.
#[derive(Debug, Clone)]
pub struct RouteCalculator {
    index: StationIndex,
    times: TravelTimes,
}

impl RouteCalculator {
    /// Create a calculator with the default travel times.
    pub fn new(index: StationIndex) -> Self {
        Self::with_times(index, TravelTimes::default())
    }

    /// Create a calculator with custom travel times.
    pub fn with_times(index: StationIndex, times: TravelTimes) -> Self {
        Self { index, times }
    }

    pub fn index(&self) -> &StationIndex {
        &self.index
    }

    pub fn times(&self) -> &TravelTimes {
        &self.times
    }

    /// Find a route with the fewest hops from `from` to `to`, both inclusive.
    ///
    /// Neighbours are explored in index order (line neighbours before
    /// connections), and the first path to reach a station wins, so ties
    /// between equally short routes are broken deterministically.
    pub fn get_shortest_route(
        &self,
        from: &Station,
        to: &Station,
    ) -> Result<Vec<Station>, RouteError> {
        let start = self.resolve(from)?;
        let goal = self.resolve(to)?;

        let path = self
            .shortest_path(start, goal)
            .ok_or_else(|| RouteError::NoRoute {
                from: from.clone(),
                to: to.clone(),
            })?;

        debug!(
            from = %from,
            to = %to,
            hops = path.len() - 1,
            "shortest route found"
        );

        Ok(path.into_iter().map(|id| self.index[id].clone()).collect())
    }

    /// Total travel time of a route in minutes.
    ///
    /// Every consecutive pair must be adjacent in the network. A route of a
    /// single station takes no time.
    pub fn calculate_duration(&self, route: &[Station]) -> Result<f64, RouteError> {
        let hops = self.hops(route)?;
        Ok(self.sum_costs(&hops))
    }

    /// Classify each consecutive pair of a route by how the two stations are
    /// linked.
    pub fn hops<'r>(&self, route: &'r [Station]) -> Result<Vec<Hop<'r>>, RouteError> {
        if route.is_empty() {
            return Err(RouteError::EmptyRoute);
        }

        let ids = route
            .iter()
            .map(|station| self.resolve(station))
            .collect::<Result<Vec<_>, _>>()?;

        ids.windows(2)
            .zip(route.windows(2))
            .map(|(pair, stations)| {
                self.index
                    .edge_between(pair[0], pair[1])
                    .map(|kind| Hop {
                        from: &stations[0],
                        to: &stations[1],
                        kind,
                    })
                    .ok_or_else(|| RouteError::NotAdjacent {
                        from: stations[0].clone(),
                        to: stations[1].clone(),
                    })
            })
            .collect()
    }

    /// Find the shortest route and describe it as a journey.
    pub fn plan(&self, from: &Station, to: &Station) -> Result<Journey, RouteError> {
        let stations = self.get_shortest_route(from, to)?;
        let hops = self.hops(&stations)?;
        let duration = self.sum_costs(&hops);

        let arrivals = std::iter::once(None).chain(hops.iter().map(|hop| Some(hop.kind)));
        let stops = stations
            .iter()
            .cloned()
            .zip(arrivals)
            .map(|(station, arrived_by)| Stop {
                station,
                arrived_by,
            })
            .collect();

        Ok(Journey::new(stops, duration))
    }

    fn sum_costs(&self, hops: &[Hop<'_>]) -> f64 {
        hops.iter().map(|hop| self.times.cost(hop.kind)).sum()
    }

    fn resolve(&self, station: &Station) -> Result<StationId, RouteError> {
        self.index
            .id_of(station)
            .ok_or_else(|| RouteError::StationNotFound(station.clone()))
    }

    /// Breadth-first search from `start`, returning the path to `goal`.
    fn shortest_path(&self, start: StationId, goal: StationId) -> Option<Vec<StationId>> {
        let mut previous: Vec<Option<StationId>> = vec![None; self.index.station_count()];
        let mut visited = vec![false; self.index.station_count()];
        let mut queue = VecDeque::from([start]);
        visited[start.index()] = true;

        let mut explored = 0;
        while let Some(current) = queue.pop_front() {
            explored += 1;
            if current == goal {
                trace!(explored, "search reached goal");
                return Some(reconstruct(&previous, goal));
            }

            for edge in self.index.neighbours(current) {
                let next = edge.to;
                if visited[next.index()] {
                    continue;
                }
                visited[next.index()] = true;
                previous[next.index()] = Some(current);
                queue.push_back(next);
            }
        }

        trace!(explored, "search exhausted without reaching goal");
        None
    }
}

/// Walk the predecessor links back from `goal` to the search origin.
fn reconstruct(previous: &[Option<StationId>], goal: StationId) -> Vec<StationId> {
    let mut path = vec![goal];
    let mut current = goal;
    while let Some(prev) = previous[current.index()] {
        path.push(prev);
        current = prev;
    }
    path.reverse();
    path
}


#[cfg(test)]
mod proptests {
    use super::*;
    use crate::network::{LineNumber, StationIndexBuilder};
    use proptest::prelude::*;
    use proptest::sample::Index;

    /// Random networks: up to four lines of up to five stations, with a few
    /// random connections between any two stations.
    fn network() -> impl Strategy<Value = StationIndex> {
        (
            prop::collection::vec(1usize..6, 1..5),
            prop::collection::vec((any::<Index>(), any::<Index>()), 0..6),
        )
            .prop_map(|(line_lengths, connections)| {
                let mut builder = StationIndexBuilder::new();
                let mut all = Vec::new();
                for (l, &len) in line_lengths.iter().enumerate() {
                    let number = LineNumber(l as u32 + 1);
                    builder.add_line(number, format!("Line {}", l + 1)).unwrap();
                    for s in 0..len {
                        let name = format!("S{l}-{s}");
                        builder.add_station(name.clone(), number).unwrap();
                        all.push(Station::new(name, number));
                    }
                }
                for (a, b) in connections {
                    let pair = [a.get(&all).clone(), b.get(&all).clone()];
                    builder.add_connection(&pair).unwrap();
                }
                builder.build()
            })
    }

    /// Hop distances from `from` to every station, by plain BFS.
    fn oracle_distances(index: &StationIndex, from: StationId) -> Vec<Option<usize>> {
        let mut dist = vec![None; index.station_count()];
        dist[from.index()] = Some(0);
        let mut queue = VecDeque::from([from]);
        while let Some(current) = queue.pop_front() {
            let d = dist[current.index()].unwrap_or(0);
            for edge in index.neighbours(current) {
                if dist[edge.to.index()].is_none() {
                    dist[edge.to.index()] = Some(d + 1);
                    queue.push_back(edge.to);
                }
            }
        }
        dist
    }

    fn pick(index: &StationIndex, i: &Index) -> StationId {
        let ids: Vec<_> = index.station_ids().collect();
        *i.get(&ids)
    }

    proptest! {
        /// A station's route to itself is just that station
        #[test]
        fn self_route_is_singleton(index in network(), i in any::<Index>()) {
            let id = pick(&index, &i);
            let station = index[id].clone();
            let calculator = RouteCalculator::new(index);

            let route = calculator.get_shortest_route(&station, &station).unwrap();
            prop_assert_eq!(route, vec![station]);
        }

        /// Route length always equals the true graph distance
        #[test]
        fn route_is_optimal(index in network(), a in any::<Index>(), b in any::<Index>()) {
            let from_id = pick(&index, &a);
            let to_id = pick(&index, &b);
            let expected = oracle_distances(&index, from_id)[to_id.index()];
            let from = index[from_id].clone();
            let to = index[to_id].clone();
            let calculator = RouteCalculator::new(index);

            match (calculator.get_shortest_route(&from, &to), expected) {
                (Ok(route), Some(distance)) => {
                    prop_assert_eq!(route.len() - 1, distance);
                    prop_assert_eq!(route.first(), Some(&from));
                    prop_assert_eq!(route.last(), Some(&to));
                    // Every step is a real edge
                    prop_assert!(calculator.calculate_duration(&route).is_ok());
                }
                (Err(RouteError::NoRoute { .. }), None) => {}
                (result, expected) => {
                    prop_assert!(false, "got {:?}, oracle distance {:?}", result, expected);
                }
            }
        }

        /// Duration is idempotent and symmetric under reversal
        #[test]
        fn duration_symmetric(index in network(), a in any::<Index>(), b in any::<Index>()) {
            let from = index[pick(&index, &a)].clone();
            let to = index[pick(&index, &b)].clone();
            let calculator = RouteCalculator::new(index);

            if let Ok(route) = calculator.get_shortest_route(&from, &to) {
                let forward = calculator.calculate_duration(&route).unwrap();
                prop_assert_eq!(forward, calculator.calculate_duration(&route).unwrap());

                let reversed: Vec<_> = route.iter().rev().cloned().collect();
                prop_assert_eq!(forward, calculator.calculate_duration(&reversed).unwrap());
            }
        }
    }
}
