//! Network description loading.
//!
//! Reads the JSON map format and populates a [`StationIndexBuilder`] in the
//! order lines, stations, connections:
//!
//! ```json
//! {
//!   "lines": [{"number": 1, "name": "Первая"}],
//!   "stations": {"1": ["Красная", "Бордовая"]},
//!   "connections": [[{"line": 1, "station": "Бордовая"}, {"line": 2, "station": "Синяя"}]]
//! }
//! ```

mod error;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

use serde::de::{self, MapAccess, Visitor};
use serde::{Deserialize, Deserializer};
use tracing::{debug, info};

use crate::network::{LineNumber, NetworkError, Station, StationIndex, StationIndexBuilder};

pub use error::LoadError;

#[derive(Debug, Deserialize)]
struct NetworkDto {
    lines: Vec<LineDto>,
    #[serde(default, deserialize_with = "unique_keys")]
    stations: Vec<(String, Vec<String>)>,
    #[serde(default)]
    connections: Vec<Vec<ConnectionStopDto>>,
}

#[derive(Debug, Deserialize)]
struct LineDto {
    number: u32,
    name: String,
}

#[derive(Debug, Deserialize)]
struct ConnectionStopDto {
    line: u32,
    station: String,
}

/// Load a network description from a JSON file.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<StationIndex, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let index = load_from_str(&contents)?;

    info!(
        path = %path.display(),
        lines = index.line_count(),
        stations = index.station_count(),
        "network loaded"
    );
    Ok(index)
}

/// Load a network description from a JSON string.
pub fn load_from_str(json: &str) -> Result<StationIndex, LoadError> {
    let dto: NetworkDto = serde_json::from_str(json)?;
    build_index(dto)
}

fn build_index(dto: NetworkDto) -> Result<StationIndex, LoadError> {
    let mut builder = StationIndexBuilder::new();

    for line in &dto.lines {
        builder.add_line(LineNumber(line.number), line.name.as_str())?;
    }

    // JSON object order is not preserved, so stations are registered line by
    // line in the order of the `lines` section.
    let mut stations_by_line = HashMap::new();
    for (key, names) in dto.stations {
        let Ok(number) = key.trim().parse::<u32>() else {
            return Err(LoadError::InvalidLineKey(key));
        };
        let number = LineNumber(number);
        if stations_by_line.insert(number, names).is_some() {
            return Err(LoadError::DuplicateLineKey(number));
        }
    }

    for line in &dto.lines {
        let number = LineNumber(line.number);
        for name in stations_by_line.remove(&number).unwrap_or_default() {
            builder.add_station(name, number)?;
        }
    }

    if let Some(&orphan) = stations_by_line.keys().min() {
        return Err(NetworkError::LineNotFound(orphan).into());
    }

    for group in &dto.connections {
        let stations = group
            .iter()
            .map(|stop| resolve_connection_stop(&builder, stop))
            .collect::<Result<Vec<_>, _>>()?;
        builder.add_connection(&stations)?;
    }

    debug!(connections = dto.connections.len(), "connections registered");

    Ok(builder.build())
}

/// Deserialize a JSON object as key/value pairs, rejecting repeated keys.
fn unique_keys<'de, D>(deserializer: D) -> Result<Vec<(String, Vec<String>)>, D::Error>
where
    D: Deserializer<'de>,
{
    struct UniqueKeys;

    impl<'de> Visitor<'de> for UniqueKeys {
        type Value = Vec<(String, Vec<String>)>;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("a map from line number to station names")
        }

        fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<Self::Value, A::Error> {
            let mut seen = HashSet::new();
            let mut entries = Vec::new();
            while let Some((key, names)) = map.next_entry::<String, Vec<String>>()? {
                if !seen.insert(key.clone()) {
                    return Err(de::Error::custom(format!(
                        "duplicate stations key {key:?}"
                    )));
                }
                entries.push((key, names));
            }
            Ok(entries)
        }
    }

    deserializer.deserialize_map(UniqueKeys)
}

fn resolve_connection_stop(
    builder: &StationIndexBuilder,
    stop: &ConnectionStopDto,
) -> Result<Station, LoadError> {
    let line = LineNumber(stop.line);
    let station = Station::new(stop.station.as_str(), line);
    if builder.station_id(&station).is_none() {
        return Err(LoadError::UnknownConnectionStation {
            station: stop.station.clone(),
            line,
        });
    }
    Ok(station)
}
