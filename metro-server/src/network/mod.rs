//! The immutable metro network model.
//!
//! A [`Network`] holds the station coordinate table, the two ordered line
//! sequences and the interchange list. It is constructed once at startup,
//! validated, and never mutated afterwards, so it can be shared freely
//! across request handlers.

use std::collections::HashMap;
use std::fmt;

use crate::domain::{LatLon, NetworkError, StationName};

mod chennai;

pub use chennai::chennai;

/// Identifier for one of the two metro lines.
///
/// Declaration order (Blue before Green) is the fixed priority order used
/// wherever a line has to be chosen deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineName {
    Blue,
    Green,
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LineName::Blue => f.write_str("Blue Line"),
            LineName::Green => f.write_str("Green Line"),
        }
    }
}

/// An ordered sequence of distinct stations in physical adjacency order.
#[derive(Debug, Clone)]
pub struct Line {
    name: LineName,
    stations: Vec<StationName>,
}

impl Line {
    /// The line's identifier.
    pub fn name(&self) -> LineName {
        self.name
    }

    /// The stations in physical order.
    pub fn stations(&self) -> &[StationName] {
        &self.stations
    }

    /// Whether the line calls at `station`.
    pub fn contains(&self, station: &StationName) -> bool {
        self.stations.contains(station)
    }

    /// Position of `station` on the line, if it calls there.
    pub fn position(&self, station: &StationName) -> Option<usize> {
        self.stations.iter().position(|s| s == station)
    }
}

/// The validated, immutable metro network.
///
/// Invariants, enforced at construction:
/// - every station named by a line exists in the coordinate table;
/// - no station repeats within a line;
/// - a station appears on both lines only if it is a declared interchange;
/// - every declared interchange appears on both lines.
#[derive(Debug, Clone)]
pub struct Network {
    coords: HashMap<StationName, LatLon>,
    lines: [Line; 2],
    interchanges: Vec<StationName>,
}

impl Network {
    /// Look up a station's coordinate.
    ///
    /// Fails with [`NetworkError::UnknownStation`] if the station is not in
    /// the coordinate table.
    pub fn coord(&self, station: &StationName) -> Result<LatLon, NetworkError> {
        self.coords
            .get(station)
            .copied()
            .ok_or_else(|| NetworkError::UnknownStation(station.clone()))
    }

    /// Whether the network knows this station at all.
    pub fn contains(&self, station: &StationName) -> bool {
        self.coords.contains_key(station)
    }

    /// The two lines, in fixed priority order.
    pub fn lines(&self) -> &[Line; 2] {
        &self.lines
    }

    /// The interchange stations, in declaration (priority) order.
    pub fn interchanges(&self) -> &[StationName] {
        &self.interchanges
    }

    /// All station names, sorted, for selection lists.
    pub fn station_names(&self) -> Vec<&StationName> {
        let mut names: Vec<&StationName> = self.coords.keys().collect();
        names.sort();
        names
    }
}

/// Builder for constructing a validated [`Network`].
///
/// Accepts raw string data and performs all parsing and invariant checks in
/// [`NetworkBuilder::build`], so a defective dataset fails at startup rather
/// than at query time.
#[derive(Debug, Default)]
pub struct NetworkBuilder {
    stations: Vec<(String, LatLon)>,
    lines: Vec<(LineName, Vec<String>)>,
    interchanges: Vec<String>,
}

impl NetworkBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a station with its coordinate.
    pub fn station(mut self, name: &str, lat: f64, lon: f64) -> Self {
        self.stations.push((name.to_string(), LatLon::new(lat, lon)));
        self
    }

    /// Add a line as an ordered station sequence.
    pub fn line(mut self, name: LineName, stations: &[&str]) -> Self {
        self.lines
            .push((name, stations.iter().map(|s| s.to_string()).collect()));
        self
    }

    /// Declare an interchange station. Declaration order is priority order.
    pub fn interchange(mut self, name: &str) -> Self {
        self.interchanges.push(name.to_string());
        self
    }

    /// Validate and build the network.
    pub fn build(self) -> Result<Network, NetworkError> {
        let invalid =
            |what: String| -> NetworkError { NetworkError::InvalidTopology(what) };

        let mut coords = HashMap::new();
        for (raw, coord) in self.stations {
            let name = StationName::parse(&raw)
                .map_err(|e| invalid(format!("station {raw:?}: {e}")))?;
            if coords.insert(name, coord).is_some() {
                return Err(invalid(format!("duplicate station {raw:?}")));
            }
        }

        let mut lines = Vec::new();
        for (line_name, raw_stations) in self.lines {
            let mut stations = Vec::with_capacity(raw_stations.len());
            for raw in &raw_stations {
                let station = StationName::parse(raw)
                    .map_err(|e| invalid(format!("{line_name}: station {raw:?}: {e}")))?;
                if !coords.contains_key(&station) {
                    return Err(invalid(format!(
                        "{line_name} references station {station} absent from the coordinate table"
                    )));
                }
                if stations.contains(&station) {
                    return Err(invalid(format!(
                        "{line_name} lists station {station} more than once"
                    )));
                }
                stations.push(station);
            }
            lines.push(Line {
                name: line_name,
                stations,
            });
        }

        let lines: [Line; 2] = lines.try_into().map_err(|lines: Vec<Line>| {
            invalid(format!("expected exactly 2 lines, got {}", lines.len()))
        })?;

        let mut interchanges = Vec::with_capacity(self.interchanges.len());
        for raw in &self.interchanges {
            let station = StationName::parse(raw)
                .map_err(|e| invalid(format!("interchange {raw:?}: {e}")))?;
            if !lines.iter().all(|line| line.contains(&station)) {
                return Err(invalid(format!(
                    "interchange {station} does not appear on both lines"
                )));
            }
            if interchanges.contains(&station) {
                return Err(invalid(format!("duplicate interchange {station}")));
            }
            interchanges.push(station);
        }

        // A station shared by both lines must be a declared interchange.
        for station in lines[0].stations() {
            if lines[1].contains(station) && !interchanges.contains(station) {
                return Err(invalid(format!(
                    "station {station} appears on both lines but is not a declared interchange"
                )));
            }
        }

        Ok(Network {
            coords,
            lines,
            interchanges,
        })
    }
}
