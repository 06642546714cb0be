//! Station identifier and coordinate types.

use std::fmt;

/// Error returned when parsing an invalid station name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station name: {reason}")]
pub struct InvalidStationName {
    reason: &'static str,
}

/// A validated metro station name.
///
/// Station names are non-empty and carry no leading or trailing whitespace.
/// This type guarantees that any `StationName` value is valid by construction.
///
/// # Examples
///
/// ```
/// use metro_server::domain::StationName;
///
/// let central = StationName::parse("Central Metro").unwrap();
/// assert_eq!(central.as_str(), "Central Metro");
///
/// // Empty names are rejected
/// assert!(StationName::parse("").is_err());
///
/// // Untrimmed names are rejected
/// assert!(StationName::parse(" Egmore").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationName(String);

impl StationName {
    /// Parse a station name from a string.
    ///
    /// The input must be non-empty and already trimmed.
    pub fn parse(s: &str) -> Result<Self, InvalidStationName> {
        if s.is_empty() {
            return Err(InvalidStationName {
                reason: "must not be empty",
            });
        }

        if s.trim() != s {
            return Err(InvalidStationName {
                reason: "must not have leading or trailing whitespace",
            });
        }

        Ok(StationName(s.to_string()))
    }

    /// Returns the station name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationName({})", self.0)
    }
}

impl fmt::Display for StationName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A geographic coordinate: latitude and longitude in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    /// Create a new coordinate.
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}
