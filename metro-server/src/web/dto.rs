//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{LatLon, StationName};
use crate::fare::TripMetrics;
use crate::resolver::RouteResult;
use crate::schedule::WaitEstimate;

/// Request to plan a route between two stations.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Start station name
    pub from: String,

    /// End station name
    pub to: String,
}

/// A planned route with its trip metrics.
///
/// A query with no connecting path gets the same shape with an empty path,
/// an empty label and zero metrics; no-route is a result, not an error.
#[derive(Debug, Serialize)]
pub struct RouteResponse {
    /// Stations visited, in travel order
    pub path: Vec<String>,

    /// Route description, e.g. "Direct (Blue Line)" or "Switch at Alandur"
    pub label: String,

    /// Number of stops travelled
    pub stops: usize,

    /// Distance travelled in kilometres
    pub distance_km: f64,

    /// Fare tier (plain integer)
    pub fare: u32,
}

impl RouteResponse {
    /// Build a response from a resolved route.
    pub fn from_result(result: &RouteResult) -> Self {
        let metrics = TripMetrics::from_stops(result.stops());
        Self {
            path: result.path.iter().map(|s| s.to_string()).collect(),
            label: result.label.to_string(),
            stops: metrics.stops,
            distance_km: metrics.distance_km,
            fare: metrics.fare,
        }
    }

    /// Build the no-route response.
    pub fn no_route() -> Self {
        Self {
            path: Vec::new(),
            label: String::new(),
            stops: 0,
            distance_km: 0.0,
            fare: 0,
        }
    }
}

/// A station in the station list.
#[derive(Debug, Serialize)]
pub struct StationEntry {
    /// Station name
    pub name: String,

    /// Latitude in decimal degrees
    pub lat: f64,

    /// Longitude in decimal degrees
    pub lon: f64,
}

impl StationEntry {
    /// Build an entry from a station and its coordinate.
    pub fn new(name: &StationName, coord: LatLon) -> Self {
        Self {
            name: name.to_string(),
            lat: coord.lat,
            lon: coord.lon,
        }
    }
}

/// Response for the station list.
#[derive(Debug, Serialize)]
pub struct StationListResponse {
    /// All stations, sorted by name
    pub stations: Vec<StationEntry>,
}

/// Request for a wait estimate.
#[derive(Debug, Deserialize)]
pub struct WaitRequest {
    /// Time in HH:MM format (defaults to now)
    pub time: Option<String>,
}

/// Response for a wait estimate.
#[derive(Debug, Serialize)]
pub struct WaitResponse {
    /// Minutes until the next departure
    pub wait_minutes: u32,

    /// Crowding status: "crowded" or "seats available"
    pub status: String,
}

impl WaitResponse {
    /// Build a response from a wait estimate.
    pub fn from_estimate(estimate: WaitEstimate) -> Self {
        Self {
            wait_minutes: estimate.wait_minutes,
            status: estimate.status.label().to_string(),
        }
    }
}

/// Error response body.
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::chennai;
    use crate::resolver::resolve;
    use crate::schedule::estimate_wait;
    use chrono::NaiveTime;

    fn station(s: &str) -> StationName {
        StationName::parse(s).unwrap()
    }

    #[test]
    fn route_response_from_direct_result() {
        let network = chennai().unwrap();
        let result = resolve(
            &network,
            &station("Wimco Nagar"),
            &station("Chennai Airport"),
        )
        .unwrap();
        let response = RouteResponse::from_result(&result);

        assert_eq!(response.path.len(), 23);
        assert_eq!(response.label, "Direct (Blue Line)");
        assert_eq!(response.stops, 22);
        assert_eq!(response.distance_km, 33.0);
        assert_eq!(response.fare, 50);
    }

    #[test]
    fn route_response_from_interchange_result() {
        let network = chennai().unwrap();
        let result = resolve(&network, &station("Wimco Nagar"), &station("Egmore")).unwrap();
        let response = RouteResponse::from_result(&result);

        assert_eq!(response.label, "Switch at Central Metro");
        assert_eq!(response.stops, 10);
        assert_eq!(response.distance_km, 15.0);
        assert_eq!(response.fare, 40);
    }

    #[test]
    fn no_route_response_is_all_zeros() {
        let response = RouteResponse::no_route();

        assert!(response.path.is_empty());
        assert!(response.label.is_empty());
        assert_eq!(response.stops, 0);
        assert_eq!(response.distance_km, 0.0);
        assert_eq!(response.fare, 0);
    }

    #[test]
    fn route_response_serializes() {
        let network = chennai().unwrap();
        let result = resolve(&network, &station("High Court"), &station("Egmore")).unwrap();
        let response = RouteResponse::from_result(&result);

        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["label"], "Switch at Central Metro");
        assert_eq!(json["stops"], 2);
        assert_eq!(json["fare"], 20);
        assert_eq!(
            json["path"],
            serde_json::json!(["High Court", "Central Metro", "Egmore"])
        );
    }

    #[test]
    fn wait_response_from_estimate() {
        let estimate = estimate_wait(NaiveTime::from_hms_opt(9, 57, 0).unwrap());
        let response = WaitResponse::from_estimate(estimate);

        assert_eq!(response.wait_minutes, 3);
        assert_eq!(response.status, "crowded");
    }

    #[test]
    fn station_entry_fields() {
        let entry = StationEntry::new(&station("Central Metro"), LatLon::new(13.0814, 80.2727));
        assert_eq!(entry.name, "Central Metro");
        assert_eq!(entry.lat, 13.0814);
        assert_eq!(entry.lon, 80.2727);
    }
}
