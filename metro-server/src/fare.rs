//! Trip metrics: stop count, distance, and the fare step function.
//!
//! All values are pure functions of the resolved path length. The fare is a
//! plain integer tier; currency formatting belongs to the caller.

/// Nominal distance between adjacent stations.
pub const KM_PER_STOP: f64 = 1.5;

/// Distance travelled over a number of stops.
pub fn distance_km(stops: usize) -> f64 {
    stops as f64 * KM_PER_STOP
}

/// Fare tier for a distance, using the fixed breakpoints.
pub fn fare_for_distance(km: f64) -> u32 {
    if km <= 2.0 {
        10
    } else if km <= 5.0 {
        20
    } else if km <= 12.0 {
        30
    } else if km <= 21.0 {
        40
    } else {
        50
    }
}

/// Metrics derived from a resolved route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TripMetrics {
    /// Stations visited minus one.
    pub stops: usize,

    /// Distance travelled, at [`KM_PER_STOP`] per stop.
    pub distance_km: f64,

    /// Fare tier (plain integer, no currency unit).
    pub fare: u32,
}

impl TripMetrics {
    /// Compute metrics for a trip of `stops` stops.
    pub fn from_stops(stops: usize) -> Self {
        let distance = distance_km(stops);
        Self {
            stops,
            distance_km: distance,
            fare: fare_for_distance(distance),
        }
    }
}
