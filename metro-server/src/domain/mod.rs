//! Domain types for the metro route planner.
//!
//! This module contains the core domain model types that represent
//! validated metro data. All types enforce their invariants at construction
//! time, so code that receives these types can trust their validity.

mod error;
mod station;

pub use error::NetworkError;
pub use station::{InvalidStationName, LatLon, StationName};
