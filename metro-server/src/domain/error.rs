//! Domain error types.
//!
//! These errors represent query validation failures and construction-time
//! topology defects. A route query that finds no path is not an error and
//! is represented as an absent result, never as a variant here.

use super::StationName;

/// Domain-level errors for the network model.
#[derive(Debug, Clone, thiserror::Error)]
pub enum NetworkError {
    /// A query referenced a station absent from the coordinate table
    #[error("unknown station: {0}")]
    UnknownStation(StationName),

    /// Construction-time invariant violation; fatal at startup
    #[error("invalid topology: {0}")]
    InvalidTopology(String),
}
