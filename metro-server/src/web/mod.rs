//! Web layer for the metro route planner.
//!
//! Provides HTTP endpoints for listing stations, planning routes and
//! estimating waits.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
