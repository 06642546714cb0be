//! Shortest-path resolution over the two-line network.
//!
//! The resolver answers: "how do I get from this station to that one?"
//! It prefers a single-line direct path and otherwise routes through one
//! of the declared interchanges, keeping the shortest candidate.

mod resolve;
mod segment;

pub use resolve::{RouteLabel, RouteResult, resolve};
pub use segment::segment;
