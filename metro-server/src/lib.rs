//! Chennai Metro route planner server.
//!
//! A web application that answers: "how do I get from this station
//! to that one, and what will the trip cost me?"

pub mod domain;
pub mod fare;
pub mod network;
pub mod resolver;
pub mod schedule;
pub mod web;
