//! REST client for the RaceTracker backend
//!
//! GET responses are cached per URL until the next POST or PUT.

// Re-export all racetracker-api functionality
pub use racetracker_api::*;
