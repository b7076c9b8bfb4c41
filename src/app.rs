//! The RaceTracker single-page application

// Re-export all racetracker-app functionality
pub use racetracker_app::*;
