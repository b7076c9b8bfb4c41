//! RaceTracker App - the single-page client
//!
//! Wires the REST client, the pages and the hash router together:
//!
//! - [`config`]: [`AppConfig`] and the embedded TOML document
//! - [`routes`]: The route table, in lookup order
//! - [`pages`]: One builder per route
//! - [`widgets`]: Header, race card, participants table
//! - [`shell`]: The frame holding the header and the page mount point
//!
//! In the browser, the `start` entry point runs on module load.

#![warn(missing_docs)]

pub mod config;
pub mod format;
pub mod pages;
pub mod routes;
pub mod shell;
pub mod widgets;

#[cfg(target_arch = "wasm32")]
pub mod app;

pub use config::{AppConfig, ConfigError};
pub use routes::app_routes;
pub use shell::app_shell;
