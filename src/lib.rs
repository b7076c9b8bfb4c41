//! # RaceTracker
//!
//! A single-page client for tracking horse races, jockeys, horses and results,
//! compiled to WebAssembly and routed on the URL fragment.
//!
//! ## Crates
//!
//! - [`pages`]: Hash router, view tree, mount container and logging setup
//! - [`api`]: REST client with the GET cache and the entity operations
//! - [`app`]: Pages, widgets, route table, configuration and the browser entry point
//!
//! ## Feature Flags
//!
//! - `console_error_panic_hook` - Forward panics to the browser console

pub mod api;
pub mod app;
pub mod pages;
