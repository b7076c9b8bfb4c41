//! RaceTracker Pages - hash-routed page lifecycle for the WASM client
//!
//! This crate owns everything between a location change and the content of the
//! page's mount container. Pages themselves (and the REST calls behind them) are
//! supplied by the application as async handlers.
//!
//! ## Architecture
//!
//! - [`component`]: Renderable view tree ([`View`], [`ElementView`], [`IntoView`])
//! - [`mount`]: The single mount container the router writes into
//! - [`location`]: Location-change signal (browser `hashchange` or in-memory)
//! - [`router`]: Route patterns, the ordered route table and the navigation state machine
//! - [`logging`]: `tracing` subscriber setup for native and browser targets
//!
//! ## Example
//!
//! ```
//! use racetracker_pages::router::{RouteTable, Router, NavigationOutcome};
//! use racetracker_pages::mount::MemoryContainer;
//! use racetracker_pages::View;
//!
//! let table = RouteTable::builder()
//!     .route_sync("/races/:id", |params| {
//!         Ok::<_, String>(View::text(format!("Race {}", params.get("id").unwrap_or_default())))
//!     })
//!     .build()
//!     .unwrap();
//!
//! let container = MemoryContainer::new();
//! let router = Router::new(table, container.clone());
//!
//! let outcome = futures::executor::block_on(router.navigate("#/races/42"));
//! assert!(matches!(outcome, NavigationOutcome::Mounted { .. }));
//! assert_eq!(container.html(), "Race 42");
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod location;
pub mod logging;
pub mod mount;
pub mod router;

#[cfg(target_arch = "wasm32")]
pub mod spawn;

pub use component::{ElementView, IntoView, View};
pub use location::{LocationSource, MemoryLocation};
pub use mount::{MemoryContainer, MountContainer, MountError};
pub use router::{
	NavigationOutcome, NavigationPhase, NavigationState, PageError, RouteParams, RoutePattern,
	RouteTable, Router, RouterError,
};

#[cfg(target_arch = "wasm32")]
pub use location::HashLocation;
#[cfg(target_arch = "wasm32")]
pub use mount::DomContainer;
