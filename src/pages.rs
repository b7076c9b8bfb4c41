//! Hash-based client routing and page lifecycle
//!
//! ## Architecture
//!
//! - **Route table**: Ordered `pattern -> async page` entries, first match wins
//! - **Router**: Normalizes the location, loads the page and swaps it into the mount container
//! - **Sequencing**: A page that resolves after a newer navigation started is discarded
//!
//! ## Example
//!
//! ```rust,ignore
//! use racetracker::pages::{HashLocation, DomContainer, RouteTable, Router, View};
//! use std::rc::Rc;
//!
//! let table = RouteTable::builder()
//!     .route("/races/:id", |params| async move {
//!         let id: i64 = params.parse("id")?;
//!         Ok::<_, racetracker::pages::RouterError>(View::text(format!("Race {}", id)))
//!     })
//!     .build()?;
//!
//! let router = Rc::new(Router::new(table, DomContainer::by_id("main")?));
//! racetracker::pages::spawn::spawn_router(&router, &HashLocation);
//! ```

// Re-export all racetracker-pages functionality
pub use racetracker_pages::*;
