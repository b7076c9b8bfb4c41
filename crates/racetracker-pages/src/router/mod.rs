//! Client-side hash router.
//!
//! - [`Path`]: a location normalized to its segments
//! - [`RoutePattern`]: a pre-parsed template such as `/races/:id`
//! - [`RouteTable`]: ordered patterns and their page handlers; the first match wins
//! - [`Router`]: the navigation state machine that owns the mount container
//!
//! Parameters are handed to page handlers as [`RouteParams`], ordered as they are
//! declared in the pattern and also addressable by name.

mod core;
mod error;
mod params;
mod path;
mod pattern;
mod table;
mod views;

pub use self::core::{
	DEFAULT_LOCATION, NavigationOutcome, NavigationPhase, NavigationState, Router,
};
pub use error::{PageError, RouterError};
pub use params::RouteParams;
pub use path::Path;
pub use pattern::{PARAM_MARKER, RoutePattern, Segment};
pub use table::{PageFuture, RouteEntry, RouteMatch, RouteTable, RouteTableBuilder};
pub use views::{error_view, not_found_view};
