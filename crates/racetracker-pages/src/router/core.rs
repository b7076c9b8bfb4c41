//! Core Router Implementation.
//!
//! The router turns location changes into page swaps:
//!
//! ```text
//! Idle ──navigate──▶ Resolving ──ok──────▶ Mounted
//!   │                    └──────err─────▶ Failed
//!   └──no match──────────────────────────▶ NotFound
//! ```
//!
//! Navigations are neither queued nor coalesced. Each one takes the next
//! sequence number and clears the container straight away; when its page load
//! finishes, the result is applied only if no newer navigation has started
//! since. A slow page can therefore never overwrite a faster, later one.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use futures::future::{self, FutureExt, LocalBoxFuture};
use futures::stream::{self, StreamExt};

use super::path::Path;
use super::table::RouteTable;
use super::views::{error_view, not_found_view};
use crate::component::View;
use crate::location::LocationSource;
use crate::mount::MountContainer;

/// Location used when the current location has no fragment.
pub const DEFAULT_LOCATION: &str = "#/";

/// Phase of the most recent navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavigationPhase {
	/// No navigation has happened yet.
	#[default]
	Idle,
	/// A route matched and its page is loading.
	Resolving,
	/// The page is attached to the container.
	Mounted,
	/// No route matched.
	NotFound,
	/// The page handler failed.
	Failed,
}

/// The mounted page's provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationState {
	path: String,
	pattern: String,
	sequence: u64,
}

impl NavigationState {
	/// Returns the normalized path that produced the page.
	pub fn path(&self) -> &str {
		&self.path
	}

	/// Returns the pattern that matched.
	pub fn pattern(&self) -> &str {
		&self.pattern
	}

	/// Returns the navigation's sequence number.
	pub fn sequence(&self) -> u64 {
		self.sequence
	}
}

/// Result of a single [`Router::navigate`] call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavigationOutcome {
	/// The page was attached.
	Mounted {
		/// Normalized path.
		path: String,
		/// Matched pattern.
		pattern: String,
	},
	/// No route matched; the not-found view was rendered.
	NotFound {
		/// Normalized path.
		path: String,
	},
	/// The handler failed; the error view was rendered.
	Failed {
		/// Normalized path.
		path: String,
		/// Failure message shown to the user.
		message: String,
	},
	/// A newer navigation started before this one resolved; its result was dropped.
	Superseded {
		/// Normalized path.
		path: String,
	},
}

/// The navigation state machine.
///
/// The router exclusively owns the mount container. All state lives behind
/// `Cell`/`RefCell`, so navigations run through `&self` and several may be in
/// flight on the same thread.
pub struct Router<C> {
	table: RouteTable,
	container: C,
	sequence: Cell<u64>,
	phase: Cell<NavigationPhase>,
	current: RefCell<Option<NavigationState>>,
	default_location: String,
}

impl<C> std::fmt::Debug for Router<C> {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.debug_struct("Router")
			.field("routes_count", &self.table.len())
			.field("sequence", &self.sequence.get())
			.field("phase", &self.phase.get())
			.field("current", &self.current.borrow())
			.finish()
	}
}

impl<C: MountContainer> Router<C> {
	/// Creates a router over a frozen table and the mount container.
	pub fn new(table: RouteTable, container: C) -> Self {
		Self {
			table,
			container,
			sequence: Cell::new(0),
			phase: Cell::new(NavigationPhase::Idle),
			current: RefCell::new(None),
			default_location: DEFAULT_LOCATION.to_string(),
		}
	}

	/// Sets the location used when the current location is empty.
	pub fn with_default_location(mut self, location: impl Into<String>) -> Self {
		self.default_location = location.into();
		self
	}

	/// Returns the route table.
	pub fn table(&self) -> &RouteTable {
		&self.table
	}

	/// Returns the mount container.
	pub fn container(&self) -> &C {
		&self.container
	}

	/// Returns the location used when the current location is empty.
	pub fn default_location(&self) -> &str {
		&self.default_location
	}

	/// Returns the phase of the most recent navigation.
	pub fn phase(&self) -> NavigationPhase {
		self.phase.get()
	}

	/// Returns the state of the mounted page, if one is mounted.
	pub fn current(&self) -> Option<NavigationState> {
		self.current.borrow().clone()
	}

	/// Returns the sequence number of the most recent navigation.
	pub fn sequence(&self) -> u64 {
		self.sequence.get()
	}

	/// Navigates to a raw location such as `#/races/42`.
	///
	/// Every failure is converted into container content and a
	/// [`NavigationOutcome`]; nothing is propagated to the caller.
	pub async fn navigate(&self, raw_location: &str) -> NavigationOutcome {
		let path = Path::parse(raw_location);
		let sequence = self.begin();
		tracing::debug!(sequence, path = %path, "navigation started");

		let Some(route_match) = self.table.resolve(&path) else {
			tracing::debug!(sequence, path = %path, "no route matched");
			self.current.replace(None);
			self.render_fixed(&not_found_view());
			self.phase.set(NavigationPhase::NotFound);
			return NavigationOutcome::NotFound {
				path: path.to_string(),
			};
		};

		let pattern = route_match.pattern().to_string();
		self.container.clear();
		self.phase.set(NavigationPhase::Resolving);

		let result = route_match.load().await;

		if !self.is_latest(sequence) {
			tracing::debug!(
				sequence,
				latest = self.sequence.get(),
				path = %path,
				"discarding superseded navigation"
			);
			return NavigationOutcome::Superseded {
				path: path.to_string(),
			};
		}

		let mounted = result.and_then(|page| self.container.set_view(&page).map_err(Into::into));

		match mounted {
			Ok(()) => {
				tracing::debug!(sequence, path = %path, pattern = %pattern, "page mounted");
				self.current.replace(Some(NavigationState {
					path: path.to_string(),
					pattern: pattern.clone(),
					sequence,
				}));
				self.phase.set(NavigationPhase::Mounted);
				NavigationOutcome::Mounted {
					path: path.to_string(),
					pattern,
				}
			}
			Err(error) => {
				tracing::error!(sequence, path = %path, error = %error, "Router error");
				self.current.replace(None);
				self.render_fixed(&error_view(error.message()));
				self.phase.set(NavigationPhase::Failed);
				NavigationOutcome::Failed {
					path: path.to_string(),
					message: error.message().to_string(),
				}
			}
		}
	}

	fn begin(&self) -> u64 {
		let next = self.sequence.get() + 1;
		self.sequence.set(next);
		next
	}

	fn is_latest(&self, sequence: u64) -> bool {
		self.sequence.get() == sequence
	}

	fn render_fixed(&self, view: &View) {
		if let Err(error) = self.container.set_view(view) {
			tracing::error!(error = %error, "failed to render router view");
		}
	}
}

impl<C: MountContainer + 'static> Router<C> {
	/// Starts the navigation lifecycle.
	///
	/// Registers a listener on `location` right away, then returns the driver
	/// future. When polled, the driver navigates to the current location
	/// (the default location if it is empty) and afterwards to every change,
	/// running navigations concurrently. The driver finishes when the location
	/// stream ends.
	///
	/// Each call registers another listener, so call it once per router.
	pub fn init<L>(self: &Rc<Self>, location: &L) -> LocalBoxFuture<'static, ()>
	where
		L: LocationSource + ?Sized,
	{
		let changes = location.subscribe();
		let initial = location.current().unwrap_or_default();
		let router = Rc::clone(self);

		tracing::debug!(initial = %initial, "router listening for location changes");

		stream::once(future::ready(initial))
			.chain(changes)
			.for_each_concurrent(None, move |raw_location| {
				let router = Rc::clone(&router);
				async move {
					let location = if raw_location.is_empty() {
						router.default_location.clone()
					} else {
						raw_location
					};
					router.navigate(&location).await;
				}
			})
			.boxed_local()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::mount::MemoryContainer;
	use crate::router::RouteParams;
	use rstest::rstest;

	fn router() -> Router<MemoryContainer> {
		let table = RouteTable::builder()
			.route_sync("/", |_| Ok::<_, String>(View::text("Races")))
			.route_sync("/races/:id", |params: RouteParams| {
				Ok::<_, String>(View::text(format!("Race {}", params.values().join(","))))
			})
			.route_sync("/broken", |_| Err::<View, _>("boom"))
			.build()
			.unwrap();
		Router::new(table, MemoryContainer::new())
	}

	#[rstest]
	fn test_new_router_is_idle() {
		let router = router();
		assert_eq!(router.phase(), NavigationPhase::Idle);
		assert_eq!(router.sequence(), 0);
		assert!(router.current().is_none());
		assert_eq!(router.default_location(), DEFAULT_LOCATION);
	}

	#[rstest]
	#[tokio::test]
	async fn test_navigate_mounts_page() {
		let router = router();

		let outcome = router.navigate("#/races/42").await;

		assert_eq!(
			outcome,
			NavigationOutcome::Mounted {
				path: "/races/42".to_string(),
				pattern: "/races/:id".to_string(),
			}
		);
		assert_eq!(router.container().html(), "Race 42");
		assert_eq!(router.phase(), NavigationPhase::Mounted);

		let state = router.current().unwrap();
		assert_eq!(state.path(), "/races/42");
		assert_eq!(state.pattern(), "/races/:id");
		assert_eq!(state.sequence(), 1);
	}

	#[rstest]
	#[tokio::test]
	async fn test_navigate_not_found() {
		let router = router();
		router.navigate("#/").await;

		let outcome = router.navigate("/nonexistent/deeply/nested").await;

		assert!(matches!(outcome, NavigationOutcome::NotFound { .. }));
		assert_eq!(router.phase(), NavigationPhase::NotFound);
		assert!(router.current().is_none());
		assert!(router.container().text().contains("404"));
	}

	#[rstest]
	#[tokio::test]
	async fn test_navigate_failure_renders_error_view() {
		let router = router();

		let outcome = router.navigate("#/broken").await;

		assert_eq!(
			outcome,
			NavigationOutcome::Failed {
				path: "/broken".to_string(),
				message: "boom".to_string(),
			}
		);
		assert_eq!(router.phase(), NavigationPhase::Failed);
		assert_eq!(router.container().len(), 1);
		assert_eq!(
			router.container().html(),
			"<div class=\"error\">Ошибка загрузки страницы: boom</div>"
		);
	}

	#[rstest]
	#[tokio::test]
	async fn test_sequence_increments_per_navigation() {
		let router = router();
		router.navigate("#/").await;
		router.navigate("#/missing").await;
		router.navigate("#/").await;

		assert_eq!(router.sequence(), 3);
		assert_eq!(router.current().unwrap().sequence(), 3);
	}

	#[rstest]
	#[tokio::test]
	async fn test_with_default_location() {
		let router = Rc::new(router().with_default_location("#/races/1"));
		let location = crate::location::MemoryLocation::empty();

		let driver = router.init(&location);
		location.close();
		driver.await;

		assert_eq!(router.container().html(), "Race 1");
	}
}
