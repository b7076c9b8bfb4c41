//! Location-change signal.
//!
//! The router consumes a location as a raw string (for example `#/races/42`) and
//! a stream of subsequent changes. Translating that string into a path is the
//! router's job, not the source's.

use futures::channel::mpsc::{self, UnboundedSender};
use futures::stream::{LocalBoxStream, StreamExt};
use std::cell::RefCell;
use std::rc::Rc;

/// A source of "current location changed to X" notifications.
pub trait LocationSource {
	/// Returns the current location, or `None` when no fragment is present.
	fn current(&self) -> Option<String>;

	/// Registers a listener and returns the stream of later locations.
	///
	/// Each call registers a new listener; every registered listener receives
	/// every change.
	fn subscribe(&self) -> LocalBoxStream<'static, String>;
}

#[derive(Debug, Default)]
struct MemoryLocationInner {
	current: Option<String>,
	subscribers: Vec<UnboundedSender<String>>,
}

/// In-memory location for native hosts and tests.
///
/// Clones share state. Streams returned by [`LocationSource::subscribe`] end
/// once [`MemoryLocation::close`] is called or every handle is dropped.
#[derive(Debug, Clone, Default)]
pub struct MemoryLocation {
	inner: Rc<RefCell<MemoryLocationInner>>,
}

impl MemoryLocation {
	/// Creates a location with an initial value.
	pub fn new(initial: impl Into<String>) -> Self {
		let location = Self::default();
		location.inner.borrow_mut().current = Some(initial.into());
		location
	}

	/// Creates a location with no fragment.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Changes the location and notifies every live subscriber.
	pub fn set(&self, location: impl Into<String>) {
		let location = location.into();
		let mut inner = self.inner.borrow_mut();
		inner.current = Some(location.clone());
		inner
			.subscribers
			.retain(|tx| tx.unbounded_send(location.clone()).is_ok());
	}

	/// Drops every listener, ending their streams.
	pub fn close(&self) {
		self.inner.borrow_mut().subscribers.clear();
	}

	/// Returns the number of registered listeners.
	pub fn subscriber_count(&self) -> usize {
		self.inner.borrow().subscribers.len()
	}
}

impl LocationSource for MemoryLocation {
	fn current(&self) -> Option<String> {
		self.inner.borrow().current.clone()
	}

	fn subscribe(&self) -> LocalBoxStream<'static, String> {
		let (tx, rx) = mpsc::unbounded();
		self.inner.borrow_mut().subscribers.push(tx);
		rx.boxed_local()
	}
}

/// Browser location, reporting `window.location.hash`.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct HashLocation;

#[cfg(target_arch = "wasm32")]
impl HashLocation {
	fn hash() -> Option<String> {
		web_sys::window()?
			.location()
			.hash()
			.ok()
			.filter(|hash| !hash.is_empty())
	}
}

#[cfg(target_arch = "wasm32")]
impl LocationSource for HashLocation {
	fn current(&self) -> Option<String> {
		Self::hash()
	}

	fn subscribe(&self) -> LocalBoxStream<'static, String> {
		use wasm_bindgen::JsCast;
		use wasm_bindgen::closure::Closure;

		let (tx, rx) = mpsc::unbounded();

		let Some(window) = web_sys::window() else {
			tracing::error!("window not available, hashchange listener not registered");
			return rx.boxed_local();
		};

		let listener = Closure::<dyn FnMut(web_sys::Event)>::new(move |_event: web_sys::Event| {
			// An empty hash is forwarded as-is; the router maps it to its default route
			let _ = tx.unbounded_send(Self::hash().unwrap_or_default());
		});

		if window
			.add_event_listener_with_callback("hashchange", listener.as_ref().unchecked_ref())
			.is_err()
		{
			tracing::error!("failed to register hashchange listener");
		}

		// The listener lives as long as the page
		listener.forget();

		rx.boxed_local()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_memory_location_current() {
		assert_eq!(
			MemoryLocation::new("#/jockeys").current().as_deref(),
			Some("#/jockeys")
		);
		assert_eq!(MemoryLocation::empty().current(), None);
	}

	#[rstest]
	#[tokio::test]
	async fn test_every_subscriber_receives_changes() {
		let location = MemoryLocation::new("#/");
		let first = location.subscribe();
		let second = location.subscribe();
		assert_eq!(location.subscriber_count(), 2);

		location.set("#/horses");
		location.set("#/horses/7");
		location.close();

		let first: Vec<String> = first.collect().await;
		let second: Vec<String> = second.collect().await;
		assert_eq!(first, vec!["#/horses", "#/horses/7"]);
		assert_eq!(first, second);
		assert_eq!(location.current().as_deref(), Some("#/horses/7"));
	}

	#[rstest]
	fn test_dropped_subscribers_are_pruned() {
		let location = MemoryLocation::new("#/");
		drop(location.subscribe());

		location.set("#/races");

		assert_eq!(location.subscriber_count(), 0);
	}
}
