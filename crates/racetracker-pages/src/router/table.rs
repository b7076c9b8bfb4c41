//! The ordered route table.

use std::fmt::{self, Display};
use std::future::Future;
use std::rc::Rc;

use futures::future::{FutureExt, LocalBoxFuture};

use super::error::{PageError, RouterError};
use super::params::RouteParams;
use super::path::Path;
use super::pattern::RoutePattern;
use crate::component::{IntoView, View};

/// The future a page handler produces.
pub type PageFuture = LocalBoxFuture<'static, Result<View, PageError>>;

type PageHandler = Rc<dyn Fn(RouteParams) -> PageFuture>;

/// A pattern and the handler that produces its page.
pub struct RouteEntry {
	pattern: RoutePattern,
	handler: PageHandler,
}

impl fmt::Debug for RouteEntry {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteEntry")
			.field("pattern", &self.pattern)
			.finish()
	}
}

impl RouteEntry {
	/// Returns the pattern.
	pub fn pattern(&self) -> &RoutePattern {
		&self.pattern
	}

	/// Returns the parameter names the handler receives, in order.
	pub fn param_names(&self) -> Vec<&str> {
		self.pattern.param_names()
	}

	/// Invokes the handler.
	pub fn load(&self, params: RouteParams) -> PageFuture {
		(self.handler)(params)
	}
}

/// A matched route with extracted parameters.
#[derive(Debug)]
pub struct RouteMatch<'a> {
	entry: &'a RouteEntry,
	params: RouteParams,
}

impl<'a> RouteMatch<'a> {
	/// Returns the matched entry.
	pub fn entry(&self) -> &'a RouteEntry {
		self.entry
	}

	/// Returns the matched pattern.
	pub fn pattern(&self) -> &'a RoutePattern {
		&self.entry.pattern
	}

	/// Returns the extracted parameters.
	pub fn params(&self) -> &RouteParams {
		&self.params
	}

	/// Invokes the matched handler with the extracted parameters.
	pub fn load(self) -> PageFuture {
		self.entry.load(self.params)
	}
}

/// Ordered mapping from patterns to page handlers.
///
/// Built once through [`RouteTable::builder`] and immutable afterwards. Lookup
/// scans in insertion order and returns the first pattern whose shape fits the
/// path; there is no specificity ranking, so `/a/:x` registered before `/a/:y`
/// always wins for `/a/5`.
#[derive(Debug, Default)]
pub struct RouteTable {
	entries: Vec<RouteEntry>,
}

impl RouteTable {
	/// Starts building a table.
	pub fn builder() -> RouteTableBuilder {
		RouteTableBuilder::default()
	}

	/// Returns the number of routes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether the table has no routes.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the entries in insertion order.
	pub fn entries(&self) -> &[RouteEntry] {
		&self.entries
	}

	/// Returns the patterns in insertion order.
	pub fn patterns(&self) -> impl Iterator<Item = &RoutePattern> {
		self.entries.iter().map(RouteEntry::pattern)
	}

	/// Finds the first entry matching `path`.
	pub fn resolve(&self, path: &Path) -> Option<RouteMatch<'_>> {
		self.entries.iter().find_map(|entry| {
			entry
				.pattern
				.extract(path)
				.map(|params| RouteMatch { entry, params })
		})
	}

	/// Normalizes a raw location and resolves it.
	pub fn resolve_location(&self, raw_location: &str) -> Option<RouteMatch<'_>> {
		self.resolve(&Path::parse(raw_location))
	}
}

/// Builder for [`RouteTable`].
#[derive(Default)]
pub struct RouteTableBuilder {
	routes: Vec<(String, PageHandler)>,
}

impl fmt::Debug for RouteTableBuilder {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.debug_struct("RouteTableBuilder")
			.field(
				"patterns",
				&self.routes.iter().map(|(p, _)| p).collect::<Vec<_>>(),
			)
			.finish()
	}
}

impl RouteTableBuilder {
	/// Adds an asynchronous page handler.
	///
	/// The handler's error is turned into a [`PageError`] through its `Display`
	/// output.
	pub fn route<F, Fut, V, E>(mut self, pattern: &str, handler: F) -> Self
	where
		F: Fn(RouteParams) -> Fut + 'static,
		Fut: Future<Output = Result<V, E>> + 'static,
		V: IntoView + 'static,
		E: Display + 'static,
	{
		let handler: PageHandler = Rc::new(move |params| {
			let page = handler(params);
			async move {
				page.await
					.map(IntoView::into_view)
					.map_err(|e| PageError::new(e.to_string()))
			}
			.boxed_local()
		});
		self.routes.push((pattern.to_string(), handler));
		self
	}

	/// Adds a synchronous page handler.
	pub fn route_sync<F, V, E>(self, pattern: &str, handler: F) -> Self
	where
		F: Fn(RouteParams) -> Result<V, E> + 'static,
		V: IntoView + 'static,
		E: Display + 'static,
	{
		self.route(pattern, move |params| std::future::ready(handler(params)))
	}

	/// Parses every pattern and freezes the table.
	///
	/// # Errors
	///
	/// Returns the first pattern error in insertion order.
	pub fn build(self) -> Result<RouteTable, RouterError> {
		let entries = self
			.routes
			.into_iter()
			.map(|(source, handler)| {
				RoutePattern::parse(&source).map(|pattern| RouteEntry { pattern, handler })
			})
			.collect::<Result<Vec<_>, _>>()?;

		Ok(RouteTable { entries })
	}
}
