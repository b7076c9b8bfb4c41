//! The page mount container.
//!
//! Exactly one container exists per application and only the router writes to it.
//! [`DomContainer`] wraps the real `<main>` element in the browser,
//! [`MemoryContainer`] records the attached views for native hosts and tests.

use crate::component::View;
use std::cell::RefCell;
use std::rc::Rc;

/// Error type for mounting views into a container.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MountError {
	/// Window object not available.
	#[error("window object not available")]
	NoWindow,
	/// Document object not available.
	#[error("document object not available")]
	NoDocument,
	/// No element with the configured id exists.
	#[error("mount container `#{0}` not found")]
	ContainerNotFound(String),
	/// Failed to create an element.
	#[error("failed to create element <{0}>")]
	CreateElementFailed(String),
	/// Failed to set an attribute.
	#[error("failed to set attribute `{0}`")]
	SetAttributeFailed(String),
	/// Failed to append a child node.
	#[error("failed to append child node")]
	AppendChildFailed,
}

/// A UI node whose children the router replaces on every navigation.
pub trait MountContainer {
	/// Removes every child of the container.
	fn clear(&self);

	/// Appends `view` after the current children.
	fn attach(&self, view: &View) -> Result<(), MountError>;

	/// Replaces the container content with `view`.
	fn set_view(&self, view: &View) -> Result<(), MountError> {
		self.clear();
		self.attach(view)
	}
}

/// In-memory mount container.
///
/// Clones share the same children, so a test can keep one handle while the
/// router owns another.
#[derive(Debug, Clone, Default)]
pub struct MemoryContainer {
	children: Rc<RefCell<Vec<View>>>,
}

impl MemoryContainer {
	/// Creates an empty container.
	pub fn new() -> Self {
		Self::default()
	}

	/// Returns the mounted children rendered as HTML.
	pub fn html(&self) -> String {
		self.children
			.borrow()
			.iter()
			.map(View::render_to_string)
			.collect()
	}

	/// Returns the text content of the mounted children.
	pub fn text(&self) -> String {
		self.children
			.borrow()
			.iter()
			.map(View::text_content)
			.collect()
	}

	/// Returns a copy of the mounted children.
	pub fn children(&self) -> Vec<View> {
		self.children.borrow().clone()
	}

	/// Returns the number of mounted children.
	pub fn len(&self) -> usize {
		self.children.borrow().len()
	}

	/// Returns whether the container has no children.
	pub fn is_empty(&self) -> bool {
		self.children.borrow().is_empty()
	}
}

impl MountContainer for MemoryContainer {
	fn clear(&self) {
		self.children.borrow_mut().clear();
	}

	fn attach(&self, view: &View) -> Result<(), MountError> {
		self.children.borrow_mut().push(view.clone());
		Ok(())
	}
}

/// Mount container backed by a DOM element, looked up once by id.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone)]
pub struct DomContainer {
	element: web_sys::Element,
}

#[cfg(target_arch = "wasm32")]
impl DomContainer {
	/// Looks up the element with the given id.
	pub fn by_id(id: &str) -> Result<Self, MountError> {
		let document = web_sys::window()
			.ok_or(MountError::NoWindow)?
			.document()
			.ok_or(MountError::NoDocument)?;
		let element = document
			.get_element_by_id(id)
			.ok_or_else(|| MountError::ContainerNotFound(id.to_string()))?;
		Ok(Self { element })
	}

	/// Returns the underlying element.
	pub fn element(&self) -> &web_sys::Element {
		&self.element
	}
}

#[cfg(target_arch = "wasm32")]
impl MountContainer for DomContainer {
	fn clear(&self) {
		self.element.set_inner_html("");
	}

	fn attach(&self, view: &View) -> Result<(), MountError> {
		view.mount(&self.element)
	}
}
