//! Renderable view tree.
//!
//! Page handlers build a [`View`] and hand it to the router, which attaches it to
//! the mount container. The same tree renders to an HTML string on native targets
//! and mounts into real DOM nodes in the browser.

mod view;

pub use view::{ElementView, IntoView, View};
