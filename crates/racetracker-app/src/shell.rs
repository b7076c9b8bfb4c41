//! The static frame around every page.

use racetracker_pages::{IntoView, View};

use crate::widgets::header;

/// The header followed by the `<main>` element pages are mounted into.
pub fn app_shell(mount_id: &str) -> View {
	View::element("div")
		.class("app-container")
		.child(header())
		.child(
			View::element("main")
				.class("main-content")
				.attr("id", mount_id.to_string()),
		)
		.into_view()
}

/// Shown in the root element when the application cannot start.
pub fn startup_error(message: &str) -> View {
	View::element("div")
		.class("error")
		.child(format!("Failed to start application: {}", message))
		.into_view()
}
