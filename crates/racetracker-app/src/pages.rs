//! Page builders.
//!
//! Each page fetches what it needs and returns the finished view. Errors are
//! returned to the router, which shows its error view in place of the page.

mod horse_details;
mod horses;
mod jockey_details;
mod jockeys;
mod race_details;
mod races;

pub use horse_details::horse_details_page;
pub use horses::horses_page;
pub use jockey_details::jockey_details_page;
pub use jockeys::jockeys_page;
pub use race_details::race_details_page;
pub use races::races_page;

use racetracker_pages::{ElementView, IntoView, View};

/// A list page: title header plus content.
fn list_page(class: &'static str, title: &'static str, content: View) -> View {
	View::element("div")
		.class(format!("page {}", class))
		.child(
			View::element("div")
				.class("page-header")
				.child(View::element("h1").child(title)),
		)
		.child(View::element("div").class("page-content").child(content))
		.into_view()
}

/// A detail page: back link, title and body.
fn detail_page(class: &'static str, back_href: &'static str, title: String, body: Vec<View>) -> View {
	View::element("div")
		.class(format!("page {}", class))
		.child(
			View::element("a")
				.class("btn-back")
				.attr("href", back_href)
				.child("← Назад"),
		)
		.child(View::element("h1").child(title))
		.children(body)
		.into_view()
}

/// A block of `label: value` rows.
fn info_block(items: Vec<(&'static str, String)>) -> View {
	View::element("div")
		.class("info-block")
		.children(items.into_iter().map(|(label, value)| {
			View::element("div")
				.class("info-item")
				.child(View::element("span").class("label").child(label))
				.child(View::element("span").child(value))
		}))
		.into_view()
}

/// A paragraph shown instead of an empty list.
fn empty_message(text: &'static str) -> View {
	View::element("p")
		.class("empty-message")
		.child(text)
		.into_view()
}

/// A linked card with a title and `label value` lines.
fn entity_card(
	class: &'static str,
	href: String,
	title: String,
	lines: Vec<(&'static str, String)>,
) -> ElementView {
	View::element("a")
		.class(format!("{} card", class))
		.attr("href", href)
		.child(View::element("h3").child(title))
		.children(lines.into_iter().map(|(label, value)| {
			View::element("p")
				.child(View::element("span").class("label").child(label))
				.child(format!(" {}", value))
		}))
}
