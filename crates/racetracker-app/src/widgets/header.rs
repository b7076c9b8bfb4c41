use racetracker_pages::{IntoView, View};

const NAV_LINKS: [(&str, &str); 3] = [
	("#/", "Состязания"),
	("#/jockeys", "Жокеи"),
	("#/horses", "Лошади"),
];

/// The site header: logo plus navigation.
pub fn header() -> View {
	let nav = View::element("nav").class("header-nav").children(
		NAV_LINKS.map(|(href, label)| {
			View::element("a")
				.attr("href", href)
				.class("nav-link")
				.child(label)
		}),
	);

	View::element("header")
		.class("header")
		.child(
			View::element("div")
				.class("header-container")
				.child(
					View::element("div").class("header-logo").child(
						View::element("a")
							.attr("href", "#/")
							.class("logo-link")
							.child("RaceTracker"),
					),
				)
				.child(nav),
		)
		.into_view()
}
