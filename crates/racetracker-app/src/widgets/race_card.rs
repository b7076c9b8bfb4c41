use racetracker_api::Race;
use racetracker_pages::{ElementView, IntoView, View};

use crate::format::{format_date, format_time};

/// A card linking to the race's detail page.
pub fn race_card(race: &Race) -> View {
	let title = race.name.clone().unwrap_or_else(|| "Состязание".to_string());

	View::element("a")
		.class("race-card")
		.attr("href", format!("#/races/{}", race.id))
		.child(
			View::element("div")
				.class("card")
				.child(View::element("h3").child(title))
				.child(labelled("Дата:", format_date(race.date)))
				.child(labelled("Время:", format_time(race.time)))
				.child(labelled("Ипподром:", race.hippodrome.clone())),
		)
		.into_view()
}

/// A list of race cards, or an empty message.
pub fn races_list(races: &[Race]) -> View {
	if races.is_empty() {
		return View::element("p")
			.class("empty-message")
			.child("Нет состязаний")
			.into_view();
	}

	View::element("div")
		.class("races-list")
		.children(races.iter().map(race_card))
		.into_view()
}

fn labelled(label: &'static str, value: String) -> ElementView {
	View::element("p")
		.child(View::element("span").class("label").child(label))
		.child(format!(" {}", value))
}
