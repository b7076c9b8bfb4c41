use racetracker_api::ParticipantResult;
use racetracker_pages::{IntoView, View};

use crate::format::format_optional_time;

const COLUMNS: [&str; 4] = ["Место", "Жокей", "Лошадь", "Время"];

/// The results table of a race, or an empty message.
pub fn participants_list(participants: &[ParticipantResult]) -> View {
	let container = View::element("div").class("participants-list");

	if participants.is_empty() {
		return container
			.child(View::element("p").class("empty-message").child("Нет результатов"))
			.into_view();
	}

	let header = View::element("div")
		.class("table-header")
		.children(COLUMNS.map(cell));

	let rows = participants.iter().map(|participant| {
		View::element("div")
			.class("table-row")
			.child(cell(
				View::element("span")
					.class("place-badge")
					.child(participant.place.to_string()),
			))
			.child(cell(participant.jockey_name.clone()))
			.child(cell(participant.horse_name.clone()))
			.child(cell(format_optional_time(participant.time_result)))
	});

	container
		.child(View::element("h3").child("Результаты состязания"))
		.child(
			View::element("div")
				.class("participants-table")
				.child(header)
				.children(rows),
		)
		.into_view()
}

fn cell(content: impl IntoView) -> View {
	View::element("div")
		.class("table-cell")
		.child(content)
		.into_view()
}
