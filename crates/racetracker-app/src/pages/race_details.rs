use racetracker_api::{ApiClient, Transport};
use racetracker_pages::View;

use super::{detail_page, info_block};
use crate::format::{format_date, format_time};
use crate::widgets::participants_list;

/// `/races/:id`: race information and its results table.
pub async fn race_details_page<T: Transport>(api: &ApiClient<T>, id: i64) -> anyhow::Result<View> {
	let details = api.race_with_participants(id).await?;
	let race = &details.race;

	Ok(detail_page(
		"race-details-page",
		"#/",
		race.name.clone().unwrap_or_else(|| "Состязание".to_string()),
		vec![
			info_block(vec![
				("Дата:", format_date(race.date)),
				("Время:", format_time(race.time)),
				("Ипподром:", race.hippodrome.clone()),
			]),
			participants_list(&details.participants),
		],
	))
}
