use racetracker_api::{ApiClient, Transport};
use racetracker_pages::{IntoView, View};

use super::{detail_page, info_block};
use crate::widgets::races_list;

/// `/horses/:id`: horse information and race history.
pub async fn horse_details_page<T: Transport>(api: &ApiClient<T>, id: i64) -> anyhow::Result<View> {
	let (horse, races) = futures::try_join!(api.horse(id), api.horse_races(id))?;

	Ok(detail_page(
		"horse-details-page",
		"#/horses",
		horse.nickname,
		vec![
			info_block(vec![
				("Пол:", horse.gender.to_string()),
				("Возраст:", horse.age.to_string()),
				("ID владельца:", horse.owner_id.to_string()),
			]),
			View::element("h2").child("История состязаний").into_view(),
			races_list(&races),
		],
	))
}
