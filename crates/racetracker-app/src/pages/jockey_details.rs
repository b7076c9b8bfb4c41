use racetracker_api::{ApiClient, Transport};
use racetracker_pages::{IntoView, View};

use super::{detail_page, info_block};
use crate::widgets::races_list;

/// `/jockeys/:id`: jockey information and race history.
///
/// The jockey and the history are fetched concurrently.
pub async fn jockey_details_page<T: Transport>(api: &ApiClient<T>, id: i64) -> anyhow::Result<View> {
	let (jockey, races) = futures::try_join!(api.jockey(id), api.jockey_races(id))?;

	Ok(detail_page(
		"jockey-details-page",
		"#/jockeys",
		jockey.name,
		vec![
			info_block(vec![
				("Возраст:", jockey.age.to_string()),
				("Рейтинг:", jockey.rating.to_string()),
				("Адрес:", jockey.address),
			]),
			View::element("h2").child("История состязаний").into_view(),
			races_list(&races),
		],
	))
}
