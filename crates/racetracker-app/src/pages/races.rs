use racetracker_api::{ApiClient, Transport};
use racetracker_pages::View;

use super::list_page;
use crate::widgets::races_list;

/// `/`: every race as a card.
pub async fn races_page<T: Transport>(api: &ApiClient<T>) -> anyhow::Result<View> {
	let races = api.races().await?;
	Ok(list_page("races-page", "Состязания", races_list(&races)))
}
