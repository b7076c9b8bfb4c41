use racetracker_api::{ApiClient, Transport};
use racetracker_pages::{IntoView, View};

use super::{empty_message, entity_card, list_page};

/// `/jockeys`: every jockey as a card.
pub async fn jockeys_page<T: Transport>(api: &ApiClient<T>) -> anyhow::Result<View> {
	let jockeys = api.jockeys().await?;

	let content = if jockeys.is_empty() {
		empty_message("Нет жокеев")
	} else {
		View::element("div")
			.class("jockeys-grid")
			.children(jockeys.into_iter().map(|jockey| {
				entity_card(
					"jockey-card",
					format!("#/jockeys/{}", jockey.id),
					jockey.name,
					vec![
						("Возраст:", jockey.age.to_string()),
						("Рейтинг:", jockey.rating.to_string()),
						("Адрес:", jockey.address),
					],
				)
			}))
			.into_view()
	};

	Ok(list_page("jockeys-page", "Жокеи", content))
}
