use racetracker_api::{ApiClient, Transport};
use racetracker_pages::{IntoView, View};

use super::{empty_message, entity_card, list_page};

/// `/horses`: every horse as a card.
pub async fn horses_page<T: Transport>(api: &ApiClient<T>) -> anyhow::Result<View> {
	let horses = api.horses().await?;

	let content = if horses.is_empty() {
		empty_message("Нет лошадей")
	} else {
		View::element("div")
			.class("horses-grid")
			.children(horses.into_iter().map(|horse| {
				entity_card(
					"horse-card",
					format!("#/horses/{}", horse.id),
					horse.nickname,
					vec![
						("Пол:", horse.gender.to_string()),
						("Возраст:", horse.age.to_string()),
						("ID владельца:", horse.owner_id.to_string()),
					],
				)
			}))
			.into_view()
	};

	Ok(list_page("horses-page", "Лошади", content))
}
