use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{Race, RaceCreate, RaceWithParticipants};
use crate::transport::Transport;

impl<T: Transport> ApiClient<T> {
	/// Lists every race.
	pub async fn races(&self) -> Result<Vec<Race>, ApiError> {
		self.get(endpoints::RACES).await
	}

	/// Fetches a race together with its results.
	pub async fn race_with_participants(&self, id: i64) -> Result<RaceWithParticipants, ApiError> {
		self.get(&endpoints::race(id)).await
	}

	/// Creates a race.
	pub async fn create_race(&self, race: &RaceCreate) -> Result<Race, ApiError> {
		self.post(endpoints::RACES, race).await
	}
}
