use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{Horse, HorseCreate, Race};
use crate::transport::Transport;

impl<T: Transport> ApiClient<T> {
	/// Lists every horse.
	pub async fn horses(&self) -> Result<Vec<Horse>, ApiError> {
		self.get(endpoints::HORSES).await
	}

	/// Fetches a horse.
	pub async fn horse(&self, id: i64) -> Result<Horse, ApiError> {
		self.get(&endpoints::horse(id)).await
	}

	/// Lists the races a horse ran in.
	pub async fn horse_races(&self, id: i64) -> Result<Vec<Race>, ApiError> {
		self.get(&endpoints::horse_races(id)).await
	}

	/// Creates a horse.
	pub async fn create_horse(&self, horse: &HorseCreate) -> Result<Horse, ApiError> {
		self.post(endpoints::HORSES, horse).await
	}
}
