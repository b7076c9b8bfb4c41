use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{Jockey, JockeyCreate, Race};
use crate::transport::Transport;

impl<T: Transport> ApiClient<T> {
	/// Lists every jockey.
	pub async fn jockeys(&self) -> Result<Vec<Jockey>, ApiError> {
		self.get(endpoints::JOCKEYS).await
	}

	/// Fetches a jockey.
	pub async fn jockey(&self, id: i64) -> Result<Jockey, ApiError> {
		self.get(&endpoints::jockey(id)).await
	}

	/// Lists the races a jockey rode in.
	pub async fn jockey_races(&self, id: i64) -> Result<Vec<Race>, ApiError> {
		self.get(&endpoints::jockey_races(id)).await
	}

	/// Creates a jockey.
	pub async fn create_jockey(&self, jockey: &JockeyCreate) -> Result<Jockey, ApiError> {
		self.post(endpoints::JOCKEYS, jockey).await
	}
}
