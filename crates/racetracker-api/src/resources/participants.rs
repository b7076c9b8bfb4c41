use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{Participant, ParticipantCreate};
use crate::transport::Transport;

impl<T: Transport> ApiClient<T> {
	/// Lists every recorded participation.
	pub async fn participants(&self) -> Result<Vec<Participant>, ApiError> {
		self.get(endpoints::PARTICIPANTS).await
	}

	/// Records a race result.
	pub async fn add_participant(
		&self,
		participant: &ParticipantCreate,
	) -> Result<Participant, ApiError> {
		self.post(endpoints::PARTICIPANTS, participant).await
	}
}
