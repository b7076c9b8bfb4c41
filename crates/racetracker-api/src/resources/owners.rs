use crate::client::ApiClient;
use crate::endpoints;
use crate::error::ApiError;
use crate::models::{Owner, OwnerCreate};
use crate::transport::Transport;

impl<T: Transport> ApiClient<T> {
	/// Lists every owner.
	pub async fn owners(&self) -> Result<Vec<Owner>, ApiError> {
		self.get(endpoints::OWNERS).await
	}

	/// Fetches an owner.
	pub async fn owner(&self, id: i64) -> Result<Owner, ApiError> {
		self.get(&endpoints::owner(id)).await
	}

	/// Creates an owner.
	pub async fn create_owner(&self, owner: &OwnerCreate) -> Result<Owner, ApiError> {
		self.post(endpoints::OWNERS, owner).await
	}
}
