//! API error types.

/// Error type for REST calls.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
	/// The request could not be sent or the connection failed.
	#[error("network error: {0}")]
	Network(String),
	/// No response arrived within the configured timeout.
	#[error("request timed out after {0} ms")]
	Timeout(u64),
	/// The backend answered with a non-success status.
	#[error("API Error: {status} {status_text}")]
	Status {
		/// HTTP status code.
		status: u16,
		/// HTTP reason phrase.
		status_text: String,
	},
	/// The request body could not be serialized.
	#[error("failed to encode request: {0}")]
	Encode(String),
	/// The response body was not the expected JSON.
	#[error("failed to decode response: {0}")]
	Decode(String),
}

impl ApiError {
	/// Returns the HTTP status for [`ApiError::Status`].
	pub fn status(&self) -> Option<u16> {
		match self {
			Self::Status { status, .. } => Some(*status),
			_ => None,
		}
	}

	/// Returns whether the backend reported the resource as missing.
	pub fn is_not_found(&self) -> bool {
		self.status() == Some(404)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_status_display() {
		let error = ApiError::Status {
			status: 404,
			status_text: "Not Found".to_string(),
		};
		assert_eq!(error.to_string(), "API Error: 404 Not Found");
		assert!(error.is_not_found());
	}

	#[rstest]
	fn test_non_status_errors() {
		assert_eq!(ApiError::Timeout(10_000).to_string(), "request timed out after 10000 ms");
		assert_eq!(ApiError::Network("refused".into()).status(), None);
	}
}
