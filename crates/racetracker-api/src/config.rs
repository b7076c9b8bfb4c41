//! API client configuration.

use serde::{Deserialize, Serialize};

/// Where the backend lives and how long a request may take.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
	/// Base URL, absolute or relative to the page origin.
	pub base_url: String,
	/// API version segment appended to the base URL.
	pub version: String,
	/// Request timeout in milliseconds.
	pub timeout_ms: u64,
}

impl Default for ApiConfig {
	fn default() -> Self {
		Self {
			base_url: "/api".to_string(),
			version: "v1".to_string(),
			timeout_ms: 10_000,
		}
	}
}

impl ApiConfig {
	/// Sets the base URL.
	pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
		self.base_url = base_url.into();
		self
	}

	/// Sets the request timeout.
	pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
		self.timeout_ms = timeout_ms;
		self
	}

	/// Returns the API root, `{base_url}/{version}`.
	pub fn root(&self) -> String {
		let base = self.base_url.trim_end_matches('/');
		if self.version.is_empty() {
			base.to_string()
		} else {
			format!("{}/{}", base, self.version.trim_matches('/'))
		}
	}

	/// Returns the absolute URL of an endpoint path.
	pub fn url(&self, endpoint: &str) -> String {
		format!("{}{}", self.root(), endpoint)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_default_root() {
		let config = ApiConfig::default();
		assert_eq!(config.root(), "/api/v1");
		assert_eq!(config.url("/races/3"), "/api/v1/races/3");
		assert_eq!(config.timeout_ms, 10_000);
	}

	#[rstest]
	#[case("http://localhost:8000/api/", "v1", "http://localhost:8000/api/v1")]
	#[case("/api", "", "/api")]
	#[case("/api", "/v2/", "/api/v2")]
	fn test_root_joins_segments(#[case] base: &str, #[case] version: &str, #[case] expected: &str) {
		let config = ApiConfig {
			version: version.to_string(),
			..ApiConfig::default().with_base_url(base)
		};
		assert_eq!(config.root(), expected);
	}

	#[rstest]
	fn test_partial_deserialization_keeps_defaults() {
		let config: ApiConfig = serde_json::from_str(r#"{"timeout_ms": 500}"#).unwrap();
		assert_eq!(config.timeout_ms, 500);
		assert_eq!(config.base_url, "/api");
		assert_eq!(config.version, "v1");
	}
}
