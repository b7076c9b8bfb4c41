//! Application configuration.
//!
//! The host page may embed a TOML document:
//!
//! ```html
//! <script type="application/toml" id="racetracker-config">
//! log_level = "debug"
//!
//! [api]
//! base_url = "http://localhost:8000/api"
//! </script>
//! ```
//!
//! Every key is optional; missing keys keep their defaults.

use racetracker_api::ApiConfig;
use serde::{Deserialize, Serialize};

/// Id of the `<script>` element holding the embedded configuration.
pub const CONFIG_ELEMENT_ID: &str = "racetracker-config";

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
	/// The document is not valid TOML or has the wrong shape.
	#[error("invalid configuration: {0}")]
	Parse(#[from] toml::de::Error),

	/// A value is out of range.
	#[error("invalid value for '{key}': {message}")]
	InvalidValue {
		/// Offending key.
		key: &'static str,
		/// What is wrong with it.
		message: String,
	},
}

/// Settings for the client application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
	/// Id of the element the shell is built into.
	pub root_id: String,
	/// Id of the `<main>` element pages are mounted into.
	pub mount_id: String,
	/// Location used when the page loads without a fragment.
	pub default_route: String,
	/// `tracing` filter directive.
	pub log_level: String,
	/// Backend settings.
	pub api: ApiConfig,
}

impl Default for AppConfig {
	fn default() -> Self {
		Self {
			root_id: "app".to_string(),
			mount_id: "main".to_string(),
			default_route: "#/".to_string(),
			log_level: "info".to_string(),
			api: ApiConfig::default(),
		}
	}
}

impl AppConfig {
	/// Parses and validates a TOML document.
	///
	/// # Errors
	///
	/// Returns [`ConfigError::Parse`] for malformed TOML and
	/// [`ConfigError::InvalidValue`] when validation fails.
	pub fn from_toml_str(source: &str) -> Result<Self, ConfigError> {
		let config: Self = toml::from_str(source)?;
		config.validate()?;
		Ok(config)
	}

	/// Checks the values.
	pub fn validate(&self) -> Result<(), ConfigError> {
		if self.root_id.trim().is_empty() {
			return Err(invalid("root_id", "must not be empty"));
		}
		if self.mount_id.trim().is_empty() {
			return Err(invalid("mount_id", "must not be empty"));
		}
		if self.root_id == self.mount_id {
			return Err(invalid("mount_id", "must differ from root_id"));
		}
		if !(self.default_route.starts_with("#/") || self.default_route.starts_with('/')) {
			return Err(invalid(
				"default_route",
				format!("`{}` must start with `#/` or `/`", self.default_route),
			));
		}
		if self.api.base_url.trim().is_empty() {
			return Err(invalid("api.base_url", "must not be empty"));
		}
		if self.api.timeout_ms == 0 {
			return Err(invalid("api.timeout_ms", "must be greater than zero"));
		}
		Ok(())
	}

	/// Loads the configuration embedded in the current document.
	///
	/// A missing element yields the defaults. An invalid one is logged and
	/// replaced by the defaults as well, so the application always starts.
	#[cfg(target_arch = "wasm32")]
	pub fn from_document() -> Self {
		let source = web_sys::window()
			.and_then(|window| window.document())
			.and_then(|document| document.get_element_by_id(CONFIG_ELEMENT_ID))
			.and_then(|element| element.text_content());

		match source {
			Some(source) => Self::from_toml_str(&source).unwrap_or_else(|error| {
				tracing::warn!(error = %error, "ignoring embedded configuration");
				Self::default()
			}),
			None => Self::default(),
		}
	}
}

fn invalid(key: &'static str, message: impl Into<String>) -> ConfigError {
	ConfigError::InvalidValue {
		key,
		message: message.into(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_defaults() {
		let config = AppConfig::default();
		assert_eq!(config.root_id, "app");
		assert_eq!(config.mount_id, "main");
		assert_eq!(config.default_route, "#/");
		assert_eq!(config.log_level, "info");
		assert_eq!(config.api.root(), "/api/v1");
		assert!(config.validate().is_ok());
	}

	#[rstest]
	fn test_empty_document_is_default() {
		assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
	}

	#[rstest]
	fn test_partial_document() {
		let config = AppConfig::from_toml_str(
			r#"
			log_level = "debug"

			[api]
			base_url = "http://localhost:8000/api"
			timeout_ms = 2500
			"#,
		)
		.unwrap();

		assert_eq!(config.log_level, "debug");
		assert_eq!(config.mount_id, "main");
		assert_eq!(config.api.root(), "http://localhost:8000/api/v1");
		assert_eq!(config.api.timeout_ms, 2500);
	}

	#[rstest]
	fn test_malformed_document() {
		let error = AppConfig::from_toml_str("log_level = ").unwrap_err();
		assert!(matches!(error, ConfigError::Parse(_)));
	}

	#[rstest]
	#[case("root_id = \"\"", "root_id")]
	#[case("mount_id = \" \"", "mount_id")]
	#[case("mount_id = \"app\"", "mount_id")]
	#[case("default_route = \"races\"", "default_route")]
	#[case("[api]\nbase_url = \"\"", "api.base_url")]
	#[case("[api]\ntimeout_ms = 0", "api.timeout_ms")]
	fn test_invalid_values(#[case] source: &str, #[case] expected_key: &str) {
		match AppConfig::from_toml_str(source).unwrap_err() {
			ConfigError::InvalidValue { key, .. } => assert_eq!(key, expected_key),
			other => panic!("unexpected error: {other}"),
		}
	}
}
