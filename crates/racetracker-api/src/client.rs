//! The REST client.

use std::cell::RefCell;
use std::collections::HashMap;

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::ApiError;
use crate::transport::{ApiRequest, Method, Transport};

/// JSON client for the RaceTracker backend.
///
/// Successful GET bodies are cached under `METHOD:url` until the next write.
/// The cache is unbounded and has no expiry.
#[derive(Debug)]
pub struct ApiClient<T> {
	config: ApiConfig,
	transport: T,
	cache: RefCell<HashMap<String, Value>>,
}

impl<T: Transport> ApiClient<T> {
	/// Creates a client.
	pub fn new(config: ApiConfig, transport: T) -> Self {
		Self {
			config,
			transport,
			cache: RefCell::new(HashMap::new()),
		}
	}

	/// Returns the configuration.
	pub fn config(&self) -> &ApiConfig {
		&self.config
	}

	/// Returns the transport.
	pub fn transport(&self) -> &T {
		&self.transport
	}

	/// Fetches `endpoint`, serving repeated calls from the cache.
	pub async fn get<R: DeserializeOwned>(&self, endpoint: &str) -> Result<R, ApiError> {
		let url = self.config.url(endpoint);
		let key = cache_key(Method::Get, &url);

		let cached = self.cache.borrow().get(&key).cloned();
		if let Some(value) = cached {
			tracing::debug!(url = %url, "serving cached response");
			return decode(value);
		}

		let value = self.request(Method::Get, url, None).await?;
		self.cache.borrow_mut().insert(key, value.clone());
		decode(value)
	}

	/// Sends `body` with POST after clearing the cache.
	pub async fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R, ApiError>
	where
		B: Serialize + ?Sized,
		R: DeserializeOwned,
	{
		self.write(Method::Post, endpoint, body).await
	}

	/// Sends `body` with PUT after clearing the cache.
	pub async fn put<B, R>(&self, endpoint: &str, body: &B) -> Result<R, ApiError>
	where
		B: Serialize + ?Sized,
		R: DeserializeOwned,
	{
		self.write(Method::Put, endpoint, body).await
	}

	/// Drops every cached response.
	pub fn invalidate_cache(&self) {
		self.cache.borrow_mut().clear();
	}

	/// Returns the cache keys, sorted.
	pub fn cached_entries(&self) -> Vec<String> {
		let mut keys: Vec<String> = self.cache.borrow().keys().cloned().collect();
		keys.sort();
		keys
	}

	async fn write<B, R>(&self, method: Method, endpoint: &str, body: &B) -> Result<R, ApiError>
	where
		B: Serialize + ?Sized,
		R: DeserializeOwned,
	{
		self.invalidate_cache();
		let body = serde_json::to_string(body).map_err(|e| ApiError::Encode(e.to_string()))?;
		let value = self
			.request(method, self.config.url(endpoint), Some(body))
			.await?;
		decode(value)
	}

	async fn request(
		&self,
		method: Method,
		url: String,
		body: Option<String>,
	) -> Result<Value, ApiError> {
		let request = ApiRequest {
			method,
			url,
			body,
			timeout_ms: self.config.timeout_ms,
		};
		let url = request.url.clone();

		let result = self.transport.send(request).await.and_then(|response| {
			if !response.is_success() {
				return Err(ApiError::Status {
					status: response.status,
					status_text: response.status_text,
				});
			}
			serde_json::from_str(&response.body).map_err(|e| ApiError::Decode(e.to_string()))
		});

		if let Err(error) = &result {
			tracing::error!(method = %method, url = %url, error = %error, "API request failed");
		}
		result
	}
}

fn cache_key(method: Method, url: &str) -> String {
	format!("{}:{}", method, url)
}

fn decode<R: DeserializeOwned>(value: Value) -> Result<R, ApiError> {
	serde_json::from_value(value).map_err(|e| ApiError::Decode(e.to_string()))
}
