//! HTTP transports.
//!
//! [`ApiClient`](crate::ApiClient) is generic over [`Transport`], so pages can
//! be exercised natively with a scripted transport while the browser build
//! uses `fetch`.

use std::fmt;

use async_trait::async_trait;

use crate::error::ApiError;

/// HTTP methods the backend exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
	/// `GET`
	Get,
	/// `POST`
	Post,
	/// `PUT`
	Put,
}

impl Method {
	/// Returns the method name.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Get => "GET",
			Self::Post => "POST",
			Self::Put => "PUT",
		}
	}
}

impl fmt::Display for Method {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// A request ready to be sent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRequest {
	/// HTTP method.
	pub method: Method,
	/// Absolute URL.
	pub url: String,
	/// JSON body, for POST and PUT.
	pub body: Option<String>,
	/// Timeout in milliseconds.
	pub timeout_ms: u64,
}

/// A response as received, before any status check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
	/// HTTP status code.
	pub status: u16,
	/// HTTP reason phrase.
	pub status_text: String,
	/// Raw body.
	pub body: String,
}

impl ApiResponse {
	/// Returns whether the status is 2xx.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}
}

/// Sends requests to the backend.
///
/// Implementations report only transport-level failures ([`ApiError::Network`],
/// [`ApiError::Timeout`]); status handling belongs to the client.
#[async_trait(?Send)]
pub trait Transport {
	/// Sends `request` and returns the raw response.
	async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError>;
}

/// Browser transport built on `fetch`.
///
/// The request is aborted through an `AbortController` once its timeout elapses.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct FetchTransport;

#[cfg(target_arch = "wasm32")]
#[async_trait(?Send)]
impl Transport for FetchTransport {
	async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
		use gloo_net::http::Request;
		use gloo_timers::callback::Timeout;

		let controller =
			web_sys::AbortController::new().map_err(|e| ApiError::Network(format!("{:?}", e)))?;
		let signal = controller.signal();

		let builder = match request.method {
			Method::Get => Request::get(&request.url),
			Method::Post => Request::post(&request.url),
			Method::Put => Request::put(&request.url),
		}
		.header("Content-Type", "application/json")
		.abort_signal(Some(&signal));

		let prepared = match request.body {
			Some(body) => builder.body(body),
			None => builder.build(),
		}
		.map_err(|e| ApiError::Network(e.to_string()))?;

		// Dropping the timeout cancels it
		let timeout_ms = request.timeout_ms;
		let _timeout = Timeout::new(u32::try_from(timeout_ms).unwrap_or(u32::MAX), move || {
			controller.abort();
		});

		let response = prepared.send().await.map_err(|e| {
			if signal.aborted() {
				ApiError::Timeout(timeout_ms)
			} else {
				ApiError::Network(e.to_string())
			}
		})?;

		let status = response.status();
		let status_text = response.status_text();
		let body = response
			.text()
			.await
			.map_err(|e| ApiError::Network(e.to_string()))?;

		Ok(ApiResponse {
			status,
			status_text,
			body,
		})
	}
}

/// Native transport built on `reqwest`.
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
	client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
impl ReqwestTransport {
	/// Creates a transport with a fresh connection pool.
	pub fn new() -> Self {
		Self::default()
	}

	/// Creates a transport sharing an existing `reqwest` client.
	pub fn with_client(client: reqwest::Client) -> Self {
		Self { client }
	}
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl Transport for ReqwestTransport {
	async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
		let method = match request.method {
			Method::Get => reqwest::Method::GET,
			Method::Post => reqwest::Method::POST,
			Method::Put => reqwest::Method::PUT,
		};
		let timeout_ms = request.timeout_ms;

		let mut builder = self
			.client
			.request(method, &request.url)
			.header(reqwest::header::CONTENT_TYPE, "application/json")
			.timeout(std::time::Duration::from_millis(timeout_ms));
		if let Some(body) = request.body {
			builder = builder.body(body);
		}

		let to_error = |e: reqwest::Error| {
			if e.is_timeout() {
				ApiError::Timeout(timeout_ms)
			} else {
				ApiError::Network(e.to_string())
			}
		};

		let response = builder.send().await.map_err(to_error)?;
		let status = response.status();
		let body = response.text().await.map_err(to_error)?;

		Ok(ApiResponse {
			status: status.as_u16(),
			status_text: status.canonical_reason().unwrap_or_default().to_string(),
			body,
		})
	}
}
