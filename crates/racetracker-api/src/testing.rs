//! Scripted in-memory transport.
//!
//! Replies are registered per `(method, url)`; an unscripted request gets
//! `404 Not Found`. Every request is recorded.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use async_trait::async_trait;
use serde::Serialize;

use crate::error::ApiError;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

#[derive(Debug, Clone)]
enum Reply {
	Response(ApiResponse),
	Error(ApiError),
}

#[derive(Debug, Default)]
struct MockState {
	replies: HashMap<(Method, String), Reply>,
	requests: Vec<ApiRequest>,
}

/// A transport answering from a script. Clones share the script and the log.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
	state: Rc<RefCell<MockState>>,
}

impl MockTransport {
	/// Creates an empty script.
	pub fn new() -> Self {
		Self::default()
	}

	/// Answers `method url` with a raw body.
	pub fn respond(&self, method: Method, url: &str, status: u16, body: impl Into<String>) {
		let response = ApiResponse {
			status,
			status_text: reason_phrase(status).to_string(),
			body: body.into(),
		};
		self.insert(method, url, Reply::Response(response));
	}

	/// Answers `method url` with `body` serialized as JSON.
	///
	/// # Panics
	///
	/// Panics if `body` cannot be serialized.
	pub fn respond_json<B: Serialize + ?Sized>(&self, method: Method, url: &str, status: u16, body: &B) {
		let body = serde_json::to_string(body).expect("scripted body must serialize to JSON");
		self.respond(method, url, status, body);
	}

	/// Fails `method url` at the transport level.
	pub fn fail(&self, method: Method, url: &str, error: ApiError) {
		self.insert(method, url, Reply::Error(error));
	}

	/// Returns every request sent so far.
	pub fn requests(&self) -> Vec<ApiRequest> {
		self.state.borrow().requests.clone()
	}

	/// Returns the number of requests sent so far.
	pub fn request_count(&self) -> usize {
		self.state.borrow().requests.len()
	}

	/// Returns the number of requests sent to `url`.
	pub fn count_for(&self, method: Method, url: &str) -> usize {
		self.state
			.borrow()
			.requests
			.iter()
			.filter(|r| r.method == method && r.url == url)
			.count()
	}

	fn insert(&self, method: Method, url: &str, reply: Reply) {
		self.state
			.borrow_mut()
			.replies
			.insert((method, url.to_string()), reply);
	}
}

#[async_trait(?Send)]
impl Transport for MockTransport {
	async fn send(&self, request: ApiRequest) -> Result<ApiResponse, ApiError> {
		let mut state = self.state.borrow_mut();
		let reply = state
			.replies
			.get(&(request.method, request.url.clone()))
			.cloned();
		state.requests.push(request);

		match reply {
			Some(Reply::Response(response)) => Ok(response),
			Some(Reply::Error(error)) => Err(error),
			None => Ok(ApiResponse {
				status: 404,
				status_text: reason_phrase(404).to_string(),
				body: r#"{"detail":"Not Found"}"#.to_string(),
			}),
		}
	}
}

fn reason_phrase(status: u16) -> &'static str {
	match status {
		200 => "OK",
		201 => "Created",
		204 => "No Content",
		400 => "Bad Request",
		404 => "Not Found",
		422 => "Unprocessable Entity",
		500 => "Internal Server Error",
		503 => "Service Unavailable",
		_ => "",
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use std::collections::BTreeMap;

	use rstest::rstest;

	#[rstest]
	#[tokio::test]
	async fn test_unscripted_request_is_not_found() {
		let transport = MockTransport::new();
		let request = ApiRequest {
			method: Method::Get,
			url: "/api/v1/owners/9".to_string(),
			body: None,
			timeout_ms: 10_000,
		};

		let response = transport.send(request).await.unwrap();

		assert_eq!(response.status, 404);
		assert_eq!(response.status_text, "Not Found");
		assert_eq!(transport.count_for(Method::Get, "/api/v1/owners/9"), 1);
	}

	#[rstest]
	#[should_panic(expected = "scripted body must serialize to JSON")]
	fn test_respond_json_rejects_unserializable_body() {
		let mut body = BTreeMap::new();
		body.insert((1, 2), "non-string key");

		MockTransport::new().respond_json(Method::Get, "/api/v1/races", 200, &body);
	}
}
