//! RaceTracker API - REST client for the RaceTracker backend
//!
//! ## Architecture
//!
//! - [`config`]: API root and request timeout
//! - [`transport`]: The [`Transport`] seam; `fetch` in the browser, `reqwest` natively
//! - [`client`]: [`ApiClient`] with the in-memory GET cache
//! - [`endpoints`]: Endpoint paths relative to the API root
//! - [`models`]: Entity and payload types
//! - [`resources`]: Entity operations (`client.races()`, `client.jockey(id)`, ...)
//!
//! Successful GET responses are cached per URL for the lifetime of the client.
//! Any POST or PUT clears the whole cache before it is sent.

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod endpoints;
pub mod error;
pub mod models;
pub mod resources;
pub mod transport;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

pub use client::ApiClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{
	Gender, Horse, HorseCreate, Jockey, JockeyCreate, Owner, OwnerCreate, Participant,
	ParticipantCreate, ParticipantResult, Race, RaceCreate, RaceWithParticipants,
};
pub use transport::{ApiRequest, ApiResponse, Method, Transport};

#[cfg(target_arch = "wasm32")]
pub use transport::FetchTransport;
#[cfg(not(target_arch = "wasm32"))]
pub use transport::ReqwestTransport;
