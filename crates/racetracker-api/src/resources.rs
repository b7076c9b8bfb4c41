//! Entity operations.
//!
//! Each submodule adds methods to [`ApiClient`](crate::ApiClient) for one
//! backend resource.

mod horses;
mod jockeys;
mod owners;
mod participants;
mod races;
