//! Route parameters handed to page handlers.
//!
//! Values are the raw path segments: no decoding and no type coercion happen
//! during matching. Handlers that want a typed value call [`RouteParams::parse`].
//!
//! # Example
//!
//! ```
//! use racetracker_pages::router::RouteTable;
//! use racetracker_pages::View;
//!
//! let table = RouteTable::builder()
//!     .route_sync("/jockeys/:id", |params| {
//!         let id: i64 = params.parse("id")?;
//!         Ok::<_, racetracker_pages::RouterError>(View::text(format!("Jockey #{}", id)))
//!     })
//!     .build()
//!     .unwrap();
//!
//! let route_match = table.resolve_location("#/jockeys/7").unwrap();
//! assert_eq!(route_match.params().get("id"), Some("7"));
//! ```

use std::fmt::Display;
use std::str::FromStr;

use super::error::RouterError;

/// Parameter values in the order their placeholders appear in the pattern.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteParams {
	entries: Vec<(String, String)>,
}

impl RouteParams {
	/// Creates parameters from `(name, value)` pairs in declaration order.
	pub fn new(entries: Vec<(String, String)>) -> Self {
		Self { entries }
	}

	/// Returns the number of parameters.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Returns whether there are no parameters.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Returns the value bound to `name`.
	pub fn get(&self, name: &str) -> Option<&str> {
		self.entries
			.iter()
			.find(|(n, _)| n == name)
			.map(|(_, v)| v.as_str())
	}

	/// Returns the value at a position.
	pub fn value(&self, index: usize) -> Option<&str> {
		self.entries.get(index).map(|(_, v)| v.as_str())
	}

	/// Returns the values in declaration order.
	pub fn values(&self) -> Vec<&str> {
		self.entries.iter().map(|(_, v)| v.as_str()).collect()
	}

	/// Returns the names in declaration order.
	pub fn names(&self) -> Vec<&str> {
		self.entries.iter().map(|(n, _)| n.as_str()).collect()
	}

	/// Iterates over `(name, value)` pairs in declaration order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
		self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
	}

	/// Consumes the parameters, returning the values in declaration order.
	pub fn into_values(self) -> Vec<String> {
		self.entries.into_iter().map(|(_, v)| v).collect()
	}

	/// Parses the value bound to `name`.
	///
	/// # Errors
	///
	/// Returns [`RouterError::MissingParameter`] if the pattern has no such parameter.
	/// Returns [`RouterError::InvalidParameter`] if the value does not parse.
	pub fn parse<T>(&self, name: &str) -> Result<T, RouterError>
	where
		T: FromStr,
		T::Err: Display,
	{
		let raw = self
			.get(name)
			.ok_or_else(|| RouterError::MissingParameter(name.to_string()))?;

		raw.parse::<T>()
			.map_err(|e| RouterError::InvalidParameter {
				name: name.to_string(),
				value: raw.to_string(),
				type_name: std::any::type_name::<T>(),
				reason: e.to_string(),
			})
	}
}
