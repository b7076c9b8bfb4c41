//! Router error types.

use crate::mount::MountError;

/// Error type for route construction and parameter access.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RouterError {
	/// A pattern that does not start with `/`, such as `races/:id`.
	#[error("route pattern `{pattern}` must start with `/`")]
	MissingLeadingSlash {
		/// The offending pattern.
		pattern: String,
	},
	/// A `:` segment without a name, such as `/races/:`.
	#[error("route pattern `{pattern}` has a parameter without a name")]
	EmptyParameterName {
		/// The offending pattern.
		pattern: String,
	},
	/// The same parameter name appears twice in one pattern.
	#[error("route pattern `{pattern}` declares parameter `{name}` more than once")]
	DuplicateParameter {
		/// The offending pattern.
		pattern: String,
		/// The repeated name.
		name: String,
	},
	/// A handler asked for a parameter its pattern does not declare.
	#[error("missing route parameter `{0}`")]
	MissingParameter(String),
	/// A parameter value could not be parsed into the requested type.
	#[error("invalid value `{value}` for route parameter `{name}`: expected {type_name} ({reason})")]
	InvalidParameter {
		/// Parameter name.
		name: String,
		/// Raw path segment.
		value: String,
		/// Requested type.
		type_name: &'static str,
		/// Parser message.
		reason: String,
	},
}

/// A page handler failure, carrying a human-readable message.
///
/// Handlers may fail with any `Display` error; the router converts it into a
/// `PageError` and shows the message in its error view.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{message}")]
pub struct PageError {
	message: String,
}

impl PageError {
	/// Creates a page error.
	pub fn new(message: impl Into<String>) -> Self {
		Self {
			message: message.into(),
		}
	}

	/// Returns the message.
	pub fn message(&self) -> &str {
		&self.message
	}
}

impl From<MountError> for PageError {
	fn from(error: MountError) -> Self {
		Self::new(error.to_string())
	}
}

impl From<RouterError> for PageError {
	fn from(error: RouterError) -> Self {
		Self::new(error.to_string())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_router_error_display() {
		assert_eq!(
			RouterError::EmptyParameterName {
				pattern: "/races/:".to_string()
			}
			.to_string(),
			"route pattern `/races/:` has a parameter without a name"
		);
		assert_eq!(
			RouterError::MissingParameter("id".to_string()).to_string(),
			"missing route parameter `id`"
		);
	}

	#[rstest]
	fn test_page_error_from_mount_error() {
		let error = PageError::from(MountError::AppendChildFailed);
		assert_eq!(error.message(), "failed to append child node");
		assert_eq!(error.to_string(), "failed to append child node");
	}
}
