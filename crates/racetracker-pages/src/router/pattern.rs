//! Route pattern parsing and matching.

use std::fmt;
use std::str::FromStr;

use super::error::RouterError;
use super::params::RouteParams;
use super::path::{Path, split_segments};

/// Prefix marking a parameter segment.
pub const PARAM_MARKER: char = ':';

/// One segment of a parsed pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Segment {
	/// Matches a path segment by exact, case-sensitive equality.
	Literal(String),
	/// Matches any single path segment and binds it to the name.
	Param(String),
}

/// A route template such as `/races/:id`, parsed once into segments.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RoutePattern {
	source: String,
	segments: Vec<Segment>,
}

impl RoutePattern {
	/// Parses a pattern.
	///
	/// # Errors
	///
	/// Returns [`RouterError::MissingLeadingSlash`] unless the pattern starts
	/// with `/`, [`RouterError::EmptyParameterName`] for a bare `:` segment and
	/// [`RouterError::DuplicateParameter`] when a name is declared twice.
	pub fn parse(source: &str) -> Result<Self, RouterError> {
		if !source.starts_with('/') {
			return Err(RouterError::MissingLeadingSlash {
				pattern: source.to_string(),
			});
		}

		let mut segments = Vec::new();

		for raw in split_segments(source) {
			match raw.strip_prefix(PARAM_MARKER) {
				Some("") => {
					return Err(RouterError::EmptyParameterName {
						pattern: source.to_string(),
					});
				}
				Some(name) => {
					let duplicate = segments
						.iter()
						.any(|s| matches!(s, Segment::Param(n) if n == name));
					if duplicate {
						return Err(RouterError::DuplicateParameter {
							pattern: source.to_string(),
							name: name.to_string(),
						});
					}
					segments.push(Segment::Param(name.to_string()));
				}
				None => segments.push(Segment::Literal(raw.to_string())),
			}
		}

		Ok(Self {
			source: source.to_string(),
			segments,
		})
	}

	/// Returns the pattern as written.
	pub fn as_str(&self) -> &str {
		&self.source
	}

	/// Returns the parsed segments.
	pub fn segments(&self) -> &[Segment] {
		&self.segments
	}

	/// Returns the parameter names in declaration order.
	pub fn param_names(&self) -> Vec<&str> {
		self.segments
			.iter()
			.filter_map(|s| match s {
				Segment::Param(name) => Some(name.as_str()),
				Segment::Literal(_) => None,
			})
			.collect()
	}

	/// Checks whether `path` has this pattern's shape.
	pub fn matches(&self, path: &Path) -> bool {
		self.segments.len() == path.len()
			&& self
				.segments
				.iter()
				.zip(path.segments())
				.all(|(segment, part)| match segment {
					Segment::Param(_) => true,
					Segment::Literal(literal) => literal == part,
				})
	}

	/// Matches `path` and extracts its parameters.
	pub fn extract(&self, path: &Path) -> Option<RouteParams> {
		if !self.matches(path) {
			return None;
		}

		let entries = self
			.segments
			.iter()
			.zip(path.segments())
			.filter_map(|(segment, part)| match segment {
				Segment::Param(name) => Some((name.clone(), part.clone())),
				Segment::Literal(_) => None,
			})
			.collect();

		Some(RouteParams::new(entries))
	}
}

impl fmt::Display for RoutePattern {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.source)
	}
}

impl FromStr for RoutePattern {
	type Err = RouterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Self::parse(s)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_parse_segments() {
		let pattern = RoutePattern::parse("/races/:id/results").unwrap();
		assert_eq!(
			pattern.segments(),
			&[
				Segment::Literal("races".to_string()),
				Segment::Param("id".to_string()),
				Segment::Literal("results".to_string()),
			]
		);
		assert_eq!(pattern.param_names(), vec!["id"]);
		assert_eq!(pattern.to_string(), "/races/:id/results");
	}

	#[rstest]
	fn test_root_pattern_has_no_segments() {
		let pattern = RoutePattern::parse("/").unwrap();
		assert!(pattern.segments().is_empty());
		assert!(pattern.matches(&Path::parse("#/")));
		assert!(pattern.matches(&Path::parse("")));
		assert!(!pattern.matches(&Path::parse("/races")));
	}

	#[rstest]
	#[case("/races/:")]
	#[case("/:")]
	fn test_empty_parameter_name(#[case] source: &str) {
		assert_eq!(
			RoutePattern::parse(source),
			Err(RouterError::EmptyParameterName {
				pattern: source.to_string()
			})
		);
	}

	#[rstest]
	#[case("races/:id")]
	#[case(":id")]
	#[case("")]
	fn test_missing_leading_slash(#[case] source: &str) {
		assert_eq!(
			RoutePattern::parse(source),
			Err(RouterError::MissingLeadingSlash {
				pattern: source.to_string()
			})
		);
	}

	#[rstest]
	fn test_duplicate_parameter() {
		let err = "/a/:x/:x".parse::<RoutePattern>().unwrap_err();
		assert_eq!(
			err,
			RouterError::DuplicateParameter {
				pattern: "/a/:x/:x".to_string(),
				name: "x".to_string()
			}
		);
	}

	#[rstest]
	#[case("/races/42", true)]
	#[case("/races/42/", true)]
	#[case("/races", false)]
	#[case("/races/42/extra", false)]
	#[case("/Races/42", false)]
	#[case("/jockeys/42", false)]
	fn test_matches(#[case] path: &str, #[case] expected: bool) {
		let pattern = RoutePattern::parse("/races/:id").unwrap();
		assert_eq!(pattern.matches(&Path::parse(path)), expected);
	}

	#[rstest]
	fn test_extract_keeps_declaration_order_and_raw_values() {
		let pattern = RoutePattern::parse("/races/:race/horses/:horse").unwrap();
		let params = pattern
			.extract(&Path::parse("#/races/spring%20cup/horses/7"))
			.unwrap();

		assert_eq!(params.names(), vec!["race", "horse"]);
		assert_eq!(params.values(), vec!["spring%20cup", "7"]);
	}

	#[rstest]
	fn test_extract_mismatch() {
		let pattern = RoutePattern::parse("/horses/:id").unwrap();
		assert!(pattern.extract(&Path::parse("/horses")).is_none());
	}
}
