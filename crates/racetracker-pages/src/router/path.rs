//! Location normalization.

use std::fmt;

/// A location reduced to its non-empty segments.
///
/// `#/races/42`, `/races/42` and `/races/42/` all normalize to `["races", "42"]`;
/// `#/`, `/` and the empty string normalize to no segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Path {
	segments: Vec<String>,
}

impl Path {
	/// Normalizes a raw location (with or without the leading `#`).
	pub fn parse(raw_location: &str) -> Self {
		let stripped = raw_location.strip_prefix('#').unwrap_or(raw_location);
		Self {
			segments: split_segments(stripped).map(str::to_string).collect(),
		}
	}

	/// Returns the segments.
	pub fn segments(&self) -> &[String] {
		&self.segments
	}

	/// Returns the number of segments.
	pub fn len(&self) -> usize {
		self.segments.len()
	}

	/// Returns whether there are no segments.
	pub fn is_empty(&self) -> bool {
		self.segments.is_empty()
	}

	/// Returns whether this is the root path.
	pub fn is_root(&self) -> bool {
		self.is_empty()
	}
}

impl fmt::Display for Path {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		if self.segments.is_empty() {
			return f.write_str("/");
		}
		for segment in &self.segments {
			write!(f, "/{}", segment)?;
		}
		Ok(())
	}
}

/// Splits on `/`, dropping empty segments.
pub(crate) fn split_segments(s: &str) -> impl Iterator<Item = &str> {
	s.split('/').filter(|segment| !segment.is_empty())
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("#/races/42", &["races", "42"])]
	#[case("/races/42", &["races", "42"])]
	#[case("/races/42/", &["races", "42"])]
	#[case("//races//42", &["races", "42"])]
	#[case("#races", &["races"])]
	#[case("#/", &[])]
	#[case("/", &[])]
	#[case("", &[])]
	fn test_parse(#[case] raw: &str, #[case] expected: &[&str]) {
		let path = Path::parse(raw);
		assert_eq!(path.segments(), expected);
		assert_eq!(path.is_root(), expected.is_empty());
	}

	#[rstest]
	fn test_display() {
		assert_eq!(Path::parse("#/").to_string(), "/");
		assert_eq!(Path::parse("#/horses/7/").to_string(), "/horses/7");
	}

	#[rstest]
	fn test_segments_are_case_preserving() {
		assert_eq!(Path::parse("/Races").segments(), &["Races"]);
	}
}
