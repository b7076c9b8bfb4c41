//! Fixed views the router renders itself.

use crate::component::{IntoView, View};

/// The view shown when no route matches.
pub fn not_found_view() -> View {
	View::element("div")
		.class("error-page")
		.child(View::element("h1").child("404 - Страница не найдена"))
		.into_view()
}

/// The view shown when a page handler fails.
pub fn error_view(message: &str) -> View {
	View::element("div")
		.class("error")
		.child(format!("Ошибка загрузки страницы: {}", message))
		.into_view()
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_not_found_view() {
		insta::assert_snapshot!(
			not_found_view().render_to_string(),
			@r#"<div class="error-page"><h1>404 - Страница не найдена</h1></div>"#
		);
	}

	#[rstest]
	fn test_error_view_escapes_message() {
		insta::assert_snapshot!(
			error_view("<b>boom</b>").render_to_string(),
			@r#"<div class="error">Ошибка загрузки страницы: &lt;b&gt;boom&lt;/b&gt;</div>"#
		);
	}
}
