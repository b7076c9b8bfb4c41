//! `tracing` subscriber setup for native and browser targets.
//!
//! Library code only emits `tracing` events. The host installs a subscriber once
//! through [`init_logging`]:
//!
//! | Target | Sink | Filter |
//! |--------|------|--------|
//! | native | `tracing_subscriber::fmt` on stderr | `RUST_LOG`, falling back to the given level |
//! | wasm32 | `console.error` / `warn` / `info` / `debug` | the given level |
//!
//! Router failures are logged at `ERROR` with the message `Router error`, so
//! they show up in the browser console with the default `info` level.

#[cfg(any(test, target_arch = "wasm32"))]
use std::fmt::{self, Write as _};
use std::sync::Once;

#[cfg(any(test, target_arch = "wasm32"))]
use tracing::field::{Field, Visit};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt as _;
use tracing_subscriber::util::SubscriberInitExt as _;

static INIT: Once = Once::new();

/// Installs the global subscriber.
///
/// Only the first call has an effect. A subscriber installed by someone else
/// (a test harness, for instance) is left in place.
pub fn init_logging(level: &str) {
	INIT.call_once(|| {
		let filter = build_filter(level);

		#[cfg(not(target_arch = "wasm32"))]
		let result = tracing_subscriber::registry()
			.with(filter)
			.with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
			.try_init();

		#[cfg(target_arch = "wasm32")]
		let result = tracing_subscriber::registry()
			.with(filter)
			.with(ConsoleLayer)
			.try_init();

		if result.is_ok() {
			tracing::debug!(level, "logging initialized");
		}
	});
}

fn build_filter(level: &str) -> EnvFilter {
	#[cfg(not(target_arch = "wasm32"))]
	if let Ok(filter) = EnvFilter::try_from_default_env() {
		return filter;
	}

	level_filter(level)
}

fn level_filter(level: &str) -> EnvFilter {
	EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Collects an event's message and fields into one line.
#[cfg(any(test, target_arch = "wasm32"))]
#[derive(Debug, Default)]
pub(crate) struct EventFields {
	message: String,
	fields: String,
}

#[cfg(any(test, target_arch = "wasm32"))]
impl EventFields {
	/// Records every field of `event`.
	pub(crate) fn from_event(event: &tracing::Event<'_>) -> Self {
		let mut fields = Self::default();
		event.record(&mut fields);
		fields
	}

	/// Renders `message key=value ...`.
	pub(crate) fn into_line(self) -> String {
		match (self.message.is_empty(), self.fields.is_empty()) {
			(_, true) => self.message,
			(true, false) => self.fields,
			(false, false) => format!("{} {}", self.message, self.fields),
		}
	}
}

#[cfg(any(test, target_arch = "wasm32"))]
impl Visit for EventFields {
	fn record_str(&mut self, field: &Field, value: &str) {
		if field.name() == "message" {
			self.message = value.to_string();
		} else {
			self.record_debug(field, &format_args!("{}", value));
		}
	}

	fn record_debug(&mut self, field: &Field, value: &dyn fmt::Debug) {
		if field.name() == "message" {
			self.message = format!("{:?}", value);
			return;
		}
		if !self.fields.is_empty() {
			self.fields.push(' ');
		}
		let _ = write!(self.fields, "{}={:?}", field.name(), value);
	}
}

/// Forwards events to the browser console, one console method per level.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleLayer;

#[cfg(target_arch = "wasm32")]
impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for ConsoleLayer {
	fn on_event(&self, event: &tracing::Event<'_>, _ctx: tracing_subscriber::layer::Context<'_, S>) {
		let metadata = event.metadata();
		let line = format!(
			"[{}] {}: {}",
			metadata.level(),
			metadata.target(),
			EventFields::from_event(event).into_line()
		);
		let line = wasm_bindgen::JsValue::from_str(&line);

		match *metadata.level() {
			tracing::Level::ERROR => web_sys::console::error_1(&line),
			tracing::Level::WARN => web_sys::console::warn_1(&line),
			tracing::Level::INFO => web_sys::console::info_1(&line),
			_ => web_sys::console::debug_1(&line),
		}
	}
}
