//! Browser entry point.

use std::rc::Rc;

use racetracker_api::{ApiClient, FetchTransport};
use racetracker_pages::logging::init_logging;
use racetracker_pages::spawn::spawn_router;
use racetracker_pages::{DomContainer, HashLocation, MountContainer, Router};
use wasm_bindgen::prelude::*;

use crate::config::AppConfig;
use crate::routes::app_routes;
use crate::shell::{app_shell, startup_error};

/// Called by the generated JS glue once the module is instantiated.
#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
	#[cfg(feature = "console_error_panic_hook")]
	console_error_panic_hook::set_once();

	let config = AppConfig::from_document();
	init_logging(&config.log_level);

	if let Err(error) = init_app(&config) {
		tracing::error!(error = %error, "failed to start application");
		if let Ok(root) = DomContainer::by_id(&config.root_id) {
			let _ = root.set_view(&startup_error(&format!("{:#}", error)));
		}
		return Err(JsValue::from_str(&error.to_string()));
	}
	Ok(())
}

/// Builds the shell, then starts the router on the hash location.
pub fn init_app(config: &AppConfig) -> anyhow::Result<()> {
	let root = DomContainer::by_id(&config.root_id)?;
	root.set_view(&app_shell(&config.mount_id))?;

	let api = Rc::new(ApiClient::new(config.api.clone(), FetchTransport));
	let table = app_routes(api)?;
	let container = DomContainer::by_id(&config.mount_id)?;
	let router = Rc::new(Router::new(table, container).with_default_location(&config.default_route));

	spawn_router(&router, &HashLocation);
	tracing::info!(api = %config.api.root(), "RaceTracker started");
	Ok(())
}
