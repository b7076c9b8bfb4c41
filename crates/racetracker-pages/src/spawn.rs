//! Running the router on the browser event loop.

use std::rc::Rc;

use crate::location::LocationSource;
use crate::mount::MountContainer;
use crate::router::Router;

/// Registers the router on `location` and drives it on the browser event loop.
///
/// The initial navigation starts on the next microtask; later navigations
/// follow every location change for the lifetime of the page.
pub fn spawn_router<C, L>(router: &Rc<Router<C>>, location: &L)
where
	C: MountContainer + 'static,
	L: LocationSource + ?Sized,
{
	let driver = router.init(location);
	wasm_bindgen_futures::spawn_local(async move {
		driver.await;
		tracing::debug!("location stream ended, router stopped");
	});
}
