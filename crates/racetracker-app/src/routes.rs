//! The application's route table.
//!
//! | Pattern | Page |
//! |---------|------|
//! | `/` | races list |
//! | `/races/:id` | race details |
//! | `/jockeys` | jockeys list |
//! | `/jockeys/:id` | jockey details |
//! | `/horses` | horses list |
//! | `/horses/:id` | horse details |

use std::future::Future;
use std::rc::Rc;

use racetracker_api::{ApiClient, Transport};
use racetracker_pages::{RouteParams, RouteTable, RouterError, View};

use crate::pages;

/// Builds the route table over a shared API client.
pub fn app_routes<T: Transport + 'static>(api: Rc<ApiClient<T>>) -> Result<RouteTable, RouterError> {
	RouteTable::builder()
		.route("/", with_api(&api, races::<T>))
		.route("/races/:id", with_api(&api, race_details::<T>))
		.route("/jockeys", with_api(&api, jockeys::<T>))
		.route("/jockeys/:id", with_api(&api, jockey_details::<T>))
		.route("/horses", with_api(&api, horses::<T>))
		.route("/horses/:id", with_api(&api, horse_details::<T>))
		.build()
}

fn with_api<T, F, Fut>(api: &Rc<ApiClient<T>>, load: F) -> impl Fn(RouteParams) -> Fut + 'static
where
	T: 'static,
	F: Fn(Rc<ApiClient<T>>, RouteParams) -> Fut + 'static,
	Fut: Future<Output = anyhow::Result<View>> + 'static,
{
	let api = Rc::clone(api);
	move |params| load(Rc::clone(&api), params)
}

async fn races<T: Transport>(api: Rc<ApiClient<T>>, _params: RouteParams) -> anyhow::Result<View> {
	pages::races_page(&api).await
}

async fn race_details<T: Transport>(api: Rc<ApiClient<T>>, params: RouteParams) -> anyhow::Result<View> {
	let id = params.parse("id")?;
	pages::race_details_page(&api, id).await
}

async fn jockeys<T: Transport>(api: Rc<ApiClient<T>>, _params: RouteParams) -> anyhow::Result<View> {
	pages::jockeys_page(&api).await
}

async fn jockey_details<T: Transport>(api: Rc<ApiClient<T>>, params: RouteParams) -> anyhow::Result<View> {
	let id = params.parse("id")?;
	pages::jockey_details_page(&api, id).await
}

async fn horses<T: Transport>(api: Rc<ApiClient<T>>, _params: RouteParams) -> anyhow::Result<View> {
	pages::horses_page(&api).await
}

async fn horse_details<T: Transport>(api: Rc<ApiClient<T>>, params: RouteParams) -> anyhow::Result<View> {
	let id = params.parse("id")?;
	pages::horse_details_page(&api, id).await
}

#[cfg(test)]
mod tests {
	use super::*;
	use racetracker_api::ApiConfig;
	use racetracker_api::testing::MockTransport;
	use racetracker_pages::RoutePattern;
	use rstest::rstest;

	#[rstest]
	fn test_route_order() {
		let api = Rc::new(ApiClient::new(ApiConfig::default(), MockTransport::new()));
		let table = app_routes(api).unwrap();

		assert_eq!(
			table.patterns().map(RoutePattern::as_str).collect::<Vec<_>>(),
			vec!["/", "/races/:id", "/jockeys", "/jockeys/:id", "/horses", "/horses/:id"]
		);
	}

	#[rstest]
	#[case("#/", "/")]
	#[case("#/races/12", "/races/:id")]
	#[case("#/jockeys/", "/jockeys")]
	#[case("#/horses/4", "/horses/:id")]
	fn test_resolution(#[case] location: &str, #[case] expected: &str) {
		let api = Rc::new(ApiClient::new(ApiConfig::default(), MockTransport::new()));
		let table = app_routes(api).unwrap();

		assert_eq!(
			table.resolve_location(location).unwrap().pattern().as_str(),
			expected
		);
	}

	#[rstest]
	#[case("#/owners")]
	#[case("#/races")]
	#[case("#/races/1/participants")]
	fn test_unrouted_locations(#[case] location: &str) {
		let api = Rc::new(ApiClient::new(ApiConfig::default(), MockTransport::new()));
		let table = app_routes(api).unwrap();

		assert!(table.resolve_location(location).is_none());
	}
}
