//! Integration tests for the RaceTracker client
//!
//! The real route table and pages run against a scripted backend and an
//! in-memory mount container:
//! 1. Every route renders its page from backend data
//! 2. Handler failures (bad ids, API errors) end in the router's error view
//! 3. Re-navigation reloads the page, served from the GET cache
//! 4. The init lifecycle over a location source

use std::rc::Rc;

use racetracker_api::testing::MockTransport;
use racetracker_api::{ApiClient, ApiConfig, Method};
use racetracker_app::{AppConfig, app_routes};
use racetracker_pages::{MemoryContainer, MemoryLocation, NavigationOutcome, Router};
use rstest::{fixture, rstest};
use serde_json::json;

struct Harness {
	transport: MockTransport,
	container: MemoryContainer,
	router: Rc<Router<MemoryContainer>>,
}

impl Harness {
	async fn open(&self, location: &str) -> NavigationOutcome {
		self.router.navigate(location).await
	}

	fn html(&self) -> String {
		self.container.html()
	}

	fn text(&self) -> String {
		self.container.text()
	}
}

fn backend() -> MockTransport {
	let transport = MockTransport::new();
	let race = json!({"id": 3, "date": "2024-05-01", "time": "14:30:00", "hippodrome": "Central", "name": "Spring Cup"});

	transport.respond_json(Method::Get, "/api/v1/races", 200, &json!([race]));
	transport.respond_json(
		Method::Get,
		"/api/v1/races/3",
		200,
		&json!({
			"race": race,
			"participants": [
				{"jockey_name": "Ivanov", "horse_name": "Thunder", "place": 1, "time_result": "00:01:58"},
				{"jockey_name": "Petrov", "horse_name": "Breeze", "place": 2, "time_result": null}
			]
		}),
	);
	transport.respond_json(
		Method::Get,
		"/api/v1/jockeys",
		200,
		&json!([{"id": 7, "name": "Ivanov", "address": "Moscow", "age": 31, "rating": 88}]),
	);
	transport.respond_json(
		Method::Get,
		"/api/v1/jockeys/7",
		200,
		&json!({"id": 7, "name": "Ivanov", "address": "Moscow", "age": 31, "rating": 88}),
	);
	transport.respond_json(Method::Get, "/api/v1/jockeys/7/races", 200, &json!([race]));
	transport.respond_json(Method::Get, "/api/v1/horses", 200, &json!([]));
	transport.respond_json(
		Method::Get,
		"/api/v1/horses/4",
		200,
		&json!({"id": 4, "nickname": "Thunder", "gender": "мерин", "age": 6, "owner_id": 2}),
	);
	transport.respond_json(Method::Get, "/api/v1/horses/4/races", 200, &json!([]));
	transport
}

#[fixture]
fn harness() -> Harness {
	let transport = backend();
	let api = Rc::new(ApiClient::new(ApiConfig::default(), transport.clone()));
	let container = MemoryContainer::new();
	let router = Rc::new(Router::new(app_routes(api).unwrap(), container.clone()));

	Harness {
		transport,
		container,
		router,
	}
}

// ============================================================================
// Category 1: Pages
// ============================================================================

#[rstest]
#[tokio::test]
async fn test_races_page(harness: Harness) {
	let outcome = harness.open("#/").await;

	assert!(matches!(outcome, NavigationOutcome::Mounted { .. }));
	let html = harness.html();
	assert!(html.starts_with(r#"<div class="page races-page"><div class="page-header"><h1>Состязания</h1></div>"#));
	assert!(html.contains(r##"<a class="race-card" href="#/races/3">"##));
	assert!(html.contains("01.05.2024"));
}

#[rstest]
#[tokio::test]
async fn test_race_details_page(harness: Harness) {
	harness.open("#/races/3").await;

	let text = harness.text();
	assert!(text.starts_with("← НазадSpring Cup"));
	assert!(text.contains("Ипподром:Central"));
	assert!(text.contains("1IvanovThunder00:01:58"));
	assert!(text.contains("2PetrovBreeze—"));
	assert!(harness.html().contains(r##"<a class="btn-back" href="#/">"##));
}

#[rstest]
#[tokio::test]
async fn test_jockeys_page(harness: Harness) {
	harness.open("#/jockeys").await;

	assert!(harness.html().contains(r##"<a class="jockey-card card" href="#/jockeys/7"><h3>Ivanov</h3>"##));
}

#[rstest]
#[tokio::test]
async fn test_jockey_details_loads_both_resources(harness: Harness) {
	harness.open("#/jockeys/7").await;

	assert_eq!(harness.transport.count_for(Method::Get, "/api/v1/jockeys/7"), 1);
	assert_eq!(harness.transport.count_for(Method::Get, "/api/v1/jockeys/7/races"), 1);
	let text = harness.text();
	assert!(text.contains("Рейтинг:88"));
	assert!(text.contains("История состязаний"));
	assert!(text.contains("Spring Cup"));
}

#[rstest]
#[tokio::test]
async fn test_empty_lists(harness: Harness) {
	harness.open("#/horses").await;
	assert!(harness.html().contains(r#"<p class="empty-message">Нет лошадей</p>"#));

	harness.open("#/horses/4").await;
	let text = harness.text();
	assert!(text.contains("Пол:мерин"));
	assert!(text.ends_with("Нет состязаний"));
}

// ============================================================================
// Category 2: Failures
// ============================================================================

#[rstest]
#[case("#/races/abc")]
#[case("#/jockeys/1.5")]
#[case("#/horses/-")]
#[tokio::test]
async fn test_non_numeric_id_fails_without_request(harness: Harness, #[case] location: &str) {
	let outcome = harness.open(location).await;

	assert!(matches!(outcome, NavigationOutcome::Failed { .. }));
	assert!(harness.text().starts_with("Ошибка загрузки страницы: invalid value"));
	assert_eq!(harness.transport.request_count(), 0);
}

#[rstest]
#[tokio::test]
async fn test_api_error_shows_error_view(harness: Harness) {
	let outcome = harness.open("#/races/99").await;

	assert_eq!(
		outcome,
		NavigationOutcome::Failed {
			path: "/races/99".to_string(),
			message: "API Error: 404 Not Found".to_string(),
		}
	);
	assert_eq!(
		harness.html(),
		r#"<div class="error">Ошибка загрузки страницы: API Error: 404 Not Found</div>"#
	);
}

#[rstest]
#[tokio::test]
async fn test_unknown_location(harness: Harness) {
	let outcome = harness.open("#/owners").await;

	assert!(matches!(outcome, NavigationOutcome::NotFound { .. }));
	assert_eq!(harness.transport.request_count(), 0);
	assert!(harness.text().contains("404 - Страница не найдена"));
}

// ============================================================================
// Category 3: Re-navigation
// ============================================================================

#[rstest]
#[tokio::test]
async fn test_renavigation_uses_cache(harness: Harness) {
	harness.open("#/jockeys").await;
	let first = harness.html();
	harness.open("#/").await;
	harness.open("#/jockeys").await;

	assert_eq!(harness.html(), first);
	assert_eq!(harness.transport.count_for(Method::Get, "/api/v1/jockeys"), 1);
	assert_eq!(harness.router.sequence(), 3);
}

// ============================================================================
// Category 4: Lifecycle
// ============================================================================

#[rstest]
#[tokio::test]
async fn test_init_starts_on_default_route(harness: Harness) {
	let config = AppConfig::default();
	let location = MemoryLocation::empty();

	let driver = harness.router.init(&location);
	let user = async {
		location.set("#/horses/4");
		location.close();
	};
	futures::join!(driver, user);

	assert_eq!(harness.router.default_location(), config.default_route);
	assert_eq!(harness.transport.count_for(Method::Get, "/api/v1/races"), 1);
	assert!(harness.text().contains("Thunder"));
}
