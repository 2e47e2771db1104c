//! End-to-end dashboard actions against a mock dashboard API.

use std::time::Duration;

use chrono::NaiveDate;
use skycast_core::Config;
use skycast_ui::DashboardApp;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn current_body(city: &str) -> serde_json::Value {
    serde_json::json!({
        "success": true,
        "data": {
            "city": city,
            "country": "FR",
            "temperature": 21.5,
            "feels_like": 21.2,
            "humidity": 48,
            "pressure": 1016,
            "description": "scattered clouds",
            "icon": "03d",
            "wind_speed": 4.2
        }
    })
}

fn forecast_body(dates: &[&str]) -> serde_json::Value {
    let forecasts: Vec<_> = dates
        .iter()
        .map(|d| {
            serde_json::json!({
                "date": d,
                "temperature": 19.0,
                "description": "clear sky",
                "icon": "01d",
                "humidity": 40,
                "wind_speed": 3.0
            })
        })
        .collect();
    serde_json::json!({
        "success": true,
        "data": { "city": "Paris", "country": "FR", "forecasts": forecasts }
    })
}

fn app_for(server: &MockServer, lat_lon: Option<(f64, f64)>) -> DashboardApp {
    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.api.timeout_secs = 5;
    if let Some((lat, lon)) = lat_lon {
        config.location.latitude = Some(lat);
        config.location.longitude = Some(lon);
    }
    DashboardApp::new(config).unwrap()
}

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 3).unwrap()
}

#[tokio::test]
async fn test_city_search_shows_current_and_forecast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/weather/current/Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Paris")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/weather/forecast/Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(&[
            "2024-06-03 09:00:00",
            "2024-06-03 12:00:00",
            "2024-06-04 12:00:00",
            "2024-06-05 15:00:00",
        ])))
        .mount(&server)
        .await;

    let mut app = app_for(&server, None);
    app.search("  Paris ").await;

    let model = app.model();
    assert!(!model.is_loading());
    assert!(model.error_message().is_none());
    assert_eq!(model.current().map(|c| c.city.as_str()), Some("Paris"));

    let days = model.forecast().unwrap();
    assert_eq!(days.len(), 3);
    assert_eq!(days[0].hour, 12);

    let screen = app.render(today());
    assert!(screen.contains("Monday, June 3, 2024"));
    assert!(screen.contains("Paris, FR"));
    assert!(screen.contains("22°C  Scattered clouds"));
    assert!(screen.contains("Mon, Jun 3"));
    assert!(screen.contains("Wed, Jun 5"));
}

#[tokio::test]
async fn test_unknown_city_shows_api_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/weather/current/Nowhere"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "success": false,
            "error": "City not found"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/weather/forecast/Nowhere"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(&[])))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server, None);
    app.search("Nowhere").await;

    assert_eq!(app.model().error_message(), Some("City not found"));
    assert!(app.model().current().is_none());
    assert!(app.render(today()).contains("Error: City not found"));
}

#[tokio::test]
async fn test_forecast_failure_on_search_replaces_screen_with_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/weather/current/Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Paris")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/weather/forecast/Paris"))
        .respond_with(ResponseTemplate::new(500).set_body_json(serde_json::json!({
            "success": false,
            "error": "Forecast service down"
        })))
        .mount(&server)
        .await;

    let mut app = app_for(&server, None);
    app.search("Paris").await;

    assert_eq!(app.model().error_message(), Some("Forecast service down"));
    assert!(app.model().current().is_none());
    assert!(app.model().forecast().is_none());
}

#[tokio::test]
async fn test_malformed_forecast_timestamp_shows_generic_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/weather/current/Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Paris")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/weather/forecast/Paris"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(forecast_body(&["2024-06-03"])),
        )
        .mount(&server)
        .await;

    let mut app = app_for(&server, None);
    app.search("Paris").await;

    assert_eq!(
        app.model().error_message(),
        Some("Failed to fetch weather data")
    );
}

#[tokio::test]
async fn test_blank_search_makes_no_requests() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Paris")))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server, None);
    app.search("   ").await;

    assert_eq!(app.model().error_message(), Some("Please enter a city name"));
}

#[tokio::test]
async fn test_locate_shows_current_and_forecast() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/weather/coordinates"))
        .and(query_param("lat", "48.85"))
        .and(query_param("lon", "2.35"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Paris")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/weather/forecast/Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(&[
            "2024-06-03 12:00:00",
            "2024-06-04 12:00:00",
        ])))
        .mount(&server)
        .await;

    let mut app = app_for(&server, Some((48.85, 2.35)));
    app.locate().await;

    assert_eq!(app.model().current().map(|c| c.city.as_str()), Some("Paris"));
    assert_eq!(app.model().forecast().map(|f| f.len()), Some(2));
}

#[tokio::test]
async fn test_locate_keeps_current_when_forecast_fails() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/weather/coordinates"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Paris")))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/weather/forecast/Paris"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "success": false,
            "error": "City not found"
        })))
        .mount(&server)
        .await;

    let mut app = app_for(&server, Some((48.85, 2.35)));
    app.locate().await;

    let model = app.model();
    assert!(model.error_message().is_none());
    assert!(model.current().is_some());
    assert!(model.forecast().is_none());
}

#[tokio::test]
async fn test_locate_without_coordinates_is_unsupported() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_body("Paris")))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server, None);
    app.locate().await;

    assert_eq!(
        app.model().error_message(),
        Some("Geolocation is not supported on this system")
    );
    assert!(!app.model().is_loading());
}

#[tokio::test]
async fn test_search_timeout_shows_generic_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/weather/current/Paris"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(current_body("Paris"))
                .set_delay(Duration::from_secs(3)),
        )
        .mount(&server)
        .await;

    let mut config = Config::default();
    config.api.base_url = server.uri();
    config.api.timeout_secs = 1;
    let mut app = DashboardApp::new(config).unwrap();
    app.search("Paris").await;

    assert_eq!(
        app.model().error_message(),
        Some("Failed to fetch weather data")
    );
    assert!(app.model().current().is_none());
    assert!(!app.model().is_loading());
}

#[tokio::test]
async fn test_search_connection_refused_shows_generic_error() {
    let server = MockServer::start().await;
    let uri = server.uri();
    drop(server);

    let mut config = Config::default();
    config.api.base_url = uri;
    config.api.timeout_secs = 5;
    let mut app = DashboardApp::new(config).unwrap();
    app.search("Paris").await;

    assert_eq!(
        app.model().error_message(),
        Some("Failed to fetch weather data")
    );
    assert!(app.render(today()).contains("Error: Failed to fetch weather data"));
}

#[tokio::test]
async fn test_locate_coordinates_api_error_is_shown() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/api/weather/coordinates"))
        .respond_with(ResponseTemplate::new(400).set_body_json(serde_json::json!({
            "success": false,
            "error": "Invalid coordinates"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/weather/forecast/Paris"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_body(&[])))
        .expect(0)
        .mount(&server)
        .await;

    let mut app = app_for(&server, Some((48.85, 2.35)));
    app.locate().await;

    let model = app.model();
    assert_eq!(model.error_message(), Some("Invalid coordinates"));
    assert!(model.current().is_none());
    assert!(model.forecast().is_none());
    assert!(!model.is_loading());
}
