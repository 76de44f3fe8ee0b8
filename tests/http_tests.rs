//! Integration tests for BlockingHttpClient using wiremock.
//!
//! The blocking client must not run on an async worker, so every call goes
//! through `spawn_blocking`.

use chrono::NaiveDate;
use skyglance::config::ApiConfig;
use skyglance::{
    BlockingHttpClient, Condition, CurrentConditions, CurrentWeatherService, FixedClock,
    HttpTransport, SkyglanceConfig, SkyglanceError,
};
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

async fn get_text(url: String) -> skyglance::Result<String> {
    tokio::task::spawn_blocking(move || {
        let client = BlockingHttpClient::new(&ApiConfig::default())?;
        client.get_text(&url)
    })
    .await
    .unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_text_returns_body_on_200() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/ok"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"hello\":\"world\"}"))
        .mount(&mock_server)
        .await;

    let body = get_text(format!("{}/ok", mock_server.uri())).await.unwrap();
    assert_eq!(body, "{\"hello\":\"world\"}");
}

#[tokio::test(flavor = "multi_thread")]
async fn test_get_text_non_200_is_http_status() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/empty"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&mock_server)
        .await;
    Mock::given(method("GET"))
        .and(path("/broken"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal error"))
        .mount(&mock_server)
        .await;

    let err = get_text(format!("{}/empty", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, SkyglanceError::HttpStatus { status: 204 }));

    let err = get_text(format!("{}/broken", mock_server.uri()))
        .await
        .unwrap_err();
    assert!(matches!(err, SkyglanceError::HttpStatus { status: 500 }));
}

fn mocked_config(base: &str) -> SkyglanceConfig {
    let mut config = SkyglanceConfig::default();
    config.api.geocoding_base_url = format!("{base}/v1");
    config.api.forecast_base_url = format!("{base}/v1");
    config
}

async fn mount_new_york_geocoding(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1/search"))
        .and(query_param("name", "New York"))
        .and(query_param("count", "10"))
        .and(query_param("language", "en"))
        .and(query_param("format", "json"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "results": [
                {"name": "New York", "latitude": 40.71, "longitude": -74.01, "country": "United States"}
            ]
        })))
        .mount(mock_server)
        .await;
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_end_to_end() {
    let mock_server = MockServer::start().await;
    mount_new_york_geocoding(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .and(query_param("latitude", "40.71"))
        .and(query_param("longitude", "-74.01"))
        .and(query_param(
            "hourly",
            "temperature_2m,relativehumidity_2m,weathercode,windspeed_10m",
        ))
        .and(query_param("timezone", "America/New_York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "hourly": {
                "time": ["2024-03-01T13:00", "2024-03-01T14:00", "2024-03-01T15:00"],
                "temperature_2m": [6.0, 7.5, null],
                "relativehumidity_2m": [58, 55, null],
                "weathercode": [3, 61, null],
                "windspeed_10m": [14.0, 16.4, null]
            }
        })))
        .mount(&mock_server)
        .await;

    let config = mocked_config(&mock_server.uri());
    let now = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();

    let conditions = tokio::task::spawn_blocking(move || {
        let client = BlockingHttpClient::new(&config.api)?;
        CurrentWeatherService::new(client, FixedClock(now), &config).try_search("New York")
    })
    .await
    .unwrap()
    .unwrap();

    assert_eq!(
        conditions,
        CurrentConditions {
            temperature: 7.5,
            humidity: 55,
            wind_speed: 16.4,
            condition: Condition::Rainy,
        }
    );
}

#[tokio::test(flavor = "multi_thread")]
async fn test_search_forecast_error_yields_nothing() {
    let mock_server = MockServer::start().await;
    mount_new_york_geocoding(&mock_server).await;

    Mock::given(method("GET"))
        .and(path("/v1/forecast"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&mock_server)
        .await;

    let config = mocked_config(&mock_server.uri());
    let now = NaiveDate::from_ymd_opt(2024, 3, 1)
        .unwrap()
        .and_hms_opt(14, 0, 0)
        .unwrap();

    let result = tokio::task::spawn_blocking(move || {
        let client = BlockingHttpClient::new(&config.api).unwrap();
        CurrentWeatherService::new(client, FixedClock(now), &config).search("New York")
    })
    .await
    .unwrap();

    assert!(result.is_none());
}
