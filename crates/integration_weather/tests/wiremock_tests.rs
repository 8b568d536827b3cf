//! Integration tests for the Open-Meteo client using wiremock
//!
//! These tests verify the client's behavior against a mock HTTP server,
//! covering both decode paths and every non-success status mapping.

use integration_weather::{OpenMeteoClient, WeatherConfig, WeatherError};
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{method, path, query_param},
};

/// Sample Open-Meteo response carrying both sections
fn sample_response() -> serde_json::Value {
    serde_json::json!({
        "latitude": 27.7,
        "longitude": 85.3,
        "generationtime_ms": 0.123,
        "utc_offset_seconds": 0,
        "timezone": "GMT",
        "timezone_abbreviation": "GMT",
        "elevation": 1337.0,
        "current_units": {
            "time": "iso8601",
            "temperature_2m": "°C",
            "relative_humidity_2m": "%",
            "windspeed_10m": "km/h",
            "surface_pressure": "hPa"
        },
        "current": {
            "time": "2025-08-29T12:00",
            "temperature_2m": 24.1,
            "relative_humidity_2m": 68.0,
            "windspeed_10m": 6.3,
            "surface_pressure": 1009.4
        },
        "hourly": {
            "time": ["2025-08-29T00:00", "2025-08-29T01:00"],
            "temperature_2m": [19.5, 19.1],
            "relative_humidity_2m": [80.0, 82.0],
            "windspeed_10m": [3.2, 2.8],
            "surface_pressure": [1010.1, 1010.3]
        }
    })
}

/// Create a test client pointed at the mock server
#[allow(clippy::expect_used)]
fn create_test_client(mock_server: &MockServer) -> OpenMeteoClient {
    let config = WeatherConfig {
        base_url: mock_server.uri(),
        timeout_secs: 5,
    };
    OpenMeteoClient::new(config).expect("Failed to create client")
}

/// Mount a mock for the /forecast endpoint with the given response
async fn setup_forecast_mock(mock_server: &MockServer, response: ResponseTemplate) {
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(response)
        .mount(mock_server)
        .await;
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn current_observation_success() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_observation(27.7, 85.3).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    let observation = result.unwrap();
    assert!((observation.temperature_2m - 24.1).abs() < 0.01);
    assert!((observation.relative_humidity_2m - 68.0).abs() < 0.01);
    assert!((observation.windspeed_10m - 6.3).abs() < 0.01);
    assert!((observation.surface_pressure - 1009.4).abs() < 0.01);
}

#[tokio::test]
async fn current_observation_sends_model_parameters() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("latitude", "27.7"))
        .and(query_param("longitude", "85.3"))
        .and(query_param(
            "current",
            "temperature_2m,relative_humidity_2m,windspeed_10m,surface_pressure",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.current_observation(27.7, 85.3).await;
    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn hourly_forecast_passes_through_verbatim() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.hourly_forecast(27.7, 85.3).await;

    assert!(result.is_ok(), "Expected success, got: {result:?}");

    // Structural equality with the upstream fixture's hourly sub-object
    let hourly = result.unwrap();
    assert_eq!(hourly, sample_response()["hourly"]);
}

#[tokio::test]
async fn hourly_forecast_requests_one_day() {
    let mock_server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("forecast_days", "1"))
        .and(query_param(
            "hourly",
            "temperature_2m,relative_humidity_2m,windspeed_10m,surface_pressure",
        ))
        .respond_with(ResponseTemplate::new(200).set_body_json(sample_response()))
        .expect(1)
        .mount(&mock_server)
        .await;

    let client = create_test_client(&mock_server);
    let result = client.hourly_forecast(27.7, 85.3).await;
    assert!(result.is_ok(), "Expected success, got: {result:?}");
}

#[tokio::test]
async fn health_check_success() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_json(sample_response()),
    )
    .await;

    let client = create_test_client(&mock_server);
    assert!(client.is_healthy(27.7, 85.3).await);
}

// ============================================================================
// Error handling scenarios
// ============================================================================

#[tokio::test]
async fn server_error_returns_service_unavailable() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(500).set_body_string("Internal Server Error"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_observation(27.7, 85.3).await;

    assert!(
        matches!(result, Err(WeatherError::ServiceUnavailable(_))),
        "Expected ServiceUnavailable, got: {result:?}"
    );
}

#[tokio::test]
async fn rate_limit_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(429)).await;

    let client = create_test_client(&mock_server);
    let result = client.current_observation(27.7, 85.3).await;

    assert!(
        matches!(result, Err(WeatherError::RateLimitExceeded)),
        "Expected RateLimitExceeded, got: {result:?}"
    );
}

#[tokio::test]
async fn client_error_returns_request_failed() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(404)).await;

    let client = create_test_client(&mock_server);
    let result = client.current_observation(27.7, 85.3).await;

    assert!(
        matches!(result, Err(WeatherError::RequestFailed(_))),
        "Expected RequestFailed, got: {result:?}"
    );
}

#[tokio::test]
async fn malformed_json_returns_parse_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(
        &mock_server,
        ResponseTemplate::new(200).set_body_string("{not valid json"),
    )
    .await;

    let client = create_test_client(&mock_server);
    let result = client.current_observation(27.7, 85.3).await;

    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn missing_current_section_is_schema_drift() {
    let mock_server = MockServer::start().await;

    let mut body = sample_response();
    body.as_object_mut().unwrap().remove("current");
    setup_forecast_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let result = client.current_observation(27.7, 85.3).await;

    assert!(
        matches!(result, Err(WeatherError::MissingField(_))),
        "Expected MissingField, got: {result:?}"
    );
}

#[tokio::test]
async fn missing_observation_field_is_parse_error() {
    let mock_server = MockServer::start().await;

    let mut body = sample_response();
    body["current"]
        .as_object_mut()
        .unwrap()
        .remove("surface_pressure");
    setup_forecast_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let result = client.current_observation(27.7, 85.3).await;

    // The typed decode catches the drift at the boundary
    assert!(
        matches!(result, Err(WeatherError::ParseError(_))),
        "Expected ParseError, got: {result:?}"
    );
}

#[tokio::test]
async fn missing_hourly_section_is_schema_drift() {
    let mock_server = MockServer::start().await;

    let mut body = sample_response();
    body.as_object_mut().unwrap().remove("hourly");
    setup_forecast_mock(&mock_server, ResponseTemplate::new(200).set_body_json(body)).await;

    let client = create_test_client(&mock_server);
    let result = client.hourly_forecast(27.7, 85.3).await;

    assert!(
        matches!(result, Err(WeatherError::MissingField(_))),
        "Expected MissingField, got: {result:?}"
    );
}

#[tokio::test]
async fn invalid_coordinates_fail_before_any_request() {
    let mock_server = MockServer::start().await;
    // No mock mounted: a request would fail loudly

    let client = create_test_client(&mock_server);
    let result = client.current_observation(95.0, 85.3).await;

    assert!(matches!(result, Err(WeatherError::InvalidCoordinates)));
}

#[tokio::test]
async fn health_check_fails_on_upstream_error() {
    let mock_server = MockServer::start().await;

    setup_forecast_mock(&mock_server, ResponseTemplate::new(503)).await;

    let client = create_test_client(&mock_server);
    assert!(!client.is_healthy(27.7, 85.3).await);
}
