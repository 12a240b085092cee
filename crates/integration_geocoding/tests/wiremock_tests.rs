//! Integration tests for the geocoding client (wiremock-based)

use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_geocoding::{
    GeocodingClient, GeocodingConfig, GeocodingError, MapQuestGeocodingClient,
};

const fn sample_geocode_json() -> &'static str {
    r#"{
        "info": { "statuscode": 0 },
        "results": [{
            "providedLocation": { "location": "Malden" },
            "locations": [{
                "street": "",
                "adminArea5": "Malden",
                "latLng": { "lat": 42.4251, "lng": -71.0662 },
                "displayLatLng": { "lat": 42.4251, "lng": -71.0662 }
            }]
        }]
    }"#
}

#[tokio::test]
async fn test_resolve_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v1/address"))
        .and(query_param("location", "Malden"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_geocode_json()))
        .mount(&server)
        .await;

    let config = GeocodingConfig::for_testing(server.uri());
    let client = MapQuestGeocodingClient::new(&config).unwrap();

    let location = client.resolve("Malden").await.unwrap();
    assert!((location.latitude() - 42.4251).abs() < f64::EPSILON);
    assert!((location.longitude() - -71.0662).abs() < f64::EPSILON);
}

#[tokio::test]
async fn test_resolve_sends_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v1/address"))
        .and(query_param("key", "test-key"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_geocode_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = GeocodingConfig::for_testing(server.uri());
    let client = MapQuestGeocodingClient::new(&config).unwrap();

    client.resolve("Malden").await.unwrap();
}

#[tokio::test]
async fn test_resolve_empty_results_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v1/address"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"results": []}"#))
        .mount(&server)
        .await;

    let config = GeocodingConfig::for_testing(server.uri());
    let client = MapQuestGeocodingClient::new(&config).unwrap();

    let result = client.resolve("Atlantis").await;
    match result {
        Err(GeocodingError::PlaceNotFound(place)) => assert_eq!(place, "Atlantis"),
        other => panic!("expected PlaceNotFound, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_empty_locations_is_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v1/address"))
        .respond_with(
            ResponseTemplate::new(200).set_body_string(r#"{"results": [{"locations": []}]}"#),
        )
        .mount(&server)
        .await;

    let config = GeocodingConfig::for_testing(server.uri());
    let client = MapQuestGeocodingClient::new(&config).unwrap();

    let result = client.resolve("Nowhere").await;
    assert!(matches!(result, Err(GeocodingError::PlaceNotFound(_))));
}

#[tokio::test]
async fn test_resolve_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v1/address"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let config = GeocodingConfig::for_testing(server.uri());
    let client = MapQuestGeocodingClient::new(&config).unwrap();

    let result = client.resolve("Malden").await;
    match result {
        Err(GeocodingError::RequestFailed(msg)) => assert!(msg.contains("500")),
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_resolve_malformed_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/geocoding/v1/address"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let config = GeocodingConfig::for_testing(server.uri());
    let client = MapQuestGeocodingClient::new(&config).unwrap();

    let result = client.resolve("Malden").await;
    assert!(matches!(result, Err(GeocodingError::ParseError(_))));
}

#[tokio::test]
async fn test_resolve_out_of_range_coordinates_is_parse_error() {
    let server = MockServer::start().await;

    let body = r#"{"results": [{"locations": [{"latLng": {"lat": 120.0, "lng": 0.0}}]}]}"#;
    Mock::given(method("GET"))
        .and(path("/geocoding/v1/address"))
        .respond_with(ResponseTemplate::new(200).set_body_string(body))
        .mount(&server)
        .await;

    let config = GeocodingConfig::for_testing(server.uri());
    let client = MapQuestGeocodingClient::new(&config).unwrap();

    let result = client.resolve("Malden").await;
    assert!(matches!(result, Err(GeocodingError::ParseError(_))));
}
