//! Integration tests for the MBTA stop client (wiremock-based)

use domain::value_objects::GeoLocation;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use integration_mbta::{MbtaConfig, MbtaStopClient, StopClient, StopError};

const fn sample_stops_json() -> &'static str {
    r#"{
        "data": [{
            "id": "place-mlmnl",
            "type": "stop",
            "attributes": {
                "name": "Malden Center",
                "wheelchair_boarding": 1,
                "latitude": 42.426632,
                "longitude": -71.07411
            }
        }]
    }"#
}

fn malden() -> GeoLocation {
    GeoLocation::new(42.4251, -71.0662).unwrap()
}

#[tokio::test]
async fn test_nearest_stop_success() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_stops_json()))
        .mount(&server)
        .await;

    let config = MbtaConfig::for_testing(server.uri());
    let client = MbtaStopClient::new(&config).unwrap();

    let stop = client.nearest_stop(&malden()).await.unwrap().unwrap();
    assert_eq!(stop.name, "Malden Center");
    assert_eq!(stop.wheelchair_boarding, 1);
}

#[tokio::test]
async fn test_nearest_stop_requests_distance_sort() {
    let server = MockServer::start().await;

    // Pin the proximity-ordering contract: the service must be asked to
    // sort by distance and to return a single entry.
    Mock::given(method("GET"))
        .and(path("/stops"))
        .and(query_param("sort", "distance"))
        .and(query_param("page[limit]", "1"))
        .and(query_param("filter[latitude]", "42.4251"))
        .and(query_param("filter[longitude]", "-71.0662"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_stops_json()))
        .expect(1)
        .mount(&server)
        .await;

    let config = MbtaConfig::for_testing(server.uri());
    let client = MbtaStopClient::new(&config).unwrap();

    client.nearest_stop(&malden()).await.unwrap();
}

#[tokio::test]
async fn test_nearest_stop_empty_data_is_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops"))
        .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"data": []}"#))
        .mount(&server)
        .await;

    let config = MbtaConfig::for_testing(server.uri());
    let client = MbtaStopClient::new(&config).unwrap();

    let result = client.nearest_stop(&malden()).await.unwrap();
    assert!(result.is_none());
}

#[tokio::test]
async fn test_nearest_stop_rate_limited() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops"))
        .respond_with(ResponseTemplate::new(429).insert_header("retry-after", "30"))
        .mount(&server)
        .await;

    let config = MbtaConfig::for_testing(server.uri());
    let client = MbtaStopClient::new(&config).unwrap();

    let result = client.nearest_stop(&malden()).await;
    match result {
        Err(StopError::RateLimitExceeded { retry_after_secs }) => {
            assert_eq!(retry_after_secs, Some(30));
        }
        other => panic!("expected RateLimitExceeded, got {other:?}"),
    }
}

#[tokio::test]
async fn test_nearest_stop_server_error() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    let config = MbtaConfig::for_testing(server.uri());
    let client = MbtaStopClient::new(&config).unwrap();

    let result = client.nearest_stop(&malden()).await;
    match result {
        Err(StopError::RequestFailed(msg)) => assert!(msg.contains("503")),
        other => panic!("expected RequestFailed, got {other:?}"),
    }
}

#[tokio::test]
async fn test_nearest_stop_malformed_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let config = MbtaConfig::for_testing(server.uri());
    let client = MbtaStopClient::new(&config).unwrap();

    let result = client.nearest_stop(&malden()).await;
    assert!(matches!(result, Err(StopError::ParseError(_))));
}

#[tokio::test]
async fn test_nearest_stop_keyless_request_omits_api_key() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/stops"))
        .respond_with(ResponseTemplate::new(200).set_body_string(sample_stops_json()))
        .mount(&server)
        .await;

    let config = MbtaConfig::for_testing(server.uri());
    let client = MbtaStopClient::new(&config).unwrap();

    client.nearest_stop(&malden()).await.unwrap();

    let requests = server.received_requests().await.unwrap();
    assert!(!requests[0].url.query().unwrap_or("").contains("api_key"));
}
