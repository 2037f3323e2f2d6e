use super::{sydney, GeocodingResponse, GeocodingResult, GEOCODE_PATH, HOST_NAME};
use crate::constants::URL_FETCH_DEADLINE;
use crate::request_handler::{RequestHandler, UrlFetchRequestHandler};
use crate::runtime::EnvError;
use crate::types::api::{ExceptionsAllowedToRetry, RequestConfig};
use crate::unit_tests::{json_response, TestEnv};
use http::{Method, StatusCode};
use serde_json::json;

#[test]
fn get_request_joins_host_and_path() {
    let request = UrlFetchRequestHandler::<TestEnv>::get_request(HOST_NAME, GEOCODE_PATH)
        .expect("valid url");
    assert_eq!(
        request.url.as_str(),
        format!("{HOST_NAME}{GEOCODE_PATH}"),
        "url is the concatenation of host and path"
    );
    assert_eq!(request.method, Method::POST, "platform requests are always POST");
    assert!(request.headers.is_empty(), "no headers");
    assert_eq!(request.payload, None, "no payload");
    assert_eq!(request.options.deadline, Some(URL_FETCH_DEADLINE));
    assert!(request.options.follow_redirects);
    assert!(request.options.validate_certificate);
    assert!(!request.options.allow_truncate);
}

#[test]
fn get_request_keeps_url_text() {
    let cases = [
        ("https://maps.googleapis.com", ""),
        ("HTTPS://Maps.GoogleApis.com:443", "/maps/api/geocode/json"),
        ("https://maps.googleapis.com", "/maps/api/../geocode/json?address=Main St"),
    ];
    for (host_name, path) in cases {
        let request = UrlFetchRequestHandler::<TestEnv>::get_request(host_name, path)
            .expect("valid url");
        assert_eq!(request.url, format!("{host_name}{path}"), "{host_name}{path}");
    }
}

#[test]
fn get_request_is_deterministic() {
    let first = UrlFetchRequestHandler::<TestEnv>::get_request(HOST_NAME, GEOCODE_PATH);
    let second = UrlFetchRequestHandler::<TestEnv>::get_request(HOST_NAME, GEOCODE_PATH);
    assert_eq!(first, second);
}

#[test]
fn handle_does_not_fetch() {
    let _env_guard = TestEnv::reset();
    let handler = UrlFetchRequestHandler::<TestEnv>::default();
    let pending = handler.handle::<Vec<GeocodingResult>, GeocodingResponse>(
        HOST_NAME,
        GEOCODE_PATH,
        &RequestConfig::default(),
    );
    assert!(pending.is_ok(), "pending result created");
    assert!(TestEnv::requests().is_empty(), "fetch client not invoked");
}

#[test]
fn handle_malformed_url() {
    let _env_guard = TestEnv::reset();
    let handler = UrlFetchRequestHandler::<TestEnv>::default();
    let error = handler
        .handle::<Vec<GeocodingResult>, GeocodingResponse>(
            "not a url",
            "/x",
            &RequestConfig::default(),
        )
        .err()
        .expect("malformed url is rejected");
    match &error {
        EnvError::MalformedUrl { url, .. } => assert_eq!(url, "not a url/x"),
        error => panic!("unexpected error: {error:?}"),
    }
    assert!(
        !error.is_retryable(&ExceptionsAllowedToRetry::default()),
        "malformed url is never retryable"
    );
    assert!(TestEnv::requests().is_empty(), "fetch client not invoked");
}

#[tokio::test]
async fn handle_submits_request_on_await() {
    let _env_guard = TestEnv::reset();
    TestEnv::set_fetch_handler(Box::new(|_request| {
        json_response(
            StatusCode::OK,
            json!({
                "status": "OK",
                "results": [{
                    "formatted_address": "Sydney NSW, Australia",
                    "place_id": "ChIJP3Sa8ziYEmsRUKgyFmh9AQM"
                }]
            }),
        )
    }));
    let handler = UrlFetchRequestHandler::<TestEnv>::default();
    let pending = handler
        .handle::<Vec<GeocodingResult>, GeocodingResponse>(
            HOST_NAME,
            GEOCODE_PATH,
            &RequestConfig::default(),
        )
        .expect("pending result");
    let results = pending.await_result().await.expect("results");
    assert_eq!(results, vec![sydney()]);

    let requests = TestEnv::requests();
    assert_eq!(requests.len(), 1, "one request submitted");
    assert_eq!(
        requests[0],
        UrlFetchRequestHandler::<TestEnv>::get_request(HOST_NAME, GEOCODE_PATH).unwrap(),
        "submitted request is the constructed one"
    );
}
