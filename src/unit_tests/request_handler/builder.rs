use super::{GeocodingResponse, GeocodingResult, HOST_NAME};
use crate::request_handler::{
    Proxy, ProxyType, RequestHandler, RequestHandlerBuilder, UrlFetchRequestHandler,
    UrlFetchRequestHandlerBuilder,
};
use crate::runtime::EnvError;
use crate::types::api::{ExceptionsAllowedToRetry, RequestConfig};
use crate::unit_tests::TestEnv;
use std::time::Duration;

fn assert_unsupported<T>(result: Result<T, EnvError>, setting: &str) {
    match result {
        Err(EnvError::UnsupportedConfiguration(message)) => {
            assert!(message.contains(setting), "{message} names {setting}")
        }
        Err(error) => panic!("unexpected error for {setting}: {error:?}"),
        Ok(_) => panic!("{setting} must not be accepted"),
    }
}

#[test]
fn timeouts_are_unsupported() {
    let mut builder = UrlFetchRequestHandlerBuilder::<TestEnv>::default();
    for timeout in [Duration::from_secs(0), Duration::from_millis(1500), Duration::MAX] {
        assert_unsupported(builder.connect_timeout(timeout).map(|_| ()), "connect_timeout");
        assert_unsupported(builder.read_timeout(timeout).map(|_| ()), "read_timeout");
        assert_unsupported(builder.write_timeout(timeout).map(|_| ()), "write_timeout");
    }
}

#[test]
fn queries_per_second_is_unsupported() {
    let mut builder = UrlFetchRequestHandler::<TestEnv>::builder();
    for max_qps in [0, 1, 50, u32::MAX] {
        assert_unsupported(
            builder.queries_per_second(max_qps).map(|_| ()),
            "queries_per_second",
        );
    }
}

#[test]
fn proxy_is_unsupported() {
    let mut builder = UrlFetchRequestHandlerBuilder::<TestEnv>::default();
    let proxy = Proxy {
        r#type: ProxyType::Http,
        host: "proxy.internal".to_owned(),
        port: 3128,
    };
    assert_unsupported(builder.proxy(proxy).map(|_| ()), "proxy");
    assert_unsupported(
        builder.proxy_authentication("user", "password").map(|_| ()),
        "proxy_authentication",
    );
}

#[test]
fn unsupported_configuration_error() {
    let mut builder = UrlFetchRequestHandlerBuilder::<TestEnv>::default();
    let error = builder
        .read_timeout(Duration::from_secs(5))
        .err()
        .expect("read timeout is unsupported");
    assert_eq!(error.code(), 3);
    assert_eq!(
        error.message(),
        "Unsupported configuration: read_timeout is not implemented for URL Fetch"
    );
    assert!(!error.is_retryable(&ExceptionsAllowedToRetry::default()));
}

#[test]
fn build_after_rejected_setting() {
    let _env_guard = TestEnv::reset();
    let mut builder = UrlFetchRequestHandlerBuilder::<TestEnv>::default();
    assert!(builder.connect_timeout(Duration::from_secs(1)).is_err());
    let handler = builder.build();
    let pending = handler.handle::<Vec<GeocodingResult>, GeocodingResponse>(
        HOST_NAME,
        "/maps/api/geocode/json?address=Sydney",
        &RequestConfig::default(),
    );
    assert!(pending.is_ok(), "built handler is usable");
    assert!(TestEnv::requests().is_empty());
}
