use std::time::Duration;

pub const PLATFORM_NAME: &str = "URL Fetch";
pub const URL_FETCH_DEADLINE: Duration = Duration::from_secs(10);
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";
pub const DEFAULT_ERROR_TIMEOUT: Duration = Duration::from_secs(60);
pub const DEFAULT_USER_AGENT: &str = concat!("maps-urlfetch/", env!("CARGO_PKG_VERSION"));
pub const RETRYABLE_STATUS_CODES: [u16; 3] = [500, 503, 504];
pub const API_STATUS_OK: &str = "OK";
