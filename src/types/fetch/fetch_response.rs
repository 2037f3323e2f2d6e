use http::{HeaderMap, StatusCode};
use url::Url;

#[derive(Clone, PartialEq, Debug)]
pub struct FetchResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
    /// Set when the platform followed redirects to reach the final resource.
    pub final_url: Option<Url>,
}

impl FetchResponse {
    pub fn new(status: StatusCode, body: Vec<u8>) -> Self {
        FetchResponse {
            status,
            headers: HeaderMap::new(),
            body,
            final_url: None,
        }
    }
}
