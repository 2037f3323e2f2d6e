use crate::types::fetch::FetchOptions;
use http::header::{HeaderName, HeaderValue};
use http::{HeaderMap, Method};

/// A request ready to be handed to [`Env::fetch`].
///
/// [`Env::fetch`]: crate::runtime::Env::fetch
#[derive(Clone, PartialEq, Debug)]
pub struct FetchRequest {
    /// Sent verbatim. Only checked to parse as an absolute URL, never normalized.
    pub url: String,
    pub method: Method,
    pub headers: HeaderMap,
    pub payload: Option<Vec<u8>>,
    pub options: FetchOptions,
}

impl FetchRequest {
    pub fn new(url: String, method: Method, options: FetchOptions) -> Self {
        FetchRequest {
            url,
            method,
            headers: HeaderMap::new(),
            payload: None,
            options,
        }
    }
    /// Replaces any previous value of the header.
    pub fn set_header(&mut self, name: HeaderName, value: HeaderValue) {
        self.headers.insert(name, value);
    }
    pub fn set_payload(&mut self, payload: Vec<u8>) {
        self.payload = Some(payload);
    }
}

/// Lets an [`Env`] pass the request on to any `http` based client.
/// The [`FetchOptions`] are dropped and must be applied by the client itself.
///
/// [`Env`]: crate::runtime::Env
impl TryFrom<FetchRequest> for http::Request<Vec<u8>> {
    type Error = http::Error;

    fn try_from(request: FetchRequest) -> Result<Self, Self::Error> {
        let mut builder = http::Request::builder()
            .method(request.method)
            .uri(request.url);
        if let Some(headers) = builder.headers_mut() {
            headers.extend(request.headers);
        }
        builder.body(request.payload.unwrap_or_default())
    }
}
