use crate::constants::{JSON_CONTENT_TYPE, URL_FETCH_DEADLINE};
use crate::request_handler::{
    PendingResult, RequestHandler, UrlFetchPendingResult, UrlFetchRequestHandlerBuilder,
};
use crate::runtime::{ConditionalSend, Env, EnvError};
use crate::types::api::{ApiResponse, RequestConfig};
use crate::types::fetch::{FetchOptions, FetchRequest};
use derivative::Derivative;
use http::header::{HeaderValue, CONTENT_TYPE};
use http::Method;
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use url::Url;

/// Sends requests through the managed fetch service of `E`.
///
/// Every request is a POST with a fixed deadline of [`URL_FETCH_DEADLINE`],
/// including the ones made through [`RequestHandler::handle`]. The user agent
/// of the [`RequestConfig`] is not sent, the platform sets its own.
#[derive(Derivative)]
#[derivative(Default(bound = ""), Clone(bound = ""), Debug(bound = ""))]
pub struct UrlFetchRequestHandler<E: Env> {
    env: PhantomData<E>,
}

impl<E: Env> UrlFetchRequestHandler<E> {
    pub fn builder() -> UrlFetchRequestHandlerBuilder<E> {
        UrlFetchRequestHandlerBuilder::default()
    }
    /// The request [`RequestHandler::handle`] submits.
    pub fn get_request(host_name: &str, path: &str) -> Result<FetchRequest, EnvError> {
        let url = parse_url(host_name, path)?;
        Ok(FetchRequest::new(
            url,
            Method::POST,
            FetchOptions::with_deadline(URL_FETCH_DEADLINE),
        ))
    }
    /// The request [`RequestHandler::handle_post`] submits.
    pub fn post_request(
        host_name: &str,
        path: &str,
        payload: &str,
    ) -> Result<FetchRequest, EnvError> {
        let mut request = Self::get_request(host_name, path)?;
        request.set_header(CONTENT_TYPE, HeaderValue::from_static(JSON_CONTENT_TYPE));
        request.set_payload(payload.as_bytes().to_vec());
        Ok(request)
    }
}

impl<E: Env + 'static> RequestHandler for UrlFetchRequestHandler<E> {
    fn handle<T, R>(
        &self,
        host_name: &str,
        path: &str,
        config: &RequestConfig,
    ) -> Result<Box<dyn PendingResult<T>>, EnvError>
    where
        T: ConditionalSend + 'static,
        R: ApiResponse<T> + DeserializeOwned + 'static,
    {
        let request = Self::get_request(host_name, path)?;
        Ok(pending_result::<E, T, R>(request, config))
    }
    fn handle_post<T, R>(
        &self,
        host_name: &str,
        path: &str,
        payload: &str,
        config: &RequestConfig,
    ) -> Result<Box<dyn PendingResult<T>>, EnvError>
    where
        T: ConditionalSend + 'static,
        R: ApiResponse<T> + DeserializeOwned + 'static,
    {
        let request = Self::post_request(host_name, path, payload)?;
        Ok(pending_result::<E, T, R>(request, config))
    }
}

/// The concatenation of host name and path, rejected unless it parses as an
/// absolute URL. The text itself is kept as given.
fn parse_url(host_name: &str, path: &str) -> Result<String, EnvError> {
    let url = format!("{host_name}{path}");
    match Url::parse(&url) {
        Ok(_) => Ok(url),
        Err(error) => {
            tracing::error!(host_name, path, %error, "Malformed request url");
            Err(EnvError::MalformedUrl {
                url,
                reason: error.to_string(),
            })
        }
    }
}

fn pending_result<E, T, R>(
    request: FetchRequest,
    config: &RequestConfig,
) -> Box<dyn PendingResult<T>>
where
    E: Env + 'static,
    T: ConditionalSend + 'static,
    R: ApiResponse<T> + DeserializeOwned + 'static,
{
    tracing::debug!(
        url = %request.url,
        method = %request.method,
        "Prepared URL Fetch request"
    );
    Box::new(UrlFetchPendingResult::<E, T, R>::new(
        request,
        config.field_naming_policy,
        config.error_timeout,
        config.max_retries,
        config.exceptions_allowed_to_retry.to_owned(),
    ))
}
