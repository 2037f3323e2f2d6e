use crate::request_handler::PendingResult;
use crate::runtime::{ConditionalSend, Env, EnvError, EnvFutureExt, TryEnvFuture};
use crate::types::api::{ApiResponse, ExceptionsAllowedToRetry, FieldNamingPolicy};
use crate::types::fetch::{FetchRequest, FetchResponse};
use derivative::Derivative;
use futures::{future, TryFutureExt};
use serde::de::DeserializeOwned;
use std::marker::PhantomData;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

/// A request prepared for the managed fetch service of `E`.
///
/// Awaiting submits the request once and deserializes the body into `R`.
/// The retry parameters are carried along untouched for the caller.
#[derive(Derivative)]
#[derivative(Debug(bound = ""))]
pub struct UrlFetchPendingResult<E: Env, T, R> {
    request: FetchRequest,
    field_naming_policy: FieldNamingPolicy,
    error_timeout: Duration,
    max_retries: Option<u32>,
    exceptions_allowed_to_retry: ExceptionsAllowedToRetry,
    cancelled: Arc<AtomicBool>,
    #[derivative(Debug = "ignore")]
    env: PhantomData<E>,
    #[derivative(Debug = "ignore")]
    response: PhantomData<fn() -> (T, R)>,
}

impl<E: Env, T, R> UrlFetchPendingResult<E, T, R> {
    pub fn new(
        request: FetchRequest,
        field_naming_policy: FieldNamingPolicy,
        error_timeout: Duration,
        max_retries: Option<u32>,
        exceptions_allowed_to_retry: ExceptionsAllowedToRetry,
    ) -> Self {
        UrlFetchPendingResult {
            request,
            field_naming_policy,
            error_timeout,
            max_retries,
            exceptions_allowed_to_retry,
            cancelled: Arc::new(AtomicBool::new(false)),
            env: PhantomData,
            response: PhantomData,
        }
    }
    pub fn request(&self) -> &FetchRequest {
        &self.request
    }
    pub fn field_naming_policy(&self) -> FieldNamingPolicy {
        self.field_naming_policy
    }
    pub fn error_timeout(&self) -> Duration {
        self.error_timeout
    }
    pub fn max_retries(&self) -> Option<u32> {
        self.max_retries
    }
    pub fn exceptions_allowed_to_retry(&self) -> &ExceptionsAllowedToRetry {
        &self.exceptions_allowed_to_retry
    }
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

impl<E, T, R> PendingResult<T> for UrlFetchPendingResult<E, T, R>
where
    E: Env + 'static,
    T: ConditionalSend + 'static,
    R: ApiResponse<T> + DeserializeOwned + 'static,
{
    fn await_result(&self) -> TryEnvFuture<T> {
        if self.is_cancelled() {
            return future::err(EnvError::Cancelled).boxed_env();
        }
        let cancelled = self.cancelled.clone();
        let field_naming_policy = self.field_naming_policy;
        E::fetch(self.request.clone())
            .and_then(move |response| {
                future::ready(if cancelled.load(Ordering::SeqCst) {
                    Err(EnvError::Cancelled)
                } else {
                    parse_response::<T, R>(response, field_naming_policy)
                })
            })
            .boxed_env()
    }
    fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }
}

fn parse_response<T, R>(
    response: FetchResponse,
    field_naming_policy: FieldNamingPolicy,
) -> Result<T, EnvError>
where
    R: ApiResponse<T> + DeserializeOwned,
{
    if !response.status.is_success() {
        return Err(EnvError::HttpStatus(response.status.as_u16()));
    }
    let value = serde_json::from_slice::<serde_json::Value>(&response.body)?;
    let body = serde_json::from_value::<R>(field_naming_policy.normalize_keys(value))?;
    body.into_result().map_err(EnvError::Api)
}
