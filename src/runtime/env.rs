use crate::constants::RETRYABLE_STATUS_CODES;
use crate::types::api::{ApiError, ExceptionsAllowedToRetry};
use crate::types::fetch::{FetchRequest, FetchResponse};
use futures::Future;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;

pub use conditional_types::{ConditionalSend, EnvFuture, EnvFutureExt};

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum EnvError {
    /// Error returned on [`Env::fetch`]
    Fetch(String),
    /// Host name and path do not form a valid absolute URL
    MalformedUrl {
        url: String,
        reason: String,
    },
    /// The platform offers no equivalent of the requested configuration
    UnsupportedConfiguration(String),
    HttpStatus(u16),
    Api(ApiError),
    /// Serde error when deserializing the response
    Serde(String),
    Cancelled,
}

impl EnvError {
    pub fn message(&self) -> String {
        match &self {
            EnvError::Fetch(message) => format!("Failed to fetch: {message}"),
            EnvError::MalformedUrl { url, reason } => {
                format!("Malformed request url {url}: {reason}")
            }
            EnvError::UnsupportedConfiguration(message) => {
                format!("Unsupported configuration: {message}")
            }
            EnvError::HttpStatus(status) => format!("Unexpected HTTP status code: {status}"),
            EnvError::Api(error) => format!("API error: {error}"),
            EnvError::Serde(message) => format!("Serialization error: {message}"),
            EnvError::Cancelled => "Request was cancelled".to_owned(),
        }
    }
    pub fn code(&self) -> u32 {
        match &self {
            EnvError::Fetch(_) => 1,
            EnvError::MalformedUrl { .. } => 2,
            EnvError::UnsupportedConfiguration(_) => 3,
            EnvError::HttpStatus(_) => 4,
            EnvError::Api(_) => 5,
            EnvError::Serde(_) => 6,
            EnvError::Cancelled => 7,
        }
    }
    /// Whether a caller may submit the same request again after this error.
    ///
    /// Transport failures and transient server statuses always qualify,
    /// API errors only when their kind is in `allowed`.
    pub fn is_retryable(&self, allowed: &ExceptionsAllowedToRetry) -> bool {
        match &self {
            EnvError::Fetch(_) => true,
            EnvError::HttpStatus(status) => RETRYABLE_STATUS_CODES.contains(status),
            EnvError::Api(error) => allowed.contains(&error.kind),
            EnvError::MalformedUrl { .. }
            | EnvError::UnsupportedConfiguration(_)
            | EnvError::Serde(_)
            | EnvError::Cancelled => false,
        }
    }
}

impl fmt::Display for EnvError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for EnvError {}

impl Serialize for EnvError {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut state = serializer.serialize_struct("EnvError", 2)?;
        state.serialize_field("code", &self.code())?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

impl From<serde_json::Error> for EnvError {
    fn from(error: serde_json::Error) -> Self {
        EnvError::Serde(error.to_string())
    }
}

impl From<ApiError> for EnvError {
    fn from(error: ApiError) -> Self {
        EnvError::Api(error)
    }
}

#[cfg(not(feature = "env-future-send"))]
/// Only for wasm or when `env-future-send` is not enabled
mod conditional_types {
    use futures::{future::LocalBoxFuture, Future, FutureExt};

    pub type EnvFuture<'a, T> = LocalBoxFuture<'a, T>;

    pub trait ConditionalSend {}

    impl<T> ConditionalSend for T {}

    pub trait EnvFutureExt: Future {
        fn boxed_env<'a>(self) -> EnvFuture<'a, Self::Output>
        where
            Self: Sized + 'a,
        {
            self.boxed_local()
        }
    }
}

#[cfg(feature = "env-future-send")]
/// Enabled with the feature `env-future-send` but it requires a non-wasm target!
/// It will cause a compile-time error!
mod conditional_types {
    use futures::{future::BoxFuture, Future, FutureExt};

    pub type EnvFuture<'a, T> = BoxFuture<'a, T>;

    pub trait ConditionalSend: Send {}

    impl<T> ConditionalSend for T where T: Send {}

    pub trait EnvFutureExt: Future {
        fn boxed_env<'a>(self) -> EnvFuture<'a, Self::Output>
        where
            Self: Sized + Send + 'a,
        {
            self.boxed()
        }
    }
}

impl<T: ?Sized> EnvFutureExt for T where T: Future {}

pub type TryEnvFuture<T> = EnvFuture<'static, Result<T, EnvError>>;

/// The host platform.
///
/// `fetch` is the managed fetch service: the platform executes the request
/// on behalf of the application, honouring the [`FetchOptions`] attached to
/// it, and resolves once the response (or a transport failure) is available.
///
/// [`FetchOptions`]: crate::types::fetch::FetchOptions
pub trait Env {
    fn fetch(request: FetchRequest) -> TryEnvFuture<FetchResponse>;
}
