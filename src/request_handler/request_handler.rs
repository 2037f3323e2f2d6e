use crate::request_handler::PendingResult;
use crate::runtime::{ConditionalSend, EnvError};
use crate::types::api::{ApiResponse, RequestConfig};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// A transport backend for the Maps web services.
///
/// `host_name` and `path` are concatenated as-is to form the request url,
/// so `path` is expected to start with `/` and carry the encoded query.
/// `R` is the shape the response body is deserialized into.
pub trait RequestHandler {
    fn handle<T, R>(
        &self,
        host_name: &str,
        path: &str,
        config: &RequestConfig,
    ) -> Result<Box<dyn PendingResult<T>>, EnvError>
    where
        T: ConditionalSend + 'static,
        R: ApiResponse<T> + DeserializeOwned + 'static;
    fn handle_post<T, R>(
        &self,
        host_name: &str,
        path: &str,
        payload: &str,
        config: &RequestConfig,
    ) -> Result<Box<dyn PendingResult<T>>, EnvError>
    where
        T: ConditionalSend + 'static,
        R: ApiResponse<T> + DeserializeOwned + 'static;
}

/// Configures and builds a [`RequestHandler`].
///
/// A backend whose platform has no equivalent of a setting returns
/// [`EnvError::UnsupportedConfiguration`] from the setter; the setting is never
/// silently dropped.
pub trait RequestHandlerBuilder {
    type Handler: RequestHandler;

    fn connect_timeout(&mut self, timeout: Duration) -> Result<&mut Self, EnvError>;
    fn read_timeout(&mut self, timeout: Duration) -> Result<&mut Self, EnvError>;
    fn write_timeout(&mut self, timeout: Duration) -> Result<&mut Self, EnvError>;
    fn queries_per_second(&mut self, max_qps: u32) -> Result<&mut Self, EnvError>;
    fn proxy(&mut self, proxy: Proxy) -> Result<&mut Self, EnvError>;
    fn proxy_authentication(
        &mut self,
        user_name: &str,
        password: &str,
    ) -> Result<&mut Self, EnvError>;
    fn build(&self) -> Self::Handler;
}

#[derive(Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[serde(rename_all = "lowercase")]
pub enum ProxyType {
    Http,
    Socks,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct Proxy {
    pub r#type: ProxyType,
    pub host: String,
    pub port: u16,
}
