use crate::constants::PLATFORM_NAME;
use crate::request_handler::{Proxy, RequestHandlerBuilder, UrlFetchRequestHandler};
use crate::runtime::{Env, EnvError};
use derivative::Derivative;
use std::marker::PhantomData;
use std::time::Duration;

/// Builds [`UrlFetchRequestHandler`]s.
///
/// The managed fetch service exposes no timeout, rate limit or proxy
/// controls, so every setter fails with [`EnvError::UnsupportedConfiguration`].
#[derive(Derivative)]
#[derivative(Default(bound = ""), Debug(bound = ""))]
pub struct UrlFetchRequestHandlerBuilder<E: Env> {
    env: PhantomData<E>,
}

impl<E: Env> UrlFetchRequestHandlerBuilder<E> {
    fn unsupported<T>(&self, setting: &str) -> Result<T, EnvError> {
        tracing::warn!(setting, platform = PLATFORM_NAME, "Unsupported request handler setting");
        Err(EnvError::UnsupportedConfiguration(format!(
            "{setting} is not implemented for {PLATFORM_NAME}"
        )))
    }
}

impl<E: Env + 'static> RequestHandlerBuilder for UrlFetchRequestHandlerBuilder<E> {
    type Handler = UrlFetchRequestHandler<E>;

    fn connect_timeout(&mut self, _timeout: Duration) -> Result<&mut Self, EnvError> {
        self.unsupported("connect_timeout")
    }
    fn read_timeout(&mut self, _timeout: Duration) -> Result<&mut Self, EnvError> {
        self.unsupported("read_timeout")
    }
    fn write_timeout(&mut self, _timeout: Duration) -> Result<&mut Self, EnvError> {
        self.unsupported("write_timeout")
    }
    fn queries_per_second(&mut self, _max_qps: u32) -> Result<&mut Self, EnvError> {
        self.unsupported("queries_per_second")
    }
    fn proxy(&mut self, _proxy: Proxy) -> Result<&mut Self, EnvError> {
        self.unsupported("proxy")
    }
    fn proxy_authentication(
        &mut self,
        _user_name: &str,
        _password: &str,
    ) -> Result<&mut Self, EnvError> {
        self.unsupported("proxy_authentication")
    }
    fn build(&self) -> Self::Handler {
        UrlFetchRequestHandler::default()
    }
}
