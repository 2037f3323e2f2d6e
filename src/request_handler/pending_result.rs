use crate::runtime::{EnvFuture, EnvFutureExt, TryEnvFuture};
use futures::FutureExt;

/// An API call that has been prepared and can be awaited for its result.
pub trait PendingResult<T: 'static> {
    /// Performs the call. Every invocation submits the request again.
    fn await_result(&self) -> TryEnvFuture<T>;
    /// Like [`Self::await_result`], with the error discarded.
    fn await_ignore_error(&self) -> EnvFuture<'static, Option<T>> {
        self.await_result()
            .map(|result| match result {
                Ok(value) => Some(value),
                Err(error) => {
                    tracing::debug!(%error, "Ignoring pending result error");
                    None
                }
            })
            .boxed_env()
    }
    /// Any later [`Self::await_result`] resolves to [`EnvError::Cancelled`],
    /// as does one already in flight.
    ///
    /// [`EnvError::Cancelled`]: crate::runtime::EnvError::Cancelled
    fn cancel(&self);
}
