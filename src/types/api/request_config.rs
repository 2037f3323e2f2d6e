use crate::constants::{DEFAULT_ERROR_TIMEOUT, DEFAULT_USER_AGENT};
use crate::types::api::{ExceptionsAllowedToRetry, FieldNamingPolicy};
use crate::types::serde_ext::duration_millis;
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Everything a request handler forwards to the pending result it creates.
#[derive(Derivative, Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
#[derivative(Default)]
#[serde(default, rename_all = "camelCase")]
pub struct RequestConfig {
    #[derivative(Default(value = "DEFAULT_USER_AGENT.to_owned()"))]
    pub user_agent: String,
    pub field_naming_policy: FieldNamingPolicy,
    #[derivative(Default(value = "DEFAULT_ERROR_TIMEOUT"))]
    #[serde(rename = "errorTimeoutMs", with = "duration_millis")]
    pub error_timeout: Duration,
    /// `None` means no limit on the number of retries
    pub max_retries: Option<u32>,
    pub exceptions_allowed_to_retry: ExceptionsAllowedToRetry,
}
