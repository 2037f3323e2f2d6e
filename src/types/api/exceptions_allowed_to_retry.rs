use crate::types::api::ApiErrorKind;
use derive_more::Deref;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// API errors a caller is allowed to resubmit a request for.
#[derive(Clone, PartialEq, Eq, Deref, Serialize, Deserialize, Debug)]
#[serde(transparent)]
pub struct ExceptionsAllowedToRetry(HashSet<ApiErrorKind>);

impl ExceptionsAllowedToRetry {
    pub fn empty() -> Self {
        ExceptionsAllowedToRetry(HashSet::new())
    }
    pub fn insert(&mut self, kind: ApiErrorKind) -> bool {
        self.0.insert(kind)
    }
}

impl Default for ExceptionsAllowedToRetry {
    fn default() -> Self {
        ExceptionsAllowedToRetry::from_iter(vec![ApiErrorKind::OverQueryLimit])
    }
}

impl FromIterator<ApiErrorKind> for ExceptionsAllowedToRetry {
    fn from_iter<I: IntoIterator<Item = ApiErrorKind>>(iter: I) -> Self {
        ExceptionsAllowedToRetry(iter.into_iter().collect())
    }
}
