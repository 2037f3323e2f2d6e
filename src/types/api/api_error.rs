use crate::constants::API_STATUS_OK;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use strum_macros::{AsRefStr, EnumIter, EnumString};

/// Non-`OK` values of the `status` field returned by the Maps web services.
#[derive(
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
    Debug,
)]
#[strum(serialize_all = "shouty_snake_case")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ApiErrorKind {
    InvalidRequest,
    MaxElementsExceeded,
    MaxWaypointsExceeded,
    NotFound,
    OverDailyLimit,
    OverQueryLimit,
    RequestDenied,
    UnknownError,
    ZeroResults,
    /// A status this crate does not know about
    Unknown,
}

#[derive(Clone, PartialEq, Eq, Serialize, Deserialize, Debug)]
pub struct ApiError {
    pub kind: ApiErrorKind,
    /// The raw status as received, kept for [`ApiErrorKind::Unknown`]
    pub status: String,
    pub message: Option<String>,
}

impl ApiError {
    /// Returns `None` for the `OK` status.
    pub fn from_status(status: &str, message: Option<String>) -> Option<Self> {
        if status == API_STATUS_OK {
            return None;
        }
        let kind = ApiErrorKind::from_str(status).unwrap_or(ApiErrorKind::Unknown);
        Some(ApiError {
            kind,
            status: status.to_owned(),
            message,
        })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{}: {}", self.status, message),
            None => write!(f, "{}", self.status),
        }
    }
}
