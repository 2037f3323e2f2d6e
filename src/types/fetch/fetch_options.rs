use derivative::Derivative;
use std::time::Duration;

/// Per-request options understood by the managed fetch service.
#[derive(Derivative, Clone, Copy, PartialEq, Eq, Debug)]
#[derivative(Default)]
pub struct FetchOptions {
    /// How long the platform waits for the remote host before failing the fetch.
    /// `None` leaves it to the platform default.
    pub deadline: Option<Duration>,
    #[derivative(Default(value = "true"))]
    pub follow_redirects: bool,
    /// When `false` an oversized response is an error instead of being cut short.
    pub allow_truncate: bool,
    #[derivative(Default(value = "true"))]
    pub validate_certificate: bool,
}

impl FetchOptions {
    pub fn with_deadline(deadline: Duration) -> Self {
        FetchOptions {
            deadline: Some(deadline),
            ..Default::default()
        }
    }
    pub fn follow_redirects(self, follow_redirects: bool) -> Self {
        FetchOptions {
            follow_redirects,
            ..self
        }
    }
    pub fn allow_truncate(self, allow_truncate: bool) -> Self {
        FetchOptions {
            allow_truncate,
            ..self
        }
    }
    pub fn validate_certificate(self, validate_certificate: bool) -> Self {
        FetchOptions {
            validate_certificate,
            ..self
        }
    }
}
