use crate::types::api::ApiError;

/// The shape a response body is deserialized into before the caller
/// sees its result.
///
/// Most Maps endpoints carry a `status` field next to the payload, so an
/// implementation typically checks it with [`ApiError::from_status`].
pub trait ApiResponse<T> {
    fn successful(&self) -> bool;
    fn into_result(self) -> Result<T, ApiError>;
}
