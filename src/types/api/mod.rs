mod api_error;
pub use api_error::*;

mod api_response;
pub use api_response::*;

mod exceptions_allowed_to_retry;
pub use exceptions_allowed_to_retry::*;

mod field_naming_policy;
pub use field_naming_policy::*;

mod request_config;
pub use request_config::*;
