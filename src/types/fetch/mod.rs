mod fetch_options;
pub use fetch_options::*;

mod fetch_request;
pub use fetch_request::*;

mod fetch_response;
pub use fetch_response::*;
