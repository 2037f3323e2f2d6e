mod urlfetch_pending_result;
pub use urlfetch_pending_result::*;

mod urlfetch_request_handler;
pub use urlfetch_request_handler::*;

mod urlfetch_request_handler_builder;
pub use urlfetch_request_handler_builder::*;
