mod pending_result;
pub use pending_result::*;

mod request_handler;
pub use request_handler::*;

mod urlfetch;
pub use urlfetch::*;
