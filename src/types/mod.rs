pub mod api;
pub mod fetch;

mod serde_ext;
