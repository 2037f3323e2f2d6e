//! Maps web service requests dispatched through a managed platform fetch service.
#![allow(clippy::module_inception)]

pub mod constants;
pub mod request_handler;
pub mod runtime;
pub mod types;
