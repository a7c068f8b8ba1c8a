//! HTTP protocol layer module
//!
//! Transport-level response building, decoupled from the companion logic.

pub mod response;

// Re-export commonly used builders
pub use response::{build_413_response, build_health_response, build_options_response, from_dispatch};
