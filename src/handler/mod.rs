//! Request handler module
//!
//! Bridges hyper connections to the companion dispatcher.

pub mod router;

// Re-export main entry point
pub use router::handle_request;
