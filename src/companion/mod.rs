//! Companion core module
//!
//! The stateless wellness-companion logic: a pure request dispatcher plus
//! the four handlers it routes to. Everything in here is synchronous and
//! transport-agnostic; `crate::handler` adapts hyper requests onto it.

pub mod chat;
pub mod checkin;
pub mod crisis;
pub mod dispatch;
pub mod mood;

// Re-export the dispatch surface
pub use dispatch::{dispatch, CompanionRequest, CompanionResponse, RESPONSE_HEADERS};
