//! LUNA companion server library
//!
//! A stateless wellness-companion service: a pure request dispatcher
//! (`companion`) hosted behind a small hyper front end (`handler`). All
//! responses are canned, rule-based JSON built from fixed lookup tables.

pub mod companion;
pub mod config;
pub mod handler;
pub mod http;
pub mod logger;
