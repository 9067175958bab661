//! Demo HTTP server with a self-alternating `/info` endpoint.
//!
//! `GET /` answers with a fixed greeting. `GET /info` answers with a JSON
//! record whose shape flips on every call:
//!
//! ```text
//! call 1: {"id":123,"name":"Sier","elements":[{"inner":true}]}
//! call 2: {"id":123,"name":"Sier","elements":[{"inner":true}],"optional":"Added"}
//! call 3: {"id":123,"name":"Sier","elements":[{"inner":true}]}
//! ```
//!
//! The shape is chosen by the parity of a counter held in [`api::AppState`].
//!
//! # Modules
//!
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`info`]: Record shapes and the parity counter
//! - [`api`]: HTTP handlers and router
//! - [`metrics`]: Request counters and Prometheus exporter
//! - [`utils`]: Utility functions

pub mod api;
pub mod config;
pub mod error;
pub mod info;
pub mod metrics;
pub mod utils;

pub use config::Config;
pub use error::{Result, ServerError};
