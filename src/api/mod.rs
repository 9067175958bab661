//! HTTP API module for the greeting and info endpoints.

pub mod handlers;
pub mod routes;
pub mod server;

pub use handlers::AppState;
pub use routes::create_router;
pub use server::{bind, serve};
