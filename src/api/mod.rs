//! HTTP API module: AASA, health, and default routes.

pub mod handlers;
pub mod middleware;
pub mod routes;

pub use routes::create_router;
