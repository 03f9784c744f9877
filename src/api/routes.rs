//! HTTP API route definitions.

use axum::{
    middleware,
    routing::{any, get},
    Router,
};
use tower_http::cors::{Any as AnyOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use super::handlers::{aasa, health, index};
use super::middleware::preflight;

/// Create the API router.
///
/// Routes are matched in order of specificity; anything unmatched falls
/// through to the service description rather than a 404. OPTIONS requests are
/// intercepted before routing and answered with an empty 204.
pub fn create_router() -> Router {
    // AASA endpoints. CORS is not required for Apple's fetcher, but an
    // unrestricted allow-origin is harmless and lets browsers read the file.
    // Only GET serves the document; other methods fall through to the service
    // description like any unmatched request, never a 405.
    let aasa_routes = Router::new()
        .route(
            "/.well-known/apple-app-site-association",
            get(aasa).fallback(index),
        )
        .route("/apple-app-site-association", get(aasa).fallback(index))
        .layer(CorsLayer::new().allow_origin(AnyOrigin));

    Router::new()
        .merge(aasa_routes)
        .route("/api/health", any(health))
        .fallback(index)
        .layer(middleware::from_fn(preflight))
        .layer(TraceLayer::new_for_http())
}
