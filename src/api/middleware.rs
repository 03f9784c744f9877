//! Pre-flight (OPTIONS) handling.
//!
//! Checked before routing so that an OPTIONS request to any path, including
//! the AASA and health routes, gets the same empty 204 with permissive CORS
//! headers and a one-day max-age. The response deliberately carries no
//! Content-Type or Cache-Control.

use axum::{
    extract::Request,
    http::{header, Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Response},
};

/// Middleware answering every OPTIONS request with an empty 204.
///
/// Must be the outermost request layer so it wins over all routes.
pub async fn preflight(request: Request, next: Next) -> Response {
    if request.method() == Method::OPTIONS {
        return (
            StatusCode::NO_CONTENT,
            [
                (header::ACCESS_CONTROL_ALLOW_ORIGIN, "*"),
                (header::ACCESS_CONTROL_ALLOW_METHODS, "GET, POST, OPTIONS"),
                (
                    header::ACCESS_CONTROL_ALLOW_HEADERS,
                    "Content-Type, Authorization",
                ),
                (header::ACCESS_CONTROL_MAX_AGE, "86400"),
            ],
        )
            .into_response();
    }

    next.run(request).await
}
