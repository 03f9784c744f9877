//! HTTP API handlers.
//!
//! Every handler is total: there is no user-visible failure path. Malformed or
//! missing configuration silently falls back to documented defaults, and the
//! fixed response structures always serialize.

use axum::{http::header, response::IntoResponse, Json};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use tracing::debug;

use crate::aasa::build_document;
use crate::config::AasaConfig;

/// Cache directive for all JSON responses. Kept modest; Apple also caches the
/// AASA document on their side.
pub const CACHE_CONTROL_JSON: &str = "public, max-age=300";

/// Health check response.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    /// Status: "healthy".
    pub status: &'static str,
    /// Current time, ISO-8601 UTC.
    pub timestamp: String,
    /// Whether AASA serving is enabled (always "enabled").
    pub aasa: &'static str,
}

/// Service description returned for unmatched routes.
#[derive(Debug, Serialize)]
pub struct ServiceDescription {
    /// Service name.
    pub service: &'static str,
    /// Known endpoints with one-line descriptions.
    pub endpoints: EndpointList,
}

/// The known endpoints, keyed by path.
#[derive(Debug, Serialize)]
pub struct EndpointList {
    #[serde(rename = "/.well-known/apple-app-site-association")]
    pub well_known: &'static str,
    #[serde(rename = "/apple-app-site-association")]
    pub alternate: &'static str,
    #[serde(rename = "/api/health")]
    pub health: &'static str,
}

/// AASA handler for both the well-known and bare paths.
///
/// Configuration is read fresh from the environment on every request and the
/// document rebuilt; nothing is cached across requests.
pub async fn aasa() -> impl IntoResponse {
    let config = AasaConfig::from_env().unwrap_or_default();
    let document = build_document(&config);

    debug!(
        app_id = %document.applinks.details[0].app_id,
        paths = document.applinks.details[0].paths.len(),
        "Serving AASA document"
    );

    (
        [(header::CACHE_CONTROL, CACHE_CONTROL_JSON)],
        Json(document),
    )
}

/// Health check handler - always returns 200.
pub async fn health() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, CACHE_CONTROL_JSON)],
        Json(HealthResponse {
            status: "healthy",
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            aasa: "enabled",
        }),
    )
}

/// Fallback handler - describes the service instead of returning 404.
pub async fn index() -> impl IntoResponse {
    (
        [(header::CACHE_CONTROL, CACHE_CONTROL_JSON)],
        Json(ServiceDescription {
            service: "OpenMesh API",
            endpoints: EndpointList {
                well_known: "AASA",
                alternate: "AASA (alt)",
                health: "health check",
            },
        }),
    )
}
