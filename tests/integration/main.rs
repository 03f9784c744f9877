//! Integration tests for the AASA server.
//!
//! These exercise the full router with real environment variables. The AASA
//! handler reads the environment on every request, so tests that mutate
//! IOS_TEAM_ID / IOS_BUNDLE_ID / UL_PATHS serialize on a shared lock.

use std::sync::{Mutex, MutexGuard};

use axum::body::Body;
use axum::http::{header, Method, Request, StatusCode};
use tower::ServiceExt;

use openmesh_aasa::api::create_router;

static ENV_LOCK: Mutex<()> = Mutex::new(());

const ENV_VARS: [&str; 3] = ["IOS_TEAM_ID", "IOS_BUNDLE_ID", "UL_PATHS"];

/// Take the env lock and clear all AASA variables.
fn clean_env() -> MutexGuard<'static, ()> {
    let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
    for var in ENV_VARS {
        std::env::remove_var(var);
    }
    guard
}

async fn get_json(uri: &str) -> (StatusCode, serde_json::Value) {
    let response = create_router()
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn aasa_with_no_environment_uses_defaults() {
    let _guard = clean_env();

    let (status, json) = get_json("/.well-known/apple-app-site-association").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["applinks"]["details"][0]["appID"],
        "TEAMID.com.MeshNetProtocol.OpenMesh.OpenMesh"
    );
    assert_eq!(
        json["applinks"]["details"][0]["paths"],
        serde_json::json!(["/callback", "/callback*", "/callback/*"])
    );
    assert_eq!(json["applinks"]["apps"], serde_json::json!([]));
    assert_eq!(
        json["webcredentials"]["apps"],
        serde_json::json!(["TEAMID.com.MeshNetProtocol.OpenMesh.OpenMesh"])
    );
}

#[tokio::test]
async fn aasa_with_empty_environment_values_uses_defaults() {
    let _guard = clean_env();
    std::env::set_var("IOS_TEAM_ID", "");
    std::env::set_var("UL_PATHS", "");

    let (status, json) = get_json("/.well-known/apple-app-site-association").await;

    assert_eq!(status, StatusCode::OK);
    // Set-but-empty variables behave like unset ones.
    assert_eq!(
        json["applinks"]["details"][0]["appID"],
        "TEAMID.com.MeshNetProtocol.OpenMesh.OpenMesh"
    );
    assert_eq!(
        json["applinks"]["details"][0]["paths"],
        serde_json::json!(["/callback", "/callback*", "/callback/*"])
    );

    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

#[tokio::test]
async fn aasa_reflects_configured_environment() {
    let _guard = clean_env();
    std::env::set_var("IOS_TEAM_ID", "9JA89QQLNQ");
    std::env::set_var("IOS_BUNDLE_ID", "com.example.Demo");
    std::env::set_var("UL_PATHS", "/callback, wsegue, /");

    let (status, json) = get_json("/apple-app-site-association").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        json["applinks"]["details"][0]["appID"],
        "9JA89QQLNQ.com.example.Demo"
    );
    assert_eq!(
        json["applinks"]["details"][0]["paths"],
        serde_json::json!([
            "/callback",
            "/callback*",
            "/callback/*",
            "/wsegue",
            "/wsegue*",
            "/wsegue/*",
            "/",
            "/*"
        ])
    );

    for var in ENV_VARS {
        std::env::remove_var(var);
    }
}

#[tokio::test]
async fn aasa_is_rebuilt_per_request() {
    let _guard = clean_env();

    std::env::set_var("UL_PATHS", "/first");
    let (_, json) = get_json("/.well-known/apple-app-site-association").await;
    assert_eq!(json["applinks"]["details"][0]["paths"][0], "/first");

    // No caching: a changed environment shows up on the next request.
    std::env::set_var("UL_PATHS", "/second");
    let (_, json) = get_json("/.well-known/apple-app-site-association").await;
    assert_eq!(json["applinks"]["details"][0]["paths"][0], "/second");

    std::env::remove_var("UL_PATHS");
}

#[tokio::test]
async fn aasa_preserves_trailing_slash_duplicate() {
    let _guard = clean_env();
    std::env::set_var("UL_PATHS", "/callback/");

    let (_, json) = get_json("/.well-known/apple-app-site-association").await;
    assert_eq!(
        json["applinks"]["details"][0]["paths"],
        serde_json::json!(["/callback/", "/callback/*", "/callback/*"])
    );

    std::env::remove_var("UL_PATHS");
}

#[tokio::test]
async fn options_is_empty_204_everywhere() {
    for uri in ["/", "/api/health", "/.well-known/apple-app-site-association"] {
        let response = create_router()
            .oneshot(
                Request::builder()
                    .method(Method::OPTIONS)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(
            response.headers()[header::ACCESS_CONTROL_MAX_AGE],
            "86400"
        );
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert!(bytes.is_empty());
    }
}

#[tokio::test]
async fn health_reports_enabled_with_timestamp() {
    let (status, json) = get_json("/api/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["aasa"], "enabled");
    assert!(chrono::DateTime::parse_from_rfc3339(json["timestamp"].as_str().unwrap()).is_ok());
}

#[tokio::test]
async fn unknown_routes_get_service_description() {
    let (status, json) = get_json("/definitely/not/a/route").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["service"], "OpenMesh API");
    assert_eq!(
        json["endpoints"]["/.well-known/apple-app-site-association"],
        "AASA"
    );
}
