// Each integration test file is a separate binary; helpers not used in every
// binary would otherwise trigger dead_code warnings from clippy.
#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Method, Request, StatusCode},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use serde_json::Value;
use tower::ServiceExt;

use seo_meta_analyzer::{
    config::FetchLimits, handlers, handlers::shared::build_http_client, state::AppState,
};

pub const FULL_PAGE: &str = r#"<!DOCTYPE html>
<html><head>
    <title>Example Domain - A Page About Examples</title>
    <meta name="description" content="This page exists to be analyzed by the integration tests of the analyzer.">
    <link rel="canonical" href="/canonical-page">
    <meta name="robots" content="index, follow">
    <meta property="og:title" content="Example OG Title">
    <meta property="og:description" content="Example OG description">
    <meta property="og:image" content="https://example.com/og.png">
    <meta property="og:url" content="https://example.com/">
    <meta property="og:type" content="website">
    <meta name="twitter:card" content="summary_large_image">
    <meta name="twitter:site" content="@example">
    <meta name="twitter:title" content="Example Twitter Title">
    <meta name="twitter:description" content="Example Twitter description">
    <meta name="twitter:image" content="https://example.com/tw.png">
</head><body><h1>Hello</h1></body></html>"#;

/// Size of the body served by the upstream `/big` route.
pub const BIG_BODY_BYTES: usize = 64 * 1024;

/// `/stream` sends this many chunks of `STREAM_CHUNK_BYTES` with no
/// Content-Length, so only the running byte count can enforce the cap.
pub const STREAM_CHUNKS: usize = 64;
pub const STREAM_CHUNK_BYTES: usize = 1024;

/// An address nothing listens on; connections are refused immediately.
pub const UNREACHABLE_URL: &str = "http://127.0.0.1:1/";

pub fn test_state(limits: FetchLimits) -> AppState {
    AppState {
        http_client: build_http_client(&limits).expect("Failed to build test HTTP client"),
        fetch_limits: limits,
    }
}

/// Build the application router with the given fetch limits.
pub fn create_test_app_with_limits(limits: FetchLimits) -> Router {
    Router::new()
        .route("/health", get(handlers::health_check))
        .route("/fetch-url", get(handlers::fetch_url::fetch_url))
        .route("/analyze", get(handlers::analyze::analyze))
        .with_state(test_state(limits))
}

pub fn create_test_app() -> Router {
    create_test_app_with_limits(FetchLimits::default())
}

/// Serve `app` on an ephemeral local port and return its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind test listener");
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{addr}")
}

/// A throwaway site for the proxy to fetch from.
pub async fn spawn_upstream() -> String {
    let site = Router::new()
        .route("/page", get(|| async { axum::response::Html(FULL_PAGE) }))
        .route("/bare", get(|| async { "<html><body>nothing here</body></html>" }))
        .route("/plain", get(|| async { "just some text, not html" }))
        .route(
            "/missing",
            get(|| async { (StatusCode::NOT_FOUND, "no such page") }),
        )
        .route(
            "/broken",
            get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded") }),
        )
        .route("/big", get(|| async { "x".repeat(BIG_BODY_BYTES) }))
        .route("/stream", get(|| async { streamed_body() }));
    spawn(site).await
}

fn streamed_body() -> Body {
    let chunks = (0..STREAM_CHUNKS).map(|_| Ok::<_, std::io::Error>(vec![b'x'; STREAM_CHUNK_BYTES]));
    Body::from_stream(futures::stream::iter(chunks))
}

/// `/fetch-url?url=<encoded target>`
pub fn proxy_uri(path: &str, target: &str) -> String {
    format!("{path}?url={}", urlencoding::encode(target))
}

// ── Request helpers ──────────────────────────────────────────────────────────

pub async fn get_json(app: Router, uri: &str) -> (StatusCode, Value) {
    let req = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    send(app, req).await
}

async fn send(app: Router, req: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(req).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: Value = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}
