pub mod analyze;
pub mod fetch_url;
pub mod shared;

use axum::{http::StatusCode, Json};
use serde_json::{json, Value};

pub async fn health_check() -> (StatusCode, Json<Value>) {
    (
        StatusCode::OK,
        Json(json!({
            "status": "ok",
            "service": "seo-meta-analyzer",
            "version": env!("CARGO_PKG_VERSION"),
        })),
    )
}
