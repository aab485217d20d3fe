use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

pub const MISSING_URL_MESSAGE: &str = "URL parameter is required.";

#[derive(Error, Debug)]
pub enum AppError {
    #[error("URL parameter is required.")]
    MissingUrl,

    /// Any failure reaching or reading the target page. DNS, timeouts and
    /// non-2xx statuses all collapse into this one shape.
    #[error("Failed to fetch URL: {0}")]
    Upstream(String),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message): (StatusCode, String) = match self {
            AppError::MissingUrl => (StatusCode::BAD_REQUEST, MISSING_URL_MESSAGE.into()),
            AppError::Upstream(ref cause) => {
                tracing::error!(error = %cause, "Upstream fetch failed");
                (StatusCode::INTERNAL_SERVER_ERROR, self.to_string())
            }
        };

        (status, Json(json!({ "error": message }))).into_response()
    }
}

pub type AppResult<T> = Result<T, AppError>;
