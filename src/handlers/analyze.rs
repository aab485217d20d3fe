use axum::extract::{Query, State};
use axum::Json;

use crate::error::AppResult;
use crate::handlers::shared::{fetch_page, UrlQuery};
use crate::models::AnalysisReport;
use crate::seo;
use crate::state::AppState;

/// GET /analyze?url=<encoded-url>
///
/// Same fetch as `/fetch-url`, followed by extraction, scoring and preview
/// rendering on the server. Errors use the same shapes as `/fetch-url`.
pub async fn analyze(
    State(state): State<AppState>,
    Query(params): Query<UrlQuery>,
) -> AppResult<Json<AnalysisReport>> {
    let url = params.required()?;

    let html = fetch_page(&state.http_client, &state.fetch_limits, &url)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, url = %url, "Failed to fetch URL for analysis");
            e
        })?;

    Ok(Json(seo::analyze(&url, &html)))
}
