use axum::extract::{Query, State};
use axum::Json;

use crate::error::AppResult;
use crate::handlers::shared::{fetch_page, UrlQuery};
use crate::models::FetchUrlResponse;
use crate::state::AppState;

/// GET /fetch-url?url=<encoded-url>
///
/// Fetches the target server-side and hands back its raw body, so browser
/// clients are not blocked by the target's CORS policy. The upstream status
/// and headers are not forwarded.
pub async fn fetch_url(
    State(state): State<AppState>,
    Query(params): Query<UrlQuery>,
) -> AppResult<Json<FetchUrlResponse>> {
    let url = params.required()?;

    let contents = fetch_page(&state.http_client, &state.fetch_limits, &url)
        .await
        .map_err(|e| {
            tracing::warn!(error = %e, url = %url, "Failed to fetch URL for proxy");
            e
        })?;

    Ok(Json(FetchUrlResponse { contents }))
}
