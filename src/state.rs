use crate::config::FetchLimits;

/// Shared application state passed to all handlers.
/// Nothing here is mutable; each request is handled independently.
#[derive(Clone)]
pub struct AppState {
    pub http_client: reqwest::Client,
    pub fetch_limits: FetchLimits,
}
