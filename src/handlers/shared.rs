use reqwest::{redirect, Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;

use crate::{
    config::FetchLimits,
    error::{AppError, AppResult},
};

pub const USER_AGENT: &str = concat!(
    "Mozilla/5.0 (compatible; SeoMetaAnalyzer/",
    env!("CARGO_PKG_VERSION"),
    ")"
);

#[derive(Error, Debug)]
pub enum FetchError {
    #[error("could not build HTTP client: {0}")]
    Client(reqwest::Error),

    #[error("{0}")]
    Request(#[from] reqwest::Error),

    #[error("HTTP error! status: {0}")]
    Status(StatusCode),

    #[error("response body exceeds {limit} bytes")]
    BodyTooLarge { limit: usize },
}

impl From<FetchError> for AppError {
    fn from(e: FetchError) -> Self {
        AppError::Upstream(e.to_string())
    }
}

/// `?url=` query shared by every endpoint that fetches a page.
#[derive(Debug, Deserialize)]
pub struct UrlQuery {
    pub url: Option<String>,
}

impl UrlQuery {
    /// The target URL, rejecting a missing or empty parameter.
    /// No shape validation: a malformed URL fails later, at fetch time.
    pub fn required(self) -> AppResult<String> {
        self.url
            .filter(|u| !u.is_empty())
            .ok_or(AppError::MissingUrl)
    }
}

/// Build the outbound client with the configured timeout and redirect cap.
pub fn build_http_client(limits: &FetchLimits) -> Result<Client, FetchError> {
    Client::builder()
        .timeout(limits.timeout)
        .redirect(redirect::Policy::limited(limits.max_redirects))
        .user_agent(USER_AGENT)
        .build()
        .map_err(FetchError::Client)
}

/// GET `url` and return its body as text, whatever the content type.
///
/// Non-2xx statuses are errors. The body is read chunk by chunk and the
/// fetch is abandoned once it grows past `limits.max_body_bytes`.
pub async fn fetch_page(
    client: &Client,
    limits: &FetchLimits,
    url: &str,
) -> Result<String, FetchError> {
    let mut response = client.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::Status(status));
    }

    let limit = limits.max_body_bytes;
    if response.content_length().is_some_and(|len| len > limit as u64) {
        return Err(FetchError::BodyTooLarge { limit });
    }

    let mut body = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        if body.len() + chunk.len() > limit {
            return Err(FetchError::BodyTooLarge { limit });
        }
        body.extend_from_slice(&chunk);
    }

    tracing::debug!(url, bytes = body.len(), "Fetched page");
    Ok(String::from_utf8_lossy(&body).into_owned())
}
