//! Consumer-side analysis state.
//!
//! One analysis is tracked at a time. States are values: every transition
//! borrows the current state and returns a fresh one, so a caller holding an
//! old state never sees it change underneath them.
//!
//! ```text
//! Idle ──submit──▶ Loading ──succeed──▶ Success
//!   ▲                 │                    │
//!   │                 └──fail──▶ Error ◀───┘ (via submit → Loading)
//! ```

use thiserror::Error;

use crate::client::ProxyClient;
use crate::models::AnalysisReport;
use crate::seo;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum SessionError {
    #[error("Enter a URL to analyze")]
    EmptyUrl,

    /// A submission arrived while another analysis was in flight.
    #[error("Already analyzing {url}")]
    Busy { url: String },

    #[error("No analysis is in progress")]
    NotLoading,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum AnalysisState {
    #[default]
    Idle,
    Loading {
        url: String,
    },
    Success {
        report: Box<AnalysisReport>,
    },
    Error {
        url: String,
        message: String,
    },
}

impl AnalysisState {
    /// Start analysing `url`. Previous results or errors are dropped.
    pub fn submit(&self, url: &str) -> Result<AnalysisState, SessionError> {
        if let AnalysisState::Loading { url } = self {
            return Err(SessionError::Busy { url: url.clone() });
        }
        if url.is_empty() {
            return Err(SessionError::EmptyUrl);
        }
        Ok(AnalysisState::Loading {
            url: url.to_string(),
        })
    }

    /// Finish the in-flight analysis with the fetched page.
    pub fn succeed(&self, html: &str) -> Result<AnalysisState, SessionError> {
        match self {
            AnalysisState::Loading { url } => Ok(AnalysisState::Success {
                report: Box::new(seo::analyze(url, html)),
            }),
            _ => Err(SessionError::NotLoading),
        }
    }

    /// Finish the in-flight analysis with an error banner.
    pub fn fail(&self, message: impl Into<String>) -> Result<AnalysisState, SessionError> {
        match self {
            AnalysisState::Loading { url } => Ok(AnalysisState::Error {
                url: url.clone(),
                message: message.into(),
            }),
            _ => Err(SessionError::NotLoading),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AnalysisState::Loading { .. })
    }

    pub fn report(&self) -> Option<&AnalysisReport> {
        match self {
            AnalysisState::Success { report } => Some(&**report),
            _ => None,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            AnalysisState::Error { message, .. } => Some(message.as_str()),
            _ => None,
        }
    }
}

/// Drive one full analysis through the proxy: submit, fetch, then succeed
/// or fail. Transport and proxy errors end in the `Error` state rather than
/// an `Err`; `Err` is only returned when `state` refuses the submission.
pub async fn run_analysis(
    client: &ProxyClient,
    state: &AnalysisState,
    url: &str,
) -> Result<AnalysisState, SessionError> {
    let loading = state.submit(url)?;

    match client.fetch_html(url).await {
        Ok(html) => loading.succeed(&html),
        Err(e) => {
            tracing::warn!(error = %e, url, "Analysis failed");
            loading.fail(e.to_string())
        }
    }
}
