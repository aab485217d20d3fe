pub mod metadata;

pub use metadata::MetadataRecord;

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display};

// ============================================================================
// Proxy Models
// ============================================================================

/// Body returned by `GET /fetch-url` on success.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchUrlResponse {
    pub contents: String,
}

/// Body returned by every endpoint on failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

// ============================================================================
// Feedback Models
// ============================================================================

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, AsRefStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
    Info,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub severity: Severity,
    pub message: String,
}

impl FeedbackItem {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        FeedbackItem {
            severity,
            message: message.into(),
        }
    }
}

// ============================================================================
// Preview Models
// ============================================================================

/// One row of the raw field list. `value` is `<not found>` for empty fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldRow {
    pub name: String,
    pub value: String,
}

/// Search engine result mockup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchPreview {
    pub url: String,
    pub title: String,
    pub description: String,
}

/// Facebook / LinkedIn style card built from Open Graph tags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OpenGraphCard {
    pub image: String,
    /// Shown by the client when `image` fails to load.
    pub fallback_image: String,
    pub host: String,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TwitterCardPreview {
    pub image: String,
    pub fallback_image: String,
    pub title: String,
    pub description: String,
    /// Always starts with `@`.
    pub handle: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Previews {
    pub fields: Vec<FieldRow>,
    pub search: SearchPreview,
    pub open_graph: OpenGraphCard,
    pub twitter: TwitterCardPreview,
}

// ============================================================================
// Report Models
// ============================================================================

/// Everything produced by one analysis of one page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisReport {
    pub url: String,
    pub metadata: MetadataRecord,
    pub feedback: Vec<FeedbackItem>,
    pub previews: Previews,
}
