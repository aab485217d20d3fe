pub mod document;
pub mod extract;
pub mod feedback;
pub mod preview;

pub use document::{HtmlParser, QueryDocument, ScraperParser};
pub use extract::{extract_from_html, extract_metadata};
pub use feedback::score;
pub use preview::render_previews;

use crate::models::AnalysisReport;

/// Parse, score and render one fetched page.
pub fn analyze(url: &str, html: &str) -> AnalysisReport {
    let metadata = extract_from_html(html, Some(url));
    let feedback = score(&metadata);
    let previews = render_previews(url, &metadata);
    tracing::debug!(url, items = feedback.len(), "Analyzed page");

    AnalysisReport {
        url: url.to_string(),
        metadata,
        feedback,
        previews,
    }
}
