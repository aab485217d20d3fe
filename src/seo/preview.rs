use url::Url;

use crate::models::{
    AnalysisReport, FieldRow, MetadataRecord, OpenGraphCard, Previews, SearchPreview,
    TwitterCardPreview,
};

pub const NOT_FOUND: &str = "<not found>";

pub const DEFAULT_SEARCH_URL: &str = "https://www.example.com";
pub const DEFAULT_SEARCH_TITLE: &str = "Example Page Title - Default Site Name";
pub const DEFAULT_SEARCH_DESCRIPTION: &str = "This is a default meta description for your page. It should be compelling and summarize the content. Aim for 50-160 characters.";

pub const DEFAULT_HOST: &str = "example.com";
pub const DEFAULT_OG_TITLE: &str = "Default Open Graph Title";
pub const DEFAULT_OG_DESCRIPTION: &str = "This is the default Open Graph description. It should be engaging and concise to encourage clicks on social media.";

pub const DEFAULT_TWITTER_TITLE: &str = "Default Twitter Card Title";
pub const DEFAULT_TWITTER_DESCRIPTION: &str =
    "This is the default Twitter Card description. Keep it short and impactful for Twitter users.";
pub const DEFAULT_TWITTER_HANDLE: &str = "example";

const OG_IMAGE_SIZE: (u32, u32) = (600, 315);
const TWITTER_IMAGE_SIZE: (u32, u32) = (500, 262);
const LOAD_ERROR_TEXT: &str = "Image Load Error";

/// URL of a generated grey placeholder image with `text` printed on it.
pub fn placeholder_image(width: u32, height: u32, text: &str) -> String {
    format!(
        "https://placehold.co/{width}x{height}/e0e0e0/333333?text={}",
        urlencoding::encode(text)
    )
}

fn or_default(value: &str, default: &str) -> String {
    if value.is_empty() {
        default.to_string()
    } else {
        value.to_string()
    }
}

fn host_of(url: &str) -> String {
    Url::parse(url)
        .ok()
        .and_then(|u| u.host_str().map(str::to_string))
        .unwrap_or_else(|| DEFAULT_HOST.to_string())
}

fn twitter_handle(site: &str) -> String {
    format!("@{}", or_default(&site.replacen('@', "", 1), DEFAULT_TWITTER_HANDLE))
}

pub fn field_rows(record: &MetadataRecord) -> Vec<FieldRow> {
    record
        .fields()
        .iter()
        .map(|(name, value)| FieldRow {
            name: name.to_string(),
            value: or_default(value, NOT_FOUND),
        })
        .collect()
}

pub fn search_preview(url: &str, record: &MetadataRecord) -> SearchPreview {
    SearchPreview {
        url: or_default(url, DEFAULT_SEARCH_URL),
        title: or_default(&record.title, DEFAULT_SEARCH_TITLE),
        description: or_default(&record.description, DEFAULT_SEARCH_DESCRIPTION),
    }
}

pub fn open_graph_card(url: &str, record: &MetadataRecord) -> OpenGraphCard {
    let (w, h) = OG_IMAGE_SIZE;
    OpenGraphCard {
        image: or_default(&record.og_image, &placeholder_image(w, h, "Open Graph Image")),
        fallback_image: placeholder_image(w, h, LOAD_ERROR_TEXT),
        host: host_of(url),
        title: or_default(&record.og_title, DEFAULT_OG_TITLE),
        description: or_default(&record.og_description, DEFAULT_OG_DESCRIPTION),
    }
}

pub fn twitter_card(record: &MetadataRecord) -> TwitterCardPreview {
    let (w, h) = TWITTER_IMAGE_SIZE;
    TwitterCardPreview {
        image: or_default(
            &record.twitter_image,
            &placeholder_image(w, h, "Twitter Card Image"),
        ),
        fallback_image: placeholder_image(w, h, LOAD_ERROR_TEXT),
        title: or_default(&record.twitter_title, DEFAULT_TWITTER_TITLE),
        description: or_default(&record.twitter_description, DEFAULT_TWITTER_DESCRIPTION),
        handle: twitter_handle(&record.twitter_site),
    }
}

/// All three views for one page. `url` is the address the user submitted.
pub fn render_previews(url: &str, record: &MetadataRecord) -> Previews {
    Previews {
        fields: field_rows(record),
        search: search_preview(url, record),
        open_graph: open_graph_card(url, record),
        twitter: twitter_card(record),
    }
}

/// Plain-text rendering of a report, used by `seo-inspect`.
pub fn render_text(report: &AnalysisReport) -> String {
    let p = &report.previews;
    let mut lines = vec![format!("SEO analysis for {}", report.url)];

    lines.push("\nFeedback".to_string());
    lines.extend(
        report
            .feedback
            .iter()
            .map(|item| format!("  [{:<7}] {}", item.severity.as_ref(), item.message)),
    );

    lines.push("\nExtracted meta tags".to_string());
    lines.extend(
        p.fields
            .iter()
            .map(|row| format!("  {}: {}", row.name, row.value)),
    );

    lines.push("\nSearch preview".to_string());
    lines.push(format!("  {}", p.search.url));
    lines.push(format!("  {}", p.search.title));
    lines.push(format!("  {}", p.search.description));

    lines.push("\nOpen Graph preview".to_string());
    lines.push(format!("  image: {}", p.open_graph.image));
    lines.push(format!("  {}", p.open_graph.host.to_uppercase()));
    lines.push(format!("  {}", p.open_graph.title));
    lines.push(format!("  {}", p.open_graph.description));

    lines.push("\nTwitter preview".to_string());
    lines.push(format!("  image: {}", p.twitter.image));
    lines.push(format!("  {}", p.twitter.title));
    lines.push(format!("  {}", p.twitter.description));
    lines.push(format!("  By {}", p.twitter.handle));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}
