use url::Url;

use super::document::{HtmlParser, QueryDocument, ScraperParser};
use crate::models::MetadataRecord;

fn meta_name<D: QueryDocument>(doc: &D, name: &str) -> String {
    doc.first_attr(&format!(r#"meta[name="{name}"]"#), "content")
        .unwrap_or_default()
}

fn meta_property<D: QueryDocument>(doc: &D, property: &str) -> String {
    doc.first_attr(&format!(r#"meta[property="{property}"]"#), "content")
        .unwrap_or_default()
}

/// Base URL that relative links in the document resolve against: a
/// `<base href>` if present (itself relative to the page), else the page.
fn document_base<D: QueryDocument>(doc: &D, page_url: Option<&Url>) -> Option<Url> {
    let base_href = doc.first_attr("base[href]", "href");
    match (base_href, page_url) {
        (Some(href), Some(page)) => page.join(&href).ok().or_else(|| Some(page.clone())),
        (Some(href), None) => Url::parse(&href).ok(),
        (None, page) => page.cloned(),
    }
}

fn resolve_href(href: &str, base: Option<&Url>) -> String {
    let resolved = match base {
        Some(base) => base.join(href),
        None => Url::parse(href),
    };
    resolved
        .map(String::from)
        .unwrap_or_else(|_| href.to_string())
}

/// Extract every field of a `MetadataRecord` from a parsed document.
///
/// Each field comes from exactly one selector; a missing og:title does not
/// borrow from `<title>` and so on.
pub fn extract_metadata<D: QueryDocument>(doc: &D, page_url: Option<&Url>) -> MetadataRecord {
    let canonical = doc
        .first_attr(r#"link[rel="canonical"]"#, "href")
        .map(|href| resolve_href(&href, document_base(doc, page_url).as_ref()))
        .unwrap_or_default();

    MetadataRecord {
        title: doc.first_text("title").unwrap_or_default(),
        description: meta_name(doc, "description"),
        canonical,
        robots: meta_name(doc, "robots"),
        og_title: meta_property(doc, "og:title"),
        og_description: meta_property(doc, "og:description"),
        og_image: meta_property(doc, "og:image"),
        og_url: meta_property(doc, "og:url"),
        og_type: meta_property(doc, "og:type"),
        twitter_card: meta_name(doc, "twitter:card"),
        twitter_site: meta_name(doc, "twitter:site"),
        twitter_title: meta_name(doc, "twitter:title"),
        twitter_description: meta_name(doc, "twitter:description"),
        twitter_image: meta_name(doc, "twitter:image"),
    }
}

/// Parse `html` with the default parser and extract its metadata.
/// `page_url` is only used to resolve a relative canonical link.
pub fn extract_from_html(html: &str, page_url: Option<&str>) -> MetadataRecord {
    let page_url = page_url.and_then(|u| Url::parse(u).ok());
    let doc = ScraperParser.parse(html);
    extract_metadata(&doc, page_url.as_ref())
}
