//! Parsing seam between raw HTML text and the extraction rules.
//!
//! Extraction only ever asks two questions of a document: the text of the
//! first element matching a selector, and an attribute of the first element
//! matching a selector. Any lenient HTML parser that can answer those can
//! stand in for the `scraper` backed default.

use scraper::{Html, Selector};

pub trait QueryDocument {
    /// Concatenated text content of the first element matching `selector`.
    fn first_text(&self, selector: &str) -> Option<String>;

    /// `attribute` of the first element matching `selector`. An element
    /// that matches but lacks the attribute yields `None`; later matches
    /// are not consulted.
    fn first_attr(&self, selector: &str, attribute: &str) -> Option<String>;
}

pub trait HtmlParser {
    type Document: QueryDocument;

    /// Never fails: malformed markup is recovered the way browsers do.
    fn parse(&self, html: &str) -> Self::Document;
}

/// html5ever parsing through `scraper`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ScraperParser;

pub struct ScraperDocument {
    html: Html,
}

impl HtmlParser for ScraperParser {
    type Document = ScraperDocument;

    fn parse(&self, html: &str) -> ScraperDocument {
        ScraperDocument {
            html: Html::parse_document(html),
        }
    }
}

impl ScraperDocument {
    fn first_match(&self, selector: &str) -> Option<scraper::ElementRef<'_>> {
        let selector = match Selector::parse(selector) {
            Ok(selector) => selector,
            Err(e) => {
                tracing::warn!(selector, error = ?e, "Invalid CSS selector");
                return None;
            }
        };
        self.html.select(&selector).next()
    }
}

impl QueryDocument for ScraperDocument {
    fn first_text(&self, selector: &str) -> Option<String> {
        self.first_match(selector)
            .map(|el| el.text().collect::<String>())
    }

    fn first_attr(&self, selector: &str, attribute: &str) -> Option<String> {
        self.first_match(selector)
            .and_then(|el| el.value().attr(attribute))
            .map(str::to_string)
    }
}
