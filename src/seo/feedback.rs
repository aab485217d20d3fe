use crate::models::{FeedbackItem, MetadataRecord, Severity};

pub const TITLE_MIN: usize = 30;
pub const TITLE_MAX: usize = 60;
pub const DESCRIPTION_MIN: usize = 50;
pub const DESCRIPTION_MAX: usize = 160;

/// Length as a browser would report it: UTF-16 code units, no trimming.
pub fn char_len(s: &str) -> usize {
    s.encode_utf16().count()
}

fn title_feedback(title: &str) -> FeedbackItem {
    let len = char_len(title);
    if title.is_empty() {
        FeedbackItem::new(
            Severity::Warning,
            "Missing <title> tag. This is crucial for SEO.",
        )
    } else if len < TITLE_MIN {
        FeedbackItem::new(
            Severity::Info,
            format!(
                "Title is short ({len} chars). Consider making it more descriptive ({TITLE_MIN}-{TITLE_MAX} chars)."
            ),
        )
    } else if len > TITLE_MAX {
        FeedbackItem::new(
            Severity::Warning,
            format!(
                "Title is too long ({len} chars). Aim for {TITLE_MIN}-{TITLE_MAX} characters to avoid truncation."
            ),
        )
    } else {
        FeedbackItem::new(
            Severity::Success,
            format!("Title tag looks good ({len} chars)."),
        )
    }
}

fn description_feedback(description: &str) -> FeedbackItem {
    let len = char_len(description);
    if description.is_empty() {
        FeedbackItem::new(
            Severity::Warning,
            "Missing meta description. This helps search engines understand your page.",
        )
    } else if len < DESCRIPTION_MIN {
        FeedbackItem::new(
            Severity::Info,
            format!(
                "Meta description is short ({len} chars). Aim for {DESCRIPTION_MIN}-{DESCRIPTION_MAX} characters."
            ),
        )
    } else if len > DESCRIPTION_MAX {
        FeedbackItem::new(
            Severity::Warning,
            format!(
                "Meta description is too long ({len} chars). Aim for {DESCRIPTION_MIN}-{DESCRIPTION_MAX} characters to avoid truncation."
            ),
        )
    } else {
        FeedbackItem::new(
            Severity::Success,
            format!("Meta description looks good ({len} chars)."),
        )
    }
}

fn canonical_feedback(canonical: &str) -> FeedbackItem {
    if canonical.is_empty() {
        FeedbackItem::new(
            Severity::Info,
            "Canonical URL is missing. Consider adding one to prevent duplicate content issues.",
        )
    } else {
        FeedbackItem::new(
            Severity::Success,
            format!("Canonical URL present: {canonical}"),
        )
    }
}

fn open_graph_feedback(record: &MetadataRecord) -> FeedbackItem {
    let required = [&record.og_title, &record.og_description, &record.og_image];
    if required.iter().any(|v| v.is_empty()) {
        FeedbackItem::new(
            Severity::Warning,
            "Missing one or more Open Graph tags (og:title, og:description, og:image). These are important for social media sharing.",
        )
    } else {
        FeedbackItem::new(Severity::Success, "Open Graph tags are present.")
    }
}

fn twitter_feedback(record: &MetadataRecord) -> FeedbackItem {
    let required = [
        &record.twitter_card,
        &record.twitter_title,
        &record.twitter_description,
        &record.twitter_image,
    ];
    if required.iter().any(|v| v.is_empty()) {
        FeedbackItem::new(
            Severity::Warning,
            "Missing one or more Twitter Card tags (twitter:card, twitter:title, twitter:description, twitter:image). These are important for Twitter sharing.",
        )
    } else {
        FeedbackItem::new(Severity::Success, "Twitter Card tags are present.")
    }
}

/// Score a record. Always returns exactly five items, in the order title,
/// description, canonical, Open Graph, Twitter.
pub fn score(record: &MetadataRecord) -> Vec<FeedbackItem> {
    vec![
        title_feedback(&record.title),
        description_feedback(&record.description),
        canonical_feedback(&record.canonical),
        open_graph_feedback(record),
        twitter_feedback(record),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seo::extract::extract_from_html;

    fn severities(items: &[FeedbackItem]) -> Vec<Severity> {
        items.iter().map(|i| i.severity).collect()
    }

    #[test]
    fn bare_page_produces_five_items_in_order() {
        let items = score(&extract_from_html("<html><body>hi</body></html>", None));
        assert_eq!(
            severities(&items),
            vec![
                Severity::Warning,
                Severity::Warning,
                Severity::Info,
                Severity::Warning,
                Severity::Warning,
            ]
        );
        assert!(items[0].message.starts_with("Missing <title>"));
        assert!(items[1].message.starts_with("Missing meta description"));
        assert!(items[2].message.contains("Canonical URL is missing"));
        assert!(items[3].message.contains("Open Graph"));
        assert!(items[4].message.contains("Twitter Card"));
    }

    #[test]
    fn short_title_reports_length() {
        let items = score(&extract_from_html("<title>Short</title>", None));
        assert_eq!(items[0].severity, Severity::Info);
        assert!(items[0].message.contains('5'), "{}", items[0].message);
    }

    #[test]
    fn title_bounds_are_inclusive() {
        for len in [TITLE_MIN, TITLE_MAX] {
            let item = title_feedback(&"a".repeat(len));
            assert_eq!(item.severity, Severity::Success, "len {len}");
        }
        assert_eq!(title_feedback(&"a".repeat(29)).severity, Severity::Info);
        assert_eq!(title_feedback(&"a".repeat(61)).severity, Severity::Warning);
    }

    #[test]
    fn description_bounds_are_inclusive() {
        for len in [DESCRIPTION_MIN, DESCRIPTION_MAX] {
            let item = description_feedback(&"d".repeat(len));
            assert_eq!(item.severity, Severity::Success, "len {len}");
        }
        assert_eq!(description_feedback(&"d".repeat(49)).severity, Severity::Info);
        assert_eq!(
            description_feedback(&"d".repeat(161)).severity,
            Severity::Warning
        );
    }

    #[test]
    fn whitespace_counts_toward_length() {
        let item = title_feedback(&" ".repeat(30));
        assert_eq!(item.severity, Severity::Success);
    }

    #[test]
    fn length_counts_utf16_units() {
        assert_eq!(char_len("héllo"), 5);
        assert_eq!(char_len("😀"), 2);
    }

    #[test]
    fn canonical_success_includes_url() {
        let item = canonical_feedback("https://example.com/a");
        assert_eq!(item.severity, Severity::Success);
        assert!(item.message.contains("https://example.com/a"));
    }

    #[test]
    fn one_missing_og_tag_is_a_warning() {
        let record = MetadataRecord {
            og_title: "t".into(),
            og_description: "d".into(),
            ..Default::default()
        };
        assert_eq!(open_graph_feedback(&record).severity, Severity::Warning);
    }

    #[test]
    fn complete_social_tags_succeed() {
        let record = MetadataRecord {
            og_title: "t".into(),
            og_description: "d".into(),
            og_image: "i".into(),
            twitter_card: "summary".into(),
            twitter_title: "t".into(),
            twitter_description: "d".into(),
            twitter_image: "i".into(),
            ..Default::default()
        };
        assert_eq!(open_graph_feedback(&record).severity, Severity::Success);
        assert_eq!(twitter_feedback(&record).severity, Severity::Success);
    }

    #[test]
    fn twitter_site_is_not_required() {
        let record = MetadataRecord {
            twitter_card: "summary".into(),
            twitter_title: "t".into(),
            twitter_description: "d".into(),
            twitter_image: "i".into(),
            ..Default::default()
        };
        assert_eq!(twitter_feedback(&record).severity, Severity::Success);
    }

    #[test]
    fn scoring_is_idempotent() {
        let record = extract_from_html("<title>Short</title>", None);
        assert_eq!(score(&record), score(&record));
    }
}
