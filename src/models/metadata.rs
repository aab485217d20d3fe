use serde::{Deserialize, Serialize};

/// Every meta field the analyzer looks at, in presentation order.
///
/// A missing tag is an empty string, never an absent key, so a record is
/// always complete once built.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MetadataRecord {
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub robots: String,
    pub og_title: String,
    pub og_description: String,
    pub og_image: String,
    pub og_url: String,
    pub og_type: String,
    pub twitter_card: String,
    pub twitter_site: String,
    pub twitter_title: String,
    pub twitter_description: String,
    pub twitter_image: String,
}

impl MetadataRecord {
    pub const FIELD_NAMES: [&'static str; 14] = [
        "title",
        "description",
        "canonical",
        "robots",
        "ogTitle",
        "ogDescription",
        "ogImage",
        "ogUrl",
        "ogType",
        "twitterCard",
        "twitterSite",
        "twitterTitle",
        "twitterDescription",
        "twitterImage",
    ];

    /// `(name, value)` pairs in the same order as `FIELD_NAMES`.
    pub fn fields(&self) -> [(&'static str, &str); 14] {
        let values = [
            &self.title,
            &self.description,
            &self.canonical,
            &self.robots,
            &self.og_title,
            &self.og_description,
            &self.og_image,
            &self.og_url,
            &self.og_type,
            &self.twitter_card,
            &self.twitter_site,
            &self.twitter_title,
            &self.twitter_description,
            &self.twitter_image,
        ];
        let mut pairs = [("", ""); 14];
        for (i, (name, value)) in Self::FIELD_NAMES.iter().zip(values).enumerate() {
            pairs[i] = (*name, value.as_str());
        }
        pairs
    }
}
