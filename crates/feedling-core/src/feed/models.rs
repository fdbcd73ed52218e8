use serde::{Deserialize, Serialize};

/// One subscribed feed source.
///
/// `name` is derived from the link's host component when the entry is
/// created and acts as the registry-wide identity for lookups.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedEntry {
    pub name: String,
    pub link: String,
}

/// Parsed channel of a fetched feed.
///
/// Built fresh per `.open`, rendered, then discarded. Missing channel
/// fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedDocument {
    pub title: String,
    pub link: String,
    pub description: String,
    pub language: String,
    pub last_build_date: String,
    pub generator: String,
    pub items: Vec<FeedItem>,
}

/// A single item of a feed document. `description` may carry embedded HTML
/// and must go through the sanitizer before display.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FeedItem {
    pub title: String,
    pub link: String,
    pub description: String,
}
