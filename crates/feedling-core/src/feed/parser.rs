use chrono::{DateTime, Utc};
use feed_rs::parser;

use super::models::{FeedDocument, FeedItem};
use crate::{Error, Result};

/// Parse raw feed content into a document for display.
///
/// Only the recognized channel and item fields are extracted; anything else
/// in the payload is ignored. A payload that is not a structurally valid
/// feed fails with `MalformedDocument` and no partial document is returned.
pub fn parse(content: &[u8]) -> Result<FeedDocument> {
    let feed = parser::parse(content).map_err(|e| Error::MalformedDocument(e.to_string()))?;

    let items = feed
        .entries
        .into_iter()
        .map(|entry| FeedItem {
            title: entry.title.map(|t| t.content).unwrap_or_default(),
            link: entry
                .links
                .first()
                .map(|l| l.href.clone())
                .unwrap_or_default(),
            description: entry
                .summary
                .map(|s| s.content)
                .or_else(|| entry.content.and_then(|c| c.body))
                .unwrap_or_default(),
        })
        .collect();

    Ok(FeedDocument {
        title: feed.title.map(|t| t.content).unwrap_or_default(),
        link: feed
            .links
            .first()
            .map(|l| l.href.clone())
            .unwrap_or_default(),
        description: feed.description.map(|d| d.content).unwrap_or_default(),
        language: feed.language.unwrap_or_default(),
        last_build_date: feed
            .updated
            .map(|dt| DateTime::<Utc>::from(dt).to_rfc2822())
            .unwrap_or_default(),
        generator: feed.generator.map(|g| g.content).unwrap_or_default(),
        items,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const EMPTY_CHANNEL: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example Feed</title>
    <link>https://example.com/</link>
    <description>Nothing yet</description>
    <language>en-us</language>
    <lastBuildDate>Mon, 06 Sep 2021 00:01:00 +0000</lastBuildDate>
    <generator>feedgen</generator>
  </channel>
</rss>"#;

    const ONE_ITEM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Example Feed</title>
    <link>https://example.com/</link>
    <description>News</description>
    <item>
      <title>First post</title>
      <link>https://example.com/posts/1</link>
      <description>&lt;p&gt;Hello &lt;b&gt;world&lt;/b&gt;&lt;/p&gt;</description>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn channel_with_zero_items_is_not_an_error() {
        let document = parse(EMPTY_CHANNEL.as_bytes()).unwrap();
        assert_eq!(document.title, "Example Feed");
        assert_eq!(document.link, "https://example.com/");
        assert_eq!(document.description, "Nothing yet");
        assert_eq!(document.language, "en-us");
        assert_eq!(document.generator, "feedgen");
        assert!(document.last_build_date.contains("Sep 2021"));
        assert!(document.items.is_empty());
    }

    #[test]
    fn items_keep_raw_descriptions() {
        let document = parse(ONE_ITEM.as_bytes()).unwrap();
        assert_eq!(document.items.len(), 1);

        let item = &document.items[0];
        assert_eq!(item.title, "First post");
        assert_eq!(item.link, "https://example.com/posts/1");
        // Sanitizing happens at display time, not here.
        assert_eq!(item.description, "<p>Hello <b>world</b></p>");
    }

    #[test]
    fn missing_channel_fields_are_empty_strings() {
        let minimal = r#"<rss version="2.0"><channel><title>T</title></channel></rss>"#;
        let document = parse(minimal.as_bytes()).unwrap();
        assert_eq!(document.title, "T");
        assert_eq!(document.language, "");
        assert_eq!(document.generator, "");
        assert_eq!(document.last_build_date, "");
    }

    #[test]
    fn junk_payload_is_malformed() {
        let err = parse(b"this is not a feed").unwrap_err();
        assert!(matches!(err, Error::MalformedDocument(_)));
    }
}
