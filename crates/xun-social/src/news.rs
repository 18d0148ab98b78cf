//! Trending headlines from an RSS feed (Google News top stories by default).

use std::time::Duration;

use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use xun_core::TrendItem;

use crate::error::SocialError;

/// Headlines kept per fetch.
const MAX_HEADLINES: usize = 30;

pub struct NewsFeed {
    client: Client,
    feed_url: String,
}

impl NewsFeed {
    /// # Errors
    ///
    /// Returns [`SocialError::Http`] if the `reqwest::Client` cannot be built.
    pub fn new(feed_url: &str, timeout_secs: u64) -> Result<Self, SocialError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .user_agent("xun/0.1 (social-agent)")
            .build()?;
        Ok(Self {
            client,
            feed_url: feed_url.to_owned(),
        })
    }

    /// Fetch and parse the feed into headline items.
    ///
    /// # Errors
    ///
    /// Returns [`SocialError::Http`] on network failure or a non-2xx status,
    /// or [`SocialError::Xml`] on malformed RSS.
    pub async fn fetch_headlines(&self) -> Result<Vec<TrendItem>, SocialError> {
        let body = self
            .client
            .get(&self.feed_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;
        let items = parse_headlines(&body, MAX_HEADLINES)?;
        tracing::debug!(count = items.len(), feed = %self.feed_url, "fetched news headlines");
        Ok(items)
    }
}

/// Parse `<item><title>` elements out of an RSS document.
///
/// Items without a title are skipped. Stops after `max_items`.
///
/// # Errors
///
/// Returns [`SocialError::Xml`] if the XML is malformed.
pub fn parse_headlines(xml: &str, max_items: usize) -> Result<Vec<TrendItem>, SocialError> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut in_item = false;
    let mut in_title = false;
    let mut title = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"item" => {
                    in_item = true;
                    title.clear();
                }
                b"title" if in_item => in_title = true,
                _ => {}
            },
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"title" => in_title = false,
                b"item" if in_item => {
                    in_item = false;
                    let headline = title.trim();
                    if !headline.is_empty() {
                        items.push(TrendItem {
                            title: headline.to_string(),
                        });
                        if items.len() >= max_items {
                            break;
                        }
                    }
                }
                _ => {}
            },
            Ok(Event::Text(e)) if in_title => {
                title.push_str(&e.unescape().unwrap_or_default());
            }
            Ok(Event::CData(e)) if in_title => {
                title.push_str(&String::from_utf8_lossy(e.as_ref()));
            }
            Ok(Event::Eof) => break,
            Err(e) => return Err(SocialError::Xml(e)),
            _ => {}
        }
    }

    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_RSS: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<rss version="2.0">
  <channel>
    <title>Top stories - Google News</title>
    <item>
      <title>Bitcoin ETF inflows hit record - Reuters</title>
      <link>https://example.com/1</link>
    </item>
    <item>
      <title><![CDATA[Solana fees spike & memecoins rally]]></title>
      <link>https://example.com/2</link>
    </item>
    <item>
      <link>https://example.com/untitled</link>
    </item>
  </channel>
</rss>"#;

    #[test]
    fn parses_item_titles_only() {
        let items = parse_headlines(SAMPLE_RSS, 10).expect("should parse valid RSS");
        let titles: Vec<&str> = items.iter().map(|i| i.title.as_str()).collect();
        assert_eq!(
            titles,
            vec![
                "Bitcoin ETF inflows hit record - Reuters",
                "Solana fees spike & memecoins rally"
            ]
        );
    }

    #[test]
    fn channel_title_is_not_a_headline() {
        let items = parse_headlines(SAMPLE_RSS, 10).unwrap();
        assert!(items.iter().all(|i| !i.title.contains("Top stories")));
    }

    #[test]
    fn respects_max_items() {
        let items = parse_headlines(SAMPLE_RSS, 1).unwrap();
        assert_eq!(items.len(), 1);
    }

    #[test]
    fn unescapes_entities() {
        let xml = "<rss><channel><item><title>AT&amp;T &lt;3 crypto</title></item></channel></rss>";
        let items = parse_headlines(xml, 10).unwrap();
        assert_eq!(items[0].title, "AT&T <3 crypto");
    }

    #[test]
    fn empty_feed_returns_empty_vec() {
        let xml = r#"<?xml version="1.0"?><rss version="2.0"><channel></channel></rss>"#;
        assert!(parse_headlines(xml, 10).unwrap().is_empty());
    }
}
