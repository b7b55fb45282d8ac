// Related News Retrieval
// Searches Google News RSS for headlines related to the analyzed text.
// Best-effort: every failure path yields an empty list, never an error.

use quick_xml::events::Event;
use quick_xml::Reader;
use reqwest::Client;
use std::time::Duration;
use tracing::warn;

use crate::models::NewsItem;

const RSS_SEARCH_URL: &str = "https://news.google.com/rss/search";
const FETCH_TIMEOUT_SECS: u64 = 4;
const MAX_ITEMS: usize = 3;
const MAX_QUERY_WORDS: usize = 12;

const STOP_WORDS: &[&str] = &[
    "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with",
];

pub struct NewsClient {
    client: Client,
}

impl Default for NewsClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NewsClient {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Top related headlines for `text`, or an empty list on any failure.
    pub async fn related_news(&self, text: &str) -> Vec<NewsItem> {
        let Some(query) = build_query(text) else {
            return Vec::new();
        };

        let response = match self
            .client
            .get(RSS_SEARCH_URL)
            .query(&[("q", query.as_str()), ("hl", "en-US"), ("gl", "US"), ("ceid", "US:en")])
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("[news] search request failed: {}", e);
                return Vec::new();
            }
        };

        if !response.status().is_success() {
            warn!("[news] search returned status {}", response.status());
            return Vec::new();
        }

        match response.text().await {
            Ok(body) => parse_rss(&body),
            Err(e) => {
                warn!("[news] failed to read feed body: {}", e);
                Vec::new()
            }
        }
    }
}

/// Build a search query from the first meaningful words of the text, the way
/// the analysis keeps feeds short: stop words and non-alphanumeric tokens are
/// dropped, the rest is capped at twelve words.
fn build_query(text: &str) -> Option<String> {
    let words: Vec<&str> = text
        .split_whitespace()
        .filter(|w| w.chars().all(|c| c.is_alphanumeric()))
        .filter(|w| !STOP_WORDS.contains(&w.to_lowercase().as_str()))
        .take(MAX_QUERY_WORDS)
        .collect();

    if words.is_empty() {
        None
    } else {
        Some(words.join(" "))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RssField {
    Title,
    Link,
    Source,
}

/// Pull `(title, link, source)` triples out of the RSS `<item>` elements.
fn parse_rss(xml: &str) -> Vec<NewsItem> {
    let mut reader = Reader::from_str(xml);
    reader.config_mut().trim_text(true);

    let mut items = Vec::new();
    let mut in_item = false;
    let mut field: Option<RssField> = None;
    let mut title = String::new();
    let mut link = String::new();
    let mut source = String::new();

    loop {
        match reader.read_event() {
            Ok(Event::Start(e)) => match e.name().as_ref() {
                b"item" => {
                    in_item = true;
                    title.clear();
                    link.clear();
                    source.clear();
                }
                b"title" if in_item => field = Some(RssField::Title),
                b"link" if in_item => field = Some(RssField::Link),
                b"source" if in_item => field = Some(RssField::Source),
                _ => field = None,
            },
            Ok(Event::Text(t)) if in_item => {
                if let Some(field) = field {
                    let value = t.unescape().unwrap_or_default().into_owned();
                    match field {
                        RssField::Title => title.push_str(&value),
                        RssField::Link => link.push_str(&value),
                        RssField::Source => source.push_str(&value),
                    }
                }
            }
            Ok(Event::CData(t)) if in_item => {
                if let Some(field) = field {
                    let value = String::from_utf8_lossy(&t.into_inner()).into_owned();
                    match field {
                        RssField::Title => title.push_str(&value),
                        RssField::Link => link.push_str(&value),
                        RssField::Source => source.push_str(&value),
                    }
                }
            }
            Ok(Event::End(e)) => match e.name().as_ref() {
                b"item" => {
                    in_item = false;
                    items.push(NewsItem {
                        title: if title.is_empty() { "No Title".to_string() } else { title.clone() },
                        url: if link.is_empty() { "#".to_string() } else { link.clone() },
                        source: if source.is_empty() {
                            "News Source".to_string()
                        } else {
                            source.clone()
                        },
                    });
                    if items.len() >= MAX_ITEMS {
                        break;
                    }
                }
                _ => field = None,
            },
            Ok(Event::Eof) => break,
            Err(e) => {
                warn!("[news] feed parse error: {}", e);
                break;
            }
            _ => {}
        }
    }

    items
}
