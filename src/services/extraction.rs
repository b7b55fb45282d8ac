// Page Extraction Service
// Fetches an article URL and reduces it to a single analyzable text blob:
// title + meta description + meaningful paragraphs.

use reqwest::Client;
use scraper::{Html, Selector};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

const FETCH_TIMEOUT_SECS: u64 = 10;
const USER_AGENT: &str = "Mozilla/5.0 (compatible; FactCheckAI/0.1)";

/// Paragraphs shorter than this are treated as navigation/boilerplate.
const MIN_PARAGRAPH_CHARS: usize = 80;
/// Raw-paragraph fallback size when nothing clears the floor.
const FALLBACK_PARAGRAPHS: usize = 5;
/// Below this the page did not yield enough text to analyze.
const MIN_BLOB_CHARS: usize = 50;

#[derive(Debug, Error)]
pub enum ExtractError {
    #[error("Failed to fetch URL: {0}")]
    Fetch(#[from] reqwest::Error),
    #[error("Could not extract text.")]
    TooShort,
}

pub struct PageFetcher {
    client: Client,
}

impl Default for PageFetcher {
    fn default() -> Self {
        Self::new()
    }
}

impl PageFetcher {
    pub fn new() -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(FETCH_TIMEOUT_SECS))
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_default();
        Self { client }
    }

    /// Fetch `url` and extract its analyzable text.
    pub async fn extract_article(&self, url: &str) -> Result<String, ExtractError> {
        let response = self.client.get(url).send().await?.error_for_status()?;
        let body = response.text().await?;
        let blob = extract_from_html(&body);

        if blob.chars().count() < MIN_BLOB_CHARS {
            return Err(ExtractError::TooShort);
        }

        info!("[extraction] {} -> {} chars", url, blob.chars().count());
        Ok(blob)
    }
}

fn element_text(html: &Html, selector: &Selector) -> Vec<String> {
    html.select(selector)
        .map(|el| {
            el.text()
                .collect::<String>()
                .split_whitespace()
                .collect::<Vec<_>>()
                .join(" ")
        })
        .filter(|t| !t.is_empty())
        .collect()
}

/// Reduce an HTML document to title + meta description + body paragraphs.
/// Paragraphs below the length floor are dropped; if none qualify the first
/// few raw paragraphs are kept instead.
pub fn extract_from_html(body: &str) -> String {
    let document = Html::parse_document(body);

    let title_selector = Selector::parse("title").expect("static selector");
    let meta_selector = Selector::parse(r#"meta[name="description"]"#).expect("static selector");
    let paragraph_selector = Selector::parse("p").expect("static selector");

    let title = element_text(&document, &title_selector)
        .into_iter()
        .next()
        .unwrap_or_default();

    let description = document
        .select(&meta_selector)
        .next()
        .and_then(|el| el.value().attr("content"))
        .map(|c| c.split_whitespace().collect::<Vec<_>>().join(" "))
        .unwrap_or_default();

    let paragraphs = element_text(&document, &paragraph_selector);
    let meaningful: Vec<String> = paragraphs
        .iter()
        .filter(|p| p.chars().count() >= MIN_PARAGRAPH_CHARS)
        .cloned()
        .collect();

    let body_text = if meaningful.is_empty() {
        paragraphs
            .into_iter()
            .take(FALLBACK_PARAGRAPHS)
            .collect::<Vec<_>>()
            .join(" ")
    } else {
        meaningful.join(" ")
    };

    [title, description, body_text]
        .into_iter()
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_title_meta_and_long_paragraphs() {
        let html = r#"<html><head>
            <title>Vaccine Study Released</title>
            <meta name="description" content="Peer-reviewed results published today.">
          </head><body>
            <p>Menu</p>
            <p>This is a long article paragraph describing the clinical trial results in detail, easily clearing the boilerplate length floor used by the extractor.</p>
          </body></html>"#;
        let blob = extract_from_html(html);
        assert!(blob.starts_with("Vaccine Study Released"));
        assert!(blob.contains("Peer-reviewed results published today."));
        assert!(blob.contains("clinical trial results"));
        assert!(!blob.contains("Menu"));
    }

    #[test]
    fn test_fallback_to_raw_paragraphs() {
        let html = "<html><body><p>one</p><p>two</p><p>three</p><p>four</p><p>five</p><p>six</p></body></html>";
        let blob = extract_from_html(html);
        assert_eq!(blob, "one two three four five");
    }

    #[test]
    fn test_whitespace_is_collapsed() {
        let html = "<html><head><title>A   Title\n With Breaks</title></head><body></body></html>";
        assert_eq!(extract_from_html(html), "A Title With Breaks");
    }
}
