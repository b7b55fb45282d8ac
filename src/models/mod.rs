// FactCheck AI Data Models
// Request/response schemas for the analysis endpoints. Field names are
// frozen wire format (mixed camelCase / snake_case) that clients rely on.

use serde::{Deserialize, Serialize};

pub use crate::services::analysis::verdict::Classification;

// ============ Requests ============

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TextRequest {
    pub text: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

// ============ Response ============

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NewsItem {
    pub title: String,
    pub url: String,
    pub source: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VerificationTool {
    pub source: String,
    pub url: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AnalysisResponse {
    pub classification: Classification,
    #[serde(rename = "confidenceReal")]
    pub confidence_real: f64,
    #[serde(rename = "confidenceFake")]
    pub confidence_fake: f64,
    pub factors: Vec<String>,
    pub explanation: String,
    pub suggestion: String,
    pub related_news: Vec<NewsItem>,
    pub verification_tools: Vec<VerificationTool>,
}

// ============ Errors ============

/// JSON error body: `{"detail": ...}`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
