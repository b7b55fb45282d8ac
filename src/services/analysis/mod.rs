// Credibility Scoring Engine
// Core analysis logic organized into specialized submodules:
// - lexicon: static trigger-phrase tables
// - sentiment: subjectivity/polarity assessment
// - signals: lexical signal detection against the lexicon tables
// - scoring: sub-score composition (language, evidence, source, claim, risk)
// - classifier: optional external zero-shot signal integration
// - verdict: final score, calibration, and three-way classification
// - explanation: natural-language summary and improvement suggestion
// - factors: structured record of every rule that fired

pub mod classifier;
pub mod explanation;
pub mod factors;
pub mod lexicon;
pub mod scoring;
pub mod sentiment;
pub mod signals;
pub mod verdict;

pub use classifier::{ClaimLabel, ClassifierClient, ExternalSignal};
pub use factors::{Factor, FactorKind, FactorLog, Rule};
pub use lexicon::RiskDomain;
pub use scoring::SubScores;
pub use sentiment::SentimentReading;
pub use signals::LexicalSignals;
pub use verdict::{Classification, Verdict};

use tracing::info;
use uuid::Uuid;

use crate::config::AppConfig;
use crate::models::AnalysisResponse;
use crate::services::news::NewsClient;

/// Per-process collaborators of the analysis pipeline. The engine itself is
/// stateless; both collaborators are optional and their absence only removes
/// the corresponding enrichment.
pub struct AnalysisContext {
    pub classifier: Option<ClassifierClient>,
    pub news: Option<NewsClient>,
}

impl AnalysisContext {
    pub fn from_config(config: &AppConfig) -> Self {
        if config.hf_api_key.is_none() {
            info!("[analysis] HF_API_KEY not set; external classifier disabled");
        }
        Self {
            classifier: config.hf_api_key.clone().map(ClassifierClient::new),
            news: Some(NewsClient::new()),
        }
    }

    /// No network collaborators; the heuristic-only path used by tests.
    pub fn offline() -> Self {
        Self {
            classifier: None,
            news: None,
        }
    }
}

/// Run the full pipeline over `text`: detect lexical signals and sentiment,
/// compose sub-scores, integrate the optional external signal, map the
/// verdict, and derive explanation, suggestion, and enrichments.
pub async fn analyze(text: &str, context: &AnalysisContext) -> AnalysisResponse {
    let request_id = Uuid::new_v4();
    let normalized = text.to_lowercase();

    let mut factors = FactorLog::new();
    let lexical = signals::detect(&normalized, &mut factors);
    let reading = sentiment::assess(text);

    let mut scores = scoring::compose(text, &reading, &lexical, &mut factors);

    if let Some(client) = &context.classifier {
        if let Some(signal) = client.classify(text).await {
            classifier::apply(&signal, &lexical, &mut scores, &mut factors);
        }
    }

    let verdict = verdict::map_verdict(&scores, &mut factors);
    let explanation = explanation::build_explanation(&verdict, &factors);
    let suggestion = explanation::build_suggestion(&scores);
    let verification_tools = explanation::verification_tools(verdict.classification);

    let related_news = match &context.news {
        Some(news) => news.related_news(text).await,
        None => Vec::new(),
    };

    info!(
        request_id = %request_id,
        classification = verdict.classification.as_str(),
        score = verdict.score,
        factor_count = factors.len(),
        "analysis.complete"
    );

    AnalysisResponse {
        classification: verdict.classification,
        confidence_real: verdict.confidence_real,
        confidence_fake: verdict.confidence_fake,
        factors: factors.render(),
        explanation,
        suggestion,
        related_news,
        verification_tools,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const REAL_SAMPLE: &str =
        "A peer-reviewed clinical trial published in a journal, the WHO stated results were confirmed.";
    const FAKE_SAMPLE: &str =
        "SHOCKING secret EXPOSED - they don't want you to know! 100% guaranteed miracle!!!!";

    #[tokio::test]
    async fn test_strong_citation_classifies_real() {
        let response = analyze(REAL_SAMPLE, &AnalysisContext::offline()).await;
        assert_eq!(response.classification, Classification::Real);
        assert!(response.confidence_real >= 0.75);
        assert!(!response.factors.is_empty());
        assert_eq!(response.verification_tools.len(), 2);
    }

    #[tokio::test]
    async fn test_sensational_text_classifies_fake() {
        let response = analyze(FAKE_SAMPLE, &AnalysisContext::offline()).await;
        assert_eq!(response.classification, Classification::Fake);
        assert!(response.factors.len() >= 5);
        assert!(response.confidence_fake > response.confidence_real);
        assert_eq!(response.verification_tools.len(), 3);
    }

    #[tokio::test]
    async fn test_confidences_sum_to_one() {
        for text in [REAL_SAMPLE, FAKE_SAMPLE, "The weather was mild on Tuesday."] {
            let response = analyze(text, &AnalysisContext::offline()).await;
            assert!(
                (response.confidence_real + response.confidence_fake - 1.0).abs() < 1e-9,
                "{text}"
            );
        }
    }

    #[tokio::test]
    async fn test_offline_analysis_is_deterministic() {
        let context = AnalysisContext::offline();
        let first = analyze(FAKE_SAMPLE, &context).await;
        let second = analyze(FAKE_SAMPLE, &context).await;
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_offline_path_is_complete_without_classifier() {
        let response = analyze("Sources say this might be true.", &AnalysisContext::offline()).await;
        assert!(!response.explanation.is_empty());
        assert!(!response.suggestion.is_empty());
        assert!(response.related_news.is_empty());
    }
}
