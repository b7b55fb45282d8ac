// External Credibility Signal Integrator
// Optional zero-shot classification of the claim style (fact / hypothesis /
// speculation / opinion) via the HuggingFace inference API. Any failure is a
// no-op: the heuristic path must produce a complete result without it.

use reqwest::Client;
use serde::{Deserialize, Serialize};
use std::env;
use std::time::Duration;
use tracing::warn;

use super::factors::{FactorLog, Rule};
use super::scoring::SubScores;
use super::signals::LexicalSignals;

const DEFAULT_MODEL_URL: &str =
    "https://api-inference.huggingface.co/models/facebook/bart-large-mnli";
const CANDIDATE_LABELS: [&str; 4] = ["fact", "hypothesis", "speculation", "opinion"];
const REQUEST_TIMEOUT_SECS: u64 = 6;

/// Signals below this confidence are ignored entirely.
const MIN_CONFIDENCE: f64 = 0.5;
const FACT_THRESHOLD: f64 = 0.75;
const HYPOTHESIS_THRESHOLD: f64 = 0.70;
const SPECULATION_THRESHOLD: f64 = 0.70;
const OPINION_THRESHOLD: f64 = 0.60;

const FACT_PENALTY: f64 = 30.0;
const FACT_BOOST: f64 = 20.0;
const HYPOTHESIS_PENALTY: f64 = 20.0;
const HYPOTHESIS_BOOST: f64 = 15.0;
const SPECULATION_PENALTY: f64 = 10.0;
const OPINION_EVIDENCE_CAP: f64 = 50.0;
const WEAK_EVIDENCE_LIMIT: f64 = 40.0;
const BARE_EVIDENCE_LIMIT: f64 = 20.0;

/// Below this language-integrity score the sensational rules have already
/// penalized the text; external penalties for the same weakness are withheld.
const LANGUAGE_GUARD: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClaimLabel {
    Fact,
    Hypothesis,
    Speculation,
    Opinion,
}

impl ClaimLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            ClaimLabel::Fact => "fact",
            ClaimLabel::Hypothesis => "hypothesis",
            ClaimLabel::Speculation => "speculation",
            ClaimLabel::Opinion => "opinion",
        }
    }

    fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "fact" => Some(ClaimLabel::Fact),
            "hypothesis" => Some(ClaimLabel::Hypothesis),
            "speculation" => Some(ClaimLabel::Speculation),
            "opinion" => Some(ClaimLabel::Opinion),
            _ => None,
        }
    }
}

/// Advisory result of the remote classification; never cached.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExternalSignal {
    pub label: ClaimLabel,
    pub confidence: f64,
}

#[derive(Debug, Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters,
}

#[derive(Debug, Serialize)]
struct ZeroShotParameters {
    candidate_labels: [&'static str; 4],
}

#[derive(Debug, Deserialize)]
struct ZeroShotResponse {
    #[serde(default)]
    labels: Vec<String>,
    #[serde(default)]
    scores: Vec<f64>,
}

pub struct ClassifierClient {
    client: Client,
    url: String,
    api_key: String,
}

impl ClassifierClient {
    pub fn new(api_key: String) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .unwrap_or_default();
        let url = env::var("HF_MODEL_URL").unwrap_or_else(|_| DEFAULT_MODEL_URL.to_string());
        Self { client, url, api_key }
    }

    /// Classify the claim style of `text`. Returns `None` on any failure,
    /// timeout, or unusable response; the caller treats that as absence.
    pub async fn classify(&self, text: &str) -> Option<ExternalSignal> {
        let request = ZeroShotRequest {
            inputs: text,
            parameters: ZeroShotParameters {
                candidate_labels: CANDIDATE_LABELS,
            },
        };

        let response = match self
            .client
            .post(&self.url)
            .bearer_auth(&self.api_key)
            .json(&request)
            .send()
            .await
        {
            Ok(response) => response,
            Err(e) => {
                warn!("[classifier] request failed: {}", e);
                return None;
            }
        };

        if !response.status().is_success() {
            warn!("[classifier] non-success status: {}", response.status());
            return None;
        }

        let parsed: ZeroShotResponse = match response.json().await {
            Ok(parsed) => parsed,
            Err(e) => {
                warn!("[classifier] response parse failed: {}", e);
                return None;
            }
        };

        let label = parsed.labels.first().and_then(|l| ClaimLabel::from_label(l))?;
        let confidence = parsed.scores.first().copied()?;
        Some(ExternalSignal { label, confidence })
    }
}

fn annotate_advisory(signal: &ExternalSignal, factors: &mut FactorLog) {
    factors.info(
        Rule::NliAdvisory,
        format!(
            "NLI Analysis: labeled '{}' at {:.2} confidence (advisory only).",
            signal.label.as_str(),
            signal.confidence
        ),
    );
}

/// Apply a returned external signal to the sub-scores. Pure with respect to
/// its inputs; skipping this step entirely still yields a valid result.
pub fn apply(
    signal: &ExternalSignal,
    lexical: &LexicalSignals,
    scores: &mut SubScores,
    factors: &mut FactorLog,
) {
    if signal.confidence < MIN_CONFIDENCE {
        return;
    }

    // Computed once so every branch shares the same double-penalty guard.
    let language_already_low = scores.language_integrity < LANGUAGE_GUARD;

    match signal.label {
        ClaimLabel::Fact => {
            if signal.confidence < FACT_THRESHOLD {
                annotate_advisory(signal, factors);
            } else if scores.evidence_quality < WEAK_EVIDENCE_LIMIT {
                if language_already_low {
                    factors.info(
                        Rule::NliFactualGap,
                        "NLI Analysis: stated as fact without evidence; language score already reflects the weakness.",
                    );
                } else {
                    scores.risk_penalty += FACT_PENALTY;
                    factors.warning(
                        Rule::NliFactualGap,
                        "NLI Analysis: presented as established fact but lexical evidence is thin.",
                    );
                }
            } else {
                scores.evidence_quality = (scores.evidence_quality + FACT_BOOST).min(100.0);
                factors.check(
                    Rule::NliFactualSupport,
                    "NLI Analysis: factual framing consistent with the cited evidence.",
                );
            }
        }
        ClaimLabel::Hypothesis => {
            if signal.confidence < HYPOTHESIS_THRESHOLD {
                annotate_advisory(signal, factors);
            } else if !lexical.absolute_claims.is_empty() {
                if language_already_low {
                    factors.info(
                        Rule::NliHypothesisContradiction,
                        "NLI Analysis: hypothesis framing contradicts absolute wording; language score already reflects the weakness.",
                    );
                } else {
                    scores.risk_penalty += HYPOTHESIS_PENALTY;
                    factors.warning(
                        Rule::NliHypothesisContradiction,
                        "NLI Analysis: hypothesis framing contradicts the text's absolute claims.",
                    );
                }
            } else {
                scores.claim_robustness = (scores.claim_robustness + HYPOTHESIS_BOOST).min(100.0);
                factors.check(
                    Rule::NliHonestUncertainty,
                    "NLI Analysis: hypothesis framing matches the cautious claims (honest uncertainty).",
                );
            }
        }
        ClaimLabel::Speculation => {
            if signal.confidence < SPECULATION_THRESHOLD {
                annotate_advisory(signal, factors);
            } else if scores.evidence_quality < BARE_EVIDENCE_LIMIT {
                if language_already_low {
                    factors.info(
                        Rule::NliSpeculation,
                        "NLI Analysis: speculative framing; language score already reflects the weakness.",
                    );
                } else {
                    scores.risk_penalty += SPECULATION_PENALTY;
                    factors.warning(
                        Rule::NliSpeculation,
                        "NLI Analysis: speculative framing with no supporting evidence.",
                    );
                }
            } else {
                factors.info(Rule::NliSpeculation, "NLI Analysis: speculative framing detected.");
            }
        }
        ClaimLabel::Opinion => {
            if signal.confidence < OPINION_THRESHOLD {
                annotate_advisory(signal, factors);
            } else {
                if scores.evidence_quality > OPINION_EVIDENCE_CAP {
                    scores.evidence_quality = OPINION_EVIDENCE_CAP;
                }
                factors.info(
                    Rule::NliOpinionCap,
                    "NLI Analysis: opinion content; evidence quality capped at 50.",
                );
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_scores() -> SubScores {
        SubScores {
            language_integrity: 80.0,
            evidence_quality: 30.0,
            source_specificity: 0.0,
            claim_robustness: 50.0,
            risk_penalty: 0.0,
        }
    }

    fn signal(label: ClaimLabel, confidence: f64) -> ExternalSignal {
        ExternalSignal { label, confidence }
    }

    #[test]
    fn test_low_confidence_is_ignored() {
        let mut scores = base_scores();
        let mut factors = FactorLog::new();
        apply(
            &signal(ClaimLabel::Fact, 0.45),
            &LexicalSignals::default(),
            &mut scores,
            &mut factors,
        );
        assert_eq!(scores, base_scores());
        assert!(factors.is_empty());
    }

    #[test]
    fn test_fact_without_evidence_penalized() {
        let mut scores = base_scores();
        let mut factors = FactorLog::new();
        apply(
            &signal(ClaimLabel::Fact, 0.9),
            &LexicalSignals::default(),
            &mut scores,
            &mut factors,
        );
        assert_eq!(scores.risk_penalty, FACT_PENALTY);
        assert!(factors.fired(Rule::NliFactualGap));
    }

    #[test]
    fn test_fact_penalty_withheld_when_language_already_low() {
        let mut scores = SubScores {
            language_integrity: 35.0,
            ..base_scores()
        };
        let mut factors = FactorLog::new();
        apply(
            &signal(ClaimLabel::Fact, 0.9),
            &LexicalSignals::default(),
            &mut scores,
            &mut factors,
        );
        assert_eq!(scores.risk_penalty, 0.0);
        assert!(factors.fired(Rule::NliFactualGap));
    }

    #[test]
    fn test_fact_with_evidence_boosted() {
        let mut scores = SubScores {
            evidence_quality: 60.0,
            ..base_scores()
        };
        let mut factors = FactorLog::new();
        apply(
            &signal(ClaimLabel::Fact, 0.8),
            &LexicalSignals::default(),
            &mut scores,
            &mut factors,
        );
        assert_eq!(scores.evidence_quality, 80.0);
        assert!(factors.fired(Rule::NliFactualSupport));
    }

    #[test]
    fn test_hypothesis_contradiction_with_absolute_claims() {
        let mut scores = base_scores();
        let mut factors = FactorLog::new();
        let lexical = LexicalSignals {
            absolute_claims: vec!["definitely"],
            ..LexicalSignals::default()
        };
        apply(&signal(ClaimLabel::Hypothesis, 0.8), &lexical, &mut scores, &mut factors);
        assert_eq!(scores.risk_penalty, HYPOTHESIS_PENALTY);
        assert!(factors.fired(Rule::NliHypothesisContradiction));
    }

    #[test]
    fn test_hypothesis_rewards_honest_uncertainty() {
        let mut scores = base_scores();
        let mut factors = FactorLog::new();
        apply(
            &signal(ClaimLabel::Hypothesis, 0.8),
            &LexicalSignals::default(),
            &mut scores,
            &mut factors,
        );
        assert_eq!(scores.claim_robustness, 65.0);
        assert!(factors.fired(Rule::NliHonestUncertainty));
    }

    #[test]
    fn test_opinion_caps_evidence() {
        let mut scores = SubScores {
            evidence_quality: 90.0,
            ..base_scores()
        };
        let mut factors = FactorLog::new();
        apply(
            &signal(ClaimLabel::Opinion, 0.7),
            &LexicalSignals::default(),
            &mut scores,
            &mut factors,
        );
        assert_eq!(scores.evidence_quality, OPINION_EVIDENCE_CAP);
        assert!(factors.fired(Rule::NliOpinionCap));
    }

    #[test]
    fn test_between_floor_and_threshold_is_advisory() {
        let mut scores = base_scores();
        let mut factors = FactorLog::new();
        apply(
            &signal(ClaimLabel::Fact, 0.6),
            &LexicalSignals::default(),
            &mut scores,
            &mut factors,
        );
        assert_eq!(scores, base_scores());
        assert!(factors.fired(Rule::NliAdvisory));
    }
}
