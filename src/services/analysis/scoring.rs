// Score Composer
// Turns detector output plus the sentiment reading into the five sub-scores.
// Each sub-score starts from a fixed base, accumulates additive adjustments,
// and is clamped to [0,100]; the risk penalty is only floored at 0.

use super::factors::{FactorLog, Rule};
use super::lexicon::RiskDomain;
use super::sentiment::SentimentReading;
use super::signals::LexicalSignals;

const SENSATIONAL_BASE_PENALTY: f64 = 15.0;
const SENSATIONAL_PER_HIT: f64 = 5.0;
const SUBJECTIVITY_LIMIT: f64 = 0.6;
const SUBJECTIVITY_PENALTY: f64 = 20.0;
const NEUTRAL_SUBJECTIVITY_LIMIT: f64 = 0.2;
const POLARITY_LIMIT: f64 = 0.8;
const POLARITY_PENALTY: f64 = 15.0;
const UPPERCASE_RATIO_LIMIT: f64 = 0.5;
const UPPERCASE_PENALTY: f64 = 20.0;
const UPPERCASE_MIN_CHARS: usize = 20;

const STRONG_EVIDENCE_BASE: f64 = 60.0;
const STRONG_EVIDENCE_PER_HIT: f64 = 10.0;
const MEDIUM_EVIDENCE_BASE: f64 = 30.0;
const MEDIUM_EVIDENCE_PER_HIT: f64 = 5.0;

const TRUSTED_SOURCE_SCORE: f64 = 70.0;
const VAGUE_BASE_PENALTY: f64 = 15.0;
const VAGUE_PER_EXTRA_HIT: f64 = 5.0;
const VAGUE_MAX_PENALTY: f64 = 25.0;

const CLAIM_BASE: f64 = 50.0;
const ABSOLUTE_BACKED_BONUS: f64 = 30.0;
const ABSOLUTE_UNSUPPORTED_PENALTY: f64 = 40.0;
const ABSOLUTE_EVIDENCE_FLOOR: f64 = 60.0;
const CAUTIOUS_BONUS: f64 = 20.0;

const DOMAIN_RISK_PENALTY: f64 = 15.0;
const DOMAIN_EVIDENCE_FLOOR: f64 = 40.0;
const ANECDOTE_PENALTY: f64 = 10.0;

/// The five sub-scores consumed by the classification mapper. Created fresh
/// per request; the external integrator may adjust them afterwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubScores {
    pub language_integrity: f64,
    pub evidence_quality: f64,
    pub source_specificity: f64,
    pub claim_robustness: f64,
    pub risk_penalty: f64,
}

fn clamp_score(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

fn uppercase_ratio(text: &str) -> f64 {
    let total = text.chars().count();
    if total == 0 {
        return 0.0;
    }
    let upper = text.chars().filter(|c| c.is_uppercase()).count();
    upper as f64 / total as f64
}

fn language_integrity(
    text: &str,
    reading: &SentimentReading,
    signals: &LexicalSignals,
    factors: &mut FactorLog,
) -> f64 {
    let mut score = 100.0;

    if !signals.sensational.is_empty() {
        // Per-hit explanations were already recorded by the detector.
        score -= SENSATIONAL_BASE_PENALTY + SENSATIONAL_PER_HIT * signals.sensational.len() as f64;
    }

    if reading.subjectivity > SUBJECTIVITY_LIMIT {
        score -= SUBJECTIVITY_PENALTY;
        factors.flag(
            Rule::HighSubjectivity,
            format!("Highly subjective tone (subjectivity {:.2}).", reading.subjectivity),
        );
    } else if reading.subjectivity < NEUTRAL_SUBJECTIVITY_LIMIT {
        factors.check(Rule::NeutralTone, "Tone appears neutral and objective.");
    }

    if reading.polarity.abs() > POLARITY_LIMIT {
        score -= POLARITY_PENALTY;
        factors.flag(
            Rule::ExtremeEmotion,
            format!("Extremely emotional language (polarity {:.2}).", reading.polarity),
        );
    }

    if text.chars().count() > UPPERCASE_MIN_CHARS && uppercase_ratio(text) > UPPERCASE_RATIO_LIMIT {
        score -= UPPERCASE_PENALTY;
        factors.flag(Rule::ExcessiveCaps, "Excessive use of capitalization detected.");
    }

    clamp_score(score)
}

fn evidence_quality(signals: &LexicalSignals, factors: &mut FactorLog) -> f64 {
    let mut score = if !signals.strong_evidence.is_empty() {
        STRONG_EVIDENCE_BASE + STRONG_EVIDENCE_PER_HIT * signals.strong_evidence.len() as f64
    } else if !signals.medium_evidence.is_empty() {
        MEDIUM_EVIDENCE_BASE + MEDIUM_EVIDENCE_PER_HIT * signals.medium_evidence.len() as f64
    } else {
        0.0
    };

    if signals.evidence_contradiction {
        score = 0.0;
        factors.warning(
            Rule::EvidenceContradiction,
            "Claims a 'secret' study or report; institutional research is published, not secret.",
        );
    }

    clamp_score(score)
}

fn source_specificity(signals: &LexicalSignals) -> f64 {
    let score = if signals.trusted_citation.is_some() {
        TRUSTED_SOURCE_SCORE
    } else if !signals.vague_attribution.is_empty() {
        let extra = (signals.vague_attribution.len() - 1) as f64;
        -(VAGUE_BASE_PENALTY + VAGUE_PER_EXTRA_HIT * extra).min(VAGUE_MAX_PENALTY)
    } else {
        0.0
    };

    clamp_score(score)
}

fn claim_robustness(
    signals: &LexicalSignals,
    evidence_quality: f64,
    factors: &mut FactorLog,
) -> f64 {
    let mut score = CLAIM_BASE;

    if let Some(first) = signals.absolute_claims.first() {
        if evidence_quality > ABSOLUTE_EVIDENCE_FLOOR {
            score += ABSOLUTE_BACKED_BONUS;
            factors.check(
                Rule::AbsoluteBacked,
                "Absolute claims are backed by strong evidence signals.",
            );
        } else {
            score -= ABSOLUTE_UNSUPPORTED_PENALTY;
            factors.flag(
                Rule::AbsoluteUnsupported,
                format!("Absolute claims ('{first}') lack supporting evidence."),
            );
        }
    }

    if !signals.cautious_language.is_empty() {
        // Per-hit explanations were already recorded by the detector.
        score += CAUTIOUS_BONUS;
    }

    clamp_score(score)
}

fn domain_risk_message(domain: RiskDomain) -> &'static str {
    match domain {
        RiskDomain::Health => "Unsupported medical claims in a high-risk health topic.",
        RiskDomain::Finance => "Unsupported financial claims promising returns.",
        RiskDomain::Elections => "Unsupported claims about election integrity.",
    }
}

fn risk_penalty(signals: &LexicalSignals, evidence_quality: f64, factors: &mut FactorLog) -> f64 {
    let mut penalty = 0.0;

    if let Some(domain) = signals.risk_domain {
        if evidence_quality < DOMAIN_EVIDENCE_FLOOR {
            penalty += DOMAIN_RISK_PENALTY;
            factors.warning(Rule::DomainRisk(domain), domain_risk_message(domain));
        }
    }

    if let Some(first) = signals.anecdotal.first() {
        let explanation = super::lexicon::ANECDOTAL
            .iter()
            .find(|(phrase, _)| phrase == first)
            .map(|(_, explanation)| *explanation)
            .unwrap_or("Relies on anecdotal evidence.");
        penalty += ANECDOTE_PENALTY;
        factors.flag(Rule::AnecdotalEvidence, explanation);
    }

    penalty.max(0.0)
}

/// Compose the five sub-scores from the detector output and the sentiment
/// reading. Evidence quality feeds the claim-robustness and risk rules, so
/// the computations run in that order.
pub fn compose(
    text: &str,
    reading: &SentimentReading,
    signals: &LexicalSignals,
    factors: &mut FactorLog,
) -> SubScores {
    let language_integrity = language_integrity(text, reading, signals, factors);
    let evidence_quality = evidence_quality(signals, factors);
    let source_specificity = source_specificity(signals);
    let claim_robustness = claim_robustness(signals, evidence_quality, factors);
    let risk_penalty = risk_penalty(signals, evidence_quality, factors);

    if signals.is_quiet() {
        factors.info(
            Rule::NoLexicalSignals,
            "No strong keyword triggers found; relying on linguistic structure.",
        );
    }

    SubScores {
        language_integrity,
        evidence_quality,
        source_specificity,
        claim_robustness,
        risk_penalty,
    }
}
