// Explanation & Suggestion Generator
// Derives the natural-language summary and one improvement suggestion from
// the fired rules and sub-scores. Rule identifiers drive the selection; the
// factor strings themselves are never substring-matched.

use super::factors::{FactorLog, Rule};
use super::lexicon::RiskDomain;
use super::scoring::SubScores;
use super::verdict::{Classification, Verdict};
use crate::models::VerificationTool;

const LOW_EVIDENCE_LIMIT: f64 = 40.0;
const LOW_SOURCE_LIMIT: f64 = 40.0;
const LOW_LANGUAGE_LIMIT: f64 = 60.0;
const LOW_CLAIM_LIMIT: f64 = 50.0;
const MAX_REASONS: usize = 3;

fn domain_reason(domain: RiskDomain) -> &'static str {
    match domain {
        RiskDomain::Health => "it makes medical claims without cited evidence",
        RiskDomain::Finance => "it makes financial claims without cited evidence",
        RiskDomain::Elections => "it makes election claims without cited evidence",
    }
}

/// Ordered reason fragments for contradictory signals.
fn negative_reasons(factors: &FactorLog) -> Vec<&'static str> {
    let mut reasons = Vec::new();
    if let Some(domain) = factors.domain_risk() {
        reasons.push(domain_reason(domain));
    }
    if factors.fired(Rule::SensationalLanguage) {
        reasons.push("it uses sensationalist wording");
    }
    if factors.fired(Rule::EvidenceContradiction) {
        reasons.push("it appeals to a contradictory 'secret' study");
    }
    if factors.fired(Rule::HighSubjectivity) {
        reasons.push("its tone is highly subjective");
    }
    if factors.fired(Rule::ExtremeEmotion) {
        reasons.push("its language is extremely emotional");
    }
    if factors.fired(Rule::ExcessiveCaps) {
        reasons.push("it shouts in capital letters");
    }
    if factors.fired(Rule::AbsoluteUnsupported) {
        reasons.push("it makes absolute claims without supporting evidence");
    }
    if factors.fired(Rule::VagueAttribution) {
        reasons.push("its sources are vague and unverifiable");
    }
    if factors.fired(Rule::AnecdotalEvidence) {
        reasons.push("it leans on anecdotal evidence");
    }
    if factors.fired(Rule::NliFactualGap)
        || factors.fired(Rule::NliHypothesisContradiction)
        || factors.fired(Rule::NliSpeculation)
    {
        reasons.push("the NLI Analysis of its claim style raised concerns");
    }
    reasons
}

/// Ordered reason fragments for supportive signals.
fn positive_reasons(factors: &FactorLog) -> Vec<&'static str> {
    let mut reasons = Vec::new();
    if factors.fired(Rule::StrongEvidence) {
        reasons.push("it cites research-grade evidence");
    }
    if factors.fired(Rule::TrustedCitation) {
        reasons.push("it attributes information to a recognized institution");
    }
    if factors.fired(Rule::MediumEvidence) {
        reasons.push("it references structured reporting");
    }
    if factors.fired(Rule::CautiousLanguage) {
        reasons.push("its claims are phrased with appropriate caution");
    }
    if factors.fired(Rule::NeutralTone) {
        reasons.push("its tone is neutral and objective");
    }
    if factors.fired(Rule::NliFactualSupport) || factors.fired(Rule::NliHonestUncertainty) {
        reasons.push("the NLI Analysis supports its claim style");
    }
    reasons
}

fn join_reasons(reasons: &[&str]) -> String {
    reasons
        .iter()
        .take(MAX_REASONS)
        .copied()
        .collect::<Vec<_>>()
        .join("; ")
}

/// Compose the explanation, templated by the classification.
pub fn build_explanation(verdict: &Verdict, factors: &FactorLog) -> String {
    let negatives = negative_reasons(factors);
    let positives = positive_reasons(factors);

    match verdict.classification {
        Classification::Real => {
            let reasons = if positives.is_empty() {
                "no contradictory markers were detected".to_string()
            } else {
                join_reasons(&positives)
            };
            format!(
                "This content carries strong credibility markers: {} (credibility score {:.0}/100).",
                reasons, verdict.score
            )
        }
        Classification::Fake => {
            let reasons = if negatives.is_empty() {
                "its overall signal profile matches unreliable content".to_string()
            } else {
                join_reasons(&negatives)
            };
            format!(
                "This content shows patterns commonly associated with misinformation: {} (credibility score {:.0}/100).",
                reasons, verdict.score
            )
        }
        Classification::Unverified => {
            let reasons = if negatives.is_empty() && positives.is_empty() {
                "too few lexical signals to lean either way".to_string()
            } else {
                let mut mixed: Vec<&str> = Vec::new();
                mixed.extend(positives.iter().take(1));
                mixed.extend(negatives.iter().take(2));
                join_reasons(&mixed)
            };
            format!(
                "This content could not be confidently verified: {} (credibility score {:.0}/100).",
                reasons, verdict.score
            )
        }
    }
}

/// Fixed priority chain; the first matching condition wins.
pub fn build_suggestion(scores: &SubScores) -> String {
    if scores.risk_penalty > 0.0 {
        "Cite clinical trials, official reports, or regulatory findings when making high-risk claims."
    } else if scores.evidence_quality < LOW_EVIDENCE_LIMIT {
        "Link to a published study or primary source that supports the claim."
    } else if scores.source_specificity < LOW_SOURCE_LIMIT {
        "Name the specific organizations behind the information (e.g., WHO, Reuters) instead of unnamed sources."
    } else if scores.language_integrity < LOW_LANGUAGE_LIMIT {
        "Reduce sensational wording and let verifiable detail carry the message."
    } else if scores.claim_robustness < LOW_CLAIM_LIMIT {
        "Replace absolute wording with cautious language that matches the strength of the evidence."
    } else {
        "Add verifiable detail such as dates, named officials, and links to original sources."
    }
    .to_string()
}

/// Static fact-checking resources, selected by verdict.
pub fn verification_tools(classification: Classification) -> Vec<VerificationTool> {
    let tools: &[(&str, &str)] = match classification {
        Classification::Real => &[
            ("Reuters Fact Check", "https://www.reuters.com/fact-check"),
            ("AP News Verification", "https://apnews.com/hub/ap-fact-check"),
        ],
        _ => &[
            ("Snopes Search", "https://www.snopes.com/"),
            ("PolitiFact", "https://www.politifact.com/"),
            (
                "Google Fact Check",
                "https://toolbox.google.com/factcheck/explorer",
            ),
        ],
    };

    tools
        .iter()
        .map(|(source, url)| VerificationTool {
            source: source.to_string(),
            url: url.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scores(
        language: f64,
        evidence: f64,
        source: f64,
        claim: f64,
        risk: f64,
    ) -> SubScores {
        SubScores {
            language_integrity: language,
            evidence_quality: evidence,
            source_specificity: source,
            claim_robustness: claim,
            risk_penalty: risk,
        }
    }

    #[test]
    fn test_suggestion_priority_chain() {
        // Risk penalty outranks everything else.
        let s = build_suggestion(&scores(10.0, 0.0, 0.0, 0.0, 15.0));
        assert!(s.contains("high-risk"));

        let s = build_suggestion(&scores(10.0, 0.0, 0.0, 0.0, 0.0));
        assert!(s.contains("published study"));

        let s = build_suggestion(&scores(10.0, 80.0, 0.0, 0.0, 0.0));
        assert!(s.contains("organizations"));

        let s = build_suggestion(&scores(10.0, 80.0, 70.0, 0.0, 0.0));
        assert!(s.contains("sensational"));

        let s = build_suggestion(&scores(90.0, 80.0, 70.0, 10.0, 0.0));
        assert!(s.contains("cautious language"));

        let s = build_suggestion(&scores(90.0, 80.0, 70.0, 80.0, 0.0));
        assert!(s.contains("verifiable detail"));
    }

    #[test]
    fn test_explanation_mentions_domain_risk() {
        use crate::services::analysis::lexicon::RiskDomain;
        use crate::services::analysis::verdict::map_verdict;

        let mut factors = FactorLog::new();
        factors.warning(
            Rule::DomainRisk(RiskDomain::Health),
            "Unsupported medical claims in a high-risk health topic.",
        );
        let verdict = map_verdict(&scores(30.0, 0.0, 0.0, 10.0, 15.0), &mut factors);
        let explanation = build_explanation(&verdict, &factors);
        assert!(explanation.contains("medical claims"), "{explanation}");
        assert!(explanation.contains("misinformation"), "{explanation}");
    }

    #[test]
    fn test_tools_depend_on_verdict() {
        let real = verification_tools(Classification::Real);
        assert_eq!(real.len(), 2);
        assert!(real[0].source.contains("Reuters"));

        let fake = verification_tools(Classification::Fake);
        assert_eq!(fake.len(), 3);
        assert!(fake.iter().any(|t| t.source.contains("Snopes")));

        let unverified = verification_tools(Classification::Unverified);
        assert_eq!(unverified.len(), 3);
    }
}
