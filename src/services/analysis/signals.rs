// Lexical Signal Detector
// Scans normalized (lower-cased) text against the lexicon tables and records
// one factor per hit. Pure with respect to the input text and the static
// tables; the only side effect is factor accumulation.

use regex::Regex;
use std::collections::HashMap;
use std::sync::OnceLock;

use super::factors::{FactorLog, Rule};
use super::lexicon::{
    RiskDomain, ABSOLUTE_CLAIMS, ANECDOTAL, CAUTIOUS_LANGUAGE, CITATION_VERBS, MEDIUM_EVIDENCE,
    RISK_DOMAINS, SENSATIONAL, STRONG_EVIDENCE, TRUSTED_ENTITIES, VAGUE_ATTRIBUTION,
};

/// First trusted entity found together with a citation-context verb.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TrustedCitation {
    pub entity: &'static str,
    pub verb: &'static str,
}

/// Every lexicon category's matches for one input, in declaration order.
#[derive(Debug, Clone, Default)]
pub struct LexicalSignals {
    pub sensational: Vec<&'static str>,
    pub strong_evidence: Vec<&'static str>,
    pub medium_evidence: Vec<&'static str>,
    pub trusted_citation: Option<TrustedCitation>,
    pub vague_attribution: Vec<&'static str>,
    pub absolute_claims: Vec<&'static str>,
    pub cautious_language: Vec<&'static str>,
    pub risk_domain: Option<RiskDomain>,
    pub anecdotal: Vec<&'static str>,
    pub evidence_contradiction: bool,
}

impl LexicalSignals {
    /// True when no lexicon category matched at all.
    pub fn is_quiet(&self) -> bool {
        self.sensational.is_empty()
            && self.strong_evidence.is_empty()
            && self.medium_evidence.is_empty()
            && self.trusted_citation.is_none()
            && self.vague_attribution.is_empty()
            && self.absolute_claims.is_empty()
            && self.cautious_language.is_empty()
            && self.risk_domain.is_none()
            && self.anecdotal.is_empty()
    }
}

// Word-boundary patterns for single-token trusted entities, compiled once.
// "who" must not match inside "whoever"; multi-word names use containment.
static SINGLE_TOKEN_PATTERNS: OnceLock<HashMap<&'static str, Regex>> = OnceLock::new();

fn single_token_patterns() -> &'static HashMap<&'static str, Regex> {
    SINGLE_TOKEN_PATTERNS.get_or_init(|| {
        TRUSTED_ENTITIES
            .iter()
            .filter(|(trigger, _)| !trigger.contains(' '))
            .map(|(trigger, _)| {
                let pattern = Regex::new(&format!(r"\b{}\b", regex::escape(trigger)))
                    .expect("entity pattern is a literal word");
                (*trigger, pattern)
            })
            .collect()
    })
}

fn entity_present(normalized: &str, trigger: &'static str) -> bool {
    if trigger.contains(' ') {
        normalized.contains(trigger)
    } else {
        single_token_patterns()
            .get(trigger)
            .map(|re| re.is_match(normalized))
            .unwrap_or(false)
    }
}

fn collect(
    normalized: &str,
    table: &'static [(&'static str, &'static str)],
    rule: Rule,
    flag: bool,
    factors: &mut FactorLog,
) -> Vec<&'static str> {
    let mut hits = Vec::new();
    for (phrase, explanation) in table {
        if normalized.contains(phrase) {
            hits.push(*phrase);
            if flag {
                factors.flag(rule, *explanation);
            } else {
                factors.check(rule, *explanation);
            }
        }
    }
    hits
}

/// Detect all lexical signals in `normalized` (must already be lower-cased).
pub fn detect(normalized: &str, factors: &mut FactorLog) -> LexicalSignals {
    let sensational = collect(normalized, SENSATIONAL, Rule::SensationalLanguage, true, factors);
    let strong_evidence = collect(normalized, STRONG_EVIDENCE, Rule::StrongEvidence, false, factors);
    let medium_evidence = collect(normalized, MEDIUM_EVIDENCE, Rule::MediumEvidence, false, factors);

    // First entity/verb pair wins; the scan stops there.
    let mut trusted_citation = None;
    'entities: for (trigger, display) in TRUSTED_ENTITIES.iter().copied() {
        if entity_present(normalized, trigger) {
            for verb in CITATION_VERBS.iter().copied() {
                if normalized.contains(verb) {
                    trusted_citation = Some(TrustedCitation {
                        entity: display,
                        verb,
                    });
                    factors.check(
                        Rule::TrustedCitation,
                        format!("Attributes information to {display} ('{verb}')."),
                    );
                    break 'entities;
                }
            }
        }
    }

    let vague_attribution = if trusted_citation.is_none() {
        collect(normalized, VAGUE_ATTRIBUTION, Rule::VagueAttribution, true, factors)
    } else {
        VAGUE_ATTRIBUTION
            .iter()
            .filter(|(phrase, _)| normalized.contains(phrase))
            .map(|(phrase, _)| *phrase)
            .collect()
    };

    let absolute_claims = collect(normalized, ABSOLUTE_CLAIMS, Rule::AbsoluteClaim, true, factors);
    let cautious_language =
        collect(normalized, CAUTIOUS_LANGUAGE, Rule::CautiousLanguage, false, factors);

    let risk_domain = RISK_DOMAINS.iter().copied().find(|domain| {
        domain
            .keywords()
            .iter()
            .any(|keyword| normalized.contains(keyword))
    });

    // Anecdotal and domain matches are recorded here but penalized (and
    // logged) by the score composer, which knows the evidence context.
    let anecdotal: Vec<&'static str> = ANECDOTAL
        .iter()
        .filter(|(phrase, _)| normalized.contains(phrase))
        .map(|(phrase, _)| *phrase)
        .collect();

    let evidence_contradiction = normalized.contains("secret")
        && (normalized.contains("study") || normalized.contains("report"));

    LexicalSignals {
        sensational,
        strong_evidence,
        medium_evidence,
        trusted_citation,
        vague_attribution,
        absolute_claims,
        cautious_language,
        risk_domain,
        anecdotal,
        evidence_contradiction,
    }
}
