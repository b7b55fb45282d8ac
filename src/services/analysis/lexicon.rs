// Lexicon Tables
// Static trigger-phrase tables for the credibility scoring engine.
// Phrases are stored lowercase and checked by case-insensitive substring
// containment against the normalized input; declaration order is match order.

/// Sensational / manipulative language markers.
pub const SENSATIONAL: &[(&str, &str)] = &[
    ("shocking", "Uses emotionally charged language ('shocking')."),
    ("secret", "Claims to reveal 'secret' information."),
    ("exposed", "Uses sensationalist terms like 'exposed'."),
    (
        "they don't want you to know",
        "Appeals to conspiracy narratives.",
    ),
    ("guaranteed", "Uses marketing-style language ('guaranteed')."),
    ("share before deleted", "Creates artificial urgency."),
    ("miracle", "Promises 'miracle' results."),
    ("censored", "Claims censorship to build false credibility."),
    ("you won't believe", "Uses clickbait framing."),
    ("wake up", "Uses rhetoric aimed at in-group persuasion."),
];

/// Strong evidence markers: formal research language.
pub const STRONG_EVIDENCE: &[(&str, &str)] = &[
    ("peer-reviewed", "References peer-reviewed research."),
    ("clinical trial", "References a clinical trial."),
    ("published in", "States where the findings were published."),
    ("meta-analysis", "References a meta-analysis."),
    ("randomized controlled", "References a randomized controlled design."),
    ("double-blind", "References a double-blind methodology."),
];

/// Medium evidence markers: structured-reporting language.
pub const MEDIUM_EVIDENCE: &[(&str, &str)] = &[
    ("study", "Mentions a research 'study'."),
    ("report", "References a 'report' or structured document."),
    ("according to", "Attributes information to a source."),
    ("official", "Cites 'official' sources."),
    ("statement", "References a formal statement."),
    ("analysis", "Indicates analytical depth."),
    ("researchers", "Mentions researchers behind the claim."),
    ("survey", "References survey data."),
];

/// Trusted entities as `(trigger, display name)`. Single-token triggers are
/// matched on word boundaries; multi-word triggers by plain containment.
pub const TRUSTED_ENTITIES: &[(&str, &str)] = &[
    ("world health organization", "the World Health Organization"),
    ("who", "the World Health Organization"),
    ("associated press", "the Associated Press"),
    ("united nations", "the United Nations"),
    ("reuters", "Reuters"),
    ("cdc", "the CDC"),
    ("fda", "the FDA"),
    ("nih", "the NIH"),
    ("nasa", "NASA"),
    ("bbc", "the BBC"),
];

/// Citation-context verbs that must co-occur with a trusted entity.
pub const CITATION_VERBS: &[&str] = &[
    "said",
    "stated",
    "announced",
    "confirmed",
    "reported",
    "according to",
    "published",
    "told",
];

/// Vague attribution phrases: sources that cannot be checked.
pub const VAGUE_ATTRIBUTION: &[(&str, &str)] = &[
    ("some people say", "Attributes claims to unnamed people."),
    ("sources say", "Cites anonymous 'sources'."),
    ("experts claim", "Cites unnamed 'experts'."),
    ("it is said", "Uses passive, unattributable phrasing."),
    ("many believe", "Substitutes popularity for attribution."),
    ("people are saying", "Cites an unverifiable crowd."),
    ("insiders reveal", "Cites anonymous 'insiders'."),
    ("studies show", "Invokes studies without naming any."),
];

/// Absolute-certainty claim words.
pub const ABSOLUTE_CLAIMS: &[(&str, &str)] = &[
    ("100%", "Makes absolute claims ('100%')."),
    ("definitely", "Claims certainty ('definitely')."),
    ("undeniable", "Presents the claim as 'undeniable'."),
    ("proven fact", "Asserts a 'proven fact'."),
    ("certainly", "Claims certainty ('certainly')."),
    ("always", "Uses the absolute 'always'."),
    ("never", "Uses the absolute 'never'."),
    ("no doubt", "Rules out doubt entirely."),
];

/// Cautious-language words: hedged, evidence-proportionate phrasing.
pub const CAUTIOUS_LANGUAGE: &[(&str, &str)] = &[
    ("might", "Uses cautious language ('might')."),
    ("could", "Uses cautious language ('could')."),
    ("may be", "Uses cautious language ('may be')."),
    ("suggests", "Frames findings as suggestive, not final."),
    ("appears to", "Uses hedged phrasing ('appears to')."),
    ("possibly", "Acknowledges uncertainty ('possibly')."),
    ("preliminary", "Labels the findings preliminary."),
    ("reportedly", "Flags secondhand information ('reportedly')."),
];

/// High-risk topic domains, evaluated in declaration order; first match wins.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskDomain {
    Health,
    Finance,
    Elections,
}

impl RiskDomain {
    pub fn as_str(self) -> &'static str {
        match self {
            RiskDomain::Health => "health",
            RiskDomain::Finance => "finance",
            RiskDomain::Elections => "elections",
        }
    }

    pub fn keywords(self) -> &'static [&'static str] {
        match self {
            RiskDomain::Health => HEALTH_KEYWORDS,
            RiskDomain::Finance => FINANCE_KEYWORDS,
            RiskDomain::Elections => ELECTION_KEYWORDS,
        }
    }
}

/// Priority order for domain matching.
pub const RISK_DOMAINS: &[RiskDomain] = &[
    RiskDomain::Health,
    RiskDomain::Finance,
    RiskDomain::Elections,
];

const HEALTH_KEYWORDS: &[&str] = &[
    "vaccine", "cure", "cancer", "covid", "coronavirus", "treatment", "remedy",
    "disease", "immune", "detox",
];

const FINANCE_KEYWORDS: &[&str] = &[
    "crypto", "bitcoin", "investment", "stock market", "get rich", "trading",
    "forex", "double your money",
];

const ELECTION_KEYWORDS: &[&str] = &[
    "election", "ballot", "voter fraud", "rigged", "polling", "recount",
];

/// Anecdotal-evidence phrases; they add a fixed risk penalty.
pub const ANECDOTAL: &[(&str, &str)] = &[
    ("my friend", "Relies on anecdotal evidence ('my friend')."),
    ("a friend of mine", "Relies on anecdotal evidence ('a friend of mine')."),
    ("i heard", "Relies on hearsay ('I heard')."),
    ("someone told me", "Relies on hearsay ('someone told me')."),
    ("my cousin", "Relies on anecdotal evidence ('my cousin')."),
    ("i know someone", "Relies on anecdotal evidence ('I know someone')."),
];

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_lowercase(table: &[(&str, &str)]) {
        for (phrase, _) in table {
            assert_eq!(*phrase, phrase.to_lowercase(), "phrase must be lowercase: {phrase}");
        }
    }

    #[test]
    fn test_tables_are_lowercase() {
        assert_lowercase(SENSATIONAL);
        assert_lowercase(STRONG_EVIDENCE);
        assert_lowercase(MEDIUM_EVIDENCE);
        assert_lowercase(VAGUE_ATTRIBUTION);
        assert_lowercase(ABSOLUTE_CLAIMS);
        assert_lowercase(CAUTIOUS_LANGUAGE);
        assert_lowercase(ANECDOTAL);
        for (trigger, _) in TRUSTED_ENTITIES {
            assert_eq!(*trigger, trigger.to_lowercase());
        }
        for domain in RISK_DOMAINS {
            for kw in domain.keywords() {
                assert_eq!(*kw, kw.to_lowercase());
            }
        }
    }

    #[test]
    fn test_domain_priority_order() {
        assert_eq!(RISK_DOMAINS[0], RiskDomain::Health);
        assert_eq!(RISK_DOMAINS[1], RiskDomain::Finance);
        assert_eq!(RISK_DOMAINS[2], RiskDomain::Elections);
    }
}
