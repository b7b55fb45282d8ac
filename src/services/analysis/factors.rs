// Factor Log
// Append-only record of every rule that fired during an analysis, in firing
// order. Each entry keeps a structured rule identifier next to the rendered
// message so downstream consumers never have to substring-match factor text.

use super::lexicon::RiskDomain;

/// Polarity of a factor, rendered as the leading marker of the output string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FactorKind {
    Flag,
    Check,
    Info,
    Warning,
}

impl FactorKind {
    pub fn marker(self) -> &'static str {
        match self {
            FactorKind::Flag => "\u{1F6A9}",    // 🚩
            FactorKind::Check => "\u{2705}",    // ✅
            FactorKind::Info => "\u{2139}\u{FE0F}", // ℹ️
            FactorKind::Warning => "\u{26A0}\u{FE0F}", // ⚠️
        }
    }
}

/// Identifier of a scoring rule. One variant per rule that can fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    // Lexical signals
    SensationalLanguage,
    StrongEvidence,
    MediumEvidence,
    TrustedCitation,
    VagueAttribution,
    AbsoluteClaim,
    CautiousLanguage,
    // Composer rules
    HighSubjectivity,
    NeutralTone,
    ExtremeEmotion,
    ExcessiveCaps,
    EvidenceContradiction,
    AbsoluteBacked,
    AbsoluteUnsupported,
    DomainRisk(RiskDomain),
    AnecdotalEvidence,
    NoLexicalSignals,
    // External classifier branches
    NliFactualGap,
    NliFactualSupport,
    NliHypothesisContradiction,
    NliHonestUncertainty,
    NliSpeculation,
    NliOpinionCap,
    NliAdvisory,
    // Mapper calibration
    UnsubstantiatedCap,
    ToneCap,
    BorderlineReclassification,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Factor {
    pub rule: Rule,
    pub kind: FactorKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FactorLog {
    entries: Vec<Factor>,
}

impl FactorLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, rule: Rule, kind: FactorKind, message: impl Into<String>) {
        self.entries.push(Factor {
            rule,
            kind,
            message: message.into(),
        });
    }

    pub fn flag(&mut self, rule: Rule, message: impl Into<String>) {
        self.push(rule, FactorKind::Flag, message);
    }

    pub fn check(&mut self, rule: Rule, message: impl Into<String>) {
        self.push(rule, FactorKind::Check, message);
    }

    pub fn info(&mut self, rule: Rule, message: impl Into<String>) {
        self.push(rule, FactorKind::Info, message);
    }

    pub fn warning(&mut self, rule: Rule, message: impl Into<String>) {
        self.push(rule, FactorKind::Warning, message);
    }

    pub fn fired(&self, rule: Rule) -> bool {
        self.entries.iter().any(|f| f.rule == rule)
    }

    /// The matched risk domain, if a domain-risk rule fired.
    pub fn domain_risk(&self) -> Option<RiskDomain> {
        self.entries.iter().find_map(|f| match f.rule {
            Rule::DomainRisk(domain) => Some(domain),
            _ => None,
        })
    }

    pub fn entries(&self) -> &[Factor] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Render to the `factors` response field: marker + message, firing order.
    pub fn render(&self) -> Vec<String> {
        self.entries
            .iter()
            .map(|f| format!("{} {}", f.kind.marker(), f.message))
            .collect()
    }
}
