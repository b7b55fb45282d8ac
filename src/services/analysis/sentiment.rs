// Sentiment Assessor
// Lexicon-based subjectivity/polarity estimation. Degenerate input degrades
// to the neutral default instead of failing; the downstream thresholds are
// subjectivity > 0.6 (subjective flag), < 0.2 (neutral credit) and
// |polarity| > 0.8 (emotional flag).

/// Neutral fallback returned when the text carries nothing to assess.
pub const NEUTRAL_SUBJECTIVITY: f64 = 0.5;
pub const NEUTRAL_POLARITY: f64 = 0.0;

const EXCLAMATION_EMPHASIS: f64 = 0.05;
const EXCLAMATION_EMPHASIS_CAP: f64 = 0.2;

/// `(word, polarity in [-1,1], subjectivity in [0,1])`
const SENTIMENT_WORDS: &[(&str, f64, f64)] = &[
    ("shocking", -0.6, 0.9),
    ("amazing", 0.6, 0.9),
    ("incredible", 0.7, 0.9),
    ("unbelievable", -0.3, 0.9),
    ("terrible", -0.9, 0.9),
    ("horrible", -0.9, 0.9),
    ("awful", -0.8, 0.9),
    ("miracle", 0.8, 0.9),
    ("disaster", -0.8, 0.7),
    ("guaranteed", 0.4, 0.8),
    ("exposed", -0.4, 0.7),
    ("secret", -0.2, 0.6),
    ("scam", -0.8, 0.8),
    ("fraud", -0.8, 0.7),
    ("dangerous", -0.6, 0.7),
    ("deadly", -0.8, 0.7),
    ("outrageous", -0.7, 0.9),
    ("stunning", -0.4, 0.8),
    ("best", 0.8, 0.6),
    ("worst", -1.0, 0.8),
    ("great", 0.7, 0.7),
    ("love", 0.6, 0.7),
    ("hate", -0.7, 0.8),
    ("perfect", 0.9, 0.8),
    ("useless", -0.7, 0.8),
    ("corrupt", -0.7, 0.7),
    ("evil", -0.9, 0.8),
    ("beautiful", 0.8, 0.8),
    ("safe", 0.5, 0.5),
    ("effective", 0.6, 0.5),
];

/// Tokens that flip the polarity of the word that follows them.
const NEGATORS: &[&str] = &["not", "no", "never", "without", "hardly"];

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SentimentReading {
    /// 0.0 = objective, 1.0 = fully subjective.
    pub subjectivity: f64,
    /// -1.0 = strongly negative, 1.0 = strongly positive.
    pub polarity: f64,
}

impl SentimentReading {
    pub fn neutral() -> Self {
        Self {
            subjectivity: NEUTRAL_SUBJECTIVITY,
            polarity: NEUTRAL_POLARITY,
        }
    }
}

fn lookup(word: &str) -> Option<(f64, f64)> {
    SENTIMENT_WORDS
        .iter()
        .find(|(w, _, _)| *w == word)
        .map(|(_, polarity, subjectivity)| (*polarity, *subjectivity))
}

/// Assess the tone of `text`. Never fails: text with no usable tokens yields
/// the neutral default reading.
pub fn assess(text: &str) -> SentimentReading {
    let lowered = text.to_lowercase();
    let tokens: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|t| !t.is_empty())
        .collect();

    if tokens.is_empty() {
        return SentimentReading::neutral();
    }

    let mut polarity_sum = 0.0;
    let mut subjectivity_sum = 0.0;
    let mut matched = 0usize;

    for (i, token) in tokens.iter().enumerate() {
        if let Some((mut polarity, subjectivity)) = lookup(token) {
            if i > 0 && NEGATORS.contains(&tokens[i - 1]) {
                polarity = -polarity;
            }
            polarity_sum += polarity;
            subjectivity_sum += subjectivity;
            matched += 1;
        }
    }

    let exclamations = text.chars().filter(|c| *c == '!').count() as f64;
    let emphasis = (exclamations * EXCLAMATION_EMPHASIS).min(EXCLAMATION_EMPHASIS_CAP);

    if matched == 0 {
        return SentimentReading {
            subjectivity: emphasis.clamp(0.0, 1.0),
            polarity: 0.0,
        };
    }

    let count = matched as f64;
    SentimentReading {
        subjectivity: (subjectivity_sum / count + emphasis).clamp(0.0, 1.0),
        polarity: (polarity_sum / count).clamp(-1.0, 1.0),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_text_is_neutral_default() {
        assert_eq!(assess(""), SentimentReading::neutral());
        assert_eq!(assess("   \n\t "), SentimentReading::neutral());
        assert_eq!(assess("!!!???"), SentimentReading::neutral());
    }

    #[test]
    fn test_sensational_text_reads_subjective() {
        let reading =
            assess("SHOCKING secret EXPOSED - they don't want you to know! 100% guaranteed miracle!!!!");
        assert!(reading.subjectivity > 0.6, "got {}", reading.subjectivity);
        assert!(reading.polarity.abs() <= 1.0);
    }

    #[test]
    fn test_plain_factual_text_reads_objective() {
        let reading = assess(
            "The ministry released quarterly employment figures on Tuesday, according to the report.",
        );
        assert!(reading.subjectivity < 0.2, "got {}", reading.subjectivity);
        assert_eq!(reading.polarity, 0.0);
    }

    #[test]
    fn test_negation_flips_polarity() {
        let positive = assess("this treatment is effective");
        let negated = assess("this treatment is not effective");
        assert!(positive.polarity > 0.0);
        assert!(negated.polarity < 0.0);
    }

    #[test]
    fn test_reading_stays_in_bounds() {
        let reading = assess("worst worst worst terrible horrible awful evil!!!!!!!");
        assert!((0.0..=1.0).contains(&reading.subjectivity));
        assert!((-1.0..=1.0).contains(&reading.polarity));
    }
}
