use anyhow::Result;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

use crate::models::RiskLevel;
use crate::text::char_window;

const CONTEXT_CHARS: usize = 50;

const AMBIGUOUS_TERMS: &[(&str, &str)] = &[
    ("reasonable", "Subjective term 'reasonable' may be ambiguous"),
    ("substantial", "Subjective term 'substantial' lacks clarity"),
    (
        "as soon as practicable",
        "Vague timeline 'as soon as practicable'",
    ),
    ("material breach", "'Material breach' is often undefined"),
    ("sole discretion", "Unilateral discretion may be unfair"),
    ("best efforts", "'Best efforts' is ambiguous standard"),
    (
        "mutually agreeable",
        "Requires future agreement - may be unenforceable",
    ),
];

/// A vague or subjective phrase that leaves room for dispute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ambiguity {
    /// The phrase as written in the contract.
    pub term: String,
    pub explanation: String,
    pub context: String,
    pub severity: RiskLevel,
}

pub struct AmbiguityDetector {
    patterns: Vec<(Regex, &'static str)>,
}

impl AmbiguityDetector {
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::with_capacity(AMBIGUOUS_TERMS.len());
        for (term, explanation) in AMBIGUOUS_TERMS {
            let re = RegexBuilder::new(&regex::escape(term))
                .case_insensitive(true)
                .build()?;
            patterns.push((re, *explanation));
        }
        Ok(Self { patterns })
    }

    /// Every occurrence of every term, grouped by term in table order.
    pub fn detect(&self, text: &str) -> Vec<Ambiguity> {
        self.patterns
            .iter()
            .flat_map(|(re, explanation)| {
                re.find_iter(text).map(move |m| Ambiguity {
                    term: m.as_str().to_string(),
                    explanation: explanation.to_string(),
                    context: char_window(text, m.start(), m.end(), CONTEXT_CHARS).to_string(),
                    severity: RiskLevel::Medium,
                })
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_detects_every_occurrence_in_table_order() {
        let detector = AmbiguityDetector::new().unwrap();
        let found = detector.detect(
            "Vendor shall use Best Efforts and reasonable care, with reasonable notice.",
        );
        let terms: Vec<&str> = found.iter().map(|a| a.term.as_str()).collect();
        assert_eq!(terms, vec!["reasonable", "reasonable", "Best Efforts"]);
        assert!(found.iter().all(|a| a.severity == RiskLevel::Medium));
        assert_eq!(found[2].explanation, "'Best efforts' is ambiguous standard");
    }

    #[test]
    fn test_context_window() {
        let detector = AmbiguityDetector::new().unwrap();
        let padding = "x".repeat(80);
        let text = format!("{padding} material breach {padding}");
        let found = detector.detect(&text);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].context.chars().count(), 50 + "material breach".len() + 50);
    }

    #[test]
    fn test_clean_text_has_no_ambiguities() {
        let detector = AmbiguityDetector::new().unwrap();
        assert!(detector.detect("Payment is due within 30 days of invoice.").is_empty());
        assert!(detector.detect("").is_empty());
    }
}
