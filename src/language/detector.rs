use std::collections::HashSet;

use anyhow::Result;
use regex::Regex;

use crate::models::{Language, LanguageProfile};

/// Common Hindi words in contracts.
const HINDI_KEYWORDS: &[&str] = &[
    "समझौता", "अनुबंध", "नियम", "शर्तें", "पक्ष", "कंपनी", "कर्मचारी", "भुगतान", "दायित्व", "अधिकार",
    "कानून", "न्यायालय", "मुआवजा", "समाप्ति", "नोटिस", "अवधि", "राशि", "ब्याज", "दंड", "गोपनीय",
];

const ENGLISH_KEYWORDS: &[&str] = &[
    "agreement", "contract", "terms", "conditions", "party", "company", "employee", "payment",
    "liability", "right", "law", "court", "compensation", "termination", "notice", "period",
    "amount", "interest", "penalty", "confidential",
];

const HINDI_PRIMARY_THRESHOLD: f64 = 0.30;
const ENGLISH_PRIMARY_THRESHOLD: f64 = 0.70;
const MIXED_THRESHOLD: f64 = 0.10;

fn is_devanagari(c: char) -> bool {
    ('\u{0900}'..='\u{097F}').contains(&c)
}

/// Classifies text as English, Hindi or mixed from Devanagari character
/// ratios, and counts closed-vocabulary legal keywords per language.
pub struct LanguageDetector {
    word_re: Regex,
    sentence_re: Regex,
    hindi_keywords: HashSet<&'static str>,
    english_keywords: HashSet<&'static str>,
}

impl LanguageDetector {
    pub fn new() -> Result<Self> {
        Ok(Self {
            word_re: Regex::new(r"\b\w+\b")?,
            sentence_re: Regex::new(r"[.!?।]")?,
            hindi_keywords: HINDI_KEYWORDS.iter().copied().collect(),
            english_keywords: ENGLISH_KEYWORDS.iter().copied().collect(),
        })
    }

    pub fn detect(&self, text: &str) -> LanguageProfile {
        if text.trim().is_empty() {
            return LanguageProfile::unknown();
        }

        let hindi_chars = text.chars().filter(|c| is_devanagari(*c)).count();
        let total_chars = text.chars().filter(|c| !c.is_whitespace()).count();

        let lower = text.to_lowercase();
        let words: Vec<&str> = self.word_re.find_iter(&lower).map(|m| m.as_str()).collect();
        let hindi_word_count = words.iter().filter(|w| self.hindi_keywords.contains(*w)).count();
        let english_word_count = words
            .iter()
            .filter(|w| self.english_keywords.contains(*w))
            .count();

        let (hindi_ratio, english_ratio) = if total_chars > 0 {
            let total = total_chars as f64;
            (
                hindi_chars as f64 / total,
                (total_chars - hindi_chars) as f64 / total,
            )
        } else {
            (0.0, 0.0)
        };

        let primary_language = if hindi_ratio > HINDI_PRIMARY_THRESHOLD {
            Language::Hindi
        } else if english_ratio > ENGLISH_PRIMARY_THRESHOLD {
            Language::English
        } else {
            Language::Mixed
        };

        LanguageProfile {
            primary_language,
            is_mixed: hindi_ratio > MIXED_THRESHOLD && english_ratio > MIXED_THRESHOLD,
            hindi_ratio: round3(hindi_ratio),
            english_ratio: round3(english_ratio),
            hindi_word_count,
            english_word_count,
            total_words: words.len(),
        }
    }

    /// Sentences (split on `.`, `!`, `?` and the danda `।`) containing Devanagari.
    pub fn hindi_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.sentences(text)
            .into_iter()
            .filter(|s| s.chars().any(is_devanagari))
            .collect()
    }

    /// Sentences without any Devanagari.
    pub fn english_sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.sentences(text)
            .into_iter()
            .filter(|s| !s.chars().any(is_devanagari))
            .collect()
    }

    fn sentences<'a>(&self, text: &'a str) -> Vec<&'a str> {
        self.sentence_re
            .split(text)
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// One-line human-readable description of the detected language mix.
    pub fn summary(&self, text: &str) -> String {
        let profile = self.detect(text);
        match profile.primary_language {
            Language::Hindi => format!(
                "Primarily Hindi ({:.1}% Hindi content)",
                profile.hindi_ratio * 100.0
            ),
            Language::English => format!(
                "Primarily English ({:.1}% English content)",
                profile.english_ratio * 100.0
            ),
            Language::Mixed | Language::Unknown => format!(
                "Mixed language ({:.1}% Hindi, {:.1}% English)",
                profile.hindi_ratio * 100.0,
                profile.english_ratio * 100.0
            ),
        }
    }
}

fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn detector() -> LanguageDetector {
        LanguageDetector::new().unwrap()
    }

    #[test]
    fn test_empty_is_unknown() {
        let d = detector();
        for input in ["", "   ", "\n\t "] {
            let profile = d.detect(input);
            assert_eq!(profile.primary_language, Language::Unknown);
            assert!(!profile.is_mixed);
            assert_eq!(profile.hindi_ratio, 0.0);
            assert_eq!(profile.english_ratio, 0.0);
            assert_eq!(profile.total_words, 0);
        }
    }

    #[test]
    fn test_english_contract() {
        let profile = detector().detect(
            "This Employment Agreement is made between the Company and the Employee. \
             Payment terms and termination notice apply.",
        );
        assert_eq!(profile.primary_language, Language::English);
        assert!(!profile.is_mixed);
        assert_eq!(profile.hindi_ratio, 0.0);
        assert_eq!(profile.english_ratio, 1.0);
        assert!(profile.english_word_count >= 4);
        assert_eq!(profile.hindi_word_count, 0);
    }

    #[test]
    fn test_hindi_contract() {
        let profile = detector()
            .detect("यह रोजगारी समझौता टेक कंपनी और कर्मचारी के बीच बनाया गया है। भुगतान मासिक होगा।");
        assert_eq!(profile.primary_language, Language::Hindi);
        assert!(profile.hindi_word_count >= 4);
    }

    #[test]
    fn test_hindi_primary_can_also_be_mixed() {
        // ~40% Devanagari: primary is Hindi and the mixed flag is independent
        let profile = detector().detect("समझौता agreement कंपनी company");
        assert_eq!(profile.primary_language, Language::Hindi);
        assert!(profile.is_mixed);
    }

    #[test]
    fn test_mixed_band_between_thresholds() {
        // 3 Devanagari chars out of 15 non-whitespace: 20% Hindi, 80% other
        let profile = detector().detect("नाम abcdefghijkl");
        assert_eq!(profile.primary_language, Language::English);
        assert!(profile.is_mixed);

        // 3 of 10: exactly 30% is not "more than" 30%, and 70% is not more than 70%
        let profile = detector().detect("नाम abcdefg");
        assert_eq!(profile.primary_language, Language::Mixed);
    }

    #[test]
    fn test_sentence_split_by_script() {
        let d = detector();
        let text = "कर्मचारी कार्य करेगा। The Employee shall serve. मासिक वेतन।";
        assert_eq!(d.hindi_sentences(text), vec!["कर्मचारी कार्य करेगा", "मासिक वेतन"]);
        assert_eq!(d.english_sentences(text), vec!["The Employee shall serve"]);
    }

    #[test]
    fn test_summary_line() {
        let d = detector();
        assert_eq!(
            d.summary("plain english text"),
            "Primarily English (100.0% English content)"
        );
    }

    proptest! {
        #[test]
        fn test_ratios_are_bounded(text in "\\PC{0,80}") {
            let profile = detector().detect(&text);
            prop_assert!((0.0..=1.0).contains(&profile.hindi_ratio));
            prop_assert!((0.0..=1.0).contains(&profile.english_ratio));
        }
    }
}
