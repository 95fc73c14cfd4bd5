use std::collections::BTreeMap;

use anyhow::Result;
use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::language::dictionary::{HINDI_DIGITS, LEGAL_TERMS};
use crate::models::{FinancialTerm, FinancialTermKind};
use crate::text::char_window;

const FINANCIAL_CONTEXT_CHARS: usize = 20;

/// Rewrites Hindi legal text into an English-equivalent lexical form so the
/// English-keyed classifier and risk tables can run over it.
///
/// All tables are compiled once in [`HindiNormalizer::new`].
pub struct HindiNormalizer {
    /// Ordered `(pattern, replacement)` rewrites for dates, currency and percentages.
    rewrites: Vec<(Regex, &'static str)>,
    /// Whole-word dictionary patterns, in [`LEGAL_TERMS`] order.
    terms: Vec<(&'static str, &'static str, Regex)>,
    financial: Vec<(Regex, FinancialTermKind)>,
}

#[derive(Debug, Clone, Serialize)]
pub struct BilingualSummary {
    pub original_text: String,
    pub normalized_text: String,
    pub translated_terms: BTreeMap<String, String>,
    pub translation_summary: String,
}

impl HindiNormalizer {
    pub fn new() -> Result<Self> {
        let rewrites = vec![
            (
                Regex::new(r"(\d{1,2})[-/](\d{1,2})[-/](\d{2,4})")?,
                "${1}/${2}/${3}",
            ),
            (
                Regex::new(r"(\d+(?:,\d{3})*(?:\.\d+)?)\s*(?:रुपये|₹)")?,
                "INR ${1}",
            ),
            (
                Regex::new(r"(?:रुपये|₹)\s*(\d+(?:,\d{3})*(?:\.\d+)?)")?,
                "INR ${1}",
            ),
            (Regex::new(r"रुपये|₹")?, "INR"),
            (Regex::new(r"(\d+(?:\.\d+)?)\s*(?:प्रतिशत|फीसदी)")?, "${1}%"),
        ];

        let mut terms = Vec::with_capacity(LEGAL_TERMS.len());
        for (hindi, english) in LEGAL_TERMS {
            let pattern = format!(r"\b{}\b", regex::escape(hindi));
            let re = RegexBuilder::new(&pattern).case_insensitive(true).build()?;
            terms.push((*hindi, *english, re));
        }

        let financial = vec![
            (
                Regex::new(
                    r"\d+(?:,\d{3})*(?:\.\d{2})?\s*(?:रुपये|₹)|(?:रुपये|₹)\s*\d+(?:,\d{3})*(?:\.\d{2})?",
                )?,
                FinancialTermKind::Amount,
            ),
            (
                Regex::new(r"\d+(?:\.\d+)?\s*(?:प्रतिशत|फीसदी)")?,
                FinancialTermKind::Percentage,
            ),
            (
                Regex::new(r"\d+\s*(?:हज़ार|लाख|करोड़)")?,
                FinancialTermKind::AmountInWords,
            ),
        ];

        Ok(Self {
            rewrites,
            terms,
            financial,
        })
    }

    /// Normalize in three fixed passes: digits, structural rewrites, dictionary.
    pub fn normalize(&self, text: &str) -> String {
        if text.is_empty() {
            return String::new();
        }

        let mut normalized: String = text
            .chars()
            .map(|c| match HINDI_DIGITS.iter().position(|d| *d == c) {
                Some(value) => char::from(b'0' + value as u8),
                None => c,
            })
            .collect();

        for (re, replacement) in &self.rewrites {
            normalized = re.replace_all(&normalized, *replacement).into_owned();
        }

        for (_, english, re) in &self.terms {
            normalized = re
                .replace_all(&normalized, regex::NoExpand(*english))
                .into_owned();
        }

        normalized
    }

    /// Dictionary terms present in the original text, keyed by the Hindi term.
    pub fn extract_terms(&self, text: &str) -> BTreeMap<String, String> {
        self.terms
            .iter()
            .filter(|(_, _, re)| re.is_match(text))
            .map(|(hindi, english, _)| (hindi.to_string(), english.to_string()))
            .collect()
    }

    /// Amounts, percentages and magnitude words found in the original text,
    /// grouped by pattern in that order.
    pub fn extract_financial_terms(&self, text: &str) -> Vec<FinancialTerm> {
        let mut extracted = Vec::new();

        for (re, kind) in &self.financial {
            for m in re.find_iter(text) {
                extracted.push(FinancialTerm {
                    original: m.as_str().to_string(),
                    normalized: self.normalize(m.as_str()),
                    kind: *kind,
                    context: char_window(text, m.start(), m.end(), FINANCIAL_CONTEXT_CHARS)
                        .to_string(),
                });
            }
        }

        extracted
    }

    pub fn bilingual_summary(&self, text: &str) -> BilingualSummary {
        let translated_terms = self.extract_terms(text);
        BilingualSummary {
            original_text: text.to_string(),
            normalized_text: self.normalize(text),
            translation_summary: format!(
                "Translated {} key terms from Hindi to English",
                translated_terms.len()
            ),
            translated_terms,
        }
    }

    /// Plain-English one-liner naming the legal concepts a Hindi clause touches.
    pub fn simple_summary(&self, clause_text: &str) -> String {
        let terms = self.extract_terms(clause_text);
        if terms.is_empty() {
            return "This clause contains standard legal provisions that require professional review."
                .to_string();
        }

        let parts: Vec<String> = terms
            .values()
            .map(|english| format!("Contains {} provisions", english))
            .collect();

        let mut summary = format!(
            "This clause deals with: {}",
            parts.iter().take(3).cloned().collect::<Vec<_>>().join(", ")
        );
        if parts.len() > 3 {
            summary.push_str(&format!(" and {} other legal aspects.", parts.len() - 3));
        }
        summary.push_str(" Professional legal review is recommended.");
        summary
    }
}
