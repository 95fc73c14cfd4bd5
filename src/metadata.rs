//! Contract-level facts pulled from the raw text: who signs, when, for how
//! much and for how long.

use anyhow::Result;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};

const MAX_PARTIES: usize = 2;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContractMetadata {
    pub parties: Vec<String>,
    pub dates: Vec<String>,
    pub amounts: Vec<String>,
    pub duration: Option<String>,
}

pub struct MetadataExtractor {
    party_patterns: Vec<Regex>,
    date_patterns: Vec<Regex>,
    amount_patterns: Vec<Regex>,
    duration_patterns: Vec<Regex>,
}

impl MetadataExtractor {
    pub fn new() -> Result<Self> {
        Ok(Self {
            party_patterns: compile(&[
                r"between\s+([^,\n]+?)\s+and\s+([^,\n]+)",
                r"party\s+a:\s*([^\n]+)",
                r"party\s+b:\s*([^\n]+)",
            ])?,
            date_patterns: compile(&[
                r"\b\d{1,2}[-/]\d{1,2}[-/]\d{2,4}\b",
                r"\b\d{1,2}\s+(?:jan|feb|mar|apr|may|jun|jul|aug|sep|oct|nov|dec)[a-z]*\s+\d{2,4}\b",
                r"\b(?:january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2},\s+\d{4}\b",
            ])?,
            amount_patterns: compile(&[
                r"(?:\$|₹|\binr\b|\brs\.?)\s*\d+(?:,\d{2,3})*(?:\.\d{2})?",
                r"\b\d+(?:,\d{2,3})*(?:\.\d{2})?\s*(?:rupees|dollars|रुपये)",
            ])?,
            duration_patterns: compile(&[
                r"term.*?\d+\s*(?:year|month|day|week)s?",
                r"duration.*?\d+\s*(?:year|month|day|week)s?",
                r"period.*?\d+\s*(?:year|month|day|week)s?",
            ])?,
        })
    }

    pub fn extract(&self, text: &str) -> ContractMetadata {
        ContractMetadata {
            parties: self.parties(text),
            dates: all_matches(&self.date_patterns, text),
            amounts: all_matches(&self.amount_patterns, text),
            duration: self
                .duration_patterns
                .iter()
                .find_map(|re| re.find(text))
                .map(|m| m.as_str().to_string()),
        }
    }

    fn parties(&self, text: &str) -> Vec<String> {
        let names = self.party_patterns.iter().flat_map(|re| {
            re.captures_iter(text).flat_map(|caps| {
                caps.iter()
                    .skip(1)
                    .flatten()
                    .map(|m| m.as_str().trim().trim_end_matches('.').to_string())
                    .collect::<Vec<_>>()
            })
        });
        let mut parties = unique(names.filter(|n| !n.is_empty()));
        parties.truncate(MAX_PARTIES);
        parties
    }
}

fn compile(patterns: &[&str]) -> Result<Vec<Regex>> {
    patterns
        .iter()
        .map(|p| -> Result<Regex> { Ok(RegexBuilder::new(p).case_insensitive(true).build()?) })
        .collect()
}

fn all_matches(patterns: &[Regex], text: &str) -> Vec<String> {
    unique(
        patterns
            .iter()
            .flat_map(|re| re.find_iter(text))
            .map(|m| m.as_str().trim().to_string()),
    )
}

/// Deduplicate keeping first-seen order.
fn unique(items: impl Iterator<Item = String>) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for item in items {
        if !out.contains(&item) {
            out.push(item);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn extractor() -> MetadataExtractor {
        MetadataExtractor::new().unwrap()
    }

    #[test]
    fn test_parties_between_clause() {
        let meta = extractor().extract(
            "This Agreement is made between Acme Traders Pvt Ltd and Sharma Logistics, \
             effective on signing.",
        );
        assert_eq!(meta.parties, vec!["Acme Traders Pvt Ltd", "Sharma Logistics"]);
    }

    #[test]
    fn test_parties_labelled_and_capped() {
        let text = "Party A: Blue Widgets LLP\nParty B: Green Tools Ltd\n\
                    Disputes between Blue Widgets LLP and a third party, are excluded.";
        let meta = extractor().extract(text);
        assert_eq!(meta.parties.len(), 2);
        assert!(meta.parties.contains(&"Blue Widgets LLP".to_string()));
    }

    #[test]
    fn test_dates_in_three_formats() {
        let meta = extractor().extract(
            "Signed 12/01/2024, effective 15 Jan 2024, renewed January 15, 2025. Signed 12/01/2024.",
        );
        assert_eq!(
            meta.dates,
            vec!["12/01/2024", "15 Jan 2024", "January 15, 2025"]
        );
    }

    #[test]
    fn test_amounts() {
        let meta = extractor().extract(
            "Fee of ₹50,000 per month, a deposit of Rs. 10,000 and USD costs of $1,200.50; \
             late fee 500 rupees.",
        );
        assert_eq!(
            meta.amounts,
            vec!["₹50,000", "Rs. 10,000", "$1,200.50", "500 rupees"]
        );
    }

    #[test]
    fn test_duration() {
        let meta = extractor().extract("The term of this Agreement is 2 years from signing.");
        assert_eq!(meta.duration.as_deref(), Some("term of this Agreement is 2 years"));
        assert_eq!(extractor().extract("No time limits.").duration, None);
    }

    #[test]
    fn test_empty_text() {
        assert_eq!(extractor().extract(""), ContractMetadata::default());
    }
}
