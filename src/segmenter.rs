use anyhow::Result;
use regex::Regex;
use serde::Serialize;

use crate::config::AnalysisConfig;
use crate::models::Clause;
use crate::text::truncate_chars;

/// Structural delimiter that produced a segmentation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SegmentStrategy {
    /// `1.` / `2.` at the start of a line
    Numbered,
    /// `(a)` / `(b)` at the start of a line
    Lettered,
    /// `PAYMENT TERMS:` on its own line
    SectionHeader,
    /// `ARTICLE IV` on its own line
    Article,
    /// Blank-line paragraphs, used when no delimiter is accepted
    Paragraph,
}

impl std::fmt::Display for SegmentStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SegmentStrategy::Numbered => write!(f, "numbered clauses"),
            SegmentStrategy::Lettered => write!(f, "lettered sub-clauses"),
            SegmentStrategy::SectionHeader => write!(f, "section headers"),
            SegmentStrategy::Article => write!(f, "articles"),
            SegmentStrategy::Paragraph => write!(f, "paragraphs"),
        }
    }
}

/// Splits contract text into clauses using the first structural delimiter
/// that is actually present, falling back to blank-line paragraphs.
pub struct ClauseSegmenter {
    /// Tried in order; the first delimiter yielding more than
    /// `split_threshold` segments wins.
    delimiters: Vec<(SegmentStrategy, Regex)>,
    paragraph_break: Regex,
    preview_chars: usize,
    max_paragraphs: usize,
    split_threshold: usize,
}

impl ClauseSegmenter {
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        let delimiters = vec![
            (SegmentStrategy::Numbered, Regex::new(r"(?:\A|\n)\s*\d+\.\s+")?),
            (SegmentStrategy::Lettered, Regex::new(r"(?:\A|\n)\s*\([a-z]\)\s+")?),
            (
                SegmentStrategy::SectionHeader,
                Regex::new(r"(?:\A|\n)\s*[A-Z][A-Z\s]+\s*:\s*\n")?,
            ),
            (
                SegmentStrategy::Article,
                Regex::new(r"(?:\A|\n)\s*ARTICLE\s+\w+\s*\n")?,
            ),
        ];

        Ok(Self {
            delimiters,
            paragraph_break: Regex::new(r"\n\s*\n")?,
            preview_chars: config.preview_chars,
            max_paragraphs: config.max_paragraphs,
            split_threshold: config.split_threshold,
        })
    }

    pub fn segment(&self, text: &str) -> Vec<Clause> {
        self.segment_with_strategy(text).1
    }

    /// Segment `text`, also reporting which strategy produced the clauses.
    pub fn segment_with_strategy(&self, text: &str) -> (SegmentStrategy, Vec<Clause>) {
        for (strategy, re) in &self.delimiters {
            let segments: Vec<&str> = re.split(text).collect();
            if segments.len() <= self.split_threshold {
                continue;
            }

            let clauses: Vec<Clause> = segments
                .into_iter()
                .skip(1)
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .enumerate()
                .map(|(i, s)| self.clause(i + 1, format!("Clause {}", i + 1), s))
                .collect();

            if clauses.is_empty() {
                // An accepted delimiter that leaves nothing behind ends the cascade
                break;
            }

            tracing::debug!(%strategy, "segmented by structural delimiter");
            return (*strategy, clauses);
        }

        let clauses = self
            .paragraph_break
            .split(text)
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .take(self.max_paragraphs)
            .enumerate()
            .map(|(i, p)| self.clause(i + 1, format!("Paragraph {}", i + 1), p))
            .collect();

        tracing::debug!("no structural delimiter accepted, fell back to paragraphs");
        (SegmentStrategy::Paragraph, clauses)
    }

    fn clause(&self, id: usize, title: String, segment: &str) -> Clause {
        Clause {
            id: id as u32,
            title,
            text: truncate_chars(segment, self.preview_chars),
            full_text: segment.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn segmenter() -> ClauseSegmenter {
        ClauseSegmenter::new(&AnalysisConfig::default()).unwrap()
    }

    #[test]
    fn test_five_numbered_clauses() {
        let text = "1. Services are provided monthly.\n\
                    2. Payment is due in 30 days.\n\
                    3. Either party may terminate.\n\
                    4. Information stays confidential.\n\
                    5. Courts in Delhi have jurisdiction.";
        let (strategy, clauses) = segmenter().segment_with_strategy(text);
        assert_eq!(strategy, SegmentStrategy::Numbered);
        assert_eq!(clauses.len(), 5);
        let ids: Vec<u32> = clauses.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4, 5]);
        assert_eq!(clauses[0].text, "Services are provided monthly.");
        assert_eq!(clauses[4].title, "Clause 5");
    }

    #[test]
    fn test_preamble_is_skipped() {
        let text = "SERVICE AGREEMENT\nMade on 1 Jan 2024\n\
                    1. Scope of work.\n2. Fees.\n3. Term.";
        let clauses = segmenter().segment(text);
        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[0].full_text, "Scope of work.");
    }

    #[test]
    fn test_too_few_delimiters_fall_through() {
        // Two numbered items yield three segments, which is not more than three
        let text = "Intro\n1. First.\n2. Second.\n\nClosing paragraph.";
        let (strategy, clauses) = segmenter().segment_with_strategy(text);
        assert_eq!(strategy, SegmentStrategy::Paragraph);
        assert_eq!(clauses[0].title, "Paragraph 1");
        assert_eq!(clauses.len(), 2);
    }

    #[test]
    fn test_lettered_sub_clauses() {
        let text = "The Supplier shall:\n(a) deliver goods\n(b) invoice monthly\n(c) maintain insurance";
        let (strategy, clauses) = segmenter().segment_with_strategy(text);
        assert_eq!(strategy, SegmentStrategy::Lettered);
        assert_eq!(clauses.len(), 3);
        assert_eq!(clauses[1].text, "invoice monthly");
    }

    #[test]
    fn test_article_headers() {
        let text = "Preamble\nARTICLE I\nDefinitions apply.\nARTICLE II\nServices.\n\
                    ARTICLE III\nPayment.\nARTICLE IV\nTermination.";
        let (strategy, clauses) = segmenter().segment_with_strategy(text);
        assert_eq!(strategy, SegmentStrategy::Article);
        assert_eq!(clauses.len(), 4);
        assert_eq!(clauses[3].text, "Termination.");
    }

    #[test]
    fn test_paragraph_fallback_is_capped() {
        let text: String = (1..=25)
            .map(|i| format!("Paragraph body {i}"))
            .collect::<Vec<_>>()
            .join("\n\n");
        let clauses = segmenter().segment(&text);
        assert_eq!(clauses.len(), 20);
        assert_eq!(clauses[19].full_text, "Paragraph body 20");
    }

    #[test]
    fn test_preview_is_truncated() {
        let long = "x".repeat(800);
        let text = format!("1. {long}\n2. b\n3. c\n4. d");
        let clauses = segmenter().segment(&text);
        assert_eq!(clauses[0].text.chars().count(), 500);
        assert_eq!(clauses[0].full_text.len(), 800);
    }

    #[test]
    fn test_accepted_delimiter_without_clauses_falls_back_to_paragraphs() {
        // With no threshold, the unsplit text alone is an accepted split whose
        // only segment is the skipped preamble
        let config = AnalysisConfig {
            split_threshold: 0,
            ..AnalysisConfig::default()
        };
        let segmenter = ClauseSegmenter::new(&config).unwrap();
        let (strategy, clauses) =
            segmenter.segment_with_strategy("First paragraph.\n\nSecond paragraph.");
        assert_eq!(strategy, SegmentStrategy::Paragraph);
        assert_eq!(clauses.len(), 2);
        assert_eq!(clauses[1].title, "Paragraph 2");
    }

    #[test]
    fn test_degenerate_input() {
        assert!(segmenter().segment("").is_empty());
        assert!(segmenter().segment("   \n  ").is_empty());
        assert_eq!(segmenter().segment("one line with no markers").len(), 1);
    }
}
