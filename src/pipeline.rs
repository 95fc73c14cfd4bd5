//! End-to-end analysis of one contract text.
//!
//! Every pattern table is compiled once in [`ContractAnalyzer::new`]; the
//! analyzer is then shared read-only across documents.

use anyhow::Result;

use crate::clause::classifier::ClauseClassifier;
use crate::config::AnalysisConfig;
use crate::language::detector::LanguageDetector;
use crate::language::normalizer::HindiNormalizer;
use crate::metadata::MetadataExtractor;
use crate::models::{ClauseSummary, ContractAnalysis, SentenceMix};
use crate::risk::aggregate::aggregate;
use crate::risk::ambiguity::AmbiguityDetector;
use crate::risk::engine::RiskEngine;
use crate::segmenter::ClauseSegmenter;

pub struct ContractAnalyzer {
    detector: LanguageDetector,
    normalizer: HindiNormalizer,
    segmenter: ClauseSegmenter,
    classifier: ClauseClassifier,
    engine: RiskEngine,
    ambiguity: AmbiguityDetector,
    metadata: MetadataExtractor,
}

impl ContractAnalyzer {
    pub fn new(config: &AnalysisConfig) -> Result<Self> {
        Ok(Self {
            detector: LanguageDetector::new()?,
            normalizer: HindiNormalizer::new()?,
            segmenter: ClauseSegmenter::new(config)?,
            classifier: ClauseClassifier::new()?,
            engine: RiskEngine::new()?,
            ambiguity: AmbiguityDetector::new()?,
            metadata: MetadataExtractor::new()?,
        })
    }

    /// Analyze `text`, labelled `source` in the output. Never fails: empty or
    /// unstructured input degrades to fewer clauses and an `unknown` language.
    pub fn analyze(&self, source: &str, text: &str) -> ContractAnalysis {
        let language = self.detector.detect(text);
        let bilingual = language.has_hindi();

        let (translated_terms, translation_summary) = if bilingual {
            let summary = self.normalizer.bilingual_summary(text);
            (summary.translated_terms, Some(summary.translation_summary))
        } else {
            Default::default()
        };

        let (strategy, clauses) = self.segmenter.segment_with_strategy(text);
        tracing::info!(
            source,
            language = %language.primary_language,
            %strategy,
            clauses = clauses.len(),
            "segmented contract"
        );

        let mut analyses = Vec::with_capacity(clauses.len());
        let mut clause_summaries = Vec::new();
        for clause in &clauses {
            let analysis = if bilingual {
                let clause_type = self
                    .classifier
                    .classify_multilingual(&clause.full_text, &self.normalizer);
                let normalized = self.normalizer.normalize(&clause.full_text);
                if self.detector.detect(&clause.full_text).has_hindi() {
                    clause_summaries.push(ClauseSummary {
                        clause_id: clause.id,
                        summary: self.normalizer.simple_summary(&clause.full_text),
                    });
                }
                self.engine.analyze_clause(clause.id, &normalized, clause_type)
            } else {
                let clause_type = self.classifier.classify(&clause.full_text);
                self.engine
                    .analyze_clause(clause.id, &clause.full_text, clause_type)
            };
            tracing::debug!(
                clause = analysis.clause_id,
                clause_type = %analysis.clause_type,
                score = analysis.risk_score,
                "scored clause"
            );
            analyses.push(analysis);
        }

        let composite = aggregate(&analyses);

        ContractAnalysis {
            source: source.to_string(),
            language_summary: self.detector.summary(text),
            sentence_mix: SentenceMix {
                hindi: self.detector.hindi_sentences(text).len(),
                english: self.detector.english_sentences(text).len(),
            },
            language,
            translated_terms,
            translation_summary,
            financial_terms: self.normalizer.extract_financial_terms(text),
            metadata: self.metadata.extract(text),
            clauses,
            analyses,
            clause_summaries,
            composite,
            ambiguities: self.ambiguity.detect(text),
        }
    }
}
