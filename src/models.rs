use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::metadata::ContractMetadata;
use crate::risk::ambiguity::Ambiguity;

/// One structurally or semantically distinct segment of a contract.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clause {
    pub id: u32,
    pub title: String,
    /// Trimmed preview, capped at the configured preview length.
    pub text: String,
    pub full_text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    English,
    Hindi,
    Mixed,
    Unknown,
}

impl std::fmt::Display for Language {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Language::English => write!(f, "English"),
            Language::Hindi => write!(f, "Hindi"),
            Language::Mixed => write!(f, "Mixed"),
            Language::Unknown => write!(f, "Unknown"),
        }
    }
}

/// Script and vocabulary signals for a piece of text.
///
/// `hindi_ratio`/`english_ratio` are character ratios while the word counts
/// come from closed keyword lists; the two are reported side by side and
/// are not expected to agree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LanguageProfile {
    pub primary_language: Language,
    pub is_mixed: bool,
    pub hindi_ratio: f64,
    pub english_ratio: f64,
    pub hindi_word_count: usize,
    pub english_word_count: usize,
    pub total_words: usize,
}

impl LanguageProfile {
    pub fn unknown() -> Self {
        Self {
            primary_language: Language::Unknown,
            is_mixed: false,
            hindi_ratio: 0.0,
            english_ratio: 0.0,
            hindi_word_count: 0,
            english_word_count: 0,
            total_words: 0,
        }
    }

    /// Whether any Devanagari content was seen.
    pub fn has_hindi(&self) -> bool {
        self.hindi_ratio > 0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
}

impl RiskLevel {
    /// Bucket a score on the 0–10 scale: ≥7 High, ≥4 Medium, else Low.
    pub fn from_score(score: f64) -> Self {
        if score >= 7.0 {
            RiskLevel::High
        } else if score >= 4.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::Low
        }
    }
}

impl std::fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RiskLevel::High => write!(f, "High"),
            RiskLevel::Medium => write!(f, "Medium"),
            RiskLevel::Low => write!(f, "Low"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RiskIssue {
    pub issue: String,
    pub risk_level: RiskLevel,
    pub context: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClauseType {
    Indemnity,
    Confidentiality,
    Termination,
    Jurisdiction,
    #[serde(rename = "Intellectual Property")]
    IntellectualProperty,
    Warranties,
    Liability,
    Payment,
    #[serde(rename = "Force Majeure")]
    ForceMajeure,
    #[serde(rename = "Dispute Resolution")]
    DisputeResolution,
    General,
}

impl std::fmt::Display for ClauseType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ClauseType::Indemnity => write!(f, "Indemnity"),
            ClauseType::Confidentiality => write!(f, "Confidentiality"),
            ClauseType::Termination => write!(f, "Termination"),
            ClauseType::Jurisdiction => write!(f, "Jurisdiction"),
            ClauseType::IntellectualProperty => write!(f, "Intellectual Property"),
            ClauseType::Warranties => write!(f, "Warranties"),
            ClauseType::Liability => write!(f, "Liability"),
            ClauseType::Payment => write!(f, "Payment"),
            ClauseType::ForceMajeure => write!(f, "Force Majeure"),
            ClauseType::DisputeResolution => write!(f, "Dispute Resolution"),
            ClauseType::General => write!(f, "General"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseAnalysis {
    pub clause_id: u32,
    pub clause_type: ClauseType,
    pub risk_score: u8,
    pub risk_level: RiskLevel,
    pub issues: Vec<RiskIssue>,
    pub suggestions: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RiskDistribution {
    pub high: usize,
    pub medium: usize,
    pub low: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CompositeRisk {
    pub overall_risk: RiskLevel,
    /// Un-doubled clause average, rounded to one decimal.
    pub score: f64,
    pub high_risk_count: usize,
    pub medium_risk_count: usize,
    pub total_clauses: usize,
    pub risk_distribution: RiskDistribution,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FinancialTermKind {
    Amount,
    Percentage,
    AmountInWords,
}

impl std::fmt::Display for FinancialTermKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FinancialTermKind::Amount => write!(f, "amount"),
            FinancialTermKind::Percentage => write!(f, "percentage"),
            FinancialTermKind::AmountInWords => write!(f, "amount_in_words"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FinancialTerm {
    pub original: String,
    pub normalized: String,
    #[serde(rename = "type")]
    pub kind: FinancialTermKind,
    pub context: String,
}

/// Sentence counts per script.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SentenceMix {
    pub hindi: usize,
    pub english: usize,
}

/// Plain-English gist of a clause written (partly) in Hindi.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClauseSummary {
    pub clause_id: u32,
    pub summary: String,
}

/// Everything one analysis run produces for a single contract.
///
/// `clauses` and `analyses` are parallel: same length, same order, same ids.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContractAnalysis {
    pub source: String,
    pub language: LanguageProfile,
    pub language_summary: String,
    pub sentence_mix: SentenceMix,
    pub translated_terms: BTreeMap<String, String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub translation_summary: Option<String>,
    pub financial_terms: Vec<FinancialTerm>,
    pub metadata: ContractMetadata,
    pub clauses: Vec<Clause>,
    pub analyses: Vec<ClauseAnalysis>,
    pub clause_summaries: Vec<ClauseSummary>,
    pub composite: CompositeRisk,
    pub ambiguities: Vec<Ambiguity>,
}
