use serde::Serialize;

use crate::models::{ClauseType, CompositeRisk, ContractAnalysis, RiskLevel};

const MAX_WARNINGS: usize = 3;
const MAX_DETAILS: usize = 5;
const WARNING_CHARS: usize = 80;
const LONG_EXPLANATION_CHARS: usize = 150;
const SHORT_EXPLANATION_CHARS: usize = 120;

/// Issue wording → plain business language for the warnings list.
const SIMPLIFICATIONS: &[(&str, &str)] = &[
    (
        "unilateral termination rights are unfair",
        "Other party can terminate anytime without cause",
    ),
    (
        "indefinite confidentiality may be unreasonable",
        "Confidentiality obligations continue forever",
    ),
    (
        "foreign jurisdiction increases legal costs",
        "Legal disputes must be resolved in foreign country",
    ),
    (
        "unlimited liability exposes business to catastrophic risk",
        "No limit on financial liability",
    ),
    (
        "high penalty rates can be punitive",
        "Very high penalty rates for late payments",
    ),
    (
        "auto-renewal without notice creates lock-in",
        "Contract renews automatically",
    ),
    (
        "broad 'all losses' indemnity",
        "Covers all losses including others' mistakes",
    ),
    (
        "long non-compete periods may restrict business",
        "Very long restrictions on future work",
    ),
];

const STANDARD_PROVISIONS: &str =
    "No specific risk patterns found; the clause appears to contain standard provisions.";

const NOTES: &[&str] = &[
    "This report provides guidance only, not legal advice",
    "Always consult a qualified lawyer for important contracts",
    "Keep this report for your records",
    "Negotiate changes before signing any contract",
];

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RiskSummary {
    pub headline: &'static str,
    pub score: f64,
    pub score_label: &'static str,
    pub counted_label: &'static str,
    pub counted: usize,
    pub meaning: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Warning {
    pub clause_id: u32,
    pub clause_type: ClauseType,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ClauseDetail {
    pub clause_id: u32,
    pub clause_type: ClauseType,
    pub risk_level: RiskLevel,
    pub explanation: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LawyerAdvice {
    pub intro: &'static str,
    pub conditions: Vec<&'static str>,
}

/// The business-owner report, as data. Renderers decide the layout.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReportSections {
    pub risk_summary: RiskSummary,
    pub top_warnings: Vec<Warning>,
    pub next_steps: Vec<&'static str>,
    pub clause_details: Vec<ClauseDetail>,
    pub business_advice: Vec<&'static str>,
    pub lawyer_advice: LawyerAdvice,
    pub notes: Vec<&'static str>,
}

impl ReportSections {
    pub fn assemble(analysis: &ContractAnalysis) -> Self {
        let composite = &analysis.composite;
        let overall = composite.overall_risk;

        Self {
            risk_summary: risk_summary(composite),
            top_warnings: top_warnings(analysis),
            next_steps: next_steps(overall),
            clause_details: clause_details(analysis),
            business_advice: business_advice(composite),
            lawyer_advice: lawyer_advice(overall),
            notes: NOTES.to_vec(),
        }
    }
}

fn risk_summary(composite: &CompositeRisk) -> RiskSummary {
    match composite.overall_risk {
        RiskLevel::High => RiskSummary {
            headline: "HIGH RISK - DO NOT SIGN AS IS",
            score: composite.score,
            score_label: "Dangerous",
            counted_label: "High-Risk Clauses",
            counted: composite.high_risk_count,
            meaning: "This contract contains serious problems that could cause significant \
                      financial loss or legal issues for your business.",
        },
        RiskLevel::Medium => RiskSummary {
            headline: "MEDIUM RISK - NEEDS CHANGES",
            score: composite.score,
            score_label: "Needs Improvement",
            counted_label: "Problematic Clauses",
            counted: composite.medium_risk_count + composite.high_risk_count,
            meaning: "Several clauses are unfair to your business. You should negotiate \
                      changes before signing this contract.",
        },
        RiskLevel::Low => RiskSummary {
            headline: "LOW RISK - GENERALLY ACCEPTABLE",
            score: composite.score,
            score_label: "Generally Good",
            counted_label: "Mostly Safe Clauses",
            counted: composite.risk_distribution.low,
            meaning: "Most contract terms appear fair. However, a quick legal review is \
                      still recommended for important contracts.",
        },
    }
}

fn top_warnings(analysis: &ContractAnalysis) -> Vec<Warning> {
    analysis
        .analyses
        .iter()
        .filter(|a| a.risk_level >= RiskLevel::Medium)
        .filter_map(|a| {
            a.issues.first().map(|issue| Warning {
                clause_id: a.clause_id,
                clause_type: a.clause_type,
                message: simplify_issue(&issue.issue),
            })
        })
        .take(MAX_WARNINGS)
        .collect()
}

/// Plain wording for a known issue, otherwise the issue cut to 80 characters.
pub fn simplify_issue(issue: &str) -> String {
    let lower = issue.to_lowercase();
    if let Some((_, simple)) = SIMPLIFICATIONS.iter().find(|(k, _)| lower.contains(k)) {
        return simple.to_string();
    }

    if issue.chars().count() > WARNING_CHARS {
        let cut: String = issue.chars().take(WARNING_CHARS).collect();
        format!("{cut}...")
    } else {
        issue.to_string()
    }
}

fn next_steps(overall: RiskLevel) -> Vec<&'static str> {
    match overall {
        RiskLevel::High => vec![
            "Consult a lawyer immediately - do not sign as is",
            "Negotiate all high-risk clauses",
            "Get all changes documented in writing",
            "Consider alternative options if terms cannot be improved",
        ],
        RiskLevel::Medium => vec![
            "Show this report to your lawyer for review",
            "Negotiate the problematic clauses",
            "Ensure agreement on all changes",
            "Keep records of all communications",
        ],
        RiskLevel::Low => vec![
            "Review the contract yourself carefully",
            "Verify all amounts, dates, and terms are correct",
            "Consider a quick legal check for important contracts",
            "File the signed copy securely",
        ],
    }
}

fn clause_details(analysis: &ContractAnalysis) -> Vec<ClauseDetail> {
    analysis
        .analyses
        .iter()
        .take(MAX_DETAILS)
        .map(|a| {
            let explanation = a
                .issues
                .first()
                .map(|i| i.issue.as_str())
                .unwrap_or(STANDARD_PROVISIONS);
            ClauseDetail {
                clause_id: a.clause_id,
                clause_type: a.clause_type,
                risk_level: a.risk_level,
                explanation: shorten_explanation(explanation),
            }
        })
        .collect()
}

/// Long explanations are cut to their first sentence, or to 120 characters
/// when that sentence is too short to stand alone.
pub fn shorten_explanation(explanation: &str) -> String {
    if explanation.chars().count() <= LONG_EXPLANATION_CHARS {
        return explanation.to_string();
    }

    match explanation.split_once(". ") {
        Some((first, _)) if first.chars().count() > 20 => format!("{first}."),
        None if explanation.chars().count() > 20 => format!("{explanation}."),
        _ => {
            let cut: String = explanation.chars().take(SHORT_EXPLANATION_CHARS).collect();
            format!("{cut}...")
        }
    }
}

fn business_advice(composite: &CompositeRisk) -> Vec<&'static str> {
    let mut advice = Vec::new();
    if composite.high_risk_count > 0 {
        advice.push("High-risk clauses could result in significant financial loss");
    }
    if composite.overall_risk >= RiskLevel::Medium {
        advice.push("Request a liability cap (maximum amount you can owe)");
        advice.push("Add reasonable notice periods for termination");
        advice.push("Specify Indian courts for dispute resolution");
    }
    advice.push("If terms seem unfair, they probably are");
    advice
}

fn lawyer_advice(overall: RiskLevel) -> LawyerAdvice {
    match overall {
        RiskLevel::High => LawyerAdvice {
            intro: "Consult a lawyer immediately if:",
            conditions: vec![
                "Contract value exceeds Rs. 5 lakhs",
                "Unlimited liability clause is present",
                "Foreign jurisdiction is specified",
                "Any part of the contract is unclear",
            ],
        },
        RiskLevel::Medium => LawyerAdvice {
            intro: "Show to a lawyer before signing if:",
            conditions: vec![
                "Contract value exceeds Rs. 10 lakhs",
                "More than 2 high-risk clauses exist",
                "Agreement duration is more than 1 year",
                "Important business relationship is involved",
            ],
        },
        RiskLevel::Low => LawyerAdvice {
            intro: "Consider a legal review if:",
            conditions: vec![
                "First time doing business with this party",
                "Unusual business arrangement",
                "Large payment is involved",
                "Intellectual property is included",
            ],
        },
    }
}
