use anyhow::Result;
use regex::{Regex, RegexBuilder};

use crate::models::{ClauseAnalysis, ClauseType, RiskIssue, RiskLevel};
use crate::risk::patterns::{TypeRule, MITIGATIONS, RISK_TIERS, TYPE_RULES};
use crate::text::char_window;

const MAX_SCORE: i32 = 10;
const MAX_ISSUES: usize = 5;
const MAX_SUGGESTIONS: usize = 3;
const CONTEXT_CHARS: usize = 50;

struct CompiledPattern {
    re: Regex,
    explanation: &'static str,
    level: RiskLevel,
    weight: i32,
}

struct CompiledTypeRule {
    rule: &'static TypeRule,
    trigger: Regex,
}

/// Scores a clause against the tiered risk-pattern table and the
/// clause-type adjustments.
///
/// Tier matches are cumulative (every pattern is tested), unlike the
/// first-match-wins classifier. The score is clamped to `0..=10` only after
/// every addition.
pub struct RiskEngine {
    patterns: Vec<CompiledPattern>,
    type_rules: Vec<CompiledTypeRule>,
}

impl RiskEngine {
    pub fn new() -> Result<Self> {
        let mut patterns = Vec::new();
        for tier in RISK_TIERS {
            for &(pattern, explanation) in tier.patterns {
                patterns.push(CompiledPattern {
                    re: case_insensitive(pattern)?,
                    explanation,
                    level: tier.level,
                    weight: tier.weight,
                });
            }
        }

        let mut type_rules = Vec::with_capacity(TYPE_RULES.len());
        for rule in TYPE_RULES {
            type_rules.push(CompiledTypeRule {
                rule,
                trigger: case_insensitive(rule.trigger)?,
            });
        }

        Ok(Self {
            patterns,
            type_rules,
        })
    }

    pub fn analyze_clause(
        &self,
        clause_id: u32,
        clause_text: &str,
        clause_type: ClauseType,
    ) -> ClauseAnalysis {
        let mut raw_score = 0;
        let mut issues = Vec::new();

        for pattern in &self.patterns {
            if let Some(m) = pattern.re.find(clause_text) {
                raw_score += pattern.weight;
                issues.push(RiskIssue {
                    issue: pattern.explanation.to_string(),
                    risk_level: pattern.level,
                    context: char_window(clause_text, m.start(), m.end(), CONTEXT_CHARS)
                        .to_string(),
                });
            }
        }

        for compiled in self.type_rules.iter().filter(|r| r.rule.clause_type == clause_type) {
            let rule = compiled.rule;
            raw_score += rule.base;
            if compiled.trigger.is_match(clause_text) {
                raw_score += rule.on_trigger;
                issues.push(RiskIssue {
                    issue: rule.issue.to_string(),
                    risk_level: rule.level,
                    context: rule.context.to_string(),
                });
            }
        }

        let suggestions = suggestions_for(&issues);
        let risk_score = raw_score.clamp(0, MAX_SCORE) as u8;
        issues.truncate(MAX_ISSUES);

        ClauseAnalysis {
            clause_id,
            clause_type,
            risk_score,
            risk_level: RiskLevel::from_score(f64::from(risk_score)),
            issues,
            suggestions,
        }
    }
}

/// First matching mitigation per issue, without repeats, at most three.
fn suggestions_for(issues: &[RiskIssue]) -> Vec<String> {
    let mut suggestions: Vec<String> = Vec::new();

    for issue in issues {
        let lower = issue.issue.to_lowercase();
        let Some((_, suggestion)) = MITIGATIONS.iter().find(|(key, _)| lower.contains(key)) else {
            continue;
        };
        if suggestion.is_empty() || suggestions.iter().any(|s| s == suggestion) {
            continue;
        }
        suggestions.push(suggestion.to_string());
        if suggestions.len() == MAX_SUGGESTIONS {
            break;
        }
    }

    suggestions
}

fn case_insensitive(pattern: &str) -> Result<Regex> {
    Ok(RegexBuilder::new(pattern).case_insensitive(true).build()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn engine() -> RiskEngine {
        RiskEngine::new().unwrap()
    }

    #[test]
    fn test_single_high_pattern_scores_three() {
        let analysis = engine().analyze_clause(1, "unlimited liability", ClauseType::Liability);
        assert_eq!(analysis.risk_score, 3);
        assert_eq!(analysis.risk_level, RiskLevel::Low);
        assert_eq!(analysis.issues.len(), 1);
        assert_eq!(analysis.issues[0].risk_level, RiskLevel::High);
        assert_eq!(analysis.issues[0].context, "unlimited liability");
        assert_eq!(
            analysis.suggestions,
            vec!["Suggest capping liability to contract value or insurance limits"]
        );
    }

    #[test]
    fn test_scores_are_cumulative_across_tiers() {
        let text = "The Employee's unlimited liability survives; the Company may at its sole \
                    discretion terminate; confidentiality is indefinite; notice must be given in writing.";
        let analysis = engine().analyze_clause(2, text, ClauseType::General);
        // 3 + 3 + 2 + 1
        assert_eq!(analysis.risk_score, 9);
        assert_eq!(analysis.risk_level, RiskLevel::High);
        let levels: Vec<RiskLevel> = analysis.issues.iter().map(|i| i.risk_level).collect();
        assert_eq!(
            levels,
            vec![RiskLevel::High, RiskLevel::High, RiskLevel::Medium, RiskLevel::Low]
        );
    }

    #[test]
    fn test_score_is_clamped_after_all_additions() {
        let text = "unlimited liability; indemnify them for their negligence; penalty of 5% per month; \
                    sole discretion to terminate; automatic renewal without notice";
        let analysis = engine().analyze_clause(3, text, ClauseType::Indemnity);
        assert_eq!(analysis.risk_score, 10);
        assert_eq!(analysis.risk_level, RiskLevel::High);
        assert_eq!(analysis.issues.len(), 5);
    }

    #[test]
    fn test_extended_mitigations_cover_each_high_pattern() {
        // Every high-tier explanation has its own mitigation, so five hits
        // fill the three suggestion slots in issue order
        let text = "unlimited liability; indemnify them for their negligence; penalty of 5% per month; \
                    sole discretion to terminate; automatic renewal without notice";
        let analysis = engine().analyze_clause(3, text, ClauseType::Indemnity);
        assert_eq!(
            analysis.suggestions,
            vec![
                "Suggest capping liability to contract value or insurance limits",
                "Suggest limiting indemnity to losses caused by your own negligence",
                "Suggest capping late-payment penalties at a reasonable rate (e.g. 1-2% per month)",
            ]
        );
    }

    #[test]
    fn test_repeated_mitigation_is_suggested_once() {
        let issues = vec![
            RiskIssue {
                issue: "Foreign jurisdiction increases legal costs".to_string(),
                risk_level: RiskLevel::High,
                context: String::new(),
            },
            RiskIssue {
                issue: "Foreign jurisdiction increases legal costs".to_string(),
                risk_level: RiskLevel::High,
                context: String::new(),
            },
        ];
        assert_eq!(
            suggestions_for(&issues),
            vec!["Suggest local jurisdiction or neutral arbitration venue"]
        );
    }

    #[test]
    fn test_indemnity_flat_bonus_and_broad_scope() {
        let e = engine();
        let narrow = e.analyze_clause(1, "Vendor shall indemnify Client", ClauseType::Indemnity);
        assert_eq!(narrow.risk_score, 2);
        assert!(narrow.issues.is_empty());

        let broad = e.analyze_clause(
            1,
            "Vendor shall indemnify Client against all losses",
            ClauseType::Indemnity,
        );
        assert_eq!(broad.risk_score, 2);
        assert_eq!(broad.issues[0].context, "Indemnity clause scope");
        assert_eq!(
            broad.suggestions,
            vec!["Suggest excluding indirect and consequential damages from the indemnity"]
        );
    }

    #[test]
    fn test_termination_without_cause() {
        let e = engine();
        let text = "Company may terminate without cause";
        assert_eq!(e.analyze_clause(1, text, ClauseType::Termination).risk_score, 3);
        // The adjustment only applies to Termination clauses
        assert_eq!(e.analyze_clause(1, text, ClauseType::General).risk_score, 0);
    }

    #[test]
    fn test_indian_city_reduces_jurisdiction_risk() {
        let e = engine();
        let local = e.analyze_clause(
            1,
            "Exclusive jurisdiction of courts in a foreign country, seated in Mumbai",
            ClauseType::Jurisdiction,
        );
        let foreign = e.analyze_clause(
            1,
            "Exclusive jurisdiction of courts in a foreign country, seated in Singapore",
            ClauseType::Jurisdiction,
        );
        assert_eq!(foreign.risk_score, 3);
        assert_eq!(local.risk_score, foreign.risk_score - 1);
        let last = local.issues.last().unwrap();
        assert_eq!(last.risk_level, RiskLevel::Low);
        assert_eq!(last.issue, "Local Indian jurisdiction is preferable for SMEs");
    }

    #[test]
    fn test_negative_adjustment_floors_at_zero() {
        let analysis = engine().analyze_clause(
            1,
            "Courts at Delhi shall have jurisdiction",
            ClauseType::Jurisdiction,
        );
        assert_eq!(analysis.risk_score, 0);
        assert_eq!(analysis.risk_level, RiskLevel::Low);
    }

    #[test]
    fn test_empty_clause() {
        let analysis = engine().analyze_clause(1, "", ClauseType::General);
        assert_eq!(analysis.risk_score, 0);
        assert!(analysis.issues.is_empty());
        assert!(analysis.suggestions.is_empty());
    }

    #[test]
    fn test_repeated_analysis_is_identical() {
        let e = engine();
        let text = "Payment terms are 90 days. Penalty of 3% per month applies.";
        assert_eq!(
            e.analyze_clause(4, text, ClauseType::Payment),
            e.analyze_clause(4, text, ClauseType::Payment)
        );
    }

    proptest! {
        #[test]
        fn test_score_bounds_and_level_consistency(text in "\\PC{0,200}") {
            let e = engine();
            for clause_type in [ClauseType::Indemnity, ClauseType::Termination, ClauseType::Jurisdiction, ClauseType::General] {
                let analysis = e.analyze_clause(1, &text, clause_type);
                prop_assert!(analysis.risk_score <= 10);
                let expected = match analysis.risk_score {
                    7..=10 => RiskLevel::High,
                    4..=6 => RiskLevel::Medium,
                    _ => RiskLevel::Low,
                };
                prop_assert_eq!(analysis.risk_level, expected);
                prop_assert!(analysis.issues.len() <= 5);
                prop_assert!(analysis.suggestions.len() <= 3);
            }
        }
    }
}
