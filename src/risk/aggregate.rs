use crate::models::{ClauseAnalysis, CompositeRisk, RiskDistribution, RiskLevel};

/// Combine per-clause results into a contract-level verdict.
///
/// The overall level is bucketed from twice the average clause score, so a
/// contract averaging 3.5 already counts as High. `score` reports the plain
/// average to one decimal, with halves rounded to even.
pub fn aggregate(analyses: &[ClauseAnalysis]) -> CompositeRisk {
    if analyses.is_empty() {
        return CompositeRisk {
            overall_risk: RiskLevel::Low,
            score: 0.0,
            high_risk_count: 0,
            medium_risk_count: 0,
            total_clauses: 0,
            risk_distribution: RiskDistribution::default(),
        };
    }

    let total = analyses.len();
    let sum: u32 = analyses.iter().map(|a| u32::from(a.risk_score)).sum();
    let avg = f64::from(sum) / total as f64;

    let high = analyses
        .iter()
        .filter(|a| a.risk_level == RiskLevel::High)
        .count();
    let medium = analyses
        .iter()
        .filter(|a| a.risk_level == RiskLevel::Medium)
        .count();

    CompositeRisk {
        overall_risk: RiskLevel::from_score(avg * 2.0),
        score: (avg * 10.0).round_ties_even() / 10.0,
        high_risk_count: high,
        medium_risk_count: medium,
        total_clauses: total,
        risk_distribution: RiskDistribution {
            high,
            medium,
            low: total - high - medium,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ClauseType;
    use pretty_assertions::assert_eq;
    use proptest::prelude::*;

    fn scored(score: u8) -> ClauseAnalysis {
        ClauseAnalysis {
            clause_id: 1,
            clause_type: ClauseType::General,
            risk_score: score,
            risk_level: RiskLevel::from_score(f64::from(score)),
            issues: Vec::new(),
            suggestions: Vec::new(),
        }
    }

    #[test]
    fn test_empty_is_low() {
        let composite = aggregate(&[]);
        assert_eq!(composite.overall_risk, RiskLevel::Low);
        assert_eq!(composite.score, 0.0);
        assert_eq!(composite.total_clauses, 0);
        assert_eq!(composite.risk_distribution, RiskDistribution::default());
    }

    #[test]
    fn test_average_is_doubled_for_bucketing() {
        let composite = aggregate(&[scored(8), scored(2), scored(2)]);
        assert_eq!(composite.score, 4.0);
        assert_eq!(composite.overall_risk, RiskLevel::High);
        assert_eq!(composite.high_risk_count, 1);
        assert_eq!(composite.medium_risk_count, 0);
        assert_eq!(
            composite.risk_distribution,
            RiskDistribution {
                high: 1,
                medium: 0,
                low: 2
            }
        );
    }

    #[test]
    fn test_score_rounds_to_one_decimal() {
        let composite = aggregate(&[scored(1), scored(1), scored(2)]);
        assert_eq!(composite.score, 1.3);
        // 1.33 * 2 = 2.67
        assert_eq!(composite.overall_risk, RiskLevel::Low);

        let composite = aggregate(&[scored(2), scored(2)]);
        assert_eq!(composite.overall_risk, RiskLevel::Medium);
    }

    #[test]
    fn test_score_halves_round_to_even() {
        // 1 / 4 = 0.25
        assert_eq!(aggregate(&[scored(1), scored(0), scored(0), scored(0)]).score, 0.2);
        // 5 / 4 = 1.25
        assert_eq!(aggregate(&[scored(5), scored(0), scored(0), scored(0)]).score, 1.2);
        // 3 / 4 = 0.75
        assert_eq!(aggregate(&[scored(3), scored(0), scored(0), scored(0)]).score, 0.8);
    }

    proptest! {
        #[test]
        fn test_distribution_sums_to_total(scores in proptest::collection::vec(0u8..=10, 1..40)) {
            let analyses: Vec<ClauseAnalysis> = scores.iter().copied().map(scored).collect();
            let composite = aggregate(&analyses);
            let d = &composite.risk_distribution;
            prop_assert_eq!(d.high + d.medium + d.low, composite.total_clauses);
            prop_assert_eq!(composite.total_clauses, scores.len());
            prop_assert!(composite.score >= 0.0 && composite.score <= 10.0);
        }
    }
}
