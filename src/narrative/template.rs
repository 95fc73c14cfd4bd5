use crate::models::{ClauseAnalysis, CompositeRisk};
use crate::narrative::{ComplianceCheck, NarrativeError, NarrativeGenerator, NarrativeReport};
use crate::risk::aggregate::aggregate;

/// Builds every narrative section from the scores alone; no network, no
/// randomness.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemplateNarrator;

impl TemplateNarrator {
    pub fn build(&self, composite: &CompositeRisk, analyses: &[ClauseAnalysis]) -> NarrativeReport {
        let high = composite.high_risk_count;
        let medium = composite.medium_risk_count;
        let low = composite.risk_distribution.low;

        let call_to_action = if high > 0 {
            "IMMEDIATE ACTION REQUIRED: High-risk clauses detected."
        } else {
            "Review recommended before signing."
        };

        let executive_summary = format!(
            "This analysis examined {} clauses and found {high} high-risk and {medium} \
             medium-risk issues requiring attention.\n\n\
             Overall Risk Assessment: {} (Score: {}/10)\n\n\
             {call_to_action}\n\n\
             For Indian SMEs, it's crucial to review jurisdiction clauses, liability limits, \
             and termination procedures to ensure they align with Indian business practices.",
            analyses.len(),
            composite.overall_risk,
            composite.score,
        );

        let risk_analysis = format!(
            "High Risk Clauses: {high}\n\
             Medium Risk Clauses: {medium}\n\
             Low Risk Clauses: {low}\n\n\
             Key Risk Areas:\n\
             1. Legal & Compliance Risk\n\
             2. Financial Risk Exposure\n\
             3. Operational Disruption Risk\n\
             4. Business Continuity Risk"
        );

        let red_flag = if high > 0 {
            format!("{high} high-risk clauses require immediate attention")
        } else {
            "No critical red flags detected".to_string()
        };

        NarrativeReport {
            executive_summary: Some(executive_summary),
            risk_analysis: Some(risk_analysis),
            critical_issues: Some(strings(&[
                "Complete clause-by-clause analysis recommended",
                "Review jurisdiction and dispute resolution clauses",
                "Verify liability limits and penalty terms",
                "Check termination and renewal procedures",
            ])),
            business_impact_analysis: Some(
                "Detailed impact analysis requires professional legal review. Key considerations \
                 include financial exposure, operational continuity, and compliance requirements."
                    .to_string(),
            ),
            action_plan: Some(strings(&[
                "IMMEDIATE: Consult with qualified Indian lawyer",
                "WEEK 1: Document all concerns and required changes",
                "WEEK 2: Request amendments in writing",
                "WEEK 3: Negotiate key terms (jurisdiction, liability, termination)",
                "WEEK 4: Final review and execution",
            ])),
            negotiation_strategy: Some(strings(&[
                "Priority 1: Ensure Indian jurisdiction for all disputes",
                "Priority 2: Limit liability to reasonable business amounts",
                "Priority 3: Add reasonable notice periods for termination",
                "Priority 4: Specify clear payment terms (net 30-45 days)",
                "Priority 5: Avoid indefinite or perpetual obligations",
            ])),
            legal_compliance_check: Some(ComplianceCheck {
                status: "Professional Review Required".to_string(),
                issues: strings(&["Complete legal review recommended for Indian compliance"]),
                recommendations: strings(&[
                    "Consult with legal professional specializing in Indian contract law",
                ]),
            }),
            red_flags: Some(vec![
                "Professional legal review strongly recommended".to_string(),
                red_flag,
            ]),
            industry_benchmarks: Some(
                "Standard Indian SME contracts typically include: Indian jurisdiction, limited \
                 liability, reasonable notice periods, and clear renewal procedures."
                    .to_string(),
            ),
            cost_implications: Some(
                "Potential costs include legal fees, dispute resolution expenses, penalty charges, \
                 and operational disruptions. Professional review can help mitigate these risks."
                    .to_string(),
            ),
        }
    }
}

impl NarrativeGenerator for TemplateNarrator {
    async fn generate(
        &self,
        analyses: &[ClauseAnalysis],
        _contract_excerpt: &str,
    ) -> Result<NarrativeReport, NarrativeError> {
        Ok(self.build(&aggregate(analyses), analyses))
    }
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
