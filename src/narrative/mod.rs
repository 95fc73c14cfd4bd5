//! Long-form report sections, produced by an optional external service with
//! a deterministic template behind it.
//!
//! - [`remote`] — HTTP client for a narrative service.
//! - [`template`] — builds every section from the analysis results alone.
//!
//! [`resolve_narrative`] is the only entry point the CLI uses: it never
//! fails, and every section it returns is filled.

pub mod remote;
pub mod template;

use futures::future::join_all;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{ClauseAnalysis, CompositeRisk};
use template::TemplateNarrator;

#[derive(Error, Debug)]
pub enum NarrativeError {
    #[error("narrative request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("narrative service returned HTTP {status}: {body}")]
    Status {
        status: reqwest::StatusCode,
        body: String,
    },

    #[error("environment variable {0} holding the narrative API key is not set")]
    MissingApiKey(String),
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ComplianceCheck {
    pub status: String,
    #[serde(default)]
    pub issues: Vec<String>,
    #[serde(default)]
    pub recommendations: Vec<String>,
}

/// Ten report sections. A generator may leave any of them out.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct NarrativeReport {
    pub executive_summary: Option<String>,
    pub risk_analysis: Option<String>,
    pub critical_issues: Option<Vec<String>>,
    pub business_impact_analysis: Option<String>,
    pub action_plan: Option<Vec<String>>,
    pub negotiation_strategy: Option<Vec<String>>,
    pub legal_compliance_check: Option<ComplianceCheck>,
    pub red_flags: Option<Vec<String>>,
    pub industry_benchmarks: Option<String>,
    pub cost_implications: Option<String>,
}

impl NarrativeReport {
    /// Keep every section present in `self`, take the rest from `fallback`.
    pub fn or_fill(self, fallback: NarrativeReport) -> NarrativeReport {
        NarrativeReport {
            executive_summary: self.executive_summary.or(fallback.executive_summary),
            risk_analysis: self.risk_analysis.or(fallback.risk_analysis),
            critical_issues: self.critical_issues.or(fallback.critical_issues),
            business_impact_analysis: self
                .business_impact_analysis
                .or(fallback.business_impact_analysis),
            action_plan: self.action_plan.or(fallback.action_plan),
            negotiation_strategy: self.negotiation_strategy.or(fallback.negotiation_strategy),
            legal_compliance_check: self
                .legal_compliance_check
                .or(fallback.legal_compliance_check),
            red_flags: self.red_flags.or(fallback.red_flags),
            industry_benchmarks: self.industry_benchmarks.or(fallback.industry_benchmarks),
            cost_implications: self.cost_implications.or(fallback.cost_implications),
        }
    }
}

/// Anything that can turn clause analyses plus a contract excerpt into
/// report sections.
#[allow(async_fn_in_trait)]
pub trait NarrativeGenerator {
    async fn generate(
        &self,
        analyses: &[ClauseAnalysis],
        contract_excerpt: &str,
    ) -> Result<NarrativeReport, NarrativeError>;
}

/// Ask `generator` for a narrative, falling back to the template when there
/// is no generator or it fails, and filling any section it left out.
pub async fn resolve_narrative<G: NarrativeGenerator>(
    generator: Option<&G>,
    composite: &CompositeRisk,
    analyses: &[ClauseAnalysis],
    contract_excerpt: &str,
) -> NarrativeReport {
    let template = TemplateNarrator.build(composite, analyses);

    let Some(generator) = generator else {
        return template;
    };

    match generator.generate(analyses, contract_excerpt).await {
        Ok(report) => report.or_fill(template),
        Err(e) => {
            tracing::warn!(error = %e, "narrative generation failed, using template report");
            template
        }
    }
}

/// Resolve one narrative per `(composite, analyses, excerpt)` request
/// concurrently. Output keeps request order.
pub async fn resolve_all<G: NarrativeGenerator>(
    generator: Option<&G>,
    requests: &[(&CompositeRisk, &[ClauseAnalysis], String)],
) -> Vec<NarrativeReport> {
    join_all(
        requests
            .iter()
            .map(|(composite, analyses, excerpt)| {
                resolve_narrative(generator, composite, analyses, excerpt)
            }),
    )
    .await
}
