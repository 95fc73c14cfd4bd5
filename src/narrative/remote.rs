use std::time::Duration;

use anyhow::Result;
use serde::Serialize;

use crate::config::NarrativeConfig;
use crate::models::ClauseAnalysis;
use crate::narrative::{NarrativeError, NarrativeGenerator, NarrativeReport};

/// Request body posted to the narrative service.
#[derive(Serialize)]
struct NarrativeRequest<'a> {
    analyses: &'a [ClauseAnalysis],
    contract_excerpt: &'a str,
}

/// Posts the analysis as JSON to an HTTP endpoint and reads a
/// [`NarrativeReport`] back. Sections missing from the response stay `None`.
pub struct RemoteNarrator {
    endpoint: String,
    api_key_env: Option<String>,
    client: reqwest::Client,
}

impl RemoteNarrator {
    pub fn new(endpoint: impl Into<String>, config: &NarrativeConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            endpoint: endpoint.into(),
            api_key_env: config.api_key_env.clone(),
            client,
        })
    }

    fn api_key(&self) -> Result<Option<String>, NarrativeError> {
        match &self.api_key_env {
            None => Ok(None),
            Some(var) => std::env::var(var)
                .map(Some)
                .map_err(|_| NarrativeError::MissingApiKey(var.clone())),
        }
    }
}

impl NarrativeGenerator for RemoteNarrator {
    async fn generate(
        &self,
        analyses: &[ClauseAnalysis],
        contract_excerpt: &str,
    ) -> Result<NarrativeReport, NarrativeError> {
        let mut request = self.client.post(&self.endpoint).json(&NarrativeRequest {
            analyses,
            contract_excerpt,
        });
        if let Some(key) = self.api_key()? {
            request = request.bearer_auth(key);
        }

        tracing::debug!(endpoint = %self.endpoint, clauses = analyses.len(), "requesting narrative");
        let response = request.send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(NarrativeError::Status { status, body });
        }

        Ok(response.json::<NarrativeReport>().await?)
    }
}
