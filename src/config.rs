use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;

use crate::models::RiskLevel;

/// Root configuration structure, deserialized from `.contract-checkr/config.toml`.
///
/// Every section and field is optional in the file; missing values fall back
/// to the built-in defaults.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub analysis: AnalysisConfig,
    pub policy: PolicyConfig,
    pub narrative: NarrativeConfig,
}

/// Tuning knobs for clause segmentation.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AnalysisConfig {
    /// Characters kept in each clause preview.
    pub preview_chars: usize,
    /// Paragraphs kept when no structural delimiter is found.
    pub max_paragraphs: usize,
    /// A delimiter is accepted only when it splits the text into more than
    /// this many segments.
    pub split_threshold: usize,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            preview_chars: 500,
            max_paragraphs: 20,
            split_threshold: 3,
        }
    }
}

/// Decides which overall risk makes the CLI exit with code 1.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PolicyConfig {
    pub fail_on: FailOn,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum FailOn {
    /// Fail only on High overall risk.
    #[default]
    High,
    /// Fail on Medium or High overall risk.
    Medium,
    /// Always exit 0.
    Never,
}

impl FailOn {
    pub fn is_failure(self, overall: RiskLevel) -> bool {
        match self {
            FailOn::High => overall == RiskLevel::High,
            FailOn::Medium => overall >= RiskLevel::Medium,
            FailOn::Never => false,
        }
    }
}

/// Settings for the optional external narrative service.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NarrativeConfig {
    /// HTTP endpoint accepting the narrative request; no endpoint means the
    /// built-in template is used.
    pub endpoint: Option<String>,
    pub timeout_secs: u64,
    /// Leading characters of the contract sent along with the analysis.
    pub excerpt_chars: usize,
    /// Environment variable holding a bearer token for the endpoint.
    pub api_key_env: Option<String>,
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            timeout_secs: 30,
            excerpt_chars: 2000,
            api_key_env: None,
        }
    }
}

/// Load the configuration, searching in order:
///
/// 1. `config_override` — path passed via `--config`
/// 2. `<project_path>/.contract-checkr/config.toml`
/// 3. `~/.config/contract-checkr/config.toml`
/// 4. Built-in [`Config::default`]
pub fn load_config(project_path: &Path, config_override: Option<&Path>) -> Result<Config> {
    if let Some(path) = config_override {
        return read_config(path);
    }

    let project_config = project_path.join(".contract-checkr").join("config.toml");
    if project_config.exists() {
        return read_config(&project_config);
    }

    if let Some(home) = dirs::home_dir() {
        let home_config = home
            .join(".config")
            .join("contract-checkr")
            .join("config.toml");
        if home_config.exists() {
            return read_config(&home_config);
        }
    }

    Ok(Config::default())
}

fn read_config(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config = toml::from_str(&content)
        .with_context(|| format!("parsing config {}", path.display()))?;
    tracing::debug!(path = %path.display(), "loaded config");
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_defaults_without_files() {
        let dir = TempDir::new().unwrap();
        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.analysis.preview_chars, 500);
        assert_eq!(cfg.analysis.max_paragraphs, 20);
        assert_eq!(cfg.analysis.split_threshold, 3);
        assert_eq!(cfg.policy.fail_on, FailOn::High);
        assert_eq!(cfg.narrative.excerpt_chars, 2000);
        assert!(cfg.narrative.endpoint.is_none());
    }

    #[test]
    fn test_project_config_partial_override() {
        let dir = TempDir::new().unwrap();
        let cfg_dir = dir.path().join(".contract-checkr");
        fs::create_dir(&cfg_dir).unwrap();
        fs::write(
            cfg_dir.join("config.toml"),
            "[analysis]\npreview_chars = 120\n\n[policy]\nfail_on = \"medium\"\n",
        )
        .unwrap();

        let cfg = load_config(dir.path(), None).unwrap();
        assert_eq!(cfg.analysis.preview_chars, 120);
        assert_eq!(cfg.analysis.split_threshold, 3);
        assert_eq!(cfg.policy.fail_on, FailOn::Medium);
        assert_eq!(cfg.narrative.timeout_secs, 30);
    }

    #[test]
    fn test_override_path_wins() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(
            &path,
            "[narrative]\nendpoint = \"http://localhost:9000/report\"\napi_key_env = \"NARRATIVE_KEY\"\n",
        )
        .unwrap();

        let cfg = load_config(dir.path(), Some(&path)).unwrap();
        assert_eq!(
            cfg.narrative.endpoint.as_deref(),
            Some("http://localhost:9000/report")
        );
        assert_eq!(cfg.narrative.api_key_env.as_deref(), Some("NARRATIVE_KEY"));
    }

    #[test]
    fn test_invalid_config_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[policy]\nfail_on = \"sometimes\"\n").unwrap();
        assert!(load_config(dir.path(), Some(&path)).is_err());
        assert!(load_config(dir.path(), Some(&dir.path().join("missing.toml"))).is_err());
    }

    #[test]
    fn test_fail_on_thresholds() {
        assert!(FailOn::High.is_failure(RiskLevel::High));
        assert!(!FailOn::High.is_failure(RiskLevel::Medium));
        assert!(FailOn::Medium.is_failure(RiskLevel::Medium));
        assert!(!FailOn::Medium.is_failure(RiskLevel::Low));
        assert!(!FailOn::Never.is_failure(RiskLevel::High));
    }
}
