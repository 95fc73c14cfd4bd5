use std::path::PathBuf;

use clap::Parser;

use crate::config::FailOn;

#[derive(Parser, Debug)]
#[command(
    name = "contract-checkr",
    about = "Analyze contracts clause by clause and flag risky terms",
    version
)]
pub struct Cli {
    /// Contract files to analyze; `-` reads from stdin
    #[arg(default_value = "-")]
    pub paths: Vec<PathBuf>,

    /// Config file [default: ./.contract-checkr/config.toml, fallback ~/.config/contract-checkr/config.toml]
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Report format
    #[arg(long, default_value = "terminal", value_name = "FORMAT")]
    pub report: ReportFormat,

    /// Add the long-form narrative sections to the report
    #[arg(long)]
    pub narrative: bool,

    /// Narrative service endpoint (overrides the config file); implies --narrative
    #[arg(long, value_name = "URL")]
    pub narrative_url: Option<String>,

    /// Overall risk that makes the run exit with code 1 (overrides the config file)
    #[arg(long, value_name = "LEVEL")]
    pub fail_on: Option<FailOn>,

    /// Show every clause and the supplementary findings (not just High/Medium risk)
    #[arg(short, long)]
    pub verbose: bool,

    /// Only print one summary line per contract
    #[arg(short, long)]
    pub quiet: bool,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ReportFormat {
    Terminal,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_stdin() {
        let cli = Cli::parse_from(["contract-checkr"]);
        assert_eq!(cli.paths, vec![PathBuf::from("-")]);
        assert!(matches!(cli.report, ReportFormat::Terminal));
        assert!(cli.fail_on.is_none());
    }

    #[test]
    fn test_flags() {
        let cli = Cli::parse_from([
            "contract-checkr",
            "a.txt",
            "b.txt",
            "--report",
            "json",
            "--fail-on",
            "medium",
            "--narrative-url",
            "http://localhost:8080/report",
            "-v",
        ]);
        assert_eq!(cli.paths.len(), 2);
        assert!(matches!(cli.report, ReportFormat::Json));
        assert_eq!(cli.fail_on, Some(FailOn::Medium));
        assert_eq!(cli.narrative_url.as_deref(), Some("http://localhost:8080/report"));
        assert!(cli.verbose);
    }
}
