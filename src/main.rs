//! `contract-checkr` — segment contracts into clauses, score their risk, and
//! explain the result in business terms.
//!
//! # Flow
//! 1. Parse CLI arguments ([`cli`]).
//! 2. Load config ([`config::load_config`]).
//! 3. Read every input document ([`source`]).
//! 4. Analyze documents in parallel ([`pipeline::ContractAnalyzer`]).
//! 5. Optionally build narrative sections concurrently (`--narrative`, [`narrative`]).
//! 6. Render the requested report ([`report`]).
//! 7. Exit `0`, or `1` when any contract's overall risk meets `fail_on`.

mod clause;
mod cli;
mod config;
mod language;
mod metadata;
mod models;
mod narrative;
mod pipeline;
mod report;
mod risk;
mod segmenter;
mod source;
mod text;

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use colored::Colorize;
use futures::future::join_all;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use cli::{Cli, ReportFormat};
use config::{load_config, Config};
use models::ContractAnalysis;
use narrative::remote::RemoteNarrator;
use narrative::{resolve_all, NarrativeReport};
use pipeline::ContractAnalyzer;
use report::sections::ReportSections;
use source::{load_documents, Document};
use text::truncate_chars;

/// One contract in `--report json` output.
#[derive(Serialize)]
struct JsonReport<'a> {
    #[serde(flatten)]
    analysis: &'a ContractAnalysis,
    report: ReportSections,
    #[serde(skip_serializing_if = "Option::is_none")]
    narrative: Option<NarrativeReport>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();

    let cwd = std::env::current_dir()?;
    let config = load_config(&cwd, cli.config.as_deref())?;
    let fail_on = cli.fail_on.unwrap_or(config.policy.fail_on);

    let documents = load_documents(&cli.paths)?;
    if documents.iter().all(|d| d.text.trim().is_empty()) {
        eprintln!("No contract text could be read from the given inputs");
        std::process::exit(1);
    }

    let analyzer = Arc::new(ContractAnalyzer::new(&config.analysis)?);
    let analyses = analyze_documents(analyzer, &documents, cli.quiet).await?;

    let narratives = if cli.narrative || cli.narrative_url.is_some() {
        build_narratives(&cli, &config, &documents, &analyses).await?
    } else {
        vec![None; analyses.len()]
    };

    match cli.report {
        ReportFormat::Terminal => {
            for (analysis, narrative) in analyses.iter().zip(&narratives) {
                report::terminal::render(analysis, narrative.as_ref(), cli.verbose, cli.quiet);
            }
        }
        ReportFormat::Json => {
            let reports: Vec<JsonReport> = analyses
                .iter()
                .zip(narratives)
                .map(|(analysis, narrative)| JsonReport {
                    analysis,
                    report: ReportSections::assemble(analysis),
                    narrative,
                })
                .collect();
            println!("{}", serde_json::to_string_pretty(&reports)?);
        }
    }

    let failing = analyses
        .iter()
        .filter(|a| fail_on.is_failure(a.composite.overall_risk))
        .count();

    if failing > 0 {
        if !cli.quiet {
            eprintln!(
                "  {} {} contract(s) at or above the fail-on risk level",
                "✗".red(),
                failing
            );
        }
        std::process::exit(1);
    }

    Ok(())
}

/// Run the analysis for every document on the blocking pool; results keep
/// input order.
async fn analyze_documents(
    analyzer: Arc<ContractAnalyzer>,
    documents: &[Document],
    quiet: bool,
) -> Result<Vec<ContractAnalysis>> {
    let pb = if !quiet && documents.len() > 1 {
        let pb = ProgressBar::new(documents.len() as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template(
                    "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} {msg}",
                )?
                .progress_chars("#>-"),
        );
        Some(pb)
    } else {
        None
    };

    let tasks: Vec<_> = documents
        .iter()
        .map(|doc| {
            let analyzer = Arc::clone(&analyzer);
            let name = doc.name.clone();
            let text = doc.text.clone();
            let pb = pb.clone();
            async move {
                let result =
                    tokio::task::spawn_blocking(move || analyzer.analyze(&name, &text)).await;
                if let Some(pb) = &pb {
                    pb.inc(1);
                }
                result
            }
        })
        .collect();

    let results = join_all(tasks).await;

    if let Some(pb) = pb {
        pb.finish_with_message("Done");
    }

    let mut analyses = Vec::with_capacity(results.len());
    for result in results {
        analyses.push(result?);
    }

    if !quiet {
        for analysis in &analyses {
            eprintln!(
                "  {} {} {} clauses",
                "→".cyan(),
                analysis.source,
                analysis.clauses.len()
            );
        }
    }

    Ok(analyses)
}

async fn build_narratives(
    cli: &Cli,
    config: &Config,
    documents: &[Document],
    analyses: &[ContractAnalysis],
) -> Result<Vec<Option<NarrativeReport>>> {
    let endpoint = cli
        .narrative_url
        .clone()
        .or_else(|| config.narrative.endpoint.clone());
    let remote = endpoint
        .map(|url| RemoteNarrator::new(url, &config.narrative))
        .transpose()?;

    if remote.is_none() {
        tracing::info!("no narrative endpoint configured, using template report");
    }

    let requests: Vec<_> = documents
        .iter()
        .zip(analyses)
        .map(|(doc, analysis)| {
            (
                &analysis.composite,
                analysis.analyses.as_slice(),
                truncate_chars(&doc.text, config.narrative.excerpt_chars),
            )
        })
        .collect();

    let narratives = resolve_all(remote.as_ref(), &requests).await;
    Ok(narratives.into_iter().map(Some).collect())
}
