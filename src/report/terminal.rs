use colored::*;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::models::{ContractAnalysis, RiskLevel};
use crate::narrative::NarrativeReport;
use crate::report::sections::ReportSections;

/// Render a colored terminal report for one contract.
///
/// Quiet mode prints a single summary line. Otherwise High and Medium
/// clauses are tabulated; `verbose` adds every clause plus the supplementary
/// findings.
pub fn render(
    analysis: &ContractAnalysis,
    narrative: Option<&NarrativeReport>,
    verbose: bool,
    quiet: bool,
) {
    let composite = &analysis.composite;

    if quiet {
        println!(
            "{}  Risk: {}  Score: {}/10  Clauses: {}  High: {}  Medium: {}",
            analysis.source,
            colored_level(composite.overall_risk),
            composite.score,
            composite.total_clauses,
            composite.high_risk_count.to_string().red(),
            composite.medium_risk_count.to_string().yellow(),
        );
        return;
    }

    let sections = ReportSections::assemble(analysis);

    println!(
        "\n {} v{}",
        "contract-checkr".bold(),
        env!("CARGO_PKG_VERSION")
    );
    println!(" Analyzing: {}", analysis.source);
    println!(" Language : {}\n", analysis.language_summary);

    let summary = &sections.risk_summary;
    println!(" ┌────────────────────────────────────────────────────┐");
    println!(" │  {:<48} │", colored_headline(summary.headline, composite.overall_risk));
    println!(
        " │  {:<48} │",
        format!("Contract Risk Score : {}/10 ({})", summary.score, summary.score_label)
    );
    println!(
        " │  {:<48} │",
        format!("{:<20}: {}", summary.counted_label, summary.counted)
    );
    println!(
        " │  {:<48} │",
        format!(
            "{}  High {:>3}   {}  Medium {:>3}   {}  Low {:>3}",
            "✗".red(),
            composite.risk_distribution.high,
            "⚠".yellow(),
            composite.risk_distribution.medium,
            "✓".green(),
            composite.risk_distribution.low,
        )
    );
    println!(" └────────────────────────────────────────────────────┘\n");
    println!(" {}\n", summary.meaning);

    let flagged = composite.high_risk_count + composite.medium_risk_count;
    if verbose {
        println!(" {} All clauses:\n", "[CLAUSES]".cyan().bold());
        render_table(analysis, |_| true);
        println!();
    } else if flagged > 0 {
        println!(" {} Clauses requiring attention:\n", "[RISK]".red().bold());
        render_table(analysis, |level| level >= RiskLevel::Medium);
        println!();
    }

    println!(" {}", "TOP WARNINGS".bold());
    if sections.top_warnings.is_empty() {
        println!("   - No major issues detected");
    }
    for warning in &sections.top_warnings {
        println!(
            "   - Clause {} ({}): {}",
            warning.clause_id, warning.clause_type, warning.message
        );
    }
    println!();

    print_numbered("NEXT STEPS", &sections.next_steps);

    println!(" {}", "DETAILED ANALYSIS".bold());
    if sections.clause_details.is_empty() {
        println!("   No detailed analysis available.");
    }
    for detail in &sections.clause_details {
        println!(
            "   Clause {} - {} ({} Risk Level)",
            detail.clause_id,
            detail.clause_type,
            colored_level(detail.risk_level)
        );
        println!("     {}", detail.explanation);
    }
    println!();

    print_bullets("PRACTICAL BUSINESS ADVICE", &sections.business_advice);
    print_bullets(sections.lawyer_advice.intro, &sections.lawyer_advice.conditions);

    if verbose {
        render_findings(analysis);
    }

    if let Some(narrative) = narrative {
        render_narrative(narrative);
    }

    println!(" {}", "IMPORTANT NOTES".bold());
    for note in &sections.notes {
        println!("   - {}", note.dimmed());
    }
    println!();
}

fn render_table(analysis: &ContractAnalysis, include: impl Fn(RiskLevel) -> bool) {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            Cell::new("Clause").add_attribute(Attribute::Bold),
            Cell::new("Type").add_attribute(Attribute::Bold),
            Cell::new("Score").add_attribute(Attribute::Bold),
            Cell::new("Risk").add_attribute(Attribute::Bold),
            Cell::new("Issues").add_attribute(Attribute::Bold),
            Cell::new("Suggestions").add_attribute(Attribute::Bold),
        ]);

    for a in analysis.analyses.iter().filter(|a| include(a.risk_level)) {
        let (risk_str, risk_color) = match a.risk_level {
            RiskLevel::High => ("✗ high", Color::Red),
            RiskLevel::Medium => ("⚠ medium", Color::Yellow),
            RiskLevel::Low => ("✓ low", Color::Green),
        };

        let issues: Vec<&str> = a.issues.iter().map(|i| i.issue.as_str()).collect();

        table.add_row(vec![
            Cell::new(a.clause_id).set_alignment(CellAlignment::Right),
            Cell::new(a.clause_type.to_string()),
            Cell::new(format!("{}/10", a.risk_score)).set_alignment(CellAlignment::Right),
            Cell::new(risk_str)
                .fg(risk_color)
                .set_alignment(CellAlignment::Center),
            Cell::new(issues.join("\n")),
            Cell::new(a.suggestions.join("\n")),
        ]);
    }

    println!("{}", table);
}

fn render_findings(analysis: &ContractAnalysis) {
    let meta = &analysis.metadata;
    println!(" {}", "CONTRACT DETAILS".bold());
    if !meta.parties.is_empty() {
        println!("   Parties  : {}", meta.parties.join(", "));
    }
    if !meta.dates.is_empty() {
        println!("   Dates    : {}", meta.dates.join(", "));
    }
    if !meta.amounts.is_empty() {
        println!("   Amounts  : {}", meta.amounts.join(", "));
    }
    if let Some(duration) = &meta.duration {
        println!("   Duration : {}", duration);
    }
    println!(
        "   Sentences: {} Hindi, {} English",
        analysis.sentence_mix.hindi, analysis.sentence_mix.english
    );
    println!();

    if let Some(summary) = &analysis.translation_summary {
        println!(" {} {}", "[TRANSLATION]".cyan().bold(), summary);
        for (hindi, english) in &analysis.translated_terms {
            println!("   {} → {}", hindi, english);
        }
        for term in &analysis.financial_terms {
            println!("   {} {} ({})", term.kind.to_string().dimmed(), term.normalized, term.original);
        }
        for s in &analysis.clause_summaries {
            println!("   Clause {}: {}", s.clause_id, s.summary);
        }
        println!();
    }

    if !analysis.ambiguities.is_empty() {
        println!(" {} Vague wording:", "[AMBIGUITY]".yellow().bold());
        for a in &analysis.ambiguities {
            println!("   - \"{}\": {}", a.term, a.explanation);
        }
        println!();
    }
}

fn render_narrative(narrative: &NarrativeReport) {
    let text_sections = [
        ("EXECUTIVE SUMMARY", &narrative.executive_summary),
        ("RISK ANALYSIS", &narrative.risk_analysis),
        ("BUSINESS IMPACT", &narrative.business_impact_analysis),
        ("INDUSTRY BENCHMARKS", &narrative.industry_benchmarks),
        ("COST IMPLICATIONS", &narrative.cost_implications),
    ];
    for (title, body) in text_sections {
        if let Some(body) = body {
            println!(" {}", title.bold());
            for line in body.lines() {
                println!("   {}", line.trim());
            }
            println!();
        }
    }

    let list_sections = [
        ("CRITICAL ISSUES", &narrative.critical_issues),
        ("RED FLAGS", &narrative.red_flags),
        ("ACTION PLAN", &narrative.action_plan),
        ("NEGOTIATION STRATEGY", &narrative.negotiation_strategy),
    ];
    for (title, items) in list_sections {
        if let Some(items) = items {
            let items: Vec<&str> = items.iter().map(String::as_str).collect();
            print_bullets(title, &items);
        }
    }

    if let Some(check) = &narrative.legal_compliance_check {
        println!(" {} {}", "LEGAL COMPLIANCE:".bold(), check.status);
        for issue in &check.issues {
            println!("   {} {}", "⚠".yellow(), issue);
        }
        for rec in &check.recommendations {
            println!("   {} {}", "→".cyan(), rec);
        }
        println!();
    }
}

fn print_bullets(title: &str, items: &[&str]) {
    println!(" {}", title.bold());
    for item in items {
        println!("   - {}", item);
    }
    println!();
}

fn print_numbered(title: &str, items: &[&str]) {
    println!(" {}", title.bold());
    for (i, item) in items.iter().enumerate() {
        println!("   {}. {}", i + 1, item);
    }
    println!();
}

fn colored_level(level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::High => level.to_string().red().bold(),
        RiskLevel::Medium => level.to_string().yellow().bold(),
        RiskLevel::Low => level.to_string().green().bold(),
    }
}

fn colored_headline(headline: &str, level: RiskLevel) -> ColoredString {
    match level {
        RiskLevel::High => headline.red().bold(),
        RiskLevel::Medium => headline.yellow().bold(),
        RiskLevel::Low => headline.green().bold(),
    }
}
