use colored::Colorize;

use super::pluralize;
use crate::graph::GraphReport;
use crate::orphans::{OrphanReport, Priority};
use crate::pipeline::PipelineOutcome;
use crate::suggest::{Confidence, OrphanSuggestions, SuggestionReport};

const TOP_HUBS_SHOWN: usize = 5;
const QUICK_WINS_SHOWN: usize = 10;

/// Summary of a full run: graph health, per-stage highlights, artifacts and
/// failures.
pub fn print_outcome(outcome: &PipelineOutcome) {
    print_graph(&outcome.graph);
    if let Some(orphans) = &outcome.orphans {
        print_orphans(orphans);
    }
    if let Some(suggestions) = &outcome.suggestions {
        print_suggestion_summary(suggestions);
    }

    if !outcome.written.is_empty() {
        println!("\n{}", "Artifacts".bold());
        for path in &outcome.written {
            println!("  {} {}", "+".green(), path.display());
        }
    }

    if outcome.failures.is_empty() {
        println!("\n{}", "✓ All stages completed.".green().bold());
    } else {
        println!("\n{}", "Stage failures".red().bold());
        for failure in &outcome.failures {
            println!("  {} {}: {}", "✗".red(), failure.stage.label(), failure.error);
        }
    }
}

pub fn print_graph(report: &GraphReport) {
    let m = &report.metrics;
    println!("{}", "Vault link graph".bold().underline());
    println!(
        "  {} {}, {} {} ({} resolved)",
        m.total_files,
        pluralize("document", m.total_files),
        m.total_links,
        pluralize("reference", m.total_links),
        m.resolved_links
    );
    println!(
        "  {} orphaned, {} weakly connected, {} well connected",
        colour_count(m.orphaned_files),
        m.weakly_connected,
        m.well_connected
    );
    println!(
        "  {} {} (largest {}), {:.2} links per document",
        m.clusters,
        pluralize("cluster", m.clusters),
        m.largest_cluster,
        m.average_links_per_file
    );

    if !m.hub_documents.is_empty() {
        println!("\n{}", "Top hubs".bold());
        for hub in m.hub_documents.iter().take(TOP_HUBS_SHOWN) {
            println!("  {:>4}  {}", hub.inbound_links.to_string().cyan(), hub.file);
        }
    }

    if !report.skipped.is_empty() {
        println!(
            "\n{} {} skipped",
            report.skipped.len().to_string().yellow(),
            pluralize("file", report.skipped.len())
        );
        for s in &report.skipped {
            println!("  {} {}: {}", "-".yellow(), s.file, s.reason.dimmed());
        }
    }

    println!("\n{}", "Recommendations".bold());
    for rec in &report.recommendations {
        println!("  {}", paint_recommendation(rec));
    }
}

pub fn print_orphans(report: &OrphanReport) {
    println!(
        "\n{} ({})",
        "Orphans by directory".bold(),
        report.total_orphans
    );
    for group in &report.orphans_by_directory {
        let label = match group.priority {
            Priority::High => group.priority.label().red().bold(),
            Priority::Medium => group.priority.label().yellow(),
            Priority::Low => group.priority.label().dimmed(),
        };
        println!(
            "  [{label}] {} ({} {})",
            group.directory,
            group.files.len(),
            pluralize("file", group.files.len())
        );
        for hub in &group.suggested_hubs {
            println!("      {} {} ({:.2})", "->".blue(), hub.file, hub.score);
        }
    }

    if !report.quick_wins.is_empty() {
        println!("\n{}", "Quick wins".bold());
        for file in report.quick_wins.iter().take(QUICK_WINS_SHOWN) {
            println!("  {} {file}", "*".green());
        }
        let rest = report.quick_wins.len().saturating_sub(QUICK_WINS_SHOWN);
        if rest > 0 {
            println!("  {}", format!("... and {rest} more").dimmed());
        }
    }
}

/// Every orphan with every suggested connection.
pub fn print_suggestions(report: &SuggestionReport) {
    for entry in &report.suggestions {
        print_entry(entry);
    }
    print_suggestion_summary(report);
}

fn print_entry(entry: &OrphanSuggestions) {
    println!("\n{}", entry.orphan_file.bold());
    if entry.suggested_connections.is_empty() {
        println!("  {}", "no candidates".dimmed());
        return;
    }
    for s in &entry.suggested_connections {
        let confidence = match s.confidence {
            Confidence::High => s.confidence.label().green().bold(),
            Confidence::Medium => s.confidence.label().yellow(),
            Confidence::Low => s.confidence.label().dimmed(),
        };
        println!(
            "  {} {} [{confidence} {:.2}] {}",
            "->".blue(),
            s.target_file,
            s.score,
            s.reason.dimmed()
        );
    }
}

fn print_suggestion_summary(report: &SuggestionReport) {
    let high = report.high_confidence_count();
    println!(
        "\n{} {} for {} {}",
        high.to_string().green().bold(),
        pluralize("high-confidence suggestion", high),
        report.total_orphans,
        pluralize("orphan", report.total_orphans)
    );
}

fn colour_count(n: usize) -> colored::ColoredString {
    if n == 0 {
        n.to_string().green()
    } else {
        n.to_string().red()
    }
}

fn paint_recommendation(rec: &str) -> colored::ColoredString {
    if rec.starts_with("CRITICAL") {
        rec.red().bold()
    } else if rec.starts_with("WARNING") {
        rec.yellow()
    } else if rec.starts_with("INFO") || rec.starts_with("SUGGESTION") {
        rec.cyan()
    } else {
        rec.green()
    }
}
