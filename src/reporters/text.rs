//! Text (terminal) reporter with colors and formatting

use crate::models::AnalysisReport;
use anyhow::Result;

/// Score colors (ANSI escape codes)
fn score_color(score: u8) -> &'static str {
    match score {
        90..=100 => "\x1b[32m", // Green
        70..=89 => "\x1b[92m",  // Light green
        50..=69 => "\x1b[33m",  // Yellow
        30..=49 => "\x1b[91m",  // Light red
        _ => "\x1b[31m",        // Red
    }
}

/// Severity colors
fn severity_color(severity: u8) -> &'static str {
    match severity {
        5 => "\x1b[31m", // Red
        4 => "\x1b[91m", // Light red
        3 => "\x1b[33m", // Yellow
        2 => "\x1b[34m", // Blue
        _ => "\x1b[90m", // Gray
    }
}

/// Reset ANSI color
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const DIM: &str = "\x1b[2m";

/// Render report as formatted terminal output
pub fn render(report: &AnalysisReport) -> Result<String> {
    let mut out = String::new();

    // Header
    let score_c = score_color(report.confidence_score);
    out.push_str(&format!("\n{BOLD}Candor Analysis{RESET}\n"));
    out.push_str(&format!(
        "{DIM}──────────────────────────────────────{RESET}\n"
    ));
    out.push_str(&format!(
        "Confidence: {score_c}{BOLD}{}/100{RESET}  ",
        report.confidence_score
    ));
    out.push_str(&format!(
        "Flags: {}  Avg severity: {:.1}  Time: {}ms\n\n",
        report.flag_count, report.average_severity, report.processing_time_ms
    ));

    // Category breakdown
    if !report.categories.is_empty() {
        out.push_str(&format!("{BOLD}CATEGORIES{RESET}\n"));
        for (name, stats) in &report.categories {
            out.push_str(&format!(
                "  {name}: {} (avg severity {:.1})\n",
                stats.count, stats.average_severity
            ));
        }
        out.push('\n');
    }

    // Flags
    if report.flags.is_empty() {
        out.push_str("No confidence flags detected.\n");
    } else {
        out.push_str(&format!("{BOLD}FLAGS{RESET}\n"));
        for flag in &report.flags {
            let sev_c = severity_color(flag.severity);
            out.push_str(&format!(
                "  {sev_c}[{}]{RESET} {BOLD}{}{RESET} {DIM}({} @ {}){RESET}\n",
                flag.severity, flag.phrase, flag.category, flag.position
            ));
            out.push_str(&format!("      {DIM}{}{RESET}\n", flag.snippet));
        }
        if report.has_high_severity_flags {
            out.push_str(&format!(
                "\n{BOLD}\x1b[91mHigh-severity language detected.{RESET}\n"
            ));
        }
    }

    Ok(out)
}
