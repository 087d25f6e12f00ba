use crate::formatting::format_number_with_commas;
use crate::types::SessionSummary;
use colored::*;
use std::fmt::Write;

const RULE_WIDTH: usize = 60;

fn token_row(out: &mut String, label: &str, value: u64) {
    let _ = writeln!(
        out,
        "  {:<20}{:>15}",
        label,
        format_number_with_commas(value)
    );
}

/// Render one summary as the fixed multi-section text report.
pub fn render_text(summary: &SessionSummary) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let sub_rule = "-".repeat(RULE_WIDTH);
    let mut out = String::new();

    let _ = writeln!(out, "\n{}", rule);
    let _ = writeln!(out, "{}", "Claude Code Session Analysis".bold());
    let _ = writeln!(out, "{}", rule);
    let _ = writeln!(out, "\nFile: {}", summary.file_path);
    let _ = writeln!(out, "Total lines: {}", summary.total_lines);
    let _ = writeln!(out, "Entries with usage data: {}", summary.entries_with_usage);

    let _ = writeln!(out, "\n{}", sub_rule);
    let _ = writeln!(out, "{}", "Token Usage:".cyan());
    let _ = writeln!(out, "{}", sub_rule);
    token_row(&mut out, "Input tokens:", summary.total_input_tokens);
    token_row(&mut out, "Output tokens:", summary.total_output_tokens);
    token_row(&mut out, "Cache read tokens:", summary.total_cache_read_tokens);
    token_row(&mut out, "Cache write tokens:", summary.total_cache_write_tokens);
    let _ = writeln!(out, "  {:<20}{}", "", "-".repeat(15));
    token_row(&mut out, "Total tokens:", summary.total_tokens);

    let _ = writeln!(out, "\n{}", sub_rule);
    let _ = writeln!(out, "{}", "Session Duration:".cyan());
    let _ = writeln!(out, "{}", sub_rule);
    let _ = writeln!(
        out,
        "  Duration: {} ({:.1} seconds)",
        summary.duration_formatted, summary.duration_seconds
    );

    if let Some(first) = &summary.first_timestamp {
        let _ = writeln!(out, "\n  First activity: {}", first);
    }
    if let Some(last) = &summary.last_timestamp {
        let _ = writeln!(out, "  Last activity:  {}", last);
    }

    let _ = writeln!(out, "\n{}\n", rule);
    out
}

/// Render the whole run as one pretty-printed JSON array, one object per
/// analyzed file.
pub fn render_json(summaries: &[SessionSummary]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(summaries)
}
