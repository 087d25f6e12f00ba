use crate::error::{CcsaError, Result};
use crate::formatting::format_duration_hms;
use crate::types::{LogEntry, SessionSummary};
use chrono::{DateTime, FixedOffset};
use colored::*;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

/// Parse an ISO 8601 timestamp string, normalizing a trailing 'Z' to the
/// explicit "+00:00" offset form first. This is the only timezone handling
/// performed; a string that still fails to parse is treated as absent.
fn parse_timestamp(raw: &str) -> Option<DateTime<FixedOffset>> {
    match raw.strip_suffix('Z') {
        Some(head) => DateTime::parse_from_rfc3339(&format!("{head}+00:00")).ok(),
        None => DateTime::parse_from_rfc3339(raw).ok(),
    }
}

/// Scan one session log line by line and seal a summary of its token usage
/// and duration.
///
/// Malformed JSON lines are skipped with a warning on stderr and count
/// toward nothing; blank lines are skipped silently. A file that cannot be
/// opened or read is fatal for the whole invocation.
pub fn analyze_session(path: &Path) -> Result<SessionSummary> {
    let file = File::open(path).map_err(|source| CcsaError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);

    let mut total_lines = 0u64;
    let mut entries_with_usage = 0u64;
    let mut total_input_tokens = 0u64;
    let mut total_output_tokens = 0u64;
    let mut total_cache_read_tokens = 0u64;
    let mut total_cache_write_tokens = 0u64;
    let mut first_timestamp: Option<DateTime<FixedOffset>> = None;
    let mut last_timestamp: Option<DateTime<FixedOffset>> = None;

    for line in reader.lines() {
        let line = line.map_err(|source| CcsaError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let entry: LogEntry = match serde_json::from_str(trimmed) {
            Ok(entry) => entry,
            Err(e) => {
                eprintln!("{} Skipping invalid JSON line: {}", "Warning:".yellow(), e);
                continue;
            }
        };
        total_lines += 1;

        if let Some(raw) = entry.timestamp.as_deref()
            && let Some(timestamp) = parse_timestamp(raw)
        {
            if first_timestamp.is_none() {
                first_timestamp = Some(timestamp);
            }
            // Last occurrence in file order wins; no magnitude comparison.
            // For a disordered log this is the final line's timestamp, not
            // the chronological maximum.
            last_timestamp = Some(timestamp);
        }

        if let Some(usage) = entry.message.as_ref().and_then(|m| m.usage.as_ref()) {
            entries_with_usage += 1;
            total_input_tokens += usage.input_tokens.unwrap_or(0);
            total_output_tokens += usage.output_tokens.unwrap_or(0);
            total_cache_read_tokens += usage.cache_read_input_tokens.unwrap_or(0);
            total_cache_write_tokens += usage.cache_creation_input_tokens.unwrap_or(0);
        }
    }

    let (duration_seconds, duration_formatted) = match (first_timestamp, last_timestamp) {
        (Some(first), Some(last)) => {
            let seconds = (last - first).num_milliseconds() as f64 / 1000.0;
            (seconds, format_duration_hms(seconds))
        }
        _ => (0.0, "N/A".to_string()),
    };

    Ok(SessionSummary {
        file_path: path.display().to_string(),
        total_lines,
        entries_with_usage,
        total_input_tokens,
        total_output_tokens,
        total_cache_read_tokens,
        total_cache_write_tokens,
        total_tokens: total_input_tokens + total_output_tokens,
        duration_seconds,
        duration_formatted,
        first_timestamp: first_timestamp.map(|t| t.to_rfc3339()),
        last_timestamp: last_timestamp.map(|t| t.to_rfc3339()),
    })
}
