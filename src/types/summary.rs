use serde::Serialize;

/// Sealed per-file analysis result. Built once by the analyzer and never
/// mutated afterwards; field names are the stable contract for `--json`
/// output.
#[derive(Debug, Clone, Serialize)]
pub struct SessionSummary {
    pub file_path: String,
    pub total_lines: u64,
    pub entries_with_usage: u64,
    pub total_input_tokens: u64,
    pub total_output_tokens: u64,
    pub total_cache_read_tokens: u64,
    pub total_cache_write_tokens: u64,
    /// Input plus output only. Cache counters are tracked separately and
    /// deliberately excluded from this sum.
    pub total_tokens: u64,
    pub duration_seconds: f64,
    /// Zero-padded HH:MM:SS, or "N/A" when fewer than two timestamps were
    /// observed.
    pub duration_formatted: String,
    pub first_timestamp: Option<String>,
    pub last_timestamp: Option<String>,
}
