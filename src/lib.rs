// Module declarations
pub mod analyzer;
pub mod cli;
pub mod error;
pub mod formatting;
pub mod report;
pub mod types;

// Re-export commonly used items
pub use analyzer::analyze_session;
pub use error::{CcsaError, Result};
pub use types::{LogEntry, Message, SessionSummary, Usage};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_entry_json_parsing() {
        let json_str = r#"{
            "timestamp": "2024-01-15T10:30:00Z",
            "type": "assistant",
            "message": {
                "id": "msg_123",
                "model": "claude-opus-4-1-20250805",
                "usage": {
                    "input_tokens": 1000,
                    "output_tokens": 500,
                    "cache_creation_input_tokens": 200,
                    "cache_read_input_tokens": 300
                }
            },
            "requestId": "req_456"
        }"#;

        let entry: LogEntry = serde_json::from_str(json_str).unwrap();
        assert_eq!(entry.timestamp, Some("2024-01-15T10:30:00Z".to_string()));

        let usage = entry.message.unwrap().usage.unwrap();
        assert_eq!(usage.input_tokens, Some(1000));
        assert_eq!(usage.output_tokens, Some(500));
        assert_eq!(usage.cache_creation_input_tokens, Some(200));
        assert_eq!(usage.cache_read_input_tokens, Some(300));
    }

    #[test]
    fn test_summary_invariant_total_is_input_plus_output() {
        let summary = SessionSummary {
            file_path: "s.jsonl".to_string(),
            total_lines: 1,
            entries_with_usage: 1,
            total_input_tokens: 7,
            total_output_tokens: 11,
            total_cache_read_tokens: 1000,
            total_cache_write_tokens: 2000,
            total_tokens: 18,
            duration_seconds: 0.0,
            duration_formatted: "N/A".to_string(),
            first_timestamp: None,
            last_timestamp: None,
        };
        assert_eq!(
            summary.total_tokens,
            summary.total_input_tokens + summary.total_output_tokens
        );
    }
}
