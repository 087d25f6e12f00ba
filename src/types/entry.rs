use serde::Deserialize;

/// One decoded line of a session log. Every field is optional: the log
/// format treats all of them as such, so absent fields deserialize to
/// `None` rather than failing the line.
#[derive(Debug, Deserialize)]
pub struct LogEntry {
    #[serde(default)]
    pub timestamp: Option<String>,
    #[serde(default)]
    pub message: Option<Message>,
}

#[derive(Debug, Deserialize)]
pub struct Message {
    #[serde(default)]
    pub usage: Option<Usage>,
}

/// Per-entry token counters. Missing counters count as zero.
#[derive(Debug, Deserialize)]
pub struct Usage {
    #[serde(default)]
    pub input_tokens: Option<u64>,
    #[serde(default)]
    pub output_tokens: Option<u64>,
    #[serde(default)]
    pub cache_read_input_tokens: Option<u64>,
    #[serde(default)]
    pub cache_creation_input_tokens: Option<u64>,
}
