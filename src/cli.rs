use clap::Parser;
use std::path::PathBuf;

/// Summarize token usage and session duration from Claude Code session
/// logs (.jsonl)
#[derive(Parser, Debug)]
#[command(name = "ccsa")]
#[command(version, about)]
pub struct Cli {
    /// Path(s) to session file(s)
    #[arg(required = true)]
    pub files: Vec<PathBuf>,

    /// Output results as JSON instead of the text report
    #[arg(long)]
    pub json: bool,
}
