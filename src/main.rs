use clap::Parser;
use colored::*;

use ccsa::analyzer::analyze_session;
use ccsa::cli::Cli;
use ccsa::report::{render_json, render_text};
use ccsa::types::SessionSummary;

fn run(cli: &Cli) -> ccsa::Result<Vec<SessionSummary>> {
    let mut summaries = Vec::with_capacity(cli.files.len());

    // Files are processed strictly in order; the first fatal file error
    // aborts the run.
    for path in &cli.files {
        let summary = analyze_session(path)?;
        if !cli.json {
            print!("{}", render_text(&summary));
        }
        summaries.push(summary);
    }

    Ok(summaries)
}

fn main() {
    let cli = Cli::parse();

    match run(&cli) {
        Ok(summaries) => {
            if cli.json {
                match render_json(&summaries) {
                    Ok(document) => println!("{}", document),
                    Err(e) => {
                        eprintln!("{} {}", "Error:".red(), e);
                        std::process::exit(1);
                    }
                }
            }
        }
        Err(e) => {
            eprintln!("{} {}", "Error:".red(), e);
            std::process::exit(1);
        }
    }
}
