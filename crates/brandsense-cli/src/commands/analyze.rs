//! One-shot analysis command.

use anyhow::{Context, Result};
use brandsense_core::{run_analysis, AnalysisOutcome, SentimentAnalyzer, Session};
use clap::Args;
use colored::Colorize;
use std::path::{Path, PathBuf};

use crate::output;

#[derive(Args)]
pub struct AnalyzeArgs {
    /// Customer comments to analyze
    #[arg(short, long, conflicts_with_all = ["file", "example"])]
    pub comments: Option<String>,

    /// Read the comments from a file ("-" for stdin)
    #[arg(short, long, conflicts_with = "example")]
    pub file: Option<PathBuf>,

    /// Use the built-in sample comments and brands
    #[arg(long)]
    pub example: bool,

    /// Comma-separated brands to analyze (blank for automatic detection)
    #[arg(short, long, conflicts_with = "example")]
    pub brands: Option<String>,

    /// Print the verdicts as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn execute(args: AnalyzeArgs, analyzer: &SentimentAnalyzer) -> Result<()> {
    let mut session = Session::new();

    if args.example {
        session.load_example();
    } else {
        let comments = match (&args.comments, &args.file) {
            (Some(text), _) => text.clone(),
            (None, Some(path)) => read_comments(path)?,
            (None, None) => String::new(),
        };
        session.edit_comments(&comments);
        session.edit_brands(args.brands.as_deref().unwrap_or_default());
    }

    if !args.json {
        println!("{} Analyzing sentiments...", "→".dimmed());
    }
    run_analysis(&mut session, analyzer).await;

    match session.outcome() {
        AnalysisOutcome::Results(verdicts) if args.json => {
            println!("{}", serde_json::to_string_pretty(verdicts)?);
            Ok(())
        }
        AnalysisOutcome::Results(verdicts) => {
            output::print_verdicts(verdicts);
            Ok(())
        }
        AnalysisOutcome::Error(message) => anyhow::bail!("{}", message),
        AnalysisOutcome::Idle | AnalysisOutcome::Loading => {
            anyhow::bail!("Analysis did not finish")
        }
    }
}

fn read_comments(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        return std::io::read_to_string(std::io::stdin()).context("Failed to read comments from stdin");
    }
    std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read comments from {}", path.display()))
}
