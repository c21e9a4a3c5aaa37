//! CLI command definitions and handlers.

use anyhow::{Context, Result};
use brandsense_core::{AnalyzerConfig, GeminiClient, SentimentAnalyzer};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::sync::Arc;

pub mod analyze;
pub mod serve;

/// Brandsense - Brand sentiment analysis for customer comments
#[derive(Parser)]
#[command(name = "brandsense")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write logs to this file
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Gemini model to use (overrides GEMINI_MODEL)
    #[arg(long, global = true)]
    pub model: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start the web server
    Serve(serve::ServeArgs),

    /// Analyze comments once and print the verdicts
    Analyze(analyze::AnalyzeArgs),
}

impl Cli {
    pub async fn execute(self) -> Result<()> {
        // A missing API key stops the process before anything else starts.
        let config = AnalyzerConfig::from_env()?.with_model(self.model);
        let client = GeminiClient::new(&config).context("Failed to initialize Gemini client")?;
        tracing::debug!(model = client.model(), "Gemini client ready");

        let analyzer =
            SentimentAnalyzer::new(Arc::new(client)).with_temperature(config.temperature);

        match self.command {
            Commands::Serve(args) => serve::execute(args, analyzer).await,
            Commands::Analyze(args) => analyze::execute(args, &analyzer).await,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_analyze() {
        let cli = Cli::try_parse_from([
            "brandsense", "analyze", "--comments", "Golden is fine", "--brands", "Golden", "--json",
        ])
        .unwrap();
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.comments.as_deref(), Some("Golden is fine"));
                assert_eq!(args.brands.as_deref(), Some("Golden"));
                assert!(args.json);
            }
            Commands::Serve(_) => panic!("expected analyze"),
        }
    }

    #[test]
    fn test_example_conflicts_with_comments() {
        assert!(Cli::try_parse_from(["brandsense", "analyze", "--example", "--comments", "x"]).is_err());
        assert!(Cli::try_parse_from(["brandsense", "analyze", "--example", "--brands", "A"]).is_err());
    }

    #[test]
    fn test_serve_defaults() {
        let cli = Cli::try_parse_from(["brandsense", "--model", "gemini-2.0-flash", "serve"]).unwrap();
        assert_eq!(cli.model.as_deref(), Some("gemini-2.0-flash"));
        match cli.command {
            Commands::Serve(args) => {
                assert_eq!(args.port, 3000);
                assert_eq!(args.host, "127.0.0.1");
            }
            Commands::Analyze(_) => panic!("expected serve"),
        }
    }
}
