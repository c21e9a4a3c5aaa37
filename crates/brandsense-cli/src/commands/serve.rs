//! Web server command.

use anyhow::Result;
use brandsense_core::SentimentAnalyzer;
use clap::Args;
use colored::Colorize;

#[derive(Args)]
pub struct ServeArgs {
    /// Port to listen on
    #[arg(long, default_value = "3000")]
    pub port: u16,

    /// Host to bind to
    #[arg(long, default_value = "127.0.0.1")]
    pub host: String,
}

pub async fn execute(args: ServeArgs, analyzer: SentimentAnalyzer) -> Result<()> {
    println!();
    println!(
        "  {} {}",
        "Brandsense".cyan().bold(),
        "Web Server".bold()
    );
    println!();
    println!(
        "  {}  http://{}:{}",
        "Analyzer".green(),
        args.host,
        args.port
    );
    println!(
        "  {}       http://{}:{}/api/analyze",
        "API".green(),
        args.host,
        args.port
    );
    println!();
    println!("  {}", "Ctrl+C to stop".dimmed());
    println!();

    brandsense_web::run_server(analyzer, &args.host, args.port).await?;

    Ok(())
}
