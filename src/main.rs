//! News Bias Analyzer — Binary Entrypoint
//! Runs one analysis (URL, file, or inline text) and prints the JSON report.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use news_bias_analyzer::BiasPipeline;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Heuristic bias analysis for news articles.
#[derive(Debug, Parser)]
#[command(name = "news-bias-analyzer", version, about)]
struct Cli {
    /// Fetch and analyze an article by URL.
    #[arg(long, conflicts_with_all = ["file", "text"])]
    url: Option<String>,

    /// Analyze the plain-text contents of a file.
    #[arg(long, conflicts_with = "text")]
    file: Option<PathBuf>,

    /// Analyze text given directly on the command line.
    #[arg(long)]
    text: Option<String>,

    /// Title to attach to file/text input.
    #[arg(long)]
    title: Option<String>,

    /// Compact single-line JSON instead of pretty-printed.
    #[arg(long)]
    compact: bool,
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("news_bias_analyzer=info,warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let pipeline = BiasPipeline::new();

    let report = if let Some(url) = cli.url.as_deref() {
        pipeline.analyze_url(url).await?
    } else if let Some(path) = cli.file.as_deref() {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        pipeline.analyze_text(&text, cli.title.as_deref()).await?
    } else if let Some(text) = cli.text.as_deref() {
        pipeline.analyze_text(text, cli.title.as_deref()).await?
    } else {
        anyhow::bail!("one of --url, --file or --text is required");
    };

    let json = if cli.compact {
        serde_json::to_string(&report)?
    } else {
        serde_json::to_string_pretty(&report)?
    };
    println!("{json}");

    Ok(())
}
