// Clarify+ backend entry point.
// Health-literacy document analysis: scraping, EquiCheck and Riskify.

mod analysis;
mod api;
mod config;
mod error;
mod models;
mod risk;
mod scrape;
#[cfg(test)]
mod tests;

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Parser, Subcommand};
use tracing::info;
use tracing_subscriber::EnvFilter;

use analysis::{CtsLexicon, EquiCheck};
use config::Settings;
use risk::RiskAnalyzer;
use scrape::Scraper;

#[derive(Parser)]
#[command(name = "clarify", about = "Clarify+ health literacy analysis backend")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the HTTP API server
    Serve {
        /// Port to bind (overrides CLARIFY_PORT)
        #[arg(long)]
        port: Option<u16>,
    },
    /// Extract text and images from a URL or file and save as JSON
    Scrape {
        /// URL or path of the document to process
        source: String,
        /// Path to save the output JSON file
        #[arg(short, long, default_value = "output/scraped_content.json")]
        output: PathBuf,
    },
    /// Analyze a source for readability and cultural-equity factors
    Analyze {
        /// Text file, PDF file, or URL to analyze
        source: String,
        /// Path to CSV file with CTS keywords
        #[arg(short, long)]
        keywords: Option<PathBuf>,
        /// Output JSON file path
        #[arg(short, long, default_value = "scores.json")]
        output: PathBuf,
    },
    /// Find and interpret numerical risk data in a source
    Riskify {
        /// Path to a text file, PDF, or a text string to analyze
        source: String,
        /// Output JSON file path; icon arrays land in a sibling directory
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let cli = Cli::parse();
    let settings = Settings::from_env();

    match cli.command {
        Command::Serve { port } => serve(settings, port).await,
        Command::Scrape { source, output } => scrape_command(&source, &output).await,
        Command::Analyze {
            source,
            keywords,
            output,
        } => analyze_command(settings, &source, keywords.as_deref(), &output).await,
        Command::Riskify { source, output } => riskify_command(&source, output.as_deref()).await,
    }
}

async fn serve(mut settings: Settings, port: Option<u16>) -> anyhow::Result<()> {
    if let Some(port) = port {
        settings.port = port;
    }

    let lexicon = CtsLexicon::load_or_default(&settings.keywords_path);
    let state = Arc::new(api::AppState {
        scraper: Scraper::new(),
        equicheck: EquiCheck::new(lexicon),
        risk: RiskAnalyzer::new(),
        settings,
    });

    api::serve(state).await?;
    Ok(())
}

async fn scrape_command(source: &str, output: &Path) -> anyhow::Result<()> {
    let scraper = Scraper::new();
    let images_dir = output.parent().unwrap_or(Path::new(".")).join("images");

    let document = scraper.run(source, Some(&images_dir)).await?;
    save_json(&serde_json::to_value(&document)?, output)?;
    info!("Scraping complete. Results saved to {}", output.display());
    Ok(())
}

async fn analyze_command(
    settings: Settings,
    source: &str,
    keywords: Option<&Path>,
    output: &Path,
) -> anyhow::Result<()> {
    let lexicon = CtsLexicon::load_or_default(keywords.unwrap_or(&settings.keywords_path));
    let equicheck = EquiCheck::new(lexicon);

    let scraper = Scraper::new();
    let document = scraper.run(source, None).await?;
    let report = equicheck.analyze_document(&document);

    save_json(&serde_json::to_value(&report)?, output)?;

    println!("\nReadability Scores:");
    println!("SMOG Index: {}", fmt_score(report.readability.smog_index));
    println!("Gunning Fog: {}", fmt_score(report.readability.gunning_fog));
    println!(
        "Average Grade Level: {}",
        fmt_score(report.readability.average_grade_level)
    );

    println!("\nCTS Keyword Analysis:");
    println!("Total Matches: {}", report.cts_keywords.total_matches);
    for (category, stats) in &report.cts_keywords.matches_by_category {
        println!("  {}: {} matches", category, stats.count);
    }
    Ok(())
}

async fn riskify_command(source: &str, output: Option<&Path>) -> anyhow::Result<()> {
    let source_path = Path::new(source);
    let text = if source_path.is_file() {
        let scraper = Scraper::new();
        scraper.scrape_file(source_path).await?.text
    } else {
        // Not a file: treat the argument as a literal text string.
        source.to_string()
    };

    if text.trim().is_empty() {
        anyhow::bail!("Input text is empty.");
    }

    let artifacts_dir = match output {
        Some(path) => {
            let stem = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("riskify");
            let dir = path
                .parent()
                .unwrap_or(Path::new("."))
                .join(format!("{}_artifacts", stem));
            std::fs::create_dir_all(&dir)?;
            Some(dir)
        }
        None => None,
    };

    let report = RiskAnalyzer::new().run(&text, artifacts_dir.as_deref())?;
    let value = serde_json::to_value(&report)?;

    match output {
        Some(path) => {
            save_json(&value, path)?;
            info!("Results saved to {}", path.display());
        }
        None => println!("{}", serde_json::to_string_pretty(&value)?),
    }
    Ok(())
}

fn save_json(value: &serde_json::Value, path: &Path) -> anyhow::Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, serde_json::to_string_pretty(value)?)?;
    Ok(())
}

fn fmt_score(score: Option<f64>) -> String {
    score
        .map(|v| format!("{:.2}", v))
        .unwrap_or_else(|| "n/a".to_string())
}
