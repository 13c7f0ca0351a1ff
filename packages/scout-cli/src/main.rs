//! Command-line search runner: describe the businesses you want, get a
//! deduplicated CSV of leads back.
//!
//! ```text
//! GEMINI_API_KEY=... scout "plumbers in Mesa, AZ" --more 2 --output mesa-plumbers.csv
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use clientscout::{backend, export, Scout};

#[derive(Debug, Parser)]
#[command(
    name = "scout",
    about = "Find businesses matching a customer profile and export them as CSV"
)]
struct Args {
    /// Natural-language description of the target businesses,
    /// e.g. "plumbers in Mesa, AZ".
    query: String,

    /// Extra "find more" rounds to run on the same session.
    #[arg(long, default_value_t = 0)]
    more: u32,

    /// Where to write the CSV export.
    #[arg(long, default_value = "leads.csv")]
    output: PathBuf,

    /// Generative model to drive the session with.
    #[arg(long, default_value = backend::DEFAULT_MODEL)]
    model: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "scout=info,clientscout=info,gemini_client=info".into()),
        )
        .init();

    let args = Args::parse();

    let session = backend::open_session_from_env(&args.model)
        .context("Failed to open extraction session")?;
    tracing::info!(model = %args.model, "Extraction session opened");
    let mut scout = Scout::new(session);

    let mut results = scout
        .initial_search(&args.query)
        .await
        .context("Initial search failed")?;
    println!("Found {} businesses", results.len());

    for round in 1..=args.more {
        let before = results.len();
        results = scout
            .more_results(&results)
            .await
            .with_context(|| format!("Follow-up round {} failed", round))?;
        println!(
            "Round {}: {} new businesses ({} total)",
            round,
            results.len() - before,
            results.len()
        );
    }

    std::fs::write(&args.output, export::to_csv(&results))
        .with_context(|| format!("Failed to write {}", args.output.display()))?;
    println!("Wrote {} rows to {}", results.len(), args.output.display());

    Ok(())
}
