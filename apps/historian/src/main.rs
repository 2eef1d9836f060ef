use anyhow::Context;
use clap::{Parser, Subcommand};
use cyclewatch_fmp::FmpClient;
use cyclewatch_pipeline::{SeriesOutcome, SeriesReport, UpdateEngine};
use cyclewatch_store::SeriesStore;
use dotenv::dotenv;
use tracing_subscriber::EnvFilter;

mod config;

use config::{Config, tracked_indices};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Full bootstrap of every tracked series (overwrites existing files)
    Download,
    /// Incremental refresh of every tracked series
    Update,
}

fn main() -> anyhow::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    // Missing credentials abort the whole run before any series is touched.
    let config = Config::from_env()
        .map_err(anyhow::Error::msg)
        .context("Failed to load configuration")?;

    tracing::info!("using data directory {}", config.data_dir);

    let client = FmpClient::new(&config.api_key);
    let store = SeriesStore::new(&config.data_dir);
    let engine = UpdateEngine::new(client, store);
    let indices = tracked_indices();

    let rt = tokio::runtime::Runtime::new()?;

    let report = match args.command {
        Command::Download => rt.block_on(engine.download_all(&indices)),
        Command::Update => rt.block_on(engine.update_all(&indices)),
    };

    print_report(&report);

    // Per-series failures are reported, not turned into a nonzero exit.
    Ok(())
}

fn print_report(report: &SeriesReport) {
    println!("\n===== Run Summary =====");

    for (key, result) in &report.results {
        match result {
            Ok(SeriesOutcome::Downloaded { points }) => {
                println!("✓ {key}: saved {points} data points");
            }
            Ok(SeriesOutcome::Updated { new_points }) => {
                println!("✓ {key}: appended {new_points} new data points");
            }
            Ok(SeriesOutcome::NoNewData) => {
                println!("✓ {key}: no new data");
            }
            Err(err) => {
                println!("✗ {key}: {err}");
            }
        }
    }

    println!(
        "\n{} succeeded, {} failed",
        report.succeeded(),
        report.failed()
    );
}
