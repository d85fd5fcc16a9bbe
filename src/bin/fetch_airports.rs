//! Utility binary to download the OpenFlights airport dataset.
//!
//! The dataset lands at the configured path (`data/airports.dat` by default)
//! and is summarised for the configured region afterwards.

use std::path::PathBuf;

use clap::Parser;
use glide_planner::config;
use glide_planner::importer::{self, DatasetStatus};
use glide_planner::logging;

#[derive(Parser)]
#[command(author, version, about = "Download the airport dataset")]
struct Cli {
    /// Planner configuration file (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Dataset URL (defaults to the configured source)
    #[arg(long)]
    url: Option<String>,

    /// Destination path (defaults to the configured dataset path)
    #[arg(long)]
    dest: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging("info")?;
    let settings = config::load_or_default(cli.config.as_deref())?;

    let url = cli.url.unwrap_or(settings.dataset.source_url);
    let dest = cli
        .dest
        .unwrap_or_else(|| PathBuf::from(&settings.dataset.path));

    match importer::download_dataset(&url, &dest)? {
        DatasetStatus::Downloaded(path) => println!("[downloaded] {}", path.display()),
        DatasetStatus::AlreadyPresent(path) => println!("[skip] {}", path.display()),
    }

    match importer::load_airports(&dest, &settings.dataset.region) {
        Ok((_, report)) => {
            println!(
                "\nRegion '{}': {} airports imported from {} rows",
                settings.dataset.region, report.imported, report.rows
            );
            println!(
                "  skipped: {} other region, {} without IATA code, {} malformed, {} duplicate",
                report.other_region, report.missing_identifier, report.malformed, report.duplicates
            );
        }
        Err(err) => eprintln!("[warn] unable to summarize dataset: {err}"),
    }

    Ok(())
}
