use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use chrono::{Local, NaiveDate, NaiveDateTime, NaiveTime};
use clap::{Parser, ValueEnum};
use glide_planner::config::{self, OutputFormat};
use glide_planner::export::{self, writer_for_path};
use glide_planner::importer;
use glide_planner::logging;
use glide_planner::route::{Algorithm, FlightConfig, FlightParameters, plan_flight};
use tracing::debug;

#[derive(Parser)]
#[command(
    author,
    version,
    allow_negative_numbers = true,
    about = "Find emergency landing airports along a straight-line flight",
    after_help = "Output: [IATA code] [city] [country] [latitude] [longitude] [time of passing]"
)]
struct Cli {
    /// Source IATA code
    source: String,

    /// Destination IATA code
    dest: String,

    /// Maximum distance in km from the flight path to an emergency airport
    range: f64,

    /// Average cruising speed in km/h
    speed: f64,

    /// Departure time in HH:MM:SS format
    time: String,

    /// Algorithm: 1 = optimal (default), 2 = safe (slow), 3 = minimal; any other number uses 1
    algorithm: Option<i64>,

    /// Planner configuration file (TOML or YAML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Airport dataset path (defaults to the configured path)
    #[arg(long)]
    dataset: Option<PathBuf>,

    /// Region code to keep from the dataset (defaults to the configured region)
    #[arg(long)]
    region: Option<String>,

    /// Departure date in YYYY-MM-DD format (defaults to today)
    #[arg(long)]
    date: Option<String>,

    /// Sampling step in km (defaults to the configured step of the algorithm)
    #[arg(long)]
    step_km: Option<f64>,

    /// Output format (defaults to the configured format)
    #[arg(long, value_enum)]
    format: Option<FormatArg>,

    /// Output path, `-` for stdout
    #[arg(long, default_value = "-")]
    output: PathBuf,
}

#[derive(Copy, Clone, ValueEnum, Debug)]
enum FormatArg {
    Text,
    Csv,
    Json,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Csv => OutputFormat::Csv,
            FormatArg::Json => OutputFormat::Json,
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    logging::init_logging(logging::DEFAULT_DIRECTIVE)?;
    let settings = config::load_or_default(cli.config.as_deref())?;

    let departure = departure_from(&cli.time, cli.date.as_deref())?;
    let parameters = FlightParameters::new(cli.range, cli.speed, departure)
        .context("check your range and speed arguments")?;

    let dataset = cli
        .dataset
        .clone()
        .unwrap_or_else(|| PathBuf::from(&settings.dataset.path));
    let region = cli.region.as_deref().unwrap_or(&settings.dataset.region);
    debug!(dataset = %dataset.display(), region, "loading airport catalog");
    let (catalog, _) = importer::load_airports(&dataset, region).with_context(|| {
        format!(
            "airport database {} does not exist or is corrupted",
            dataset.display()
        )
    })?;

    let start = importer::resolve(&catalog, &cli.source)?;
    let destination = importer::resolve(&catalog, &cli.dest)?;

    let selector = cli.algorithm.unwrap_or(settings.planner.algorithm);
    let flight = FlightConfig {
        start,
        destination,
        parameters,
        algorithm: Algorithm::from_selector(selector),
        step_km: Some(
            cli.step_km
                .unwrap_or_else(|| settings.planner.step_for(selector)),
        ),
    };

    let plan = match plan_flight(&flight, &catalog) {
        Ok(plan) => plan,
        Err(err) if err.is_range_exceeded() => {
            anyhow::bail!(
                "could not find airports in range ({err})\n\
                 Flight path is not safe!\n\
                 Emergency range must be increased for safe flight."
            );
        }
        Err(err) => return Err(err.into()),
    };

    let format = cli
        .format
        .map(OutputFormat::from)
        .unwrap_or(settings.output.format);
    let mut writer = writer_for_path(&cli.output)?;
    match format {
        OutputFormat::Text => export::text::write_plan(writer.as_mut(), &plan)?,
        OutputFormat::Csv => export::csv::write_plan(writer.as_mut(), &plan)?,
        OutputFormat::Json => {
            export::json::write_plan(writer.as_mut(), &plan)?;
            writeln!(writer)?;
        }
    }
    writer.flush()?;

    Ok(())
}

fn departure_from(time: &str, date: Option<&str>) -> anyhow::Result<NaiveDateTime> {
    let time = NaiveTime::parse_from_str(time, "%H:%M:%S")
        .with_context(|| format!("given start time '{time}' is not valid (expected HH:MM:SS)"))?;
    let date = match date {
        Some(date) => NaiveDate::parse_from_str(date, "%Y-%m-%d")
            .with_context(|| format!("given date '{date}' is not valid (expected YYYY-MM-DD)"))?,
        None => Local::now().date_naive(),
    };
    Ok(date.and_time(time))
}
