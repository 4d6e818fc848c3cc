//! Visit Map CLI
//!
//! Reads the visits worksheet, colors countries by visit count, geocodes
//! every location and writes a Leaflet map.
//!
//! Usage:
//!   SHEETS_ID=... MAPS_API_KEY=... visit-map
//!   visit-map --output public/index.html --verbose

use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use visit_map::{pipeline, AppConfig};

#[derive(Parser, Debug)]
#[command(
    name = "visit-map",
    about = "Render a countries-visited map from a Google Sheet"
)]
struct Args {
    /// Output HTML file
    #[arg(short, long, default_value = visit_map::config::DEFAULT_OUTPUT)]
    output: PathBuf,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let default_filter = if args.verbose { "visit_map=debug,info" } else { "visit_map=info,warn" };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let mut config = AppConfig::from_env().context("Invalid configuration")?;
    config.output = args.output;

    let summary = pipeline::run(&config)?;

    info!("{}", "=".repeat(60));
    info!("SUMMARY");
    info!("{}", "=".repeat(60));
    info!("Records:            {}", summary.records);
    info!("Countries:          {}", summary.countries);
    info!("Most visits:        {}", summary.max_count.unwrap_or(0));
    info!("Colored polygons:   {}", summary.colored_polygons);
    info!("Markers:            {}", summary.points);
    info!("Skipped (no place): {}", summary.skipped);
    info!("Failed lookups:     {}", summary.failed_queries.len());
    for query in &summary.failed_queries {
        info!("  {}", query);
    }
    if let Some(output) = &summary.output {
        info!("Map written to {:?}", output);
    }

    Ok(())
}
