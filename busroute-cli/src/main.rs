use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};

use anyhow::Context;
use busroute_core::export::{write_geojson, write_map_html};
use busroute_core::prelude::*;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

mod config;

/// Log a progress line every this many routed rows
const PROGRESS_INTERVAL: usize = 500;

#[derive(Debug, Parser)]
#[command(name = "busroute", about = "Build bus route geometries from a street network")]
struct Args {
    /// Path to the TOML pipeline configuration
    #[arg(short, long, default_value = "busroute.toml")]
    config: PathBuf,

    /// Skip writing the HTML map
    #[arg(long)]
    no_map: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = config::load_config(&args.config)?;

    let routed = AtomicUsize::new(0);
    let report = || {
        let done = routed.fetch_add(1, Ordering::Relaxed) + 1;
        if done % PROGRESS_INTERVAL == 0 {
            info!(done, "routed segments");
        }
    };
    let progress: Progress<'_> = &report;

    let output = run_pipeline(&config, Some(progress)).context("Route pipeline failed")?;
    let layers = output.layers();

    write_geojson(&config.geojson_path, &layers)
        .with_context(|| format!("Failed to write {}", config.geojson_path.display()))?;
    if !args.no_map {
        write_map_html(&config.map_path, &layers, &config.map)
            .with_context(|| format!("Failed to write {}", config.map_path.display()))?;
    }

    let summary = &output.summary;
    info!(
        segments = summary.segments,
        drive = summary.drive_routes,
        full = summary.full_routes,
        unreachable = summary.unreachable_routes,
        unresolved = summary.unresolved_segments,
        unmatched_overrides = summary.unmatched_overrides,
        "done"
    );
    Ok(())
}
