use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tripsort_core::{auto_sort_with_config, SortConfig, Trip};

#[derive(Parser)]
#[command(name = "tripsort-cli", version, about = "Re-cluster a trip's media into moments by capture time and location")]
struct Cli {
    /// Trip JSON document to sort
    input: PathBuf,

    /// Output path for the re-sorted trip JSON
    #[arg(short, long)]
    output: PathBuf,

    /// Minutes a media item may sit from a cluster's median time and still match
    #[arg(long, default_value_t = 90)]
    match_time_window_minutes: i64,

    /// Meters a media item may sit from a cluster's centroid and still match
    #[arg(long, default_value_t = 250.0)]
    match_geo_radius_meters: f64,

    /// Minutes between cluster medians under which finished clusters merge
    #[arg(long, default_value_t = 180)]
    merge_time_window_minutes: i64,

    /// Meters between cluster centroids under which finished clusters merge
    #[arg(long, default_value_t = 500.0)]
    merge_geo_radius_meters: f64,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let t_total = std::time::Instant::now();

    let file = File::open(&cli.input).with_context(|| format!("opening {}", cli.input.display()))?;
    let trip: Trip = serde_json::from_reader(BufReader::new(file))
        .with_context(|| format!("parsing {}", cli.input.display()))?;

    let config = SortConfig {
        match_time_window_minutes: cli.match_time_window_minutes,
        match_geo_radius_meters: cli.match_geo_radius_meters,
        merge_time_window_minutes: cli.merge_time_window_minutes,
        merge_geo_radius_meters: cli.merge_geo_radius_meters,
    };

    let outcome = auto_sort_with_config(trip, &config)?;

    let out = File::create(&cli.output).with_context(|| format!("creating {}", cli.output.display()))?;
    serde_json::to_writer_pretty(BufWriter::new(out), &outcome.trip)?;

    let report = &outcome.report;
    eprintln!(
        "Done! {} media sorted into {} albums: {} new clusters, {} merged, {} dropped, {} routed to default ({:.2}s)",
        report.pool_size,
        outcome.trip.albums.len(),
        report.clusters_created,
        report.clusters_merged,
        report.albums_dropped,
        report.routed_to_default,
        t_total.elapsed().as_secs_f64()
    );

    Ok(())
}
