//! TEC map publisher binary.
//!
//! Runs one publication cycle for now() and exits; scheduling is left to
//! cron or CI. Exits non-zero if the run fails wholesale.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Utc;
use clap::Parser;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use publisher::config::{PublisherConfig, DEFAULT_SOURCE_URL};
use publisher::publish;

use ingestion::HttpSnapshotSource;

#[derive(Parser, Debug)]
#[command(name = "publisher")]
#[command(about = "Discovers TEC snapshots, grids them and publishes JSON documents")]
struct Args {
    /// Root of the published document tree
    #[arg(long, default_value = "docs/data")]
    data_dir: PathBuf,

    /// Remote snapshot directory URL
    #[arg(long, env = "SOURCE_URL", default_value = DEFAULT_SOURCE_URL)]
    source_url: String,

    /// Grid cell height in degrees latitude
    #[arg(long, default_value = "2.0")]
    dlat: f64,

    /// Grid cell width in degrees longitude
    #[arg(long, default_value = "2.0")]
    dlon: f64,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    let level = match args.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(true)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting TEC map publisher");

    let config = PublisherConfig {
        source_url: args.source_url,
        data_dir: args.data_dir,
        dlat: args.dlat,
        dlon: args.dlon,
        ..PublisherConfig::default()
    };

    let source = HttpSnapshotSource::new(config.source_url.clone(), config.request_timeout)
        .map_err(|e| anyhow::anyhow!("Failed to build HTTP source: {e}"))?;

    let summary = publish::run(&source, &config, Utc::now()).await?;

    info!(
        date = %summary.date,
        cycle = %summary.cycle,
        times = summary.times_utc.len(),
        vmin = summary.range.vmin,
        vmax = summary.range.vmax,
        "Done"
    );

    Ok(())
}
