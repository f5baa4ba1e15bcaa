//! Publication run orchestration.
//!
//! A run is fully sequential: list the remote directory, then for each
//! snapshot of today fetch, grid and persist; then derive the display
//! range and rewrite the index; finally merge the run into the manifest.
//! Individual bad snapshots or records are skipped, a run only fails
//! wholesale on local I/O problems.

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde_json::json;
use tracing::{debug, info, warn};

use grid_processor::{bin_samples, display_range, synthetic_grid};
use ingestion::{extract_samples, snapshots_for_date, SnapshotSource};
use tec_common::{
    iso_utc, snapshot_time_iso, yyyymmdd, CellSize, Cycle, SnapshotDocument, ValueRange,
};

use crate::config::PublisherConfig;
use crate::docs::write_json_atomic;
use crate::index::{no2_placeholder_index, tec_index};
use crate::manifest::update_manifest;

/// What one publication run produced.
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub date: String,
    pub cycle: Cycle,
    /// Snapshot files the remote source had for the date (0 on fallback).
    pub files_found: usize,
    /// "HHMM" tokens actually published, deduplicated ascending.
    pub times_utc: Vec<String>,
    pub range: ValueRange,
}

/// Execute a full publication run for the instant `now`.
pub async fn run(
    source: &dyn SnapshotSource,
    config: &PublisherConfig,
    now: DateTime<Utc>,
) -> Result<RunSummary> {
    let date = yyyymmdd(&now);
    let cycle = Cycle::from_datetime(&now);
    let now_iso = iso_utc(&now);

    let base_dir = config.data_dir.join(&date);
    let cell = CellSize { dlat: config.dlat, dlon: config.dlon };

    // Pointer the front end follows to the current dated tree.
    write_json_atomic(&config.data_dir.join("latest.json"), &json!({ "date": &date }))
        .await
        .context("Failed to write latest-date pointer")?;

    let (files_found, times_utc, range) =
        publish_tec(source, config, &date, &base_dir, cell, cycle, &now_iso).await?;

    let no2 = no2_placeholder_index(&date, cycle, &now_iso, cell);
    write_json_atomic(&base_dir.join("no2").join("index.json"), &no2)
        .await
        .context("Failed to write NO2 index")?;

    update_manifest(&base_dir, &date, cycle, &now_iso, &config.tec_unit)
        .await
        .context("Failed to update manifest")?;

    let log_doc = json!({
        "cycle": cycle.as_str(),
        "utc_now": &now_iso,
        "tec_files_found": files_found,
        "tec_times_written": &times_utc,
        "note": "NO2 not fetched yet."
    });
    write_json_atomic(
        &base_dir.join("logs").join(format!("fetch_{}.json", cycle)),
        &log_doc,
    )
    .await
    .context("Failed to write run log")?;

    info!(
        date = %date,
        cycle = %cycle,
        files_found,
        times = times_utc.len(),
        "Publication run complete"
    );

    Ok(RunSummary { date, cycle, files_found, times_utc, range })
}

/// Publish the TEC layer: grid documents for every discovered snapshot (or
/// the synthetic fallback), then the regenerated index.
async fn publish_tec(
    source: &dyn SnapshotSource,
    config: &PublisherConfig,
    date: &str,
    base_dir: &std::path::Path,
    cell: CellSize,
    cycle: Cycle,
    now_iso: &str,
) -> Result<(usize, Vec<String>, ValueRange)> {
    let tec_dir = base_dir.join("tec");

    // A listing failure is an outage, not "nothing published yet", but the
    // front end still needs a renderable document either way. Log the
    // difference and take the fallback path.
    let listing = match source.list_directory().await {
        Ok(listing) => listing,
        Err(e) => {
            warn!(error = %e, "Directory listing failed, falling back to synthetic grid");
            String::new()
        }
    };

    let snapshots = snapshots_for_date(&listing, date);
    let files_found = snapshots.len();

    let mut value_pool: Vec<f64> = Vec::new();
    let mut times_utc: Vec<String> = Vec::new();

    if snapshots.is_empty() {
        info!(date = %date, "No snapshots available, publishing synthetic grid");

        let cells = synthetic_grid(config.dlat, config.dlon);
        value_pool.extend(cells.iter().map(|c| c.val));

        let doc = SnapshotDocument {
            time_utc: snapshot_time_iso(date, "0000"),
            cells,
        };
        write_json_atomic(&tec_dir.join("0000.json"), &doc)
            .await
            .context("Failed to write synthetic grid document")?;
        times_utc.push("0000".to_string());
    } else {
        for snapshot in &snapshots {
            let collection = match source.fetch_snapshot(&snapshot.filename).await {
                Ok(collection) => collection,
                Err(e) => {
                    warn!(file = %snapshot.filename, error = %e, "Snapshot fetch failed, skipping");
                    continue;
                }
            };

            let (samples, dropped) = extract_samples(&collection);
            if dropped > 0 {
                debug!(file = %snapshot.filename, dropped, "Dropped unusable features");
            }

            let cells = bin_samples(&samples, config.dlat, config.dlon);
            value_pool.extend(cells.iter().map(|c| c.val).filter(|v| v.is_finite()));

            let doc = SnapshotDocument {
                time_utc: snapshot_time_iso(date, &snapshot.hhmm),
                cells,
            };
            write_json_atomic(&tec_dir.join(format!("{}.json", snapshot.hhmm)), &doc)
                .await
                .with_context(|| format!("Failed to write grid document {}", snapshot.hhmm))?;
            times_utc.push(snapshot.hhmm.clone());
        }

        times_utc.sort();
        times_utc.dedup();
    }

    let range = display_range(&value_pool);

    let index = tec_index(date, cycle, now_iso, &config.tec_unit, times_utc.clone(), cell, range);
    write_json_atomic(&tec_dir.join("index.json"), &index)
        .await
        .context("Failed to write TEC index")?;

    Ok((files_found, times_utc, range))
}
