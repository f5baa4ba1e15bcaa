//! Per-date manifest maintenance.
//!
//! The manifest is the one document with an incremental lifecycle: it is
//! read back, merged with the current run, and rewritten. The merge must
//! be idempotent under repeated same-cycle invocation and must never drop
//! a previously recorded cycle.

use std::collections::BTreeMap;
use std::path::Path;

use tracing::warn;

use tec_common::{cycle_sort_key, Cycle, LayerEntry, Manifest, RunRecord, TecError, TecResult};

use crate::docs::{read_json, write_json_atomic};

/// Fixed table of layers and their index locations, relative to the
/// manifest's directory.
fn layer_table(tec_unit: &str) -> BTreeMap<String, LayerEntry> {
    let mut layers = BTreeMap::new();
    layers.insert(
        "tec".to_string(),
        LayerEntry { path: "tec/index.json".to_string(), unit: tec_unit.to_string() },
    );
    layers.insert(
        "no2".to_string(),
        LayerEntry { path: "no2/index.json".to_string(), unit: "arb.".to_string() },
    );
    layers
}

fn fresh_manifest(date: &str, tec_unit: &str) -> Manifest {
    Manifest {
        date: date.to_string(),
        runs: Vec::new(),
        layers: layer_table(tec_unit),
        updated_utc: String::new(),
    }
}

/// Load, merge and persist the manifest for one dated directory.
///
/// Merge rules: the run record matching the current cycle gets its
/// `fetched_utc` updated in place, otherwise a new record is appended;
/// records are then re-sorted 00Z first, 12Z second, unknown cycles last
/// (stable). An unreadable or wrong-date manifest is replaced with a fresh
/// one after a warning, since it is a derived ledger, not a source of
/// truth. The rewrite is atomic.
pub async fn update_manifest(
    base_dir: &Path,
    date: &str,
    cycle: Cycle,
    now_iso: &str,
    tec_unit: &str,
) -> TecResult<Manifest> {
    let path = base_dir.join("manifest.json");

    let existing = match read_json::<Manifest>(&path).await {
        Ok(manifest) => manifest,
        Err(TecError::StateCorruption { path, message }) => {
            warn!(path = %path, error = %message, "Manifest unreadable, reinitializing");
            None
        }
        Err(e) => return Err(e),
    };

    let mut manifest = match existing {
        Some(m) if m.date == date => m,
        Some(m) => {
            warn!(found = %m.date, expected = %date, "Manifest date mismatch, reinitializing");
            fresh_manifest(date, tec_unit)
        }
        None => fresh_manifest(date, tec_unit),
    };

    match manifest.runs.iter_mut().find(|r| r.cycle == cycle.as_str()) {
        Some(run) => run.fetched_utc = now_iso.to_string(),
        None => manifest.runs.push(RunRecord {
            cycle: cycle.as_str().to_string(),
            fetched_utc: now_iso.to_string(),
        }),
    }
    manifest.runs.sort_by_key(|r| cycle_sort_key(&r.cycle));
    manifest.updated_utc = now_iso.to_string();

    write_json_atomic(&path, &manifest).await?;
    Ok(manifest)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_first_run_creates_manifest() {
        let dir = tempfile::tempdir().unwrap();

        let manifest =
            update_manifest(dir.path(), "20240115", Cycle::Z00, "2024-01-15T01:00:00Z", "TECU")
                .await
                .unwrap();

        assert_eq!(manifest.date, "20240115");
        assert_eq!(manifest.runs.len(), 1);
        assert_eq!(manifest.runs[0].cycle, "00Z");
        assert_eq!(manifest.layers.len(), 2);
        assert!(dir.path().join("manifest.json").exists());
    }

    #[tokio::test]
    async fn test_same_cycle_rerun_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();

        update_manifest(dir.path(), "20240115", Cycle::Z00, "2024-01-15T01:00:00Z", "TECU")
            .await
            .unwrap();
        let manifest =
            update_manifest(dir.path(), "20240115", Cycle::Z00, "2024-01-15T02:00:00Z", "TECU")
                .await
                .unwrap();

        assert_eq!(manifest.runs.len(), 1);
        assert_eq!(manifest.runs[0].fetched_utc, "2024-01-15T02:00:00Z");
    }

    #[tokio::test]
    async fn test_second_cycle_appends_and_keeps_first() {
        let dir = tempfile::tempdir().unwrap();

        update_manifest(dir.path(), "20240115", Cycle::Z00, "2024-01-15T01:00:00Z", "TECU")
            .await
            .unwrap();
        let manifest =
            update_manifest(dir.path(), "20240115", Cycle::Z12, "2024-01-15T13:00:00Z", "TECU")
                .await
                .unwrap();

        assert_eq!(manifest.runs.len(), 2);
        assert_eq!(manifest.runs[0].cycle, "00Z");
        assert_eq!(manifest.runs[0].fetched_utc, "2024-01-15T01:00:00Z");
        assert_eq!(manifest.runs[1].cycle, "12Z");
    }

    #[tokio::test]
    async fn test_runs_reordered_00z_first() {
        let dir = tempfile::tempdir().unwrap();
        let on_disk = r#"{
            "date": "20240115",
            "runs": [
                {"cycle": "12Z", "fetched_utc": "2024-01-15T13:00:00Z"},
                {"cycle": "00Z", "fetched_utc": "2024-01-15T01:00:00Z"}
            ],
            "layers": {},
            "updated_utc": "2024-01-15T13:00:00Z"
        }"#;
        std::fs::write(dir.path().join("manifest.json"), on_disk).unwrap();

        let manifest =
            update_manifest(dir.path(), "20240115", Cycle::Z12, "2024-01-15T14:00:00Z", "TECU")
                .await
                .unwrap();

        let cycles: Vec<_> = manifest.runs.iter().map(|r| r.cycle.as_str()).collect();
        assert_eq!(cycles, vec!["00Z", "12Z"]);
        assert_eq!(manifest.runs[1].fetched_utc, "2024-01-15T14:00:00Z");
    }

    #[tokio::test]
    async fn test_unknown_cycle_sorts_last_and_survives() {
        let dir = tempfile::tempdir().unwrap();
        let on_disk = r#"{
            "date": "20240115",
            "runs": [{"cycle": "06Z", "fetched_utc": "2024-01-15T07:00:00Z"}],
            "layers": {},
            "updated_utc": "2024-01-15T07:00:00Z"
        }"#;
        std::fs::write(dir.path().join("manifest.json"), on_disk).unwrap();

        let manifest =
            update_manifest(dir.path(), "20240115", Cycle::Z00, "2024-01-15T08:00:00Z", "TECU")
                .await
                .unwrap();

        let cycles: Vec<_> = manifest.runs.iter().map(|r| r.cycle.as_str()).collect();
        assert_eq!(cycles, vec!["00Z", "06Z"]);
    }

    #[tokio::test]
    async fn test_corrupt_manifest_reinitialized() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("manifest.json"), b"{truncated").unwrap();

        let manifest =
            update_manifest(dir.path(), "20240115", Cycle::Z00, "2024-01-15T01:00:00Z", "TECU")
                .await
                .unwrap();

        assert_eq!(manifest.runs.len(), 1);
        assert_eq!(manifest.runs[0].cycle, "00Z");
    }

    #[tokio::test]
    async fn test_wrong_date_manifest_reinitialized() {
        let dir = tempfile::tempdir().unwrap();
        let on_disk = r#"{
            "date": "20240114",
            "runs": [{"cycle": "00Z", "fetched_utc": "2024-01-14T01:00:00Z"}],
            "layers": {},
            "updated_utc": "2024-01-14T01:00:00Z"
        }"#;
        std::fs::write(dir.path().join("manifest.json"), on_disk).unwrap();

        let manifest =
            update_manifest(dir.path(), "20240115", Cycle::Z00, "2024-01-15T01:00:00Z", "TECU")
                .await
                .unwrap();

        assert_eq!(manifest.date, "20240115");
        assert_eq!(manifest.runs.len(), 1);
    }
}
