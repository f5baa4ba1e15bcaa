//! Per-layer index assembly.
//!
//! The index is a derived view, rebuilt from scratch every run; the
//! manifest is the ledger that accumulates across runs.

use tec_common::{CellSize, Cycle, LayerIndex, ValueRange};

/// Assemble the TEC layer index from this run's findings.
pub fn tec_index(
    date: &str,
    cycle: Cycle,
    now_iso: &str,
    unit: &str,
    times_utc: Vec<String>,
    cell: CellSize,
    range: ValueRange,
) -> LayerIndex {
    LayerIndex {
        kind: "tec".to_string(),
        date: date.to_string(),
        cycle_last: cycle.as_str().to_string(),
        updated_utc: now_iso.to_string(),
        unit: unit.to_string(),
        times_utc,
        cell,
        range,
        note: None,
    }
}

/// Index for the NO2 layer, which has no data pipeline yet.
///
/// Published anyway so the front end can show the layer as pending.
pub fn no2_placeholder_index(date: &str, cycle: Cycle, now_iso: &str, cell: CellSize) -> LayerIndex {
    LayerIndex {
        kind: "no2".to_string(),
        date: date.to_string(),
        cycle_last: cycle.as_str().to_string(),
        updated_utc: now_iso.to_string(),
        unit: "arb.".to_string(),
        times_utc: Vec::new(),
        cell,
        range: ValueRange { vmin: 0.0, vmax: 1.0 },
        note: Some("NO2 layer is placeholder. Add CAMS/Sentinel-5P fetch later.".to_string()),
    }
}
