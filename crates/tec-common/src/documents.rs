//! Published JSON document model.
//!
//! Every document the publisher writes for the visualization front end is
//! defined here: per-timestamp grid documents, per-layer index documents,
//! and the per-day run manifest. Field names match the wire format the
//! front end consumes.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// One populated bin of a regular lat/lon grid.
///
/// `lat`/`lon` are the lower-left corner of the bin; `val` is the mean of
/// all samples that fell into it. Empty bins are never emitted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCell {
    pub lat: f64,
    pub lon: f64,
    pub val: f64,
}

/// Grid cell size in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CellSize {
    pub dlat: f64,
    pub dlon: f64,
}

/// Robust display range for a layer, `vmin <= vmax` always.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueRange {
    pub vmin: f64,
    pub vmax: f64,
}

/// Grid document for a single snapshot time.
///
/// Written once per discovered (or synthetic) timestamp; a later run with
/// the same timestamp overwrites it wholesale.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotDocument {
    pub time_utc: String,
    pub cells: Vec<GridCell>,
}

/// Per-layer index document: time axis, cell geometry, unit and range.
///
/// Fully regenerated on every run; this is a derived view, not a ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerIndex {
    pub kind: String,
    pub date: String,
    pub cycle_last: String,
    pub updated_utc: String,
    pub unit: String,
    /// "HHMM" tokens, deduplicated and ascending.
    pub times_utc: Vec<String>,
    pub cell: CellSize,
    pub range: ValueRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

/// One publication run within a day, unique per cycle.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RunRecord {
    /// "00Z" or "12Z"; kept as a string so unknown values in previously
    /// written manifests survive a round trip.
    pub cycle: String,
    pub fetched_utc: String,
}

/// Location and unit of one layer's index document, relative to the
/// manifest's directory.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LayerEntry {
    pub path: String,
    pub unit: String,
}

/// Per-date ledger of publication runs and layer locations.
///
/// The only document with an incremental lifecycle: created on the first
/// run of a day, loaded and merged on every subsequent run of that day.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Manifest {
    pub date: String,
    pub runs: Vec<RunRecord>,
    pub layers: BTreeMap<String, LayerEntry>,
    #[serde(default)]
    pub updated_utc: String,
}
