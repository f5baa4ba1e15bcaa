//! Common types shared across the iono-map publisher workspace.

pub mod documents;
pub mod error;
pub mod time;

pub use documents::{
    CellSize, GridCell, LayerEntry, LayerIndex, Manifest, RunRecord, SnapshotDocument, ValueRange,
};
pub use error::{TecError, TecResult};
pub use time::{Cycle, cycle_sort_key, iso_utc, snapshot_time_iso, yyyymmdd};
