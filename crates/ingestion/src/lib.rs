//! Remote-source side of the publisher: snapshot discovery, fetching and
//! GeoJSON sample extraction.

pub mod discovery;
pub mod error;
pub mod geojson;
pub mod source;

pub use discovery::{parse_snapshot_filename, snapshots_for_date, SnapshotName};
pub use error::{IngestError, Result};
pub use geojson::{extract_samples, FeatureCollection};
pub use source::{HttpSnapshotSource, SnapshotSource};
