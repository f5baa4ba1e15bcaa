//! Publisher configuration.

use std::path::PathBuf;
use std::time::Duration;

/// Default remote snapshot directory (NOAA SWPC GloTEC, 2D unformatted
/// real-time product).
pub const DEFAULT_SOURCE_URL: &str =
    "https://services.swpc.noaa.gov/products/glotec/geojson_2d_urt/";

/// Settings for one publication run.
///
/// The cell size and unit are fixed for the product but kept here rather
/// than hard-coded at the call sites.
#[derive(Debug, Clone)]
pub struct PublisherConfig {
    /// Remote directory URL that is listed and fetched from.
    pub source_url: String,
    /// Root of the published document tree.
    pub data_dir: PathBuf,
    /// Grid cell height in degrees latitude.
    pub dlat: f64,
    /// Grid cell width in degrees longitude.
    pub dlon: f64,
    /// Unit reported in the TEC layer index.
    pub tec_unit: String,
    /// Timeout applied to each remote request.
    pub request_timeout: Duration,
}

impl Default for PublisherConfig {
    fn default() -> Self {
        Self {
            source_url: DEFAULT_SOURCE_URL.to_string(),
            data_dir: PathBuf::from("docs/data"),
            dlat: 2.0,
            dlon: 2.0,
            tec_unit: "TECU".to_string(),
            request_timeout: Duration::from_secs(60),
        }
    }
}
