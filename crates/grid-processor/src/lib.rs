//! Spatial reduction over irregular point measurements.
//!
//! Everything in this crate is pure and deterministic: binning a sample set
//! onto a regular grid, deriving an outlier-tolerant display range, and
//! generating the synthetic fallback grid used when no real data exists.

pub mod binning;
pub mod range;
pub mod synthetic;

pub use binning::{bin_samples, Sample};
pub use range::display_range;
pub use synthetic::synthetic_grid;
