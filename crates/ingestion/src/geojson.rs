//! GeoJSON feature-collection parsing and sample extraction.
//!
//! The remote source publishes point features whose value field has drifted
//! across product revisions (`tec`, `TEC`, `vtec`). Extraction tries the
//! candidates in a fixed priority order and silently drops features that
//! carry no usable geometry or value; dropped counts are reported so the
//! caller can log how much was discarded.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use grid_processor::Sample;

/// Value property names in priority order; first usable one wins.
const VALUE_KEYS: [&str; 3] = ["tec", "TEC", "vtec"];

/// Top-level GeoJSON document.
#[derive(Debug, Clone, Deserialize)]
pub struct FeatureCollection {
    #[serde(default)]
    pub features: Vec<Feature>,
}

/// A single feature; geometry and properties are both optional on the wire.
#[derive(Debug, Clone, Deserialize)]
pub struct Feature {
    #[serde(default)]
    pub geometry: Option<Geometry>,
    #[serde(default)]
    pub properties: Option<HashMap<String, Value>>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Geometry {
    #[serde(rename = "type", default)]
    pub geometry_type: String,
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// Extract usable point samples from a feature collection.
///
/// Returns the samples plus the number of features dropped by the quality
/// filter. A feature is dropped when any of these holds: no geometry,
/// geometry type is not "Point", fewer than two coordinates, or no value
/// property convertible to a finite number. Dropping is a data-quality
/// filter, not an error.
pub fn extract_samples(collection: &FeatureCollection) -> (Vec<Sample>, usize) {
    let mut samples = Vec::with_capacity(collection.features.len());
    let mut dropped = 0;

    for feature in &collection.features {
        match sample_from_feature(feature) {
            Some(sample) => samples.push(sample),
            None => dropped += 1,
        }
    }

    (samples, dropped)
}

fn sample_from_feature(feature: &Feature) -> Option<Sample> {
    let geometry = feature.geometry.as_ref()?;
    if geometry.geometry_type != "Point" || geometry.coordinates.len() < 2 {
        return None;
    }

    let properties = feature.properties.as_ref()?;
    let value = VALUE_KEYS
        .iter()
        .find_map(|key| properties.get(*key).and_then(numeric_value))?;

    Some(Sample::new(
        geometry.coordinates[0],
        geometry.coordinates[1],
        value,
    ))
}

/// Numeric conversion matching the source's loose typing: JSON numbers are
/// taken as-is, strings are parsed as f64.
fn numeric_value(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}
