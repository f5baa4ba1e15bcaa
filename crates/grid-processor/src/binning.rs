//! Point-to-grid binning with mean aggregation.

use std::collections::BTreeMap;

use tec_common::GridCell;

/// A single geo-tagged scalar measurement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub lon: f64,
    pub lat: f64,
    pub value: f64,
}

impl Sample {
    pub fn new(lon: f64, lat: f64, value: f64) -> Self {
        Self { lon, lat, value }
    }
}

/// Reduce an unordered sample set onto a sparse regular lat/lon grid.
///
/// Each cell covers `[lat0, lat0 + dlat) x [lon0, lon0 + dlon)` with
/// `lat0 = floor(lat / dlat) * dlat` and holds the arithmetic mean of all
/// samples that fall into it. Bins with no samples are not emitted.
///
/// The reduction is keyed by integer bin indices and accumulated as
/// `(sum, count)`, so the result does not depend on input order.
pub fn bin_samples(samples: &[Sample], dlat: f64, dlon: f64) -> Vec<GridCell> {
    let mut acc: BTreeMap<(i64, i64), (f64, u64)> = BTreeMap::new();

    for s in samples {
        let i = (s.lat / dlat).floor() as i64;
        let j = (s.lon / dlon).floor() as i64;
        let entry = acc.entry((i, j)).or_insert((0.0, 0));
        entry.0 += s.value;
        entry.1 += 1;
    }

    acc.into_iter()
        .map(|((i, j), (sum, count))| GridCell {
            lat: i as f64 * dlat,
            lon: j as f64 * dlon,
            val: sum / count as f64,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_samples_one_bin() {
        let samples = vec![Sample::new(3.1, 1.2, 10.0), Sample::new(3.9, 1.9, 20.0)];

        let cells = bin_samples(&samples, 2.0, 2.0);

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].lat, 0.0);
        assert_eq!(cells[0].lon, 2.0);
        assert_eq!(cells[0].val, 15.0);
    }

    #[test]
    fn test_order_independence() {
        let mut samples = vec![
            Sample::new(3.1, 1.2, 10.0),
            Sample::new(-0.5, -0.5, 7.0),
            Sample::new(3.9, 1.9, 20.0),
            Sample::new(100.0, 45.0, 3.0),
        ];

        let forward = bin_samples(&samples, 2.0, 2.0);
        samples.reverse();
        let reversed = bin_samples(&samples, 2.0, 2.0);

        assert_eq!(forward, reversed);
    }

    #[test]
    fn test_negative_coordinates_floor_down() {
        let cells = bin_samples(&[Sample::new(-0.1, -0.1, 5.0)], 2.0, 2.0);

        assert_eq!(cells.len(), 1);
        assert_eq!(cells[0].lat, -2.0);
        assert_eq!(cells[0].lon, -2.0);
    }

    #[test]
    fn test_empty_input_empty_grid() {
        assert!(bin_samples(&[], 2.0, 2.0).is_empty());
    }

    #[test]
    fn test_separate_bins_keep_separate_means() {
        let samples = vec![Sample::new(0.5, 0.5, 4.0), Sample::new(2.5, 0.5, 8.0)];

        let cells = bin_samples(&samples, 2.0, 2.0);

        assert_eq!(cells.len(), 2);
        assert_eq!(cells[0].val, 4.0);
        assert_eq!(cells[1].val, 8.0);
    }
}
