//! Synthetic fallback grid.

use tec_common::GridCell;

/// Generate the deterministic placeholder grid used when the remote source
/// has published nothing yet for the current date.
///
/// Covers latitude [-60, 60] and longitude [-180, 180] inclusive at the
/// given cell size, with a smooth equator-peaked pattern so the front end
/// always has something plausible to render.
pub fn synthetic_grid(dlat: f64, dlon: f64) -> Vec<GridCell> {
    let nlat = (120.0 / dlat).floor() as usize;
    let nlon = (360.0 / dlon).floor() as usize;

    let mut cells = Vec::with_capacity((nlat + 1) * (nlon + 1));
    for i in 0..=nlat {
        let lat = -60.0 + i as f64 * dlat;
        for j in 0..=nlon {
            let lon = -180.0 + j as f64 * dlon;
            let val = 10.0
                + 20.0 * (-(lat / 30.0).powi(2)).exp() * (0.5 + 0.5 * lon.to_radians().cos());
            cells.push(GridCell { lat, lon, val });
        }
    }
    cells
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_covers_full_extent() {
        let cells = synthetic_grid(2.0, 2.0);

        // 61 latitudes x 181 longitudes, both ends inclusive.
        assert_eq!(cells.len(), 61 * 181);
        assert_eq!(cells.first().unwrap().lat, -60.0);
        assert_eq!(cells.first().unwrap().lon, -180.0);
        assert_eq!(cells.last().unwrap().lat, 60.0);
        assert_eq!(cells.last().unwrap().lon, 180.0);
    }

    #[test]
    fn test_reproducible() {
        assert_eq!(synthetic_grid(2.0, 2.0), synthetic_grid(2.0, 2.0));
    }

    #[test]
    fn test_peak_at_equator_prime_meridian() {
        let cells = synthetic_grid(2.0, 2.0);
        let peak = cells
            .iter()
            .find(|c| c.lat == 0.0 && c.lon == 0.0)
            .unwrap();

        // 10 + 20 * 1 * 1
        assert!((peak.val - 30.0).abs() < 1e-9);

        let max = cells.iter().map(|c| c.val).fold(f64::MIN, f64::max);
        assert!(max <= 30.0 + 1e-9);
    }

    #[test]
    fn test_all_values_finite_positive() {
        assert!(synthetic_grid(2.0, 2.0)
            .iter()
            .all(|c| c.val.is_finite() && c.val > 0.0));
    }
}
