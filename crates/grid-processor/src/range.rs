//! Robust display-range estimation.

use tec_common::ValueRange;

/// Range used when a run produced no values at all.
const FALLBACK_RANGE: ValueRange = ValueRange { vmin: 0.0, vmax: 80.0 };

/// Compute an outlier-tolerant `[vmin, vmax]` display range.
///
/// `vmin` is the 2nd percentile clamped to zero or above, `vmax` the 98th
/// percentile, clipping both long tails. A degenerate pool (near-constant
/// values) is widened to `vmax = vmin + 1`; an empty pool yields the fixed
/// fallback `[0, 80]`.
pub fn display_range(values: &[f64]) -> ValueRange {
    if values.is_empty() {
        return FALLBACK_RANGE;
    }

    let mut sorted: Vec<f64> = values.to_vec();
    sorted.sort_by(|a, b| a.total_cmp(b));

    let vmin = percentile(&sorted, 2.0).max(0.0);
    let mut vmax = percentile(&sorted, 98.0);
    if vmax <= vmin {
        vmax = vmin + 1.0;
    }

    ValueRange { vmin, vmax }
}

/// Percentile with linear interpolation between closest ranks, over an
/// ascending-sorted non-empty slice.
fn percentile(sorted: &[f64], p: f64) -> f64 {
    let rank = p / 100.0 * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    if lo == hi {
        sorted[lo]
    } else {
        let frac = rank - lo as f64;
        sorted[lo] * (1.0 - frac) + sorted[hi] * frac
    }
}
