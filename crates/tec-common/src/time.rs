//! UTC time and publication-cycle helpers.

use chrono::{DateTime, Timelike, Utc};
use serde::{Deserialize, Serialize};

/// Twice-daily publication window grouping runs within a UTC day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Cycle {
    #[serde(rename = "00Z")]
    Z00,
    #[serde(rename = "12Z")]
    Z12,
}

impl Cycle {
    /// Cycle covering the given instant: 00Z before noon UTC, 12Z after.
    pub fn from_datetime(dt: &DateTime<Utc>) -> Self {
        if dt.hour() < 12 {
            Cycle::Z00
        } else {
            Cycle::Z12
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Cycle::Z00 => "00Z",
            Cycle::Z12 => "12Z",
        }
    }
}

impl std::fmt::Display for Cycle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Sort key for manifest run ordering: 00Z first, 12Z second,
/// anything unrecognized (from older or hand-edited manifests) last.
pub fn cycle_sort_key(cycle: &str) -> u8 {
    match cycle {
        "00Z" => 0,
        "12Z" => 1,
        _ => 99,
    }
}

/// Compact calendar date, e.g. "20240115".
pub fn yyyymmdd(dt: &DateTime<Utc>) -> String {
    dt.format("%Y%m%d").to_string()
}

/// ISO-8601 UTC timestamp at seconds precision, e.g. "2024-01-15T12:34:56Z".
pub fn iso_utc(dt: &DateTime<Utc>) -> String {
    dt.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

/// Build the ISO timestamp for a snapshot from its date and "HHMM" token.
///
/// Snapshot documents carry minute precision; seconds are zeroed.
///
/// # Panics
///
/// Panics if `yyyymmdd` is shorter than 8 bytes or `hhmm` shorter than 4.
/// Callers pass components already validated by snapshot filename parsing
/// or formatted from a `DateTime`.
pub fn snapshot_time_iso(yyyymmdd: &str, hhmm: &str) -> String {
    format!(
        "{}-{}-{}T{}:{}:00Z",
        &yyyymmdd[..4],
        &yyyymmdd[4..6],
        &yyyymmdd[6..8],
        &hhmm[..2],
        &hhmm[2..4]
    )
}
