//! Snapshot filename parsing and directory-listing discovery.
//!
//! The remote directory is listed as an opaque text blob (HTML or plain
//! index); discovery scans it for names of the form
//! `glotec_icao_<YYYYMMDD>T<HHMMSS>Z.geojson` and keeps those matching the
//! target UTC date. Malformed candidates are skipped, never fatal.

const PREFIX: &str = "glotec_icao_";
const SUFFIX: &str = ".geojson";

/// A snapshot filename with its embedded timestamp components.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct SnapshotName {
    pub filename: String,
    /// "YYYYMMDD"
    pub date: String,
    /// "HHMM" (seconds from the filename are discarded)
    pub hhmm: String,
}

/// Parse one filename of the expected pattern.
///
/// Returns `None` for anything that does not match exactly.
pub fn parse_snapshot_filename(name: &str) -> Option<SnapshotName> {
    let rest = name.strip_prefix(PREFIX)?;
    let stamp = rest.strip_suffix(SUFFIX)?;

    // <8 digits>T<6 digits>Z
    if stamp.len() != 16 || stamp.as_bytes()[8] != b'T' || stamp.as_bytes()[15] != b'Z' {
        return None;
    }
    let date = &stamp[..8];
    let time = &stamp[9..15];
    if !date.bytes().all(|b| b.is_ascii_digit()) || !time.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    Some(SnapshotName {
        filename: name.to_string(),
        date: date.to_string(),
        hhmm: time[..4].to_string(),
    })
}

/// Scan a raw directory listing for snapshots of the given UTC date.
///
/// Matches are sorted ascending and deduplicated (listings typically repeat
/// each name in the href and the link text).
pub fn snapshots_for_date(listing: &str, yyyymmdd: &str) -> Vec<SnapshotName> {
    let mut found: Vec<SnapshotName> = listing
        .match_indices(PREFIX)
        .filter_map(|(start, _)| {
            let end = listing[start..].find(SUFFIX)?;
            parse_snapshot_filename(&listing[start..start + end + SUFFIX.len()])
        })
        .filter(|s| s.date == yyyymmdd)
        .collect();

    found.sort();
    found.dedup();
    found
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid_filename() {
        let parsed = parse_snapshot_filename("glotec_icao_20240115T041500Z.geojson").unwrap();

        assert_eq!(parsed.date, "20240115");
        assert_eq!(parsed.hhmm, "0415");
        assert_eq!(parsed.filename, "glotec_icao_20240115T041500Z.geojson");
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(parse_snapshot_filename("glotec_icao_2024011T041500Z.geojson").is_none());
        assert!(parse_snapshot_filename("glotec_icao_20240115T0415Z.geojson").is_none());
        assert!(parse_snapshot_filename("glotec_icao_20240115X041500Z.geojson").is_none());
        assert!(parse_snapshot_filename("glotec_icao_2024011aT041500Z.geojson").is_none());
        assert!(parse_snapshot_filename("other_20240115T041500Z.geojson").is_none());
        assert!(parse_snapshot_filename("glotec_icao_20240115T041500Z.json").is_none());
    }

    #[test]
    fn test_listing_scan_sorted_deduplicated() {
        let listing = r#"
            <a href="glotec_icao_20240115T120000Z.geojson">glotec_icao_20240115T120000Z.geojson</a>
            <a href="glotec_icao_20240115T041500Z.geojson">glotec_icao_20240115T041500Z.geojson</a>
            <a href="glotec_icao_20240114T230000Z.geojson">glotec_icao_20240114T230000Z.geojson</a>
        "#;

        let snapshots = snapshots_for_date(listing, "20240115");

        assert_eq!(snapshots.len(), 2);
        assert_eq!(snapshots[0].hhmm, "0415");
        assert_eq!(snapshots[1].hhmm, "1200");
    }

    #[test]
    fn test_listing_scan_skips_garbage() {
        let listing = "glotec_icao_garbage.geojson glotec_icao_20240115T000000Z.geojson";

        let snapshots = snapshots_for_date(listing, "20240115");

        assert_eq!(snapshots.len(), 1);
        assert_eq!(snapshots[0].hhmm, "0000");
    }

    #[test]
    fn test_empty_listing() {
        assert!(snapshots_for_date("", "20240115").is_empty());
        assert!(snapshots_for_date("<html></html>", "20240115").is_empty());
    }
}
