use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::{NaiveDate, NaiveDateTime};
use regex::Regex;
use tracing::warn;

use crate::models::{SnapshotRecord, Symbol};

// One snapshot line, in order: pipe-delimited timestamp, symbol code, expiry
// marker, LTP marker, then (after arbitrary fields) the NetOI marker.
// Number fields may carry thousands separators.
const SNAPSHOT_PATTERN: &str = r"(?i)\|\s*(\d{2}-\d{2}-\d{4} \d{2}:\d{2})\s*\|\s*([A-Z0-9]+)\s*\|\s*EXP:([\d-]+)\s*\|\s*LTP:\s*([\d.,-]+)\s*\|.*?NetOI:\s*([-\d.,]+)";

const TIMESTAMP_FORMAT: &str = "%d-%m-%Y %H:%M";

/// Extracts `SnapshotRecord`s from the collector's semi-structured log lines.
pub struct SnapshotParser {
    pattern: Regex,
    dex_factor: f64,
}

impl SnapshotParser {
    pub fn new(dex_factor: f64) -> Self {
        Self {
            pattern: Regex::new(SNAPSHOT_PATTERN).expect("snapshot pattern compiles"),
            dex_factor,
        }
    }

    /// Parse a single line. Returns `None` for anything that does not match
    /// the snapshot grammar, fails numeric/date parsing, or carries a
    /// non-positive LTP.
    pub fn parse_line(&self, line: &str, symbol: Symbol) -> Option<SnapshotRecord> {
        let caps = self.pattern.captures(line)?;

        let timestamp = NaiveDateTime::parse_from_str(&caps[1], TIMESTAMP_FORMAT).ok()?;
        let expiry = parse_expiry(&caps[3])?;

        let ltp: f64 = caps[4].replace(',', "").parse().ok()?;
        if !(ltp > 0.0) {
            return None;
        }

        // NetOI may be written with a fractional part; truncate it.
        let net_oi_change = caps[5].replace(',', "").parse::<f64>().ok()? as i64;

        Some(SnapshotRecord {
            timestamp,
            symbol,
            expiry,
            ltp,
            net_oi_change,
            net_dex: net_oi_change as f64 * self.dex_factor,
        })
    }

    /// Parse a whole snapshot file in appearance order.
    ///
    /// A missing file yields an empty sequence, blank lines are skipped, and
    /// unparseable lines are logged and dropped; none of these is fatal.
    pub fn parse_file(&self, path: &Path, symbol: Symbol) -> Vec<SnapshotRecord> {
        let file = match File::open(path) {
            Ok(file) => file,
            Err(err) => {
                warn!(path = %path.display(), %err, "snapshot file not readable");
                return Vec::new();
            }
        };

        let mut records = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    warn!(line = idx, %err, "could not read snapshot line");
                    continue;
                }
            };
            if line.trim().is_empty() {
                continue;
            }
            match self.parse_line(&line, symbol) {
                Some(record) => records.push(record),
                None => warn!(line = idx, content = %line.trim(), "could not parse snapshot line"),
            }
        }
        records
    }
}

// Expiries are written as 2025-08-21 by the current collector; older files
// used day-first.
fn parse_expiry(token: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(token, "%Y-%m-%d")
        .or_else(|_| NaiveDate::parse_from_str(token, "%d-%m-%Y"))
        .ok()
}
