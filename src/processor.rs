use std::path::Path;

use chrono::NaiveDate;
use tracing::{info, warn};

use crate::config::SentimentConfig;
use crate::confirm::confirm_labels;
use crate::error::SentimentError;
use crate::models::{SentimentLabel, SnapshotRecord, Symbol, WindowedRecord};
use crate::parser::SnapshotParser;
use crate::rolling::add_rolling_stats;
use crate::rules::classify_sequence;
use crate::writer::{write_sentiment_csv, write_summary, SymbolSummary};

/// One fully processed output row: the windowed observation plus its
/// confirmed sentiment.
#[derive(Debug, Clone, PartialEq)]
pub struct SentimentRow {
    pub windowed: WindowedRecord,
    pub sentiment: SentimentLabel,
}

/// Result of one symbol's run within `run_sentiment_analysis`.
#[derive(Debug)]
pub struct SymbolRun {
    pub symbol: Symbol,
    pub rows: Vec<SentimentRow>,
}

/// Core pipeline over an already-parsed record sequence:
/// window → classify → confirm. Pure and order-preserving.
pub fn process_records(records: &[SnapshotRecord], config: &SentimentConfig) -> Vec<SentimentRow> {
    let windowed = add_rolling_stats(records, config.rolling_window);
    let raw = classify_sequence(&windowed, config.deviation_threshold);
    let confirmed = confirm_labels(&raw, config.confirmation_streak);

    windowed
        .into_iter()
        .zip(confirmed)
        .map(|(windowed, sentiment)| SentimentRow { windowed, sentiment })
        .collect()
}

/// Parse one symbol's snapshot file and run the core pipeline over it.
pub fn process_symbol_file(
    path: &Path,
    symbol: Symbol,
    config: &SentimentConfig,
) -> Vec<SentimentRow> {
    let parser = SnapshotParser::new(config.dex_factor);
    let records = parser.parse_file(path, symbol);
    process_records(&records, config)
}

/// Process every configured symbol for `date`, writing per-symbol CSVs, the
/// combined CSV, and the latest-label JSON summary.
///
/// Symbols whose snapshot file is missing or empty are skipped, not fatal.
pub fn run_sentiment_analysis(
    config: &SentimentConfig,
    date: NaiveDate,
) -> Result<Vec<SymbolRun>, SentimentError> {
    config.validate()?;
    std::fs::create_dir_all(&config.data_dir)?;

    let mut runs = Vec::new();
    for &symbol in &config.symbols {
        info!(symbol = symbol.code(), "processing symbol");
        let input = config.snapshot_path(symbol, date);
        let rows = process_symbol_file(&input, symbol, config);
        if rows.is_empty() {
            warn!(symbol = symbol.code(), "no records, skipping output");
            continue;
        }

        let output = config.sentiment_output_path(symbol, date);
        write_sentiment_csv(&output, &rows, config)?;
        info!(symbol = symbol.code(), rows = rows.len(), path = %output.display(), "sentiments saved");
        runs.push(SymbolRun { symbol, rows });
    }

    if runs.is_empty() {
        warn!("no data processed, check snapshot files");
        return Ok(runs);
    }

    // Combined file across all processed symbols, in configuration order.
    let combined: Vec<SentimentRow> = runs
        .iter()
        .flat_map(|run| run.rows.iter().cloned())
        .collect();
    let combined_path = config.combined_output_path(date);
    write_sentiment_csv(&combined_path, &combined, config)?;
    info!(rows = combined.len(), path = %combined_path.display(), "combined sentiments saved");

    let summaries: Vec<SymbolSummary> = runs
        .iter()
        .map(|run| {
            let last = run.rows.last();
            SymbolSummary {
                symbol: run.symbol.label().to_string(),
                rows: run.rows.len(),
                latest_timestamp: last
                    .map(|r| r.windowed.base.timestamp.format("%d-%m-%Y %H:%M").to_string()),
                latest_sentiment: last.map(|r| r.sentiment.to_string()),
            }
        })
        .collect();
    write_summary(&config.summary_path(), &summaries)?;

    Ok(runs)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(minute: u32, ltp: f64, net_oi_change: i64) -> SnapshotRecord {
        SnapshotRecord {
            timestamp: NaiveDate::from_ymd_opt(2025, 8, 13)
                .unwrap()
                .and_hms_opt(10, minute, 0)
                .unwrap(),
            symbol: Symbol::Nifty,
            expiry: NaiveDate::from_ymd_opt(2025, 8, 21).unwrap(),
            ltp,
            net_oi_change,
            net_dex: net_oi_change as f64 * 0.5,
        }
    }

    #[test]
    fn test_flat_sequence_classifies_as_chop() {
        // 13 identical records: stats defined at index 12, zero deviation.
        let records: Vec<_> = (0..13).map(|i| record(i, 100.0, 0)).collect();
        let rows = process_records(&records, &SentimentConfig::default());

        assert_eq!(rows.len(), 13);
        assert!(rows[12].windowed.stats.is_some());
        // Confirmed output: index 0 has no history, the rest are chop.
        assert_eq!(rows[0].sentiment, SentimentLabel::NotEnoughData);
        assert!(rows[1..]
            .iter()
            .all(|r| r.sentiment == SentimentLabel::SidewaysChop));
    }

    #[test]
    fn test_price_spike_with_flat_oi_is_neutral() {
        // A price jump is significant, but a constant net-OI MA has zero
        // direction, which is an explicit tie.
        let mut records: Vec<_> = (0..13).map(|i| record(i, 100.0, 0)).collect();
        records.push(record(13, 200.0, 0));
        let config = SentimentConfig::default();

        let windowed = add_rolling_stats(&records, config.rolling_window);
        let raw = classify_sequence(&windowed, config.deviation_threshold);
        assert_eq!(raw[12], SentimentLabel::SidewaysChop);
        assert_eq!(raw[13], SentimentLabel::Neutral);
    }

    #[test]
    fn test_first_defined_record_cannot_resolve_direction() {
        // At the first window-filling index the predecessor MA is undefined,
        // so a significant deviation still yields the filler label.
        let mut records: Vec<_> = (0..12).map(|i| record(i, 100.0, 0)).collect();
        records.push(record(12, 200.0, 0));
        let config = SentimentConfig::default();

        let windowed = add_rolling_stats(&records, config.rolling_window);
        let raw = classify_sequence(&windowed, config.deviation_threshold);
        assert_eq!(raw[12], SentimentLabel::NotEnoughData);
    }

    #[test]
    fn test_pipeline_is_idempotent() {
        let records: Vec<_> = (0..30)
            .map(|i| record(i, 100.0 + (i % 7) as f64 * 3.0, (i as i64 % 5 - 2) * 1000))
            .collect();
        let config = SentimentConfig::default();

        let first = process_records(&records, &config);
        let second = process_records(&records, &config);
        assert_eq!(first, second);
    }
}
