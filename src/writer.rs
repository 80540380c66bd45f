use std::fs::File;
use std::path::Path;

use csv::Writer;
use serde::Serialize;

use crate::config::SentimentConfig;
use crate::error::SentimentError;
use crate::models::RollingStats;
use crate::processor::SentimentRow;

/// Write one sentiment table (per-symbol or combined) as CSV.
///
/// Columns: timestamp, symbol, expiry, ltp, net_oi_change, net_dex, ltp_ma,
/// net_oi_ma, ltp_std, net_oi_std, Sentiment_SD<threshold>_Streak<n>.
/// Undefined rolling statistics serialize as empty cells.
pub fn write_sentiment_csv(
    path: &Path,
    rows: &[SentimentRow],
    config: &SentimentConfig,
) -> Result<(), SentimentError> {
    let file = File::create(path)?;
    let mut writer = Writer::from_writer(file);

    let sentiment_column = config.sentiment_column();
    writer.write_record([
        "timestamp",
        "symbol",
        "expiry",
        "ltp",
        "net_oi_change",
        "net_dex",
        "ltp_ma",
        "net_oi_ma",
        "ltp_std",
        "net_oi_std",
        sentiment_column.as_str(),
    ])?;

    for row in rows {
        let base = &row.windowed.base;
        let stats = row.windowed.stats;
        let stat_cell = |get: fn(&RollingStats) -> f64| -> String {
            stats.as_ref().map(|s| get(s).to_string()).unwrap_or_default()
        };

        writer.write_record(&[
            base.timestamp.format("%d-%m-%Y %H:%M").to_string(),
            base.symbol.label().to_string(),
            base.expiry.format("%Y-%m-%d").to_string(),
            base.ltp.to_string(),
            base.net_oi_change.to_string(),
            base.net_dex.to_string(),
            stat_cell(|s| s.ltp_ma),
            stat_cell(|s| s.net_oi_ma),
            stat_cell(|s| s.ltp_std),
            stat_cell(|s| s.net_oi_std),
            row.sentiment.to_string(),
        ])?;
    }

    writer.flush().map_err(SentimentError::from)?;
    Ok(())
}

#[derive(Debug, Serialize)]
pub struct SymbolSummary {
    pub symbol: String,
    pub rows: usize,
    pub latest_timestamp: Option<String>,
    pub latest_sentiment: Option<String>,
}

/// Write a small JSON summary with the latest confirmed label per symbol.
pub fn write_summary(path: &Path, summaries: &[SymbolSummary]) -> Result<(), SentimentError> {
    std::fs::write(path, serde_json::to_string_pretty(summaries)?)?;
    Ok(())
}
