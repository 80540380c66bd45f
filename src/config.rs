use std::path::PathBuf;

use chrono::NaiveDate;

use crate::error::SentimentError;
use crate::models::Symbol;

// -----------------------------------------------
// SENTIMENT PARAMETERS
// -----------------------------------------------
pub const DEFAULT_ROLLING_WINDOW: usize = 13;
pub const DEFAULT_DEVIATION_THRESHOLD: f64 = 0.3;
pub const DEFAULT_CONFIRMATION_STREAK: usize = 2;

// Proxy delta-exposure factor applied to the net OI change. The figure is a
// fixed convention carried over from the snapshot producer, kept configurable.
pub const DEFAULT_DEX_FACTOR: f64 = 0.5;

// -----------------------------------------------
// SYMBOLS TO PROCESS
// -----------------------------------------------
pub const DEFAULT_SYMBOLS: &[Symbol] = &Symbol::ALL;

// -----------------------------------------------
// DATA FILES
// -----------------------------------------------
pub const DEFAULT_DATA_DIR: &str = "data";

/// All tunables of one analysis run. Multiple configurations can run side by
/// side; nothing in the pipeline reads process-wide state.
#[derive(Debug, Clone)]
pub struct SentimentConfig {
    /// Trailing window length for the moving average / std, in records.
    pub rolling_window: usize,
    /// Deviation-significance threshold, in standard deviations.
    pub deviation_threshold: f64,
    /// Minimum consecutive identical raw labels before a signal is surfaced.
    pub confirmation_streak: usize,
    /// Multiplier deriving `net_dex` from `net_oi_change`.
    pub dex_factor: f64,
    /// Directory holding snapshot inputs and sentiment outputs.
    pub data_dir: PathBuf,
    /// Symbols to process, in output order.
    pub symbols: Vec<Symbol>,
}

impl Default for SentimentConfig {
    fn default() -> Self {
        Self {
            rolling_window: DEFAULT_ROLLING_WINDOW,
            deviation_threshold: DEFAULT_DEVIATION_THRESHOLD,
            confirmation_streak: DEFAULT_CONFIRMATION_STREAK,
            dex_factor: DEFAULT_DEX_FACTOR,
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            symbols: DEFAULT_SYMBOLS.to_vec(),
        }
    }
}

impl SentimentConfig {
    /// Reject unusable parameters eagerly, before any file is touched.
    pub fn validate(&self) -> Result<(), SentimentError> {
        if self.rolling_window < 2 {
            return Err(SentimentError::Config(format!(
                "rolling_window must be at least 2 (sample std needs two points), got {}",
                self.rolling_window
            )));
        }
        if !(self.deviation_threshold > 0.0) {
            return Err(SentimentError::Config(format!(
                "deviation_threshold must be positive, got {}",
                self.deviation_threshold
            )));
        }
        if self.confirmation_streak == 0 {
            return Err(SentimentError::Config(
                "confirmation_streak must be positive".to_string(),
            ));
        }
        if !(self.dex_factor > 0.0) {
            return Err(SentimentError::Config(format!(
                "dex_factor must be positive, got {}",
                self.dex_factor
            )));
        }
        Ok(())
    }

    /// Column header for the confirmed sentiment, embedding the active
    /// parameters so outputs from different configurations stay distinguishable.
    pub fn sentiment_column(&self) -> String {
        format!(
            "Sentiment_SD{}_Streak{}",
            self.deviation_threshold, self.confirmation_streak
        )
    }

    /// Snapshot input file written by the collector for one symbol and day.
    pub fn snapshot_path(&self, symbol: Symbol, date: NaiveDate) -> PathBuf {
        self.data_dir.join(format!(
            "snapshots_{}_{}.txt",
            symbol.code(),
            date.format("%Y-%m-%d")
        ))
    }

    /// Per-symbol sentiment output file.
    pub fn sentiment_output_path(&self, symbol: Symbol, date: NaiveDate) -> PathBuf {
        self.data_dir.join(format!(
            "sentiments_{}_{}.csv",
            symbol.label(),
            date.format("%d%b")
        ))
    }

    /// Combined-across-symbols sentiment output file.
    pub fn combined_output_path(&self, date: NaiveDate) -> PathBuf {
        self.data_dir
            .join(format!("sentiments_ALL_{}.csv", date.format("%d%b")))
    }

    /// Latest-label-per-symbol JSON summary.
    pub fn summary_path(&self) -> PathBuf {
        self.data_dir.join("sentiment_summary.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_is_valid() {
        let config = SentimentConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.rolling_window, 13);
        assert_eq!(config.confirmation_streak, 2);
    }

    #[test]
    fn test_rejects_non_positive_parameters() {
        let mut config = SentimentConfig::default();
        config.rolling_window = 1;
        assert!(config.validate().is_err());

        let mut config = SentimentConfig::default();
        config.deviation_threshold = 0.0;
        assert!(config.validate().is_err());

        let mut config = SentimentConfig::default();
        config.confirmation_streak = 0;
        assert!(config.validate().is_err());

        let mut config = SentimentConfig::default();
        config.dex_factor = -0.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_sentiment_column_embeds_parameters() {
        let config = SentimentConfig::default();
        assert_eq!(config.sentiment_column(), "Sentiment_SD0.3_Streak2");

        let config = SentimentConfig {
            deviation_threshold: 0.5,
            confirmation_streak: 3,
            ..Default::default()
        };
        assert_eq!(config.sentiment_column(), "Sentiment_SD0.5_Streak3");
    }

    #[test]
    fn test_file_path_helpers() {
        let config = SentimentConfig::default();
        let date = NaiveDate::from_ymd_opt(2025, 8, 13).unwrap();
        assert_eq!(
            config.snapshot_path(Symbol::BankNifty, date),
            PathBuf::from("data/snapshots_BANKNIFTY_2025-08-13.txt")
        );
        assert_eq!(
            config.sentiment_output_path(Symbol::BankNifty, date),
            PathBuf::from("data/sentiments_BankNifty_13Aug.csv")
        );
        assert_eq!(
            config.combined_output_path(date),
            PathBuf::from("data/sentiments_ALL_13Aug.csv")
        );
    }
}
