pub mod config;
pub mod confirm;
pub mod error;
pub mod logging;
pub mod models;
pub mod parser;
pub mod processor;
pub mod rolling;
pub mod rules;
pub mod writer;

// Re-exports for convenience
pub use config::SentimentConfig;
pub use confirm::{confirm_labels, StreakConfirmer};
pub use error::SentimentError;
pub use models::{RollingStats, SentimentLabel, SnapshotRecord, Symbol, WindowedRecord};
pub use parser::SnapshotParser;
pub use processor::{process_records, process_symbol_file, run_sentiment_analysis, SentimentRow};
pub use rolling::{add_rolling_stats, RollingWindow};
pub use rules::{classify_record, classify_sequence};
