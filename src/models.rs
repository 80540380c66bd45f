use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Index symbols tracked by the analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Symbol {
    Nifty,
    BankNifty,
    Sensex,
}

impl Symbol {
    pub const ALL: [Symbol; 3] = [Symbol::BankNifty, Symbol::Nifty, Symbol::Sensex];

    /// Uppercase code as it appears in snapshot lines and input file names.
    pub fn code(&self) -> &'static str {
        match self {
            Symbol::Nifty => "NIFTY",
            Symbol::BankNifty => "BANKNIFTY",
            Symbol::Sensex => "SENSEX",
        }
    }

    /// Mixed-case label used in output rows and output file names.
    pub fn label(&self) -> &'static str {
        match self {
            Symbol::Nifty => "Nifty",
            Symbol::BankNifty => "BankNifty",
            Symbol::Sensex => "Sensex",
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One observation parsed from a snapshot line: one symbol at one minute.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SnapshotRecord {
    pub timestamp: NaiveDateTime,
    pub symbol: Symbol,
    pub expiry: NaiveDate,
    pub ltp: f64,
    pub net_oi_change: i64,
    pub net_dex: f64,
}

/// Trailing mean/sample-std over the rolling window.
///
/// The four statistics share the same window-fill precondition, so a record
/// either has all of them or none of them (`Option<RollingStats>`).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RollingStats {
    pub ltp_ma: f64,
    pub ltp_std: f64,
    pub net_oi_ma: f64,
    pub net_oi_std: f64,
}

/// Snapshot record augmented with rolling statistics
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowedRecord {
    #[serde(flatten)]
    pub base: SnapshotRecord,

    #[serde(flatten)]
    pub stats: Option<RollingStats>,
}

/// Closed set of sentiment tags produced by the classifier and the confirmer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    NotEnoughData,
    SidewaysChop,
    WeakBullishCaution,
    StrongBearish,
    StrongBullish,
    WeakBearishCaution,
    Neutral,
}

impl SentimentLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            SentimentLabel::NotEnoughData => "Not enough data",
            SentimentLabel::SidewaysChop => "Sideways/Chop",
            SentimentLabel::WeakBullishCaution => "Weak Bullish / Caution",
            SentimentLabel::StrongBearish => "Strong Bearish",
            SentimentLabel::StrongBullish => "Strong Bullish",
            SentimentLabel::WeakBearishCaution => "Weak Bearish / Caution",
            SentimentLabel::Neutral => "Neutral",
        }
    }

    /// Filler labels carry no directional claim and never accumulate a streak.
    pub fn is_filler(&self) -> bool {
        matches!(
            self,
            SentimentLabel::NotEnoughData | SentimentLabel::SidewaysChop
        )
    }

    /// Directional labels are the only ones the confirmer will surface.
    pub fn is_directional(&self) -> bool {
        matches!(
            self,
            SentimentLabel::WeakBullishCaution
                | SentimentLabel::StrongBearish
                | SentimentLabel::StrongBullish
                | SentimentLabel::WeakBearishCaution
        )
    }
}

impl fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
