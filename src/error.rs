use std::fmt;

#[derive(Debug)]
pub enum SentimentError {
    Io(String),
    Csv(String),
    Json(String),
    Config(String),
}

impl fmt::Display for SentimentError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SentimentError::Io(msg) => write!(f, "I/O error: {}", msg),
            SentimentError::Csv(msg) => write!(f, "CSV error: {}", msg),
            SentimentError::Json(msg) => write!(f, "JSON error: {}", msg),
            SentimentError::Config(msg) => write!(f, "Config error: {}", msg),
        }
    }
}

impl std::error::Error for SentimentError {}

impl From<std::io::Error> for SentimentError {
    fn from(err: std::io::Error) -> Self {
        SentimentError::Io(err.to_string())
    }
}

impl From<csv::Error> for SentimentError {
    fn from(err: csv::Error) -> Self {
        SentimentError::Csv(err.to_string())
    }
}

impl From<serde_json::Error> for SentimentError {
    fn from(err: serde_json::Error) -> Self {
        SentimentError::Json(err.to_string())
    }
}
