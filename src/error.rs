// Error types for the export run
use thiserror::Error;

#[derive(Debug, Error)]
pub enum LedgerError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("request to Grafana failed: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Grafana returned status {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("failed to decode search response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for LedgerError {
    fn from(err: config::ConfigError) -> Self {
        LedgerError::Config(err.to_string())
    }
}

impl From<csv::Error> for LedgerError {
    fn from(err: csv::Error) -> Self {
        LedgerError::Io(err.into())
    }
}

pub type Result<T> = std::result::Result<T, LedgerError>;
