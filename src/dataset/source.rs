use std::fmt;

use async_trait::async_trait;

use super::types::VisaDataset;

/// Errors a single remote dataset source can produce.
/// All of them are recovered by the loader moving on to the next tier.
#[derive(Debug)]
pub enum SourceError {
    /// Network-level failure (timeout, DNS, connection refused).
    Network(String),
    /// Endpoint answered with a non-success status.
    Http { status: u16 },
    /// Body was not a usable `Passport,Destination,Requirement` table.
    Parse(String),
}

impl fmt::Display for SourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SourceError::Network(msg) => write!(f, "network error: {msg}"),
            SourceError::Http { status } => write!(f, "HTTP {status}"),
            SourceError::Parse(msg) => write!(f, "parse error: {msg}"),
        }
    }
}

impl std::error::Error for SourceError {}

impl From<reqwest::Error> for SourceError {
    fn from(e: reqwest::Error) -> Self {
        SourceError::Network(e.to_string())
    }
}

impl From<csv::Error> for SourceError {
    fn from(e: csv::Error) -> Self {
        SourceError::Parse(e.to_string())
    }
}

#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Short label used in logs.
    fn name(&self) -> &str;

    /// Fetches and parses the full dataset from this source.
    async fn fetch(&self) -> Result<VisaDataset, SourceError>;
}
