//! Remote CSV dataset source.
//!
//! Both public passport-index mirrors publish the same "tidy" layout:
//!
//! ```text
//! Passport,Destination,Requirement
//! India,Nepal,visa free
//! India,Thailand,visa on arrival
//! Germany,Japan,90
//! ```
//!
//! Anything other than a 2xx response with those three headers and at
//! least one usable row is reported as a [`SourceError`].

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};
use serde::Deserialize;

use crate::dataset::{DatasetOrigin, DatasetSource, SourceError, VisaDataset, VisaRecord};

// ============================================================================
// CSV Layout
// ============================================================================

const REQUIRED_COLUMNS: [&str; 3] = ["Passport", "Destination", "Requirement"];

#[derive(Deserialize, Debug)]
struct CsvRow {
    #[serde(rename = "Passport")]
    passport: String,
    #[serde(rename = "Destination")]
    destination: String,
    #[serde(rename = "Requirement")]
    requirement: String,
}

/// Parses a tidy passport-index CSV body into a dataset tagged with `origin`.
pub fn parse_csv(body: &str, origin: DatasetOrigin) -> Result<VisaDataset, SourceError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(body.as_bytes());

    let headers = reader.headers()?.clone();
    for column in REQUIRED_COLUMNS {
        if !headers.iter().any(|h| h == column) {
            return Err(SourceError::Parse(format!("missing column `{column}`")));
        }
    }

    let mut records = Vec::new();
    let mut skipped = 0usize;
    let mut malformed = 0usize;
    for row in reader.deserialize::<CsvRow>() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!("Skipping malformed row: {}", e);
                malformed += 1;
                continue;
            }
        };
        if row.passport.is_empty() || row.destination.is_empty() {
            skipped += 1;
            continue;
        }
        records.push(VisaRecord::from_raw(
            &row.passport,
            &row.destination,
            &row.requirement,
        ));
    }

    if skipped > 0 || malformed > 0 {
        debug!(
            "Skipped {} rows with empty country cells, {} malformed rows",
            skipped, malformed
        );
    }
    if records.is_empty() {
        return Err(SourceError::Parse("no visa records in body".to_string()));
    }

    Ok(VisaDataset::new(origin, records))
}

// ============================================================================
// Source Implementation
// ============================================================================

/// A dataset published as CSV over plain HTTP GET.
pub struct HttpCsvSource {
    name: String,
    url: String,
    origin: DatasetOrigin,
    client: reqwest::Client,
}

impl HttpCsvSource {
    pub fn new(name: &str, url: &str, origin: DatasetOrigin, timeout: Duration) -> Self {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|e| {
                warn!("Failed to build HTTP client with timeout ({}), using defaults", e);
                reqwest::Client::new()
            });

        Self {
            name: name.to_string(),
            url: url.to_string(),
            origin,
            client,
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl DatasetSource for HttpCsvSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<VisaDataset, SourceError> {
        debug!("Fetching {} dataset from {}", self.name, self.url);

        let response = self.client.get(&self.url).send().await?;

        if !response.status().is_success() {
            return Err(SourceError::Http {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let dataset = parse_csv(&body, self.origin)?;

        info!(
            "Parsed {} visa records from {} ({} bytes)",
            dataset.len(),
            self.name,
            body.len()
        );
        Ok(dataset)
    }
}
