//! Test utilities shared across the crate.
//!
//! This module is only compiled during tests (`#[cfg(test)]`).

use async_trait::async_trait;

use crate::dataset::{DatasetOrigin, DatasetSource, SourceError, VisaDataset, VisaRecord};

/// A source that always hands back the same dataset.
pub struct StaticSource {
    name: String,
    dataset: VisaDataset,
}

impl StaticSource {
    pub fn new(name: &str, dataset: VisaDataset) -> Self {
        Self {
            name: name.to_string(),
            dataset,
        }
    }
}

#[async_trait]
impl DatasetSource for StaticSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<VisaDataset, SourceError> {
        Ok(self.dataset.clone())
    }
}

/// A source that is never reachable.
pub struct FailingSource {
    name: String,
}

impl FailingSource {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }
}

#[async_trait]
impl DatasetSource for FailingSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self) -> Result<VisaDataset, SourceError> {
        Err(SourceError::Network("connection refused".to_string()))
    }
}

/// Builds a dataset from `(passport, destination, requirement text)` rows.
pub fn dataset_from(rows: &[(&str, &str, &str)]) -> VisaDataset {
    VisaDataset::new(
        DatasetOrigin::Primary,
        rows.iter()
            .map(|(p, d, r)| VisaRecord::from_raw(p, d, r))
            .collect(),
    )
}
