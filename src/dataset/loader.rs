//! # Dataset Loader
//!
//! Strict fallback chain, first success wins:
//!
//! ```text
//! primary CSV ──fail──▶ secondary CSV ──fail──▶ built-in lists
//!      │                      │                       │
//!      └──────────────────────┴───────────────────────┴──▶ VisaDataset
//! ```
//!
//! Remote failures are logged and swallowed. The built-in tier has no I/O,
//! so `load()` always returns a dataset.

use std::time::Duration;

use log::{info, warn};

use crate::core::config::ResolvedConfig;
use crate::dataset::sources::{HttpCsvSource, fallback_dataset};
use crate::dataset::{DatasetOrigin, DatasetSource, VisaDataset};

pub struct DatasetLoader {
    sources: Vec<Box<dyn DatasetSource>>,
}

impl DatasetLoader {
    /// A loader that tries `sources` in order before the built-in data.
    pub fn new(sources: Vec<Box<dyn DatasetSource>>) -> Self {
        Self { sources }
    }

    /// A loader with no remote tiers.
    pub fn offline() -> Self {
        Self::new(Vec::new())
    }

    /// Builds the primary/secondary HTTP chain from resolved settings.
    pub fn from_config(config: &ResolvedConfig) -> Self {
        if config.offline {
            info!("Offline mode, remote visa datasets disabled");
            return Self::offline();
        }

        let timeout = Duration::from_secs(config.fetch_timeout_secs);
        Self::new(vec![
            Box::new(HttpCsvSource::new(
                "primary",
                &config.primary_url,
                DatasetOrigin::Primary,
                timeout,
            )),
            Box::new(HttpCsvSource::new(
                "secondary",
                &config.secondary_url,
                DatasetOrigin::Secondary,
                timeout,
            )),
        ])
    }

    pub fn source_names(&self) -> Vec<&str> {
        self.sources.iter().map(|s| s.name()).collect()
    }

    /// Runs the fallback chain. Never fails.
    pub async fn load(&self) -> VisaDataset {
        for source in &self.sources {
            match source.fetch().await {
                Ok(dataset) => {
                    info!(
                        "Loaded visa dataset from {} source: {} records",
                        source.name(),
                        dataset.len()
                    );
                    return dataset;
                }
                Err(e) => {
                    warn!("Failed to load {} visa dataset: {}", source.name(), e);
                }
            }
        }

        let dataset = fallback_dataset();
        info!(
            "Using built-in visa dataset: {} records",
            dataset.len()
        );
        dataset
    }
}
