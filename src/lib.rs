//! RoamGenie visa core: dataset loading with fallback, visa-free lookups
//! and region summaries.

pub mod core;
pub mod dataset;

#[cfg(test)]
pub mod test_support;

pub use crate::core::eligibility::{MatchOutcome, VisaFreeLookup, resolve_visa_free};
pub use crate::core::region::{Region, RegionCounts, classify};
pub use crate::core::scan::{ScanResult, parse_passport_text};
pub use crate::core::session::SessionContext;
pub use crate::dataset::{DatasetLoader, VisaDataset};
