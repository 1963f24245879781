//! # Session Context
//!
//! Per-user travel state, owned by the UI layer and passed to handlers.
//!
//! ```text
//! SessionContext
//! ├── id: String                     // uuid v4
//! ├── passport_country: Option       // chosen manually or from a scan
//! ├── last_scan: Option<ScanResult>  // most recent OCR parse
//! ├── lookup: Option<VisaFreeLookup> // result for passport_country
//! └── updated_at: DateTime<Utc>
//! ```
//!
//! The dataset is never stored here; handlers receive it alongside the
//! context so the lookup stays a pure function of `(dataset, query)`.

use chrono::{DateTime, Utc};
use log::info;
use serde::Serialize;

use crate::core::eligibility::{VisaFreeLookup, resolve_visa_free};
use crate::core::region::{RegionCounts, classify};
use crate::core::scan::ScanResult;
use crate::dataset::VisaDataset;

#[derive(Serialize, Debug, Clone)]
pub struct SessionContext {
    pub id: String,
    pub passport_country: Option<String>,
    pub last_scan: Option<ScanResult>,
    pub lookup: Option<VisaFreeLookup>,
    pub updated_at: DateTime<Utc>,
}

impl Default for SessionContext {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext {
    pub fn new() -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            passport_country: None,
            last_scan: None,
            lookup: None,
            updated_at: Utc::now(),
        }
    }

    /// Sets the passport country and resolves its visa-free destinations.
    pub fn select_passport(&mut self, dataset: &VisaDataset, country: &str) -> &VisaFreeLookup {
        let country = country.trim().to_string();
        let lookup = resolve_visa_free(dataset, &country);
        info!(
            "Session {}: passport {} → {} destinations",
            self.id,
            country,
            lookup.destinations.len()
        );

        self.passport_country = Some(country);
        self.updated_at = Utc::now();
        self.lookup.insert(lookup)
    }

    /// Records a scan and looks up the scanned country.
    pub fn apply_scan(&mut self, dataset: &VisaDataset, scan: ScanResult) -> &VisaFreeLookup {
        let country = scan.country.clone();
        self.last_scan = Some(scan);
        self.select_passport(dataset, &country)
    }

    pub fn visa_free_destinations(&self) -> &[String] {
        self.lookup
            .as_ref()
            .map(|l| l.destinations.as_slice())
            .unwrap_or_default()
    }

    pub fn region_summary(&self) -> RegionCounts {
        classify(self.visa_free_destinations())
    }

    pub fn clear(&mut self) {
        self.passport_country = None;
        self.last_scan = None;
        self.lookup = None;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::eligibility::MatchOutcome;
    use crate::core::region::Region;
    use crate::dataset::sources::fallback_dataset;

    #[test]
    fn test_new_session_is_empty() {
        let session = SessionContext::new();
        assert!(session.passport_country.is_none());
        assert!(session.visa_free_destinations().is_empty());
        assert_eq!(session.region_summary().classified_total(), 0);
    }

    #[test]
    fn test_sessions_get_distinct_ids() {
        assert_ne!(SessionContext::new().id, SessionContext::new().id);
    }

    #[test]
    fn test_select_passport_stores_lookup() {
        let dataset = fallback_dataset();
        let mut session = SessionContext::new();
        let outcome = session.select_passport(&dataset, "  Singapore ").outcome;
        assert_eq!(outcome, MatchOutcome::ExactMatch);
        assert_eq!(session.passport_country.as_deref(), Some("Singapore"));
        assert!(session.visa_free_destinations().contains(&"Japan".to_string()));
        assert!(session.region_summary().get(Region::Asia) > 0);
    }

    #[test]
    fn test_apply_scan_keeps_scan() {
        let dataset = fallback_dataset();
        let mut session = SessionContext::new();
        let scan = ScanResult {
            country: "India".to_string(),
            confidence: 0.6,
        };
        session.apply_scan(&dataset, scan.clone());
        assert_eq!(session.last_scan, Some(scan));
        assert_eq!(session.passport_country.as_deref(), Some("India"));
        assert!(!session.visa_free_destinations().is_empty());
    }

    #[test]
    fn test_reselect_replaces_lookup() {
        let dataset = fallback_dataset();
        let mut session = SessionContext::new();
        session.select_passport(&dataset, "India");
        session.select_passport(&dataset, "Atlantis");
        assert!(session.visa_free_destinations().is_empty());
        assert_eq!(
            session.lookup.as_ref().map(|l| l.outcome),
            Some(MatchOutcome::NoMatch)
        );
    }

    #[test]
    fn test_clear() {
        let dataset = fallback_dataset();
        let mut session = SessionContext::new();
        session.select_passport(&dataset, "Germany");
        session.clear();
        assert!(session.passport_country.is_none());
        assert!(session.lookup.is_none());
    }
}
