//! # Eligibility Resolver
//!
//! Answers "which destinations can this passport enter visa-free?".
//!
//! Two explicit tiers, exact always wins:
//!
//! 1. exact: normalized passport equals the normalized query
//! 2. substring: normalized passport contains the query, tried only when
//!    tier 1 found nothing (e.g. "United States" → "United States of America")
//!
//! Both tiers apply the same requirement filter
//! ([`RequirementKind::allows_visa_free_entry`]).

use std::collections::BTreeSet;

use log::{info, warn};
use serde::Serialize;

use crate::core::normalize::normalize;
use crate::dataset::{RequirementKind, VisaDataset, VisaRecord};

/// How a lookup was answered.
#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MatchOutcome {
    ExactMatch,
    SubstringMatch,
    /// Dataset is loaded but holds nothing visa-free for this passport.
    NoMatch,
    /// Dataset is empty; callers show a "no data" state.
    DatasetUnavailable,
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct VisaFreeLookup {
    /// Alphabetically sorted, no duplicates, no blank names.
    pub destinations: Vec<String>,
    pub outcome: MatchOutcome,
}

impl VisaFreeLookup {
    fn empty(outcome: MatchOutcome) -> Self {
        Self {
            destinations: Vec::new(),
            outcome,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.destinations.is_empty()
    }
}

fn qualifies(requirement: RequirementKind) -> bool {
    requirement.allows_visa_free_entry()
}

/// Tier 1: records whose passport equals the (already normalized) key.
pub fn exact_matches<'a>(dataset: &'a VisaDataset, key: &str) -> Vec<&'a VisaRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| qualifies(r.requirement) && normalize(&r.passport_country) == key)
        .collect()
}

/// Tier 2: records whose passport contains the (already normalized) key.
pub fn substring_matches<'a>(dataset: &'a VisaDataset, key: &str) -> Vec<&'a VisaRecord> {
    dataset
        .records()
        .iter()
        .filter(|r| qualifies(r.requirement) && normalize(&r.passport_country).contains(key))
        .collect()
}

fn collect_destinations(records: &[&VisaRecord]) -> Vec<String> {
    records
        .iter()
        .map(|r| r.destination_country.trim())
        .filter(|d| !d.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Visa-free destinations for `passport_country`.
pub fn resolve_visa_free(dataset: &VisaDataset, passport_country: &str) -> VisaFreeLookup {
    if dataset.is_empty() {
        warn!("Visa dataset unavailable, no destinations for {:?}", passport_country);
        return VisaFreeLookup::empty(MatchOutcome::DatasetUnavailable);
    }

    let key = normalize(passport_country);
    if key.is_empty() {
        return VisaFreeLookup::empty(MatchOutcome::NoMatch);
    }

    let exact = exact_matches(dataset, &key);
    let (records, outcome) = if !exact.is_empty() {
        (exact, MatchOutcome::ExactMatch)
    } else {
        let fuzzy = substring_matches(dataset, &key);
        if fuzzy.is_empty() {
            (fuzzy, MatchOutcome::NoMatch)
        } else {
            (fuzzy, MatchOutcome::SubstringMatch)
        }
    };

    let destinations = collect_destinations(&records);
    if destinations.is_empty() {
        info!("Found 0 visa-free destinations for {}", passport_country.trim());
        return VisaFreeLookup::empty(MatchOutcome::NoMatch);
    }

    info!(
        "Found {} visa-free destinations for {} ({:?})",
        destinations.len(),
        passport_country.trim(),
        outcome
    );
    VisaFreeLookup {
        destinations,
        outcome,
    }
}
