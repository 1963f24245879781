//! Trip planning helpers built on a session's visa-free list.

use std::collections::BTreeSet;
use std::fmt;

use serde::Serialize;

use crate::core::normalize::{normalize, same_country};
use crate::core::session::SessionContext;
use crate::dataset::VisaDataset;

const AIRPORTS: &[(&str, &str)] = &[
    ("DEL", "India"), ("BOM", "India"), ("BLR", "India"), ("MAA", "India"),
    ("BKK", "Thailand"), ("SIN", "Singapore"), ("KUL", "Malaysia"),
    ("DXB", "UAE"), ("DOH", "Qatar"), ("KTM", "Nepal"), ("CMB", "Sri Lanka"),
    ("NRT", "Japan"), ("ICN", "South Korea"), ("TPE", "Taiwan"),
    ("LHR", "United Kingdom"), ("CDG", "France"), ("FRA", "Germany"),
    ("FCO", "Italy"), ("MAD", "Spain"), ("AMS", "Netherlands"),
    ("ZUR", "Switzerland"), ("VIE", "Austria"), ("ARN", "Sweden"),
    ("CPH", "Denmark"), ("OSL", "Norway"), ("HEL", "Finland"),
    ("JFK", "United States"), ("LAX", "United States"), ("YYZ", "Canada"),
    ("SYD", "Australia"), ("MEL", "Australia"), ("AKL", "New Zealand"),
];

const POPULAR: &[(&str, &[&str])] = &[
    ("India", &["Thailand", "Singapore", "Malaysia", "UAE", "Nepal"]),
    ("United States", &["United Kingdom", "France", "Germany", "Japan", "Canada"]),
];

/// Country served by an IATA airport code.
pub fn destination_country(iata: &str) -> Option<&'static str> {
    let code = iata.trim().to_uppercase();
    AIRPORTS
        .iter()
        .find(|(c, _)| *c == code)
        .map(|(_, country)| *country)
}

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TripVisaStatus {
    VisaFree,
    VisaRequired,
    /// Airport not in the lookup table; nothing can be said.
    CheckRequirements,
    /// No passport or no visa-free list in the session yet.
    Unknown,
}

impl fmt::Display for TripVisaStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TripVisaStatus::VisaFree => "Visa-Free",
            TripVisaStatus::VisaRequired => "Visa Required",
            TripVisaStatus::CheckRequirements => "Check visa requirements",
            TripVisaStatus::Unknown => "Unknown",
        };
        f.write_str(label)
    }
}

/// Visa status of flying into `iata` on the session's passport.
pub fn trip_visa_status(session: &SessionContext, iata: &str) -> TripVisaStatus {
    let visa_free = session.visa_free_destinations();
    if session.passport_country.is_none() || visa_free.is_empty() {
        return TripVisaStatus::Unknown;
    }

    match destination_country(iata) {
        Some(country) if visa_free.iter().any(|d| same_country(d, country)) => {
            TripVisaStatus::VisaFree
        }
        Some(_) => TripVisaStatus::VisaRequired,
        None => TripVisaStatus::CheckRequirements,
    }
}

/// Curated picks for a passport, limited to what is actually visa-free.
pub fn popular_destinations(passport: &str, visa_free: &[String]) -> Vec<&'static str> {
    POPULAR
        .iter()
        .find(|(p, _)| same_country(p, passport))
        .map(|(_, picks)| {
            picks
                .iter()
                .copied()
                .filter(|pick| visa_free.iter().any(|d| same_country(d, pick)))
                .collect()
        })
        .unwrap_or_default()
}

/// Case-insensitive substring filter over a destination list.
pub fn filter_destinations<'a>(destinations: &'a [String], query: &str) -> Vec<&'a str> {
    let needle = normalize(query);
    destinations
        .iter()
        .map(String::as_str)
        .filter(|d| needle.is_empty() || d.to_lowercase().contains(&needle))
        .collect()
}

/// Sorted, distinct passport countries present in a dataset.
pub fn available_passports(dataset: &VisaDataset) -> Vec<String> {
    dataset
        .records()
        .iter()
        .map(|r| r.passport_country.trim())
        .filter(|p| !p.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::sources::fallback_dataset;

    fn session_for(passport: &str) -> SessionContext {
        let mut session = SessionContext::new();
        session.select_passport(&fallback_dataset(), passport);
        session
    }

    #[test]
    fn test_destination_country() {
        assert_eq!(destination_country("bkk"), Some("Thailand"));
        assert_eq!(destination_country(" LHR "), Some("United Kingdom"));
        assert_eq!(destination_country("XXX"), None);
    }

    #[test]
    fn test_trip_status_without_passport() {
        let session = SessionContext::new();
        assert_eq!(trip_visa_status(&session, "BKK"), TripVisaStatus::Unknown);
    }

    #[test]
    fn test_trip_status_outcomes() {
        let session = session_for("India");
        assert_eq!(trip_visa_status(&session, "BKK"), TripVisaStatus::VisaFree);
        assert_eq!(trip_visa_status(&session, "DXB"), TripVisaStatus::VisaFree);
        assert_eq!(trip_visa_status(&session, "CDG"), TripVisaStatus::VisaRequired);
        assert_eq!(trip_visa_status(&session, "XYZ"), TripVisaStatus::CheckRequirements);
    }

    #[test]
    fn test_popular_destinations() {
        let session = session_for("India");
        assert_eq!(
            popular_destinations("india", session.visa_free_destinations()),
            vec!["Thailand", "Singapore", "Malaysia", "UAE", "Nepal"]
        );

        let session = session_for("United States");
        // France, Germany etc. are visa-free; the list keeps curated order
        assert_eq!(
            popular_destinations("United States", session.visa_free_destinations()),
            vec!["United Kingdom", "France", "Germany", "Japan", "Canada"]
        );

        assert!(popular_destinations("Germany", &["Japan".to_string()]).is_empty());
    }

    #[test]
    fn test_popular_filtered_by_visa_free() {
        let visa_free = vec!["Nepal".to_string()];
        assert_eq!(popular_destinations("India", &visa_free), vec!["Nepal"]);
    }

    #[test]
    fn test_popular_ignores_case_and_spacing() {
        let visa_free = vec![" thailand ".to_string(), "NEPAL".to_string()];
        assert_eq!(popular_destinations("India", &visa_free), vec!["Thailand", "Nepal"]);
    }

    #[test]
    fn test_filter_destinations() {
        let list = vec!["Malaysia".to_string(), "Maldives".to_string(), "Nepal".to_string()];
        assert_eq!(filter_destinations(&list, "mal"), vec!["Malaysia", "Maldives"]);
        assert_eq!(filter_destinations(&list, "  "), vec!["Malaysia", "Maldives", "Nepal"]);
        assert!(filter_destinations(&list, "peru").is_empty());
    }

    #[test]
    fn test_available_passports() {
        assert_eq!(
            available_passports(&fallback_dataset()),
            vec!["Germany", "India", "Singapore", "United Kingdom", "United States"]
        );
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(TripVisaStatus::VisaFree.to_string(), "Visa-Free");
        assert_eq!(TripVisaStatus::CheckRequirements.to_string(), "Check visa requirements");
    }
}
