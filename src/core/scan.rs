//! # Passport Text Parser
//!
//! Turns OCR output (plain text, already extracted from an image elsewhere)
//! into a [`ScanResult`] used as the passport key for lookups.
//!
//! Pattern hits score 0.8, a bare country name anywhere in the text
//! scores 0.6. Confidence is informational; callers decide what to do with
//! low values.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ScanResult {
    pub country: String,
    /// In `[0, 1]`.
    pub confidence: f32,
}

pub const PATTERN_CONFIDENCE: f32 = 0.8;
pub const KEYWORD_CONFIDENCE: f32 = 0.6;

/// Upper-case passport wording → display name used by the dataset.
const KNOWN_COUNTRIES: &[(&str, &str)] = &[
    ("INDIA", "India"),
    ("UNITED STATES OF AMERICA", "United States"),
    ("UNITED KINGDOM", "United Kingdom"),
    ("GERMANY", "Germany"),
    ("FRANCE", "France"),
    ("SINGAPORE", "Singapore"),
    ("JAPAN", "Japan"),
    ("AUSTRALIA", "Australia"),
    ("CANADA", "Canada"),
];

/// ICAO 9303 issuing-state codes for the same countries.
const COUNTRY_CODES: &[(&str, &str)] = &[
    ("IND", "India"),
    ("USA", "United States"),
    ("GBR", "United Kingdom"),
    ("DEU", "Germany"),
    ("FRA", "France"),
    ("SGP", "Singapore"),
    ("JPN", "Japan"),
    ("AUS", "Australia"),
    ("CAN", "Canada"),
];

// Tried in order; capture group 1, when present, holds the country.
static PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"REPUBLIC OF ([A-Z ]+)",
        r"UNITED STATES OF AMERICA",
        r"UNITED KINGDOM",
        r"PASSPORT[ \t]+([A-Z ]+)",
        r"NATIONALITY[ \t]+([A-Z ]+)",
        r"COUNTRY CODE[ \t]+([A-Z]{3})",
    ]
    .iter()
    .filter_map(|p| Regex::new(p).ok())
    .collect()
});

fn lookup(table: &[(&str, &'static str)], key: &str) -> Option<&'static str> {
    table.iter().find(|(k, _)| *k == key).map(|(_, name)| *name)
}

/// Extracts the passport country from OCR text.
pub fn parse_passport_text(text: &str) -> Option<ScanResult> {
    let text = text.to_uppercase();

    for pattern in PATTERNS.iter() {
        let Some(caps) = pattern.captures(&text) else {
            continue;
        };
        let candidate = caps
            .get(1)
            .or_else(|| caps.get(0))
            .map(|m| m.as_str().trim())
            .unwrap_or_default();

        if let Some(country) = lookup(KNOWN_COUNTRIES, candidate).or_else(|| lookup(COUNTRY_CODES, candidate)) {
            debug!("Passport pattern {:?} matched {}", pattern.as_str(), country);
            return Some(ScanResult {
                country: country.to_string(),
                confidence: PATTERN_CONFIDENCE,
            });
        }
    }

    KNOWN_COUNTRIES
        .iter()
        .find(|(key, _)| text.contains(key))
        .map(|(_, country)| ScanResult {
            country: country.to_string(),
            confidence: KEYWORD_CONFIDENCE,
        })
}
