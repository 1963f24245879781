//! # Region Classifier
//!
//! Buckets destination names into six fixed regions for summary counts.
//!
//! The region tables are deliberately small. Names missing from all of them
//! (e.g. "Hong Kong", "European Union Countries") count toward no region and
//! are reported in [`RegionCounts::unclassified`] instead.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::core::normalize::normalize;

#[derive(Serialize, Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "snake_case")]
pub enum Region {
    Asia,
    Europe,
    MiddleEast,
    Africa,
    Americas,
    Oceania,
}

impl Region {
    pub const ALL: [Region; 6] = [
        Region::Asia,
        Region::Europe,
        Region::MiddleEast,
        Region::Africa,
        Region::Americas,
        Region::Oceania,
    ];

    /// Member countries, as spelled in the built-in dataset.
    pub fn countries(self) -> &'static [&'static str] {
        match self {
            Region::Asia => ASIA,
            Region::Europe => EUROPE,
            Region::MiddleEast => MIDDLE_EAST,
            Region::Africa => AFRICA,
            Region::Americas => AMERICAS,
            Region::Oceania => OCEANIA,
        }
    }

    pub fn contains(self, country: &str) -> bool {
        let key = normalize(country);
        self.countries().iter().any(|c| normalize(c) == key)
    }
}

impl fmt::Display for Region {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Region::Asia => "Asia",
            Region::Europe => "Europe",
            Region::MiddleEast => "Middle East",
            Region::Africa => "Africa",
            Region::Americas => "Americas",
            Region::Oceania => "Oceania",
        };
        f.write_str(label)
    }
}

const ASIA: &[&str] = &[
    "Thailand", "Singapore", "Malaysia", "Indonesia", "Philippines",
    "Cambodia", "Laos", "Myanmar", "Vietnam", "Brunei", "Nepal", "Bhutan",
    "South Korea", "Japan", "Mongolia", "Kazakhstan", "Kyrgyzstan",
    "Tajikistan", "Uzbekistan",
];

const EUROPE: &[&str] = &[
    "Germany", "France", "Italy", "Spain", "United Kingdom", "Ireland",
    "Netherlands", "Belgium", "Switzerland", "Austria", "Portugal",
    "Greece", "Denmark", "Sweden", "Norway", "Finland", "Iceland",
    "Poland", "Czech Republic", "Slovakia", "Hungary", "Slovenia",
    "Croatia", "Serbia", "Montenegro", "Albania", "North Macedonia",
    "Bosnia and Herzegovina", "Bulgaria", "Romania", "Moldova", "Belarus",
];

const MIDDLE_EAST: &[&str] = &[
    "UAE", "Qatar", "Oman", "Kuwait", "Bahrain", "Saudi Arabia",
    "Jordan", "Turkey", "Armenia", "Georgia", "Iran", "Israel",
];

const AFRICA: &[&str] = &[
    "Mauritius", "Seychelles", "Madagascar", "Comoros", "Cape Verde",
    "Guinea-Bissau", "Mozambique", "Zimbabwe", "Zambia", "Uganda",
    "Rwanda", "Burundi", "Tanzania", "Kenya", "Ethiopia", "Djibouti",
    "Somalia", "Sudan", "Egypt", "Morocco", "Tunisia", "South Africa",
    "Namibia", "Botswana",
];

const AMERICAS: &[&str] = &[
    "United States", "Canada", "Mexico", "Brazil", "Argentina",
    "Chile", "Uruguay", "Paraguay", "Colombia", "Ecuador", "Peru",
    "Bolivia", "Venezuela", "Guyana", "Suriname", "Jamaica", "Haiti",
    "Barbados", "Trinidad and Tobago", "Dominica", "Grenada",
    "Saint Lucia", "Saint Vincent and the Grenadines",
    "Saint Kitts and Nevis", "El Salvador", "Honduras", "Nicaragua",
];

const OCEANIA: &[&str] = &[
    "Australia", "New Zealand", "Fiji", "Vanuatu", "Samoa", "Tonga",
    "Cook Islands", "Niue", "Tuvalu", "Micronesia", "Papua New Guinea",
];

/// Region of a single country, if it appears in any table.
pub fn region_of(country: &str) -> Option<Region> {
    Region::ALL.into_iter().find(|r| r.contains(country))
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct RegionCounts {
    /// Every region is present, zero counts included.
    pub by_region: BTreeMap<Region, usize>,
    /// Destinations that fell into no region.
    pub unclassified: usize,
}

impl RegionCounts {
    pub fn get(&self, region: Region) -> usize {
        self.by_region.get(&region).copied().unwrap_or(0)
    }

    /// Sum over the six regions (unclassified excluded).
    pub fn classified_total(&self) -> usize {
        self.by_region.values().sum()
    }
}

/// Counts `destinations` per region.
pub fn classify<S: AsRef<str>>(destinations: &[S]) -> RegionCounts {
    let mut by_region: BTreeMap<Region, usize> = Region::ALL.into_iter().map(|r| (r, 0)).collect();
    let mut unclassified = 0;

    for destination in destinations {
        match region_of(destination.as_ref()) {
            Some(region) => *by_region.entry(region).or_insert(0) += 1,
            None => unclassified += 1,
        }
    }

    RegionCounts {
        by_region,
        unclassified,
    }
}
