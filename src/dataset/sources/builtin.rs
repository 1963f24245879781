//! Hand-curated visa-free lists used when no remote dataset is reachable.
//!
//! Covers five passports only. Every destination listed here is recorded as
//! [`RequirementKind::VisaFree`].

use crate::dataset::{DatasetOrigin, RequirementKind, VisaDataset, VisaRecord};

const INDIA: &[&str] = &[
    "Bhutan", "Nepal", "Maldives", "Mauritius", "Seychelles", "Fiji",
    "Vanuatu", "Micronesia", "Samoa", "Cook Islands", "Niue", "Tuvalu",
    "Indonesia", "Thailand", "Malaysia", "Singapore", "Philippines",
    "Cambodia", "Laos", "Myanmar", "Sri Lanka", "Bangladesh",
    "South Korea", "Japan", "Qatar", "UAE", "Oman", "Kuwait",
    "Bahrain", "Jordan", "Iran", "Armenia", "Georgia", "Kazakhstan",
    "Kyrgyzstan", "Tajikistan", "Uzbekistan", "Mongolia", "Turkey",
    "Serbia", "Albania", "North Macedonia", "Bosnia and Herzegovina",
    "Montenegro", "Moldova", "Belarus", "Madagascar", "Comoros",
    "Cape Verde", "Guinea-Bissau", "Mozambique", "Zimbabwe", "Zambia",
    "Uganda", "Rwanda", "Burundi", "Tanzania", "Kenya", "Ethiopia",
    "Djibouti", "Somalia", "Sudan", "Egypt", "Morocco", "Tunisia",
    "Barbados", "Dominica", "Grenada", "Haiti", "Jamaica",
    "Saint Kitts and Nevis", "Saint Lucia", "Saint Vincent and the Grenadines",
    "Trinidad and Tobago", "El Salvador", "Honduras", "Nicaragua",
    "Bolivia", "Ecuador", "Suriname",
];

const UNITED_STATES: &[&str] = &[
    "Canada", "Mexico", "United Kingdom", "Ireland", "France", "Germany",
    "Italy", "Spain", "Netherlands", "Belgium", "Luxembourg", "Austria",
    "Switzerland", "Portugal", "Greece", "Denmark", "Sweden", "Norway",
    "Finland", "Iceland", "Estonia", "Latvia", "Lithuania", "Poland",
    "Czech Republic", "Slovakia", "Hungary", "Slovenia", "Croatia",
    "Malta", "Cyprus", "Japan", "South Korea", "Singapore", "Australia",
    "New Zealand", "Chile", "Uruguay", "Argentina", "Brazil", "Israel",
    "Taiwan", "Hong Kong", "Macau", "Brunei", "Malaysia", "Thailand",
];

const GERMANY: &[&str] = &[
    "European Union Countries", "United States", "Canada", "Australia",
    "New Zealand", "Japan", "South Korea", "Singapore", "Malaysia",
    "Thailand", "Philippines", "Indonesia", "Vietnam", "Cambodia",
    "Israel", "United Arab Emirates", "Qatar", "Kuwait", "Bahrain",
    "Chile", "Argentina", "Brazil", "Uruguay", "Paraguay", "Mexico",
    "Costa Rica", "Nicaragua", "Honduras", "El Salvador", "Guatemala",
    "Panama", "Colombia", "Ecuador", "Peru", "Bolivia", "Venezuela",
    "Guyana", "Suriname", "South Africa", "Botswana", "Namibia",
    "Mauritius", "Seychelles", "Morocco", "Tunisia", "Turkey",
    "Serbia", "Montenegro", "Albania", "North Macedonia", "Bosnia and Herzegovina",
];

const SINGAPORE: &[&str] = &[
    "Malaysia", "Thailand", "Indonesia", "Philippines", "Vietnam",
    "Cambodia", "Laos", "Myanmar", "Brunei", "Japan", "South Korea",
    "Hong Kong", "Macau", "Taiwan", "United States", "Canada",
    "United Kingdom", "Ireland", "European Union Countries",
    "Australia", "New Zealand", "Chile", "Argentina", "Brazil",
    "Uruguay", "Israel", "Turkey", "United Arab Emirates", "Qatar",
    "Kuwait", "Bahrain", "Oman", "Saudi Arabia", "Jordan",
];

const UNITED_KINGDOM: &[&str] = &[
    "European Union Countries", "United States", "Canada", "Australia",
    "New Zealand", "Japan", "South Korea", "Singapore", "Malaysia",
    "Thailand", "Philippines", "Indonesia", "Vietnam", "Hong Kong",
    "Macau", "Taiwan", "Israel", "United Arab Emirates", "Qatar",
    "Kuwait", "Bahrain", "Oman", "Chile", "Argentina", "Brazil",
    "Uruguay", "Mexico", "Costa Rica", "Panama", "Colombia",
    "Ecuador", "Peru", "Bolivia", "Venezuela", "Guyana", "Suriname",
];

/// Passport countries covered by the built-in data, in record order.
pub const BUILTIN_PASSPORTS: [(&str, &[&str]); 5] = [
    ("India", INDIA),
    ("United States", UNITED_STATES),
    ("Germany", GERMANY),
    ("Singapore", SINGAPORE),
    ("United Kingdom", UNITED_KINGDOM),
];

/// Builds the fallback dataset. Deterministic: two calls compare equal.
pub fn fallback_dataset() -> VisaDataset {
    let records = BUILTIN_PASSPORTS
        .iter()
        .flat_map(|(passport, destinations)| {
            destinations
                .iter()
                .map(move |dest| VisaRecord::new(passport, dest, RequirementKind::VisaFree))
        })
        .collect();

    VisaDataset::new(DatasetOrigin::BuiltIn, records)
}
