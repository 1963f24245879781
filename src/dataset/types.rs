use serde::{Deserialize, Serialize};

/// Entry requirement for a passport holder at a destination.
///
/// Source data carries this as free text ("visa free", "visa-free",
/// "visa on arrival", "e-visa", a number of days...). It is collapsed into
/// this closed set once, when the dataset is loaded.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum RequirementKind {
    VisaFree,
    VisaRequired,
    VisaOnArrival,
    Unknown,
}

impl RequirementKind {
    /// Parses a free-text requirement cell.
    ///
    /// Returns the kind plus the stay length when the source publishes a
    /// plain day count (e.g. `"90"`). A bare day count does not name a
    /// requirement, so it is `Unknown` and never qualifies as visa-free.
    pub fn parse(raw: &str) -> (RequirementKind, Option<u16>) {
        let text = raw.trim().to_lowercase().replace(['_', '-'], " ");

        if let Ok(days) = text.parse::<i64>() {
            // -1 marks the passport's own country in the passport-index data
            return match u16::try_from(days) {
                Ok(d) if d > 0 => (RequirementKind::Unknown, Some(d)),
                _ => (RequirementKind::Unknown, None),
            };
        }

        if text.contains("visa free") {
            (RequirementKind::VisaFree, None)
        } else if text.contains("visa on arrival") {
            (RequirementKind::VisaOnArrival, None)
        } else if text.contains("visa required")
            || text.contains("e visa")
            || text == "eta"
            || text.contains("no admission")
            || text.contains("covid ban")
        {
            (RequirementKind::VisaRequired, None)
        } else {
            (RequirementKind::Unknown, None)
        }
    }

    /// True for requirements that count as visa-free travel (visa on arrival included).
    pub fn allows_visa_free_entry(self) -> bool {
        matches!(self, RequirementKind::VisaFree | RequirementKind::VisaOnArrival)
    }
}

/// A single `(passport, destination, requirement)` fact.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VisaRecord {
    pub passport_country: String,
    pub destination_country: String,
    pub requirement: RequirementKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_stay_days: Option<u16>,
}

impl VisaRecord {
    pub fn new(passport: &str, destination: &str, requirement: RequirementKind) -> Self {
        Self {
            passport_country: passport.to_string(),
            destination_country: destination.to_string(),
            requirement,
            max_stay_days: None,
        }
    }

    /// Builds a record from raw CSV cells, normalizing the requirement text.
    pub fn from_raw(passport: &str, destination: &str, requirement: &str) -> Self {
        let (requirement, max_stay_days) = RequirementKind::parse(requirement);
        Self {
            passport_country: passport.trim().to_string(),
            destination_country: destination.trim().to_string(),
            requirement,
            max_stay_days,
        }
    }
}

/// Which tier of the loader produced a dataset.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum DatasetOrigin {
    Primary,
    Secondary,
    BuiltIn,
}

/// All visa records for one load cycle.
///
/// Never mutated after construction; a reload replaces the whole value.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct VisaDataset {
    pub origin: DatasetOrigin,
    records: Vec<VisaRecord>,
}

impl VisaDataset {
    pub fn new(origin: DatasetOrigin, records: Vec<VisaRecord>) -> Self {
        Self { origin, records }
    }

    pub fn records(&self) -> &[VisaRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Same records, re-tagged with the tier that produced them.
    pub fn with_origin(self, origin: DatasetOrigin) -> Self {
        Self { origin, ..self }
    }
}
