/// Canonical comparison key for a country name: trimmed and lower-cased.
///
/// Only used for matching. Stored records keep their original casing.
pub fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

/// True when two country names refer to the same key.
pub fn same_country(a: &str, b: &str) -> bool {
    normalize(a) == normalize(b)
}
