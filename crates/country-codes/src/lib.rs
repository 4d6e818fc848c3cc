//! Country Codes Library
//!
//! ISO 3166-1 registry resolving alpha-2 and alpha-3 codes to the canonical
//! English short names published by the ISO 3166 maintenance agency
//! (the same names `pycountry` reports, e.g. "Viet Nam", "Korea, Republic of").
//!
//! Lookups by code are case-insensitive. Lookups by name are exact.

use serde::Serialize;
use std::collections::HashMap;
use std::sync::LazyLock;

mod table;

pub use table::COUNTRIES;

/// A single ISO 3166-1 entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Country {
    pub alpha_2: &'static str,
    pub alpha_3: &'static str,
    pub name: &'static str,
}

static BY_ALPHA3: LazyLock<HashMap<&'static str, &'static Country>> =
    LazyLock::new(|| COUNTRIES.iter().map(|c| (c.alpha_3, c)).collect());

static BY_ALPHA2: LazyLock<HashMap<&'static str, &'static Country>> =
    LazyLock::new(|| COUNTRIES.iter().map(|c| (c.alpha_2, c)).collect());

static BY_NAME: LazyLock<HashMap<&'static str, &'static Country>> =
    LazyLock::new(|| COUNTRIES.iter().map(|c| (c.name, c)).collect());

/// Look up a country by its three-letter code
pub fn by_alpha3(code: &str) -> Option<&'static Country> {
    let code = code.trim();
    if code.len() != 3 {
        return None;
    }
    BY_ALPHA3.get(code.to_ascii_uppercase().as_str()).copied()
}

/// Look up a country by its two-letter code
pub fn by_alpha2(code: &str) -> Option<&'static Country> {
    let code = code.trim();
    if code.len() != 2 {
        return None;
    }
    BY_ALPHA2.get(code.to_ascii_uppercase().as_str()).copied()
}

/// Look up a country by its canonical display name
pub fn by_name(name: &str) -> Option<&'static Country> {
    BY_NAME.get(name).copied()
}

/// Resolve a three-letter code to the canonical display name
pub fn name_for_alpha3(code: &str) -> Option<&'static str> {
    by_alpha3(code).map(|c| c.name)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_resolves_common_codes() {
        assert_eq!(name_for_alpha3("FRA"), Some("France"));
        assert_eq!(name_for_alpha3("DEU"), Some("Germany"));
        assert_eq!(name_for_alpha3("USA"), Some("United States"));
        assert_eq!(name_for_alpha3("GBR"), Some("United Kingdom"));
        assert_eq!(name_for_alpha3("RUS"), Some("Russian Federation"));
        assert_eq!(name_for_alpha3("VNM"), Some("Viet Nam"));
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        assert_eq!(name_for_alpha3("fra"), Some("France"));
        assert_eq!(by_alpha2("jp").map(|c| c.alpha_3), Some("JPN"));
    }

    #[test]
    fn test_unknown_codes() {
        assert_eq!(name_for_alpha3("-99"), None);
        assert_eq!(name_for_alpha3("XXX"), None);
        assert_eq!(name_for_alpha3(""), None);
        assert_eq!(name_for_alpha3("FRAN"), None);
    }

    #[test]
    fn test_name_lookup_is_exact() {
        assert_eq!(by_name("Japan").map(|c| c.alpha_3), Some("JPN"));
        assert!(by_name("japan").is_none());
        assert!(by_name("Vietnam").is_none());
    }

    #[test]
    fn test_table_has_unique_codes() {
        assert_eq!(COUNTRIES.len(), 249);

        let alpha3: HashSet<_> = COUNTRIES.iter().map(|c| c.alpha_3).collect();
        let alpha2: HashSet<_> = COUNTRIES.iter().map(|c| c.alpha_2).collect();
        let names: HashSet<_> = COUNTRIES.iter().map(|c| c.name).collect();
        assert_eq!(alpha3.len(), COUNTRIES.len());
        assert_eq!(alpha2.len(), COUNTRIES.len());
        assert_eq!(names.len(), COUNTRIES.len());

        for c in COUNTRIES {
            assert_eq!(c.alpha_2.len(), 2, "{}", c.name);
            assert_eq!(c.alpha_3.len(), 3, "{}", c.name);
        }
    }
}
