//! Per-country visit counting

use crate::VisitRecord;
use std::collections::HashMap;
use tracing::{info, warn};

/// Number of visit records naming a country
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryFrequency {
    pub country_name: String,
    pub count: u32,
}

/// All country frequencies, most visited first
#[derive(Debug, Clone, Default)]
pub struct FrequencyTable {
    entries: Vec<CountryFrequency>,
    index: HashMap<String, u32>,
}

impl FrequencyTable {
    pub fn entries(&self) -> &[CountryFrequency] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Count for a country name, exact match
    pub fn get(&self, country_name: &str) -> Option<u32> {
        self.index.get(country_name).copied()
    }

    pub fn min_count(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.count).min()
    }

    pub fn max_count(&self) -> Option<u32> {
        self.entries.iter().map(|e| e.count).max()
    }

    /// Country name to count, for joining against polygons
    pub fn counts(&self) -> &HashMap<String, u32> {
        &self.index
    }
}

impl FromIterator<(String, u32)> for FrequencyTable {
    fn from_iter<I: IntoIterator<Item = (String, u32)>>(iter: I) -> Self {
        let index: HashMap<String, u32> = iter.into_iter().filter(|(_, c)| *c > 0).collect();

        let mut entries: Vec<CountryFrequency> = index
            .iter()
            .map(|(name, count)| CountryFrequency {
                country_name: name.clone(),
                count: *count,
            })
            .collect();
        entries.sort_by(|a, b| {
            b.count
                .cmp(&a.count)
                .then_with(|| a.country_name.cmp(&b.country_name))
        });

        Self { entries, index }
    }
}

/// Count records per country
///
/// Records without a country are left out of the table. Names are compared
/// exactly, so "France" and "france" are distinct.
pub fn aggregate(records: &[VisitRecord]) -> FrequencyTable {
    let mut counts: HashMap<String, u32> = HashMap::new();
    for record in records {
        if let Some(country) = &record.country {
            *counts.entry(country.clone()).or_insert(0) += 1;
        }
    }

    let table: FrequencyTable = counts.into_iter().collect();

    info!(
        "Counted {} distinct countries across {} records",
        table.len(),
        records.len()
    );
    for entry in table.entries() {
        if country_codes::by_name(&entry.country_name).is_none() {
            warn!(
                "Country '{}' does not match any ISO 3166 name and will not be colored",
                entry.country_name
            );
        }
    }

    table
}
